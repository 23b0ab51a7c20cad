use crate::models::Demand;

/// A vehicle identifier.
pub type VehicleId = usize;

/// Describes a vehicle (a deliver): it starts and ends its tour at a depot node and is restricted by
/// its maximum route length and capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// An unique vehicle id.
    pub id: VehicleId,
    /// A depot node index.
    pub depot: usize,
    /// A maximum travel distance including the return to depot.
    pub max_distance: f64,
    /// A maximum load which can be picked up on a single route.
    pub max_capacity: Demand,
}
