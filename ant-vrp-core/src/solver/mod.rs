//! Contains the ant agent, its lifecycle and the colony coordinator which drives ants by rounds.

mod ant;
pub use self::ant::{Ant, AntHandle};

mod barrier;
pub use self::barrier::StartSignal;

mod colony;
pub use self::colony::*;
