#[path = "../../../ant-vrp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;
