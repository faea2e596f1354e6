// Domain layer: value types, the Person record and ports (interfaces).

pub mod model;
pub mod ports;
