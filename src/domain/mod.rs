// Domain layer: cart models and ports (interfaces). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
