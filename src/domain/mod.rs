// Domain layer: the greeting value and the provider port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
