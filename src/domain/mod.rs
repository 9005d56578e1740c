// Domain layer: core models and ports (interfaces). No external dependencies beyond std/tokio io traits.

pub mod model;
pub mod ports;
