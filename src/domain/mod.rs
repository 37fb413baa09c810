// Domain layer: wire model and ports (interfaces).

pub mod model;
pub mod ports;
