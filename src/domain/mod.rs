// Domain layer: curriculum models and ports (interfaces).

pub mod model;
pub mod ports;
