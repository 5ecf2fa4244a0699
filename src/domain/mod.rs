// Domain layer: run models and the ports the runner talks through.

pub mod model;
pub mod ports;
