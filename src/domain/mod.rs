// Domain layer: venue models and the ports the directory talks through.

pub mod model;
pub mod ports;
