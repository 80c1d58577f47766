// Domain layer: outcome models and ports. No HTTP or config crates here.

pub mod model;
pub mod ports;
