// Domain layer: audit models and ports. Only std/serde/chrono types cross these boundaries.

pub mod model;
pub mod ports;
