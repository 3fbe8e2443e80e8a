// Domain layer: request/response records and ports to external collaborators.

pub mod model;
pub mod ports;
