// Domain layer: click/stamp models and the ports (capabilities) the handler depends on.

pub mod model;
pub mod ports;
