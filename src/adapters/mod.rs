// Adapters layer: concrete implementations of the domain ports (Akashi, Rollbar).

pub mod akashi;
pub mod rollbar;
