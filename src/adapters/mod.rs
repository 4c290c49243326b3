// Adapters layer: concrete line sources and observers for the engine ports.

pub mod echo;
pub mod source;
