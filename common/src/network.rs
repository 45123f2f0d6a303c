pub mod host;
pub mod probe;
pub mod subnet;
pub mod target;
