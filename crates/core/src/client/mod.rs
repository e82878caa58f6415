pub mod host;
pub mod rest;

pub use host::*;
pub use rest::*;
