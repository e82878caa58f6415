pub mod evolution;
pub mod settings;

pub use evolution::*;
pub use settings::*;
