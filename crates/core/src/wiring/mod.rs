pub mod scheduler;
pub mod wirer;

pub use scheduler::*;
pub use wirer::*;
