pub mod lifecycle;
pub mod registry;

pub use lifecycle::{Initializer, LifecycleManager, LifecyclePhase};
pub use registry::ServiceRegistry;
