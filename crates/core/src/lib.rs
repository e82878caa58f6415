pub mod bootstrap;
pub mod client;
pub mod config;
pub mod container;
pub mod engine;
pub mod errors;
pub mod wiring;

// Re-export key types for convenience
pub use bootstrap::{BootstrapState, ClientResolver, MigrationBootstrap, MigrationInitializer};
pub use client::{HttpHost, RestClient, RestClientBuilder};
pub use config::{EndpointSettings, MigrationConfig};
pub use container::{Initializer, LifecycleManager, LifecyclePhase, ServiceRegistry};
pub use engine::{DefaultEngineFactory, EngineCapability, EngineFactory, MigrationEngine};
pub use errors::CoreError;
pub use wiring::{Wirer, WiringError, WiringScheduler};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get crate version
pub fn version() -> &'static str {
    VERSION
}
