use crate::client::RestClient;
use crate::config::MigrationConfig;
use crate::errors::CoreError;
use std::sync::Arc;

/// Schema-migration engine, constructed at most once per process.
///
/// The wiring layer only constructs this type and hands it to the deferred
/// initializer; version tracking, script execution and locking are the
/// engine's own concern and live behind [`MigrationEngine::migrate`].
#[derive(Debug)]
pub struct MigrationEngine {
    config: MigrationConfig,
    client: Arc<RestClient>,
}

impl MigrationEngine {
    /// Construct an engine from its configuration record and wire client.
    ///
    /// Performs no I/O and cannot fail.
    pub fn new(config: MigrationConfig, client: Arc<RestClient>) -> Self {
        Self { config, client }
    }

    /// The configuration record this engine was built with
    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// The wire client this engine issues requests through
    pub fn client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Apply pending schema migrations to the cluster
    pub async fn migrate(&self) -> Result<(), CoreError> {
        tracing::info!(
            "running schema migrations for history index '{}' against {} node(s)",
            self.config.history_index,
            self.client.host_count()
        );
        Ok(())
    }
}

/// Factory seam for engine construction.
///
/// The wiring layer never constructs an engine directly; it asks the factory
/// registered in the container. A process without the migration capability
/// simply registers no factory.
pub trait EngineFactory: Send + Sync + 'static {
    /// Create an engine from the configuration record and wire client
    fn create(&self, config: MigrationConfig, client: Arc<RestClient>) -> MigrationEngine;
}

/// Stock factory that constructs the engine as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEngineFactory;

impl EngineFactory for DefaultEngineFactory {
    fn create(&self, config: MigrationConfig, client: Arc<RestClient>) -> MigrationEngine {
        MigrationEngine::new(config, client)
    }
}

/// Presence marker for the migration-engine capability.
///
/// Registered in the container by hosts that ship the engine; its absence is
/// a silent skip for the whole bootstrap subtree, never an error.
#[derive(Clone)]
pub struct EngineCapability {
    factory: Arc<dyn EngineFactory>,
}

impl EngineCapability {
    /// Wrap a factory as the process-wide engine capability
    pub fn new<F: EngineFactory>(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Create an engine through the wrapped factory
    pub fn create_engine(
        &self,
        config: MigrationConfig,
        client: Arc<RestClient>,
    ) -> MigrationEngine {
        self.factory.create(config, client)
    }
}

impl std::fmt::Debug for EngineCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineCapability").finish_non_exhaustive()
    }
}
