use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::bootstrap::{ClientResolver, MigrationInitializer};
use crate::client::RestClient;
use crate::config::{EndpointSettings, MigrationConfig};
use crate::container::{LifecycleManager, ServiceRegistry};
use crate::engine::{EngineCapability, MigrationEngine};
use crate::errors::CoreError;
use crate::wiring::{Wirer, WiringError};

/// Name of the messaging-client wirer that must run after this one
pub const MESSAGE_BROKER_WIRER: &str = "message-broker-client";

/// Names of the client wirers whose output this one observes
pub const REST_CLIENT_WIRERS: [&str; 2] = ["http-rest-client", "search-rest-client"];

/// Progress of the bootstrap through its single startup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BootstrapState {
    /// The wirer has not been entered yet
    NotStarted = 0,
    /// A gate failed and the whole subtree was skipped; terminal
    Gated = 1,
    /// The wirer is constructing and registering
    Wiring = 2,
    /// Engine and initializer are in place; the lifecycle phase takes over
    Registered = 3,
}

/// Startup wirer that conditionally constructs the migration engine.
///
/// Three independent gates must all hold, each failing one a silent skip:
/// the feature flag in the configuration record, the presence of an
/// [`EngineCapability`] in the registry, and the absence of an already
/// registered engine. A wire client is taken from the registry when present
/// and otherwise built on demand through the [`ClientResolver`].
pub struct MigrationBootstrap {
    config: MigrationConfig,
    resolver: ClientResolver,
    state: AtomicU8,
}

impl MigrationBootstrap {
    /// Wirer name within the host's startup order
    pub const NAME: &'static str = "schema-migration";

    /// Create the bootstrap wirer from its configuration inputs
    pub fn new(config: MigrationConfig, settings: EndpointSettings) -> Self {
        Self {
            config,
            resolver: ClientResolver::new(settings),
            state: AtomicU8::new(BootstrapState::NotStarted as u8),
        }
    }

    /// Current bootstrap state
    pub fn state(&self) -> BootstrapState {
        match self.state.load(Ordering::SeqCst) {
            0 => BootstrapState::NotStarted,
            1 => BootstrapState::Gated,
            2 => BootstrapState::Wiring,
            _ => BootstrapState::Registered,
        }
    }

    fn set_state(&self, state: BootstrapState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    fn resolve_or_build_client(
        &self,
        registry: &ServiceRegistry,
    ) -> Result<Arc<RestClient>, CoreError> {
        if let Some(client) = registry.try_resolve::<RestClient>() {
            return Ok(client);
        }
        let client = Arc::new(self.resolver.resolve_client()?);
        registry.register_arc(client.clone())?;
        Ok(client)
    }
}

impl std::fmt::Debug for MigrationBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationBootstrap")
            .field("state", &self.state())
            .finish()
    }
}

impl Wirer for MigrationBootstrap {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_after(&self) -> Vec<&'static str> {
        REST_CLIENT_WIRERS.to_vec()
    }

    fn runs_before(&self) -> Vec<&'static str> {
        vec![MESSAGE_BROKER_WIRER]
    }

    fn description(&self) -> Option<&'static str> {
        Some("constructs the schema-migration engine and its deferred initializer")
    }

    fn wire(
        &self,
        registry: &ServiceRegistry,
        lifecycle: &mut LifecycleManager,
    ) -> Result<(), WiringError> {
        if !self.config.enabled {
            tracing::debug!("schema migration disabled, skipping bootstrap");
            self.set_state(BootstrapState::Gated);
            return Ok(());
        }

        let Some(capability) = registry.try_resolve::<EngineCapability>() else {
            tracing::debug!("no migration engine capability registered, skipping bootstrap");
            self.set_state(BootstrapState::Gated);
            return Ok(());
        };

        self.set_state(BootstrapState::Wiring);

        if registry.contains::<MigrationEngine>() {
            tracing::debug!("migration engine already registered, skipping construction");
        } else {
            let client = self
                .resolve_or_build_client(registry)
                .map_err(|source| WiringError::WiringFailed {
                    wirer: Self::NAME.to_string(),
                    source,
                })?;
            let engine = capability.create_engine(self.config.clone(), client);
            registry.register(engine)?;
        }

        let engine = registry.resolve::<MigrationEngine>()?;
        registry.register_if_absent(MigrationInitializer::new(engine))?;

        let initializer = registry.resolve::<MigrationInitializer>()?;
        if !lifecycle.contains(MigrationInitializer::NAME) {
            lifecycle.add_initializer(initializer);
        }

        self.set_state(BootstrapState::Registered);
        Ok(())
    }
}
