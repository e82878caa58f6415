use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::container::Initializer;
use crate::engine::MigrationEngine;
use crate::errors::CoreError;

/// Deferred initializer that triggers the migration run.
///
/// Wraps the one engine instance and is invoked exactly once by the
/// lifecycle phase, after the whole object graph is assembled.
pub struct MigrationInitializer {
    engine: Arc<MigrationEngine>,
    invoked: AtomicBool,
}

impl MigrationInitializer {
    /// Initializer role name, one per process
    pub const NAME: &'static str = "schema-migration-initializer";

    /// Wrap an engine instance
    pub fn new(engine: Arc<MigrationEngine>) -> Self {
        Self {
            engine,
            invoked: AtomicBool::new(false),
        }
    }

    /// The engine this initializer will run
    pub fn engine(&self) -> &Arc<MigrationEngine> {
        &self.engine
    }

    /// Check whether the initializer already ran
    pub fn is_invoked(&self) -> bool {
        self.invoked.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for MigrationInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationInitializer")
            .field("invoked", &self.is_invoked())
            .finish()
    }
}

#[async_trait]
impl Initializer for MigrationInitializer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn invoke(&self) -> Result<(), CoreError> {
        if self.invoked.swap(true, Ordering::SeqCst) {
            return Err(CoreError::lifecycle(
                "migration initializer invoked more than once",
            ));
        }
        self.engine.migrate().await
    }
}
