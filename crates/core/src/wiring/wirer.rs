use crate::container::{LifecycleManager, ServiceRegistry};
use crate::errors::CoreError;

/// Wiring error type
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("circular ordering constraint involving wirer '{wirer}'")]
    CircularOrdering { wirer: String },

    #[error("duplicate wirer name: {name}")]
    DuplicateWirer { name: String },

    #[error("wirer '{wirer}' failed: {source}")]
    WiringFailed { wirer: String, source: CoreError },

    #[error("container error: {0}")]
    Container(#[from] CoreError),
}

/// A named startup unit scheduled by the [`WiringScheduler`].
///
/// A wirer inspects the registry, constructs whatever singletons its rules
/// call for, and may park deferred work in the lifecycle manager. Ordering
/// against other wirers is declared as metadata, not enforced by calls:
/// `runs_after` names wirers whose output this one wants to observe,
/// `runs_before` names wirers that must only run once this one finished.
/// Names that match no registered wirer are ignored.
pub trait Wirer: Send + Sync {
    /// Wirer name for identification and ordering
    fn name(&self) -> &'static str;

    /// Wirers that must complete before this one runs
    fn runs_after(&self) -> Vec<&'static str> {
        vec![]
    }

    /// Wirers that must not run until this one finished
    fn runs_before(&self) -> Vec<&'static str> {
        vec![]
    }

    /// Perform the wiring step
    fn wire(
        &self,
        registry: &ServiceRegistry,
        lifecycle: &mut LifecycleManager,
    ) -> Result<(), WiringError>;

    /// Wirer description
    fn description(&self) -> Option<&'static str> {
        None
    }
}
