use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;

/// Deferred startup callable, invoked once after the whole object graph is
/// assembled
#[async_trait]
pub trait Initializer: Send + Sync {
    /// Initializer name, used for the one-per-role registration gate
    fn name(&self) -> &'static str;

    /// Run the deferred work
    async fn invoke(&self) -> Result<(), CoreError>;
}

/// Phase of the deferred-initializer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Initializers may still be registered
    Registered,
    /// Initializers are currently being invoked
    Invoking,
    /// All initializers ran; terminal
    Invoked,
}

/// Collects deferred initializers during wiring and invokes each exactly once
/// afterwards.
pub struct LifecycleManager {
    initializers: Vec<Arc<dyn Initializer>>,
    phase: LifecyclePhase,
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("initializer_count", &self.initializers.len())
            .field("phase", &self.phase)
            .finish()
    }
}

impl LifecycleManager {
    /// Create a new lifecycle manager
    pub fn new() -> Self {
        Self {
            initializers: Vec::new(),
            phase: LifecyclePhase::Registered,
        }
    }

    /// Register a deferred initializer
    pub fn add_initializer(&mut self, initializer: Arc<dyn Initializer>) {
        self.initializers.push(initializer);
    }

    /// Check whether an initializer with the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.initializers.iter().any(|init| init.name() == name)
    }

    /// Names of the registered initializers, in registration order
    pub fn initializer_names(&self) -> Vec<&'static str> {
        self.initializers.iter().map(|init| init.name()).collect()
    }

    /// Number of registered initializers
    pub fn initializer_count(&self) -> usize {
        self.initializers.len()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Check whether the invocation phase completed
    pub fn is_invoked(&self) -> bool {
        self.phase == LifecyclePhase::Invoked
    }

    /// Invoke all initializers in registration order, exactly once.
    ///
    /// A second call is a lifecycle error; a failing initializer aborts the
    /// sequence and propagates.
    pub async fn invoke_all(&mut self) -> Result<(), CoreError> {
        if self.phase != LifecyclePhase::Registered {
            return Err(CoreError::lifecycle(format!(
                "cannot invoke initializers in phase {:?}",
                self.phase
            )));
        }

        self.phase = LifecyclePhase::Invoking;

        for initializer in &self.initializers {
            tracing::info!("invoking initializer: {}", initializer.name());
            initializer
                .invoke()
                .await
                .map_err(|source| CoreError::InitializerFailed {
                    name: initializer.name().to_string(),
                    source: Box::new(source),
                })?;
        }

        self.phase = LifecyclePhase::Invoked;
        Ok(())
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingInitializer {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Initializer for CountingInitializer {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn invoke(&self) -> Result<(), CoreError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingInitializer;

    #[async_trait]
    impl Initializer for FailingInitializer {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn invoke(&self) -> Result<(), CoreError> {
            Err(CoreError::lifecycle("boom"))
        }
    }

    #[tokio::test]
    async fn test_invoke_all_runs_each_initializer_once() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut manager = LifecycleManager::new();
        manager.add_initializer(Arc::new(CountingInitializer {
            invocations: invocations.clone(),
        }));

        assert_eq!(manager.phase(), LifecyclePhase::Registered);
        manager.invoke_all().await.unwrap();

        assert_eq!(invocations.load(Ordering::SeqCst), 1);
        assert!(manager.is_invoked());
    }

    #[tokio::test]
    async fn test_second_invocation_pass_is_rejected() {
        let mut manager = LifecycleManager::new();
        manager.invoke_all().await.unwrap();

        let err = manager.invoke_all().await.unwrap_err();
        assert!(matches!(err, CoreError::Lifecycle { .. }));
    }

    #[tokio::test]
    async fn test_failing_initializer_propagates() {
        let mut manager = LifecycleManager::new();
        manager.add_initializer(Arc::new(FailingInitializer));

        let err = manager.invoke_all().await.unwrap_err();
        match err {
            CoreError::InitializerFailed { name, .. } => assert_eq!(name, "failing"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_contains_matches_by_name() {
        let mut manager = LifecycleManager::new();
        manager.add_initializer(Arc::new(FailingInitializer));

        assert!(manager.contains("failing"));
        assert!(!manager.contains("counting"));
        assert_eq!(manager.initializer_names(), vec!["failing"]);
    }
}
