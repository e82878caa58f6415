use crate::errors::CoreError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry of process-wide singleton services, keyed by type.
///
/// The wiring phase fills this registry once during startup; afterwards the
/// stored `Arc`s are shared by whichever components resolve them. There is at
/// most one instance per type, which is what makes the "register only if
/// absent" checks below meaningful.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: Arc<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>,
}

impl ServiceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service instance as the singleton for its type
    pub fn register<T>(&self, service: T) -> Result<(), CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.register_arc(Arc::new(service))
    }

    /// Register an already-shared service instance
    pub fn register_arc<T>(&self, service: Arc<T>) -> Result<(), CoreError>
    where
        T: Send + Sync + 'static,
    {
        let mut services = self.services.write().map_err(|_| CoreError::LockError {
            resource: "service_registry".to_string(),
        })?;

        services.insert(TypeId::of::<T>(), service);
        Ok(())
    }

    /// Register a service only when no instance of its type exists yet.
    ///
    /// Returns whether the registration happened.
    pub fn register_if_absent<T>(&self, service: T) -> Result<bool, CoreError>
    where
        T: Send + Sync + 'static,
    {
        let mut services = self.services.write().map_err(|_| CoreError::LockError {
            resource: "service_registry".to_string(),
        })?;

        if services.contains_key(&TypeId::of::<T>()) {
            return Ok(false);
        }
        services.insert(TypeId::of::<T>(), Arc::new(service));
        Ok(true)
    }

    /// Resolve the singleton for a type
    pub fn resolve<T>(&self) -> Result<Arc<T>, CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.try_resolve::<T>()
            .ok_or_else(|| CoreError::service_not_found(std::any::type_name::<T>()))
    }

    /// Try to resolve the singleton for a type
    pub fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let services = self.services.read().ok()?;
        let instance = services.get(&TypeId::of::<T>())?;
        instance.clone().downcast::<T>().ok()
    }

    /// Check whether a singleton of the given type is registered
    pub fn contains<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.services
            .read()
            .map(|services| services.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false)
    }

    /// Number of registered singletons
    pub fn service_count(&self) -> usize {
        self.services
            .read()
            .map(|services| services.len())
            .unwrap_or(0)
    }
}
