use crate::container::{LifecycleManager, ServiceRegistry};
use crate::wiring::{Wirer, WiringError};
use std::collections::HashMap;

/// Schedules startup wirers as a partially ordered set.
///
/// The `runs_after`/`runs_before` declarations of all registered wirers form
/// a directed acyclic graph which is resolved by topological sort before any
/// wirer runs. After the wiring pass, the collected deferred initializers are
/// invoked exactly once.
pub struct WiringScheduler {
    wirers: Vec<Box<dyn Wirer>>,
    order: Vec<usize>,
}

impl WiringScheduler {
    /// Create a new empty scheduler
    pub fn new() -> Self {
        Self {
            wirers: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Register a wirer
    pub fn register<W: Wirer + 'static>(&mut self, wirer: W) {
        self.wirers.push(Box::new(wirer));
    }

    /// Number of registered wirers
    pub fn wirer_count(&self) -> usize {
        self.wirers.len()
    }

    /// Check if a wirer with the given name is registered
    pub fn has_wirer(&self, name: &str) -> bool {
        self.wirers.iter().any(|w| w.name() == name)
    }

    /// Resolve the ordering constraints into an execution order.
    ///
    /// Constraints naming absent wirers are ignored; duplicate names and
    /// cycles among present wirers are errors.
    pub fn resolve_order(&mut self) -> Result<(), WiringError> {
        let mut name_to_index: HashMap<&'static str, usize> = HashMap::new();
        for (index, wirer) in self.wirers.iter().enumerate() {
            if name_to_index.insert(wirer.name(), index).is_some() {
                return Err(WiringError::DuplicateWirer {
                    name: wirer.name().to_string(),
                });
            }
        }

        // Normalize both constraint kinds into predecessor lists
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); self.wirers.len()];
        for (index, wirer) in self.wirers.iter().enumerate() {
            for after in wirer.runs_after() {
                if let Some(&pred) = name_to_index.get(after) {
                    predecessors[index].push(pred);
                }
            }
            for before in wirer.runs_before() {
                if let Some(&succ) = name_to_index.get(before) {
                    predecessors[succ].push(index);
                }
            }
        }

        let mut visited = vec![false; self.wirers.len()];
        let mut temp_mark = vec![false; self.wirers.len()];
        let mut result = Vec::with_capacity(self.wirers.len());

        for index in 0..self.wirers.len() {
            if !visited[index] {
                self.visit(index, &predecessors, &mut visited, &mut temp_mark, &mut result)?;
            }
        }

        self.order = result;
        Ok(())
    }

    fn visit(
        &self,
        index: usize,
        predecessors: &[Vec<usize>],
        visited: &mut Vec<bool>,
        temp_mark: &mut Vec<bool>,
        result: &mut Vec<usize>,
    ) -> Result<(), WiringError> {
        if temp_mark[index] {
            return Err(WiringError::CircularOrdering {
                wirer: self.wirers[index].name().to_string(),
            });
        }
        if visited[index] {
            return Ok(());
        }

        temp_mark[index] = true;
        for &pred in &predecessors[index] {
            self.visit(pred, predecessors, visited, temp_mark, result)?;
        }
        temp_mark[index] = false;

        visited[index] = true;
        result.push(index);
        Ok(())
    }

    /// Wirers in resolved execution order
    pub fn wirers_in_order(&self) -> Vec<&dyn Wirer> {
        self.order
            .iter()
            .map(|&index| self.wirers[index].as_ref())
            .collect()
    }

    /// Run all wirers in resolved order against the registry
    pub fn wire_all(
        &mut self,
        registry: &ServiceRegistry,
        lifecycle: &mut LifecycleManager,
    ) -> Result<(), WiringError> {
        self.resolve_order()?;
        for &index in &self.order {
            let wirer = &self.wirers[index];
            match wirer.description() {
                Some(description) => {
                    tracing::info!("running startup wirer: {} ({})", wirer.name(), description)
                }
                None => tracing::info!("running startup wirer: {}", wirer.name()),
            }
            wirer.wire(registry, lifecycle)?;
        }
        Ok(())
    }

    /// Execute the full startup sequence: wiring pass, then the deferred
    /// initializer phase. Returns the lifecycle manager for inspection.
    pub async fn execute(
        &mut self,
        registry: &ServiceRegistry,
    ) -> Result<LifecycleManager, WiringError> {
        let mut lifecycle = LifecycleManager::new();

        tracing::info!("starting wiring pass with {} wirer(s)", self.wirers.len());
        self.wire_all(registry, &mut lifecycle)?;

        lifecycle.invoke_all().await?;
        tracing::info!(
            "startup wiring completed, {} initializer(s) invoked",
            lifecycle.initializer_count()
        );

        Ok(lifecycle)
    }
}

impl Default for WiringScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WiringScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WiringScheduler")
            .field("wirer_count", &self.wirers.len())
            .field("order", &self.order)
            .finish()
    }
}
