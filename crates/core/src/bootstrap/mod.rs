//! Conditional bootstrap of the schema-migration engine.
//!
//! Two decision units run once during the host's wiring phase: the
//! [`ClientResolver`] builds a default wire client from configured endpoints
//! when nothing else supplied one, and the [`MigrationBootstrap`] wirer
//! gates, constructs and registers the engine plus its deferred initializer.

pub mod client;
pub mod initializer;
pub mod wirer;

pub use client::*;
pub use initializer::*;
pub use wirer::*;
