//! Database schema bootstrap.
//!
//! The files service's schema has been owned by two generations of migration
//! tooling over its lifetime. This module carries the single bootstrap step
//! that initializes a fresh database, while abstaining whenever either
//! generation has already done the work.

mod guard;
mod inspector;

pub use guard::{apply, LEDGER_TABLE, LEGACY_LEDGER_TABLE, SEED_VERSION};
pub use inspector::SchemaInspector;
