//! SeaORM entity definitions for the files service schema.

pub mod file;
pub mod migration;
