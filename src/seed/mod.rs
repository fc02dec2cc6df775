//! Development database seeding.
//!
//! `catalog` holds the static fixtures, `graph` the declared foreign-key
//! dependency order, and `writer` the idempotent insert/clean routines the
//! seed binaries call.

pub mod catalog;
pub mod graph;
pub mod writer;

pub use graph::EntityKind;
pub use writer::{clean, seed, seed_super_admin, SeedCounts, SeedSummary};
