//! SeaORM entity definitions for the AlumniConnect schema.
//!
//! One module per table. Relation definitions mirror the foreign keys the
//! seed writer depends on; see `crate::seed::graph` for the declared
//! dependency order.

pub mod applications;
pub mod campaigns;
pub mod categories;
pub mod comments;
pub mod companies;
pub mod donations;
pub mod events;
pub mod jobs;
pub mod likes;
pub mod posts;
pub mod profiles;
pub mod saved_jobs;
pub mod users;
