//! Test doubles for the notifier and the database.
//!
//! Used by the unit tests and by the HTTP tests under `tests/`.

pub mod database;
pub mod notifier;

pub use database::in_memory_database;
pub use notifier::MockNotifier;
