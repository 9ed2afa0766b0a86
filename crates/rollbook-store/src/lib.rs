//! SQLite-backed record store
//!
//! Materializes a declared schema into a fresh SQLite database, stages
//! entity instances, and commits them atomically. Single-threaded and
//! synchronous; the backing connection lives for the lifetime of the
//! `Store` and is released on drop.

pub mod ddl;
pub mod errors;
pub mod store;

mod validate;

pub use store::Store;
