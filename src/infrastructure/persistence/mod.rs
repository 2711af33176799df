//! Link store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, the production store
//! - [`MemoryLinkRepository`] - in-process map for tests and local runs
//! - [`with_store_timeout`] - per-call time bound for store calls

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod timeout;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::{DEFAULT_STORE_TIMEOUT, PgLinkRepository};
pub use timeout::with_store_timeout;
