//! Domain layer: entities and the storage contract.
//!
//! - [`entities`] - The [`entities::Link`] record and its creation input
//! - [`repositories`] - The [`repositories::LinkRepository`] trait implemented by
//!   `crate::infrastructure::persistence`
//!
//! The domain layer depends on nothing above it. Services in
//! [`crate::application::services`] receive a repository at construction.

pub mod entities;
pub mod repositories;
