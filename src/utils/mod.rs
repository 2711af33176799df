//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`validation`] - URL and short code syntax checks
//! - [`db_error`] - Classification of database driver errors

pub mod code_generator;
pub mod db_error;
pub mod validation;
