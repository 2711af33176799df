//! Browser-facing HTML responses.
//!
//! The redirect path answers humans, not API clients, so its failures render
//! small Askama pages instead of JSON error bodies.

pub mod pages;
