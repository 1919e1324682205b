//! Network-facing modules for REST fetchers and payload types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors backend JSON; `api` wraps the HTTP calls and their
//! fallbacks.

pub mod api;
pub mod types;
