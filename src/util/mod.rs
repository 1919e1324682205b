//! Storage, locale routing, and display helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `local_storage` is the only module that touches the browser; everything
//! else is plain Rust and runs under native tests.

pub mod format;
pub mod local_storage;
pub mod locale;
pub mod locale_nav;
pub mod storage;
