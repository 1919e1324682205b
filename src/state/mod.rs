//! Client-side state modules shared through Leptos context.
//!
//! DESIGN
//! ======
//! State is split by concern so pages subscribe only to what they render:
//! the session comparison list, explore filters, and transient UI chrome.

pub mod comparison;
pub mod explore;
pub mod ui;
