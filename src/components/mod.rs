//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and listing surfaces while reading/writing
//! shared state (comparison list, UI notices) from Leptos context providers.

pub mod compare_button;
pub mod comparison_badge;
pub mod filter_panel;
pub mod locale_guard;
pub mod locale_switcher;
pub mod notice_banner;
pub mod property_card;
pub mod site_header;
