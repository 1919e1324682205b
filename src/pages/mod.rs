//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, filter state) and
//! delegates rendering details to `components`.

pub mod compare;
pub mod explore;
pub mod home;
pub mod not_found;
