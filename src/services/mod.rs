//! Domain services that sit between UI state and persistence.

pub mod comparison;
