//! Helper utilities for the app layer
//!
//! Pure functions with no access to application state.

pub mod filtering;

pub use filtering::fuzzy_filter_tools;
