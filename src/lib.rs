//! Handy - everyday utilities
//!
//! A desktop grab bag of fifteen small tools: calculators, unit and image
//! converters, and generators, behind one searchable shell.
//!
//! # Architecture
//!
//! - [`core`] - Tool math and data plumbing (finance, dates, text, QR, images)
//! - [`validators`] - Input parsing and range checks shared by GUI and CLI
//! - [`config`] - Sticky preference persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)
//!
//! The GUI layer lives in the binary crate; everything here is plain logic
//! that works without a display.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod theme;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::catalog::{ToolCategory, ToolInfo, TOOLS};
pub use core::error::{Error, Result};
