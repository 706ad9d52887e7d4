//! Core tool logic, independent of any widget state.
//!
//! Every tool follows the same shape: validate scalar inputs, run a
//! closed-form computation, return a display-ready record. The GUI handlers
//! and the CLI both call into these modules.
//!
//! - [`catalog`]: Static registry of the available tools
//! - [`expr`]: Expression engine behind the keypad calculator
//! - [`finance`]: Percentage, GST, EMI, profit/loss, e-commerce math
//! - [`dates`]: Age and date-difference arithmetic
//! - [`geometry`]: Shape areas
//! - [`text`]: Word-counter statistics
//! - [`generate`]: Password and email-suggestion generators
//! - [`qr`]: QR image request construction and fetch
//! - [`images`]: Simulated image conversion and compression
//! - [`error`]: Error types shared across the tools

pub mod catalog;
pub mod dates;
pub mod error;
pub mod expr;
pub mod finance;
pub mod generate;
pub mod geometry;
pub mod images;
pub mod qr;
pub mod text;
