//! Internal support utilities for the derive macro.
//!
//! Attribute parsing, diagnostics and syn helpers.

pub mod attrs;
pub mod diag;
pub mod utils;
