//! Shared helpers for the command-line boundary.

pub mod validation;
