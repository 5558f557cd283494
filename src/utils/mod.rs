//! Utility functions and helpers.

pub mod format;

pub use format::{format_validation_error, ValidationIssue, ValidationIssues};
