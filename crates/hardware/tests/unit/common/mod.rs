//! Register and error type tests.

/// Fault messages and status mapping.
pub mod error;
