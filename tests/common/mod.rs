//! Common test utilities for PyGrid CLI scenario and binary tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home directory plus helpers to run the `pygrid` binary
//! - Mock API helpers built on `httpmock`
//! - Fixtures: credentials files and canned API answers

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
