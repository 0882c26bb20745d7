//! Common test utilities for append-sw CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_written!`, `assert_not_written!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
