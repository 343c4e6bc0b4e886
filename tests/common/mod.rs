//! Common test utilities for sitetask CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project with stub builder and sync programs
//! - `TestResult`: captured output of one CLI run

#![allow(dead_code)]

pub mod env;

pub use env::*;
