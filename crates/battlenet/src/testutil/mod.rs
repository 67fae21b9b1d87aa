//! Test utilities for the battlenet crate
//!
//! This module provides canned responses and mocks for testing.

pub mod fixtures;
pub mod mocks;

pub use mocks::*;
