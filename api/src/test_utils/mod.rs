//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory log adapter doubles as the happy-path repository in tests;
//! the mocks here cover failure paths it cannot produce.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
