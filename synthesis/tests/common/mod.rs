//! Common test utilities and infrastructure
//!
//! Shared fixtures used across the synthesis test suites.

pub mod fixtures;

pub use fixtures::TestFixtures;
