//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A mock CloudVault API (wiremock) with a ready-made client
//! - A token store that counts what the session does to it
//! - JSON fixtures for server responses
//! - Custom assertion macros

pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
