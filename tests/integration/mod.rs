//! Integration tests against a mock CloudVault API
