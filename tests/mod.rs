//! Test suite for CloudVault
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
