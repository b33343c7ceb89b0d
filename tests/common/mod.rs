//! Common test utilities and helpers
//!
//! Shared fixtures and an in-memory listing source used by the integration
//! tests.

#![allow(dead_code)]

pub mod mock_services;
pub mod test_fixtures;
