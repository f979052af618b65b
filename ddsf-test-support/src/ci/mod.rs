//! Helpers that read CI-facing configuration for test suites.

pub mod property_test_profile;
