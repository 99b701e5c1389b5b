//! Unit tests for the project module.

mod validation_tests;
