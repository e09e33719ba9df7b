//! Unit tests for database module
