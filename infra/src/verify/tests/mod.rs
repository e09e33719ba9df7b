//! Unit tests for verification providers

mod mock_tests;
