//! Tests for authentication service

#[cfg(test)]
mod mocks;
