//! World-level integration tests
