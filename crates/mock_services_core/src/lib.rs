//! Shared mock service domain primitives.
//!
//! This crate owns the deterministic response contract for the demo
//! service mocks. It intentionally excludes AWS SDK and Lambda runtime
//! concerns.

pub mod contract;
