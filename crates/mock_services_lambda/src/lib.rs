//! Lambda runtime integration for the demo service mocks.
//!
//! This crate owns runtime integration details (Lambda entrypoints and
//! invocation logging) and leaves the response contract to
//! `mock_services_core`.

pub mod handlers;
