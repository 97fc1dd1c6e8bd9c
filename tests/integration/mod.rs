//! Integration Tests Module
//!
//! End-to-end tests for the BlinkUp plugin.
//!
//! Test categories:
//! - `hooks_flow`: build-time patchers against tempdir project fixtures
//!   (injection, idempotence, platform gating, error reporting)
//! - `bridge_flow`: black-box callback payloads of the provisioning
//!   controller through the mock native bridge

mod bridge_flow;
