//! Native Bridge
//!
//! The seam between the plugin layer and the opaque BlinkUp SDK. The plugin
//! never talks to the SDK directly; it marshals calls through [`NativeBridge`]
//! and receives results on a [`ResultSink`].
//!
//! # Threading
//!
//! The native layer signals completion asynchronously, possibly from a
//! non-originating thread and possibly more than once per call (a flow emits
//! `started` before `completed`). The sink is an unbounded mpsc sender, so
//! delivery is safe from any thread; callers must not assume ordering between
//! different bridge operations.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::models::BlinkUpResult;

pub mod mock;

/// Plugin service name used on the invoke wire.
pub const SERVICE_NAME: &str = "blinkup";

/// Channel on which the native layer delivers callback payloads.
///
/// Each payload resolves either the success or the error path exactly once;
/// a single call may produce several payloads over its lifetime.
pub type ResultSink = mpsc::UnboundedSender<BlinkUpResult>;

/// Per-call parameters handed to the native flow.
#[derive(Debug, Clone)]
pub struct DeviceSetup {
    /// BlinkUp API key, already format-validated by the plugin layer
    pub api_key: String,
    /// Plan id to provision under; `None` lets the SDK generate one
    pub plan_id: Option<String>,
    /// Timeout in milliseconds, already clamped to the SDK limit
    pub timeout_ms: u32,
}

/// Invocation surface of the native BlinkUp SDK.
///
/// Implementations are platform glue and out of scope for this crate; the
/// [`mock::MockBridge`] double reproduces the SDK's observable callback
/// behavior for tests.
#[async_trait]
pub trait NativeBridge: Send + Sync {
    /// Present the BlinkUp flow: acquire a setup token, let the user select
    /// wifi, flash the device, then poll for connection info.
    async fn start_blink_up(&self, setup: DeviceSetup, sink: ResultSink) -> Result<()>;

    /// Cancel token-status polling for an in-flight flow.
    async fn cancel_token_polling(&self, sink: ResultSink) -> Result<()>;

    /// Clear the device's wifi configuration.
    async fn clear_device(&self, sink: ResultSink) -> Result<()>;
}

/// Bridge registered when no platform implementation is wired up.
///
/// Every call fails with [`Error::NotAvailable`](crate::Error::NotAvailable);
/// desktop hosts get a deterministic error instead of a hang.
#[derive(Debug, Default)]
pub struct UnsupportedBridge;

#[async_trait]
impl NativeBridge for UnsupportedBridge {
    async fn start_blink_up(&self, _setup: DeviceSetup, _sink: ResultSink) -> Result<()> {
        Err(unsupported("startBlinkUp"))
    }

    async fn cancel_token_polling(&self, _sink: ResultSink) -> Result<()> {
        Err(unsupported("abortBlinkUp"))
    }

    async fn clear_device(&self, _sink: ResultSink) -> Result<()> {
        Err(unsupported("clearBlinkUpData"))
    }
}

fn unsupported(method: &str) -> crate::Error {
    crate::Error::NotAvailable(format!(
        "{method}: no native BlinkUp bridge on this platform"
    ))
}
