//! Mock Native Bridge
//!
//! A test double reproducing the BlinkUp SDK's observable callback behavior,
//! used by the integration tests and available to host apps for UI testing.
//! Payloads are delivered from a spawned task, so tests exercise the same
//! thread-of-origin-independence as real native callbacks.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::bridge::{DeviceSetup, NativeBridge, ResultSink};
use crate::error::Result;
use crate::models::{BlinkUpResult, BlinkUpState, DeviceInfo, PluginError, StatusCode};

/// SDK-side error code for an API key the service rejects.
const SDK_INVALID_API_KEY: u16 = 300;

/// How the mock "server" treats the API key passed to a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerification {
    /// Flow proceeds: `started` then `completed` with device info
    Verified,
    /// Key is well-formed but the service rejects it (SDK error 300)
    Unverifiable,
}

/// Mock implementation of [`NativeBridge`].
pub struct MockBridge {
    verification: KeyVerification,
    device_json: serde_json::Value,
    /// Delay before each emitted payload
    latency: Duration,
}

impl MockBridge {
    /// Bridge that verifies every key and connects a canned device.
    pub fn verified() -> Self {
        Self {
            verification: KeyVerification::Verified,
            device_json: serde_json::json!({
                "impee_id": "235d9e7838a609ee",
                "plan_id": "p_mock_0001",
                "agent_url": "https://agent.electricimp.com/mock",
                "claimed_at": "2015-06-18T18:45:00Z",
            }),
            latency: Duration::from_millis(10),
        }
    }

    /// Bridge whose "server" rejects every key with SDK error 300.
    pub fn unverifiable() -> Self {
        Self {
            verification: KeyVerification::Unverifiable,
            ..Self::verified()
        }
    }

    /// Override the SDK-shaped device info JSON returned on completion.
    pub fn with_device_json(mut self, json: serde_json::Value) -> Self {
        self.device_json = json;
        self
    }
}

#[async_trait]
impl NativeBridge for MockBridge {
    async fn start_blink_up(&self, _setup: DeviceSetup, sink: ResultSink) -> Result<()> {
        let verification = self.verification;
        let device_json = self.device_json.clone();
        let latency = self.latency;

        tokio::spawn(async move {
            sleep(latency).await;
            match verification {
                KeyVerification::Unverifiable => {
                    let _ = sink.send(BlinkUpResult::sdk_error(
                        Some(SDK_INVALID_API_KEY),
                        "could not verify API key",
                    ));
                }
                KeyVerification::Verified => {
                    let _ = sink.send(BlinkUpResult::status(
                        BlinkUpState::Started,
                        StatusCode::GatheringInfo,
                    ));
                    sleep(latency).await;
                    let payload = match DeviceInfo::from_sdk_json(&device_json) {
                        Ok(info) => BlinkUpResult::device_connected(info),
                        Err(_) => BlinkUpResult::plugin_error(PluginError::JsonError),
                    };
                    let _ = sink.send(payload);
                }
            }
        });

        Ok(())
    }

    async fn cancel_token_polling(&self, sink: ResultSink) -> Result<()> {
        // The native layer acknowledges an abort as a cancelled-by-user error.
        let _ = sink.send(BlinkUpResult::plugin_error(PluginError::CancelledByUser));
        Ok(())
    }

    async fn clear_device(&self, sink: ResultSink) -> Result<()> {
        let latency = self.latency;
        tokio::spawn(async move {
            sleep(latency).await;
            let _ = sink.send(BlinkUpResult::status(
                BlinkUpState::Completed,
                StatusCode::ClearWifiAndCacheComplete,
            ));
        });
        Ok(())
    }
}
