//! BlinkUp Core
//!
//! The plugin-side controller behind the commands: API-key format gate,
//! timeout clamping, plan-id selection and capture, and marshalling into the
//! native bridge. Contains no retry logic and no state machine; native
//! results pass through to the sink unexamined.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::bridge::{DeviceSetup, NativeBridge, ResultSink};
use crate::config::BlinkUpConfig;
use crate::error::Result;
use crate::models::{BlinkUpResult, PluginError};

pub mod plan_cache;

pub use plan_cache::PlanStore;

/// Arguments of one `invoke_blink_up` call, as received from the frontend.
#[derive(Debug, Clone)]
pub struct InvokeParams {
    pub api_key: String,
    /// Development-only plan id; honored when
    /// [`BlinkUpConfig::use_developer_plan_id`] is set
    pub developer_plan_id: String,
    /// Requested timeout in milliseconds; `0` selects the configured default
    pub timeout_ms: u32,
    /// Skip the plan cache and let the SDK generate a fresh plan id
    pub generate_new_plan_id: bool,
}

/// Plugin-side controller for the provisioning flow.
pub struct BlinkUpController {
    bridge: Arc<dyn NativeBridge>,
    plans: PlanStore,
    config: BlinkUpConfig,
}

impl BlinkUpController {
    pub fn new(bridge: Arc<dyn NativeBridge>, plans: PlanStore, config: BlinkUpConfig) -> Self {
        Self {
            bridge,
            plans,
            config,
        }
    }

    /// Start the BlinkUp provisioning flow.
    ///
    /// A key failing the format check never reaches the native layer; the
    /// sink receives plugin error `103` and the call itself succeeds, since
    /// the error traveled down the callback path.
    pub async fn invoke_blink_up(&self, params: InvokeParams, sink: ResultSink) -> Result<()> {
        let api_key = params.api_key.trim();
        if !api_key_format_valid(api_key) {
            log::warn!("invokeBlinkUp: API key failed format check");
            let _ = sink.send(BlinkUpResult::plugin_error(PluginError::InvalidApiKey));
            return Ok(());
        }

        let setup = DeviceSetup {
            api_key: api_key.to_string(),
            plan_id: self.select_plan_id(&params).await,
            timeout_ms: self.config.effective_timeout_ms(params.timeout_ms),
        };

        log::info!(
            "invokeBlinkUp: starting flow (timeout {} ms, cached plan: {})",
            setup.timeout_ms,
            setup.plan_id.is_some()
        );
        self.bridge
            .start_blink_up(setup, self.capture_plan_id(sink))
            .await
    }

    /// Request cancellation of an in-flight flow.
    pub async fn abort_blink_up(&self, sink: ResultSink) -> Result<()> {
        log::info!("abortBlinkUp: cancelling token-status polling");
        self.bridge.cancel_token_polling(sink).await
    }

    /// Purge the cached plan id and clear the device's wifi configuration.
    pub async fn clear_blink_up_data(&self, sink: ResultSink) -> Result<()> {
        self.plans.clear().await?;
        log::info!("clearBlinkUpData: plan cache cleared");
        self.bridge.clear_device(sink).await
    }

    /// Plan id handed to the SDK, in precedence order: none when the caller
    /// asked for a fresh one, the developer plan id in development builds,
    /// else whatever the cache holds.
    async fn select_plan_id(&self, params: &InvokeParams) -> Option<String> {
        if params.generate_new_plan_id {
            return None;
        }

        if self.config.use_developer_plan_id && !params.developer_plan_id.is_empty() {
            return Some(params.developer_plan_id.clone());
        }

        match self.plans.load().await {
            Ok(cached) => cached,
            Err(e) => {
                log::warn!("plan cache unavailable, SDK will generate a plan id: {e}");
                None
            }
        }
    }

    /// Wrap `downstream` so the plan id of a connected device is cached
    /// before the payload is forwarded.
    fn capture_plan_id(&self, downstream: ResultSink) -> ResultSink {
        let (tx, mut rx) = mpsc::unbounded_channel::<BlinkUpResult>();
        let plans = self.plans.clone();

        tokio::spawn(async move {
            while let Some(result) = rx.recv().await {
                if let Some(info) = &result.device_info {
                    if let Err(e) = plans.store(&info.plan_id).await {
                        log::warn!("failed to cache plan id: {e}");
                    }
                }
                if downstream.send(result).is_err() {
                    break;
                }
            }
        });

        tx
    }
}

/// A BlinkUp API key is 32 alphanumeric characters.
fn api_key_format_valid(api_key: &str) -> bool {
    api_key.len() == 32 && api_key.chars().all(|c| c.is_ascii_alphanumeric())
}
