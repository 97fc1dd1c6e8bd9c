//! Provisioning Commands
//!
//! `invoke_blink_up`, `abort_blink_up` and `clear_blink_up_data` — the three
//! operations of the historical JS API, delivered over a result channel.

use tauri::{command, ipc::Channel, State};

use crate::commands::forward_to_channel;
use crate::core::{BlinkUpController, InvokeParams};
use crate::error::Result;
use crate::models::BlinkUpResult;

/// Start the BlinkUp provisioning flow.
///
/// Results arrive on `on_result`, possibly several per call (`started`
/// before `completed`). An API key failing the 32-alphanumeric format check
/// yields plugin error `103` on the channel.
#[command]
pub async fn invoke_blink_up(
    controller: State<'_, BlinkUpController>,
    api_key: String,
    developer_plan_id: String,
    timeout_ms: u32,
    generate_new_plan_id: bool,
    on_result: Channel<BlinkUpResult>,
) -> Result<()> {
    controller
        .invoke_blink_up(
            InvokeParams {
                api_key,
                developer_plan_id,
                timeout_ms,
                generate_new_plan_id,
            },
            forward_to_channel(on_result),
        )
        .await
}

/// Cancel an in-flight provisioning flow.
///
/// The native layer acknowledges on the channel with plugin error `102`
/// (cancelled by user).
#[command]
pub async fn abort_blink_up(
    controller: State<'_, BlinkUpController>,
    on_result: Channel<BlinkUpResult>,
) -> Result<()> {
    controller.abort_blink_up(forward_to_channel(on_result)).await
}

/// Purge cached provisioning state and clear the device's wifi
/// configuration.
///
/// Completion arrives on the channel as `state: "completed"`,
/// `statusCode: "202"`.
#[command]
pub async fn clear_blink_up_data(
    controller: State<'_, BlinkUpController>,
    on_result: Channel<BlinkUpResult>,
) -> Result<()> {
    controller
        .clear_blink_up_data(forward_to_channel(on_result))
        .await
}
