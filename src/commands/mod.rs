//! Tauri Commands
//!
//! The frontend-facing surface of the plugin. Commands are pure pass-through
//! marshalling: arguments go to [`BlinkUpController`](crate::BlinkUpController)
//! verbatim, every native callback payload is forwarded to the caller's
//! channel, and the invoke promise rejects only when the bridge itself fails.

use tauri::ipc::Channel;
use tokio::sync::mpsc;

use crate::bridge::ResultSink;
use crate::models::BlinkUpResult;

pub mod provisioning;

/// Adapt a frontend channel into a [`ResultSink`].
///
/// Payloads are forwarded until the channel is closed; the Cordova
/// keep-callback analog, one channel outliving several payloads.
pub(crate) fn forward_to_channel(channel: Channel<BlinkUpResult>) -> ResultSink {
    let (tx, mut rx) = mpsc::unbounded_channel::<BlinkUpResult>();

    tauri::async_runtime::spawn(async move {
        while let Some(result) = rx.recv().await {
            if channel.send(result).is_err() {
                break;
            }
        }
    });

    tx
}
