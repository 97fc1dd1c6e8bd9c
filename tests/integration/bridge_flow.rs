//! Integration Tests: Bridge Callback Flow
//!
//! Black-box checks of the callback payloads the provisioning controller
//! delivers, mirroring the historical plugin test suite:
//! - empty API key → plugin error 103
//! - clearBlinkUpData → completed, status 202
//! - well-formed but unverifiable key → only benign verification errors
//!   within a bounded window

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};
use tokio::sync::mpsc;

use tauri_plugin_blinkup::bridge::mock::MockBridge;
use tauri_plugin_blinkup::bridge::{DeviceSetup, NativeBridge, ResultSink, UnsupportedBridge};
use tauri_plugin_blinkup::models::BlinkUpState;
use tauri_plugin_blinkup::{BlinkUpConfig, BlinkUpController, InvokeParams, PlanStore, Result};

/// A 32-alphanumeric key the mock "server" cannot verify.
const UNVERIFIABLE_KEY: &str = "abcdefghijklmnopqrstuvwxyz123456";

fn controller(bridge: Arc<dyn NativeBridge>) -> (TempDir, BlinkUpController, PlanStore) {
    let dir = tempdir().expect("Failed to create tempdir");
    let plans = PlanStore::new(dir.path().join("blinkup_plan_id.json"));
    let config = BlinkUpConfig {
        use_developer_plan_id: false,
        ..Default::default()
    };
    let controller = BlinkUpController::new(bridge, plans.clone(), config);
    (dir, controller, plans)
}

fn invoke_params(api_key: &str) -> InvokeParams {
    InvokeParams {
        api_key: api_key.to_string(),
        developer_plan_id: String::new(),
        timeout_ms: 10_000,
        generate_new_plan_id: false,
    }
}

/// Test: empty API key yields plugin error 103 without reaching the native layer
#[tokio::test]
async fn test_empty_api_key_gives_plugin_error_103() {
    // UnsupportedBridge would error on any call: proves the key never
    // reached the native layer.
    let (_dir, controller, _plans) = controller(Arc::new(UnsupportedBridge));
    let (tx, mut rx) = mpsc::unbounded_channel();

    controller
        .invoke_blink_up(invoke_params(""), tx)
        .await
        .expect("format rejection should not fail the call");

    let result = rx.recv().await.unwrap();
    assert_eq!(result.state, BlinkUpState::Error);

    let error = result.error.unwrap();
    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json["errorType"], "plugin");
    assert_eq!(json["errorCode"], "103");
}

/// Test: clearBlinkUpData completes with status code 202 and wipes the cache
#[tokio::test]
async fn test_clear_blink_up_data_gives_202() {
    let (_dir, controller, plans) = controller(Arc::new(MockBridge::verified()));
    plans.store("p_stale").await.unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    controller.clear_blink_up_data(tx).await.unwrap();

    let result = rx.recv().await.unwrap();
    assert_eq!(result.state, BlinkUpState::Completed);
    assert_eq!(result.status_code.as_deref(), Some("202"));

    assert_eq!(plans.load().await.unwrap(), None);
}

/// Test: an unverifiable 32-char key produces only benign verification errors
/// within the wait window
#[tokio::test]
async fn test_unverifiable_key_only_benign_errors() {
    let (_dir, controller, _plans) = controller(Arc::new(MockBridge::unverifiable()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    controller
        .invoke_blink_up(invoke_params(UNVERIFIABLE_KEY), tx)
        .await
        .unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_millis(300);
    loop {
        match tokio::time::timeout_at(deadline, rx.recv()).await {
            Ok(Some(result)) => {
                let code = result
                    .error
                    .as_ref()
                    .map(|e| e.error_code.clone())
                    .unwrap_or_default();
                assert!(
                    code == "31" || code == "300",
                    "unexpected callback within wait window: {result:?}"
                );
            }
            Ok(None) | Err(_) => break,
        }
    }
}

/// Test: a verified flow emits started then completed and caches the plan id
#[tokio::test]
async fn test_verified_flow_caches_plan_id() {
    let (_dir, controller, plans) = controller(Arc::new(MockBridge::verified()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    controller
        .invoke_blink_up(invoke_params(UNVERIFIABLE_KEY), tx)
        .await
        .unwrap();

    let started = rx.recv().await.unwrap();
    assert_eq!(started.state, BlinkUpState::Started);
    assert_eq!(started.status_code.as_deref(), Some("200"));

    let completed = rx.recv().await.unwrap();
    assert_eq!(completed.state, BlinkUpState::Completed);
    assert_eq!(completed.status_code.as_deref(), Some("0"));

    let info = completed.device_info.unwrap();
    assert_eq!(info.plan_id, "p_mock_0001");
    // Plan id is cached before the payload is forwarded.
    assert_eq!(plans.load().await.unwrap(), Some("p_mock_0001".to_string()));
}

/// Test: abort acknowledges with cancelled-by-user (plugin error 102)
#[tokio::test]
async fn test_abort_gives_cancelled_by_user() {
    let (_dir, controller, _plans) = controller(Arc::new(MockBridge::verified()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    controller.abort_blink_up(tx).await.unwrap();

    let result = rx.recv().await.unwrap();
    let json = serde_json::to_value(result.error.unwrap()).unwrap();
    assert_eq!(json["errorType"], "plugin");
    assert_eq!(json["errorCode"], "102");
}

/// Bridge double recording the setup it receives; for checking what the
/// controller actually marshals.
#[derive(Default)]
struct RecordingBridge {
    last_setup: Mutex<Option<DeviceSetup>>,
}

#[async_trait]
impl NativeBridge for RecordingBridge {
    async fn start_blink_up(&self, setup: DeviceSetup, _sink: ResultSink) -> Result<()> {
        *self.last_setup.lock().unwrap() = Some(setup);
        Ok(())
    }

    async fn cancel_token_polling(&self, _sink: ResultSink) -> Result<()> {
        Ok(())
    }

    async fn clear_device(&self, _sink: ResultSink) -> Result<()> {
        Ok(())
    }
}

/// Test: timeouts are clamped to the SDK maximum before marshalling
#[tokio::test]
async fn test_timeout_clamped_before_marshalling() {
    let bridge = Arc::new(RecordingBridge::default());
    let (_dir, controller, _plans) = controller(bridge.clone());

    let mut params = invoke_params(UNVERIFIABLE_KEY);
    params.timeout_ms = 120_000;

    let (tx, _rx) = mpsc::unbounded_channel();
    controller.invoke_blink_up(params, tx).await.unwrap();

    let setup = bridge.last_setup.lock().unwrap().clone().unwrap();
    assert_eq!(setup.timeout_ms, 60_000);
}

/// Test: generate_new_plan_id bypasses the cached plan id
#[tokio::test]
async fn test_generate_new_plan_id_bypasses_cache() {
    let bridge = Arc::new(RecordingBridge::default());
    let (_dir, controller, plans) = controller(bridge.clone());
    plans.store("p_cached").await.unwrap();

    // Cached id is used by default.
    let (tx, _rx) = mpsc::unbounded_channel();
    controller
        .invoke_blink_up(invoke_params(UNVERIFIABLE_KEY), tx)
        .await
        .unwrap();
    let setup = bridge.last_setup.lock().unwrap().clone().unwrap();
    assert_eq!(setup.plan_id.as_deref(), Some("p_cached"));

    // Fresh id requested: nothing is handed to the SDK.
    let mut params = invoke_params(UNVERIFIABLE_KEY);
    params.generate_new_plan_id = true;

    let (tx, _rx) = mpsc::unbounded_channel();
    controller.invoke_blink_up(params, tx).await.unwrap();
    let setup = bridge.last_setup.lock().unwrap().clone().unwrap();
    assert_eq!(setup.plan_id, None);
}
