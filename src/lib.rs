//! # Tauri Plugin BlinkUp
//!
//! Electric Imp **BlinkUp** device provisioning for Tauri applications.
//!
//! The plugin has two decoupled halves that never interact at runtime:
//!
//! - **Bridge API**: three commands (`invoke_blink_up`, `abort_blink_up`,
//!   `clear_blink_up_data`) marshalling calls into the native BlinkUp SDK
//!   and streaming JSON status payloads back over a result channel.
//! - **Build hooks** ([`hooks`]): idempotent patchers run by the host build
//!   tool to add the required permissions to the generated Android manifest
//!   and wire the BlinkUp controller into the generated main activity.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_blinkup::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ## JavaScript API
//!
//! ```typescript
//! import { invoke, Channel } from '@tauri-apps/api/core';
//!
//! const onResult = new Channel<BlinkUpResult>();
//! onResult.onmessage = (result) => console.log(result.state);
//!
//! await invoke('plugin:blinkup|invoke_blink_up', {
//!   apiKey, developerPlanId: '', timeoutMs: 30000,
//!   generateNewPlanId: false, onResult,
//! });
//! ```
//!
//! ## Callback payload
//!
//! Payloads keep the historical wire shape: `state` is one of `started`,
//! `completed` or `error`; errors carry `errorType` (`plugin` or `blinkup`)
//! and a stringified `errorCode`; completions carry a stringified
//! `statusCode` and, for a connected device, `deviceInfo`.

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub mod bridge;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod hooks;
pub mod models;

pub use bridge::{DeviceSetup, NativeBridge, ResultSink, UnsupportedBridge, SERVICE_NAME};
pub use config::BlinkUpConfig;
pub use core::{BlinkUpController, InvokeParams, PlanStore};
pub use error::{Error, Result};
pub use models::*;

pub use commands::provisioning::{abort_blink_up, clear_blink_up_data, invoke_blink_up};

/// Initialize the BlinkUp plugin with default configuration.
///
/// Configuration is read from the `plugins.blinkup` table of
/// `tauri.conf.json` when present. No native bridge is wired up by default;
/// platforms without one report `NotAvailable` on every bridge call. Use
/// [`BlinkUpBuilder`] to register a bridge implementation.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    BlinkUpBuilder::new().build()
}

/// Builder for custom BlinkUp plugin configuration.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
///
/// fn main() {
///     tauri::Builder::default()
///         .plugin(
///             tauri_plugin_blinkup::BlinkUpBuilder::new()
///                 .bridge(Arc::new(tauri_plugin_blinkup::bridge::mock::MockBridge::verified()))
///                 .build(),
///         )
///         .run(tauri::generate_context!())
///         .expect("error while running tauri application");
/// }
/// ```
#[derive(Default)]
pub struct BlinkUpBuilder {
    config: Option<BlinkUpConfig>,
    bridge: Option<Arc<dyn NativeBridge>>,
}

impl BlinkUpBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configuration instead of reading `tauri.conf.json`.
    pub fn config(mut self, config: BlinkUpConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Register the native bridge implementation for this platform.
    pub fn bridge(mut self, bridge: Arc<dyn NativeBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Build the plugin with the configured options.
    pub fn build<R: Runtime>(self) -> TauriPlugin<R> {
        let BlinkUpBuilder { config, bridge } = self;

        Builder::<R, ()>::new("blinkup")
            .invoke_handler(tauri::generate_handler![
                commands::provisioning::invoke_blink_up,
                commands::provisioning::abort_blink_up,
                commands::provisioning::clear_blink_up_data,
            ])
            .setup(move |app, _api| {
                // Builder config wins; otherwise read the app's plugin table.
                let config = config.unwrap_or_else(|| {
                    app.config()
                        .plugins
                        .0
                        .get("blinkup")
                        .and_then(|v| serde_json::from_value::<BlinkUpConfig>(v.clone()).ok())
                        .unwrap_or_default()
                });

                let app_dir = app.path().app_data_dir().map_err(|e| {
                    log::error!("Failed to get app data dir: {e}");
                    Error::Io(format!("Failed to get app data dir: {e}"))
                })?;

                std::fs::create_dir_all(&app_dir)
                    .map_err(|e| Error::Io(format!("Failed to create app data dir: {e}")))?;

                let plans = PlanStore::new(app_dir.join(&config.plan_cache_file));
                let bridge = bridge.unwrap_or_else(|| Arc::new(UnsupportedBridge));

                app.manage(BlinkUpController::new(bridge, plans, config));

                log::info!("BlinkUp plugin initialized");
                Ok(())
            })
            .build()
    }
}
