//! BlinkUp Plugin Configuration
//!
//! Configuration options for the BlinkUp plugin, loadable from
//! `tauri.conf.json` or set programmatically via [`BlinkUpBuilder`](crate::BlinkUpBuilder).

use serde::{Deserialize, Serialize};

/// Maximum BlinkUp timeout accepted by the native SDK, in milliseconds.
///
/// Requested timeouts above this value are clamped.
pub const MAX_TIMEOUT_MS: u32 = 60_000;

/// BlinkUp Plugin Configuration
///
/// # Configuration in tauri.conf.json
///
/// ```json
/// {
///   "plugins": {
///     "blinkup": {
///       "defaultTimeoutMs": 30000,
///       "useDeveloperPlanId": false
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlinkUpConfig {
    /// Timeout applied when a caller passes `0`, in milliseconds.
    ///
    /// Default: `30000`
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u32,

    /// Whether the per-call developer plan id is honored.
    ///
    /// Developer plan ids exist for connecting to development devices and
    /// must never ship in production builds (see
    /// electricimp.com/docs/manufacturing/planids/).
    ///
    /// Default: `true` in debug builds, `false` otherwise
    #[serde(default = "default_use_developer_plan_id")]
    pub use_developer_plan_id: bool,

    /// File name of the plan-id cache inside the app data directory.
    ///
    /// Default: `"blinkup_plan_id.json"`
    #[serde(default = "default_plan_cache_file")]
    pub plan_cache_file: String,
}

fn default_timeout_ms() -> u32 {
    30_000
}

fn default_use_developer_plan_id() -> bool {
    cfg!(debug_assertions)
}

fn default_plan_cache_file() -> String {
    "blinkup_plan_id.json".to_string()
}

impl Default for BlinkUpConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
            use_developer_plan_id: default_use_developer_plan_id(),
            plan_cache_file: default_plan_cache_file(),
        }
    }
}

impl BlinkUpConfig {
    /// Clamp a requested timeout to the SDK limit, substituting the
    /// configured default for `0`.
    pub fn effective_timeout_ms(&self, requested: u32) -> u32 {
        let requested = if requested == 0 {
            self.default_timeout_ms
        } else {
            requested
        };
        requested.min(MAX_TIMEOUT_MS)
    }
}
