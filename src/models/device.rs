//! Device Info Payload
//!
//! Connection details for a successfully provisioned device, mapped from the
//! native SDK's token-status JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// JSON keys used by the BlinkUp SDK token-status callback, documented at
// electricimp.com/docs/manufacturing/sdkdocs/android/callbacks/
const SDK_IMPEE_ID_KEY: &str = "impee_id";
const SDK_PLAN_ID_KEY: &str = "plan_id";
const SDK_AGENT_URL_KEY: &str = "agent_url";
const SDK_CLAIMED_AT_KEY: &str = "claimed_at";

/// Connection info for a provisioned device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device id ("impee id" in SDK terms)
    pub device_id: String,

    /// Plan id the device was provisioned under
    pub plan_id: String,

    /// URL of the device's agent
    #[serde(rename = "agentURL")]
    pub agent_url: String,

    /// When the device was claimed, ISO 8601 with explicit offset
    pub verification_date: String,
}

impl DeviceInfo {
    /// Map the SDK's token-status JSON into a [`DeviceInfo`].
    ///
    /// The `claimed_at` timestamp's `Z` suffix is rewritten to `+0:00` so
    /// both mobile platforms report the same date format.
    pub fn from_sdk_json(json: &serde_json::Value) -> Result<Self> {
        let field = |key: &str| -> Result<String> {
            json.get(key)
                .and_then(|v| v.as_str())
                .map(str::to_owned)
                .ok_or_else(|| Error::Serialization(format!("device info missing {key}")))
        };

        Ok(Self {
            device_id: field(SDK_IMPEE_ID_KEY)?.trim().to_string(),
            plan_id: field(SDK_PLAN_ID_KEY)?,
            agent_url: field(SDK_AGENT_URL_KEY)?,
            verification_date: field(SDK_CLAIMED_AT_KEY)?.replace('Z', "+0:00"),
        })
    }
}
