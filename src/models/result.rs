//! BlinkUp Result Payload
//!
//! The JSON payload sent to the frontend callback channel. Shape:
//!
//! ```json
//! { "state": "started" | "completed" | "error",
//!   "statusCode": "202",
//!   "error": { "errorType": "plugin", "errorCode": "103" },
//!   "deviceInfo": { "deviceId": "...", "planId": "...", "agentURL": "...", "verificationDate": "..." } }
//! ```
//!
//! `statusCode` and `deviceInfo` are present only on non-error states,
//! `error` only on the error state. Codes travel as stringified integers;
//! that is the historical contract and consumers parse them as strings.

use serde::{Deserialize, Serialize};

use crate::models::DeviceInfo;

/// State of a BlinkUp flow as reported to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlinkUpState {
    /// Device flashed, plugin is gathering connection info
    Started,
    /// Flow finished (device connected, or clear operation done)
    Completed,
    /// Flow failed
    Error,
}

/// Who produced an error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    /// The plugin layer itself
    #[serde(rename = "plugin")]
    Plugin,
    /// The native BlinkUp SDK
    #[serde(rename = "blinkup")]
    BlinkUp,
}

/// Status codes reported on non-error states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    DeviceConnected,
    GatheringInfo,
    ClearWifiComplete,
    ClearWifiAndCacheComplete,
}

impl StatusCode {
    pub fn code(self) -> u16 {
        match self {
            StatusCode::DeviceConnected => 0,
            StatusCode::GatheringInfo => 200,
            StatusCode::ClearWifiComplete => 201,
            StatusCode::ClearWifiAndCacheComplete => 202,
        }
    }
}

/// Error codes produced by the plugin layer (`errorType: "plugin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginError {
    InvalidArguments,
    ProcessTimedOut,
    CancelledByUser,
    InvalidApiKey,
    VerifyApiKeyFail,
    JsonError,
}

impl PluginError {
    pub fn code(self) -> u16 {
        match self {
            PluginError::InvalidArguments => 100,
            PluginError::ProcessTimedOut => 101,
            PluginError::CancelledByUser => 102,
            PluginError::InvalidApiKey => 103,
            PluginError::VerifyApiKeyFail => 301,
            PluginError::JsonError => 302,
        }
    }
}

/// Error member of the result payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlinkUpError {
    pub error_type: ErrorType,
    /// Stringified integer code
    pub error_code: String,
    /// Present only for SDK (`blinkup`) errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

/// One callback payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlinkUpResult {
    pub state: BlinkUpState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BlinkUpError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<DeviceInfo>,
}

impl BlinkUpResult {
    /// An error produced by the plugin layer.
    pub fn plugin_error(code: PluginError) -> Self {
        Self {
            state: BlinkUpState::Error,
            status_code: None,
            error: Some(BlinkUpError {
                error_type: ErrorType::Plugin,
                error_code: code.code().to_string(),
                error_msg: None,
            }),
            device_info: None,
        }
    }

    /// An error passed through from the native SDK.
    ///
    /// `code` is the SDK's own error code when it reports one; the Android
    /// SDK only supplies a message, in which case the generic code `1` is
    /// used.
    pub fn sdk_error(code: Option<u16>, msg: impl Into<String>) -> Self {
        Self {
            state: BlinkUpState::Error,
            status_code: None,
            error: Some(BlinkUpError {
                error_type: ErrorType::BlinkUp,
                error_code: code.unwrap_or(1).to_string(),
                error_msg: Some(msg.into()),
            }),
            device_info: None,
        }
    }

    /// A non-error status payload without device info.
    pub fn status(state: BlinkUpState, status: StatusCode) -> Self {
        Self {
            state,
            status_code: Some(status.code().to_string()),
            error: None,
            device_info: None,
        }
    }

    /// The device-connected completion payload.
    pub fn device_connected(info: DeviceInfo) -> Self {
        Self {
            state: BlinkUpState::Completed,
            status_code: Some(StatusCode::DeviceConnected.code().to_string()),
            error: None,
            device_info: Some(info),
        }
    }

    /// Whether this payload reports an error.
    pub fn is_error(&self) -> bool {
        self.state == BlinkUpState::Error
    }
}
