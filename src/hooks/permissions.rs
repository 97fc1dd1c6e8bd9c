//! Permission Manifest Data
//!
//! The declarative permission list consumed by the manifest patcher: a base
//! block that must already exist in the generated manifest (the anchor) and
//! the additional declarations injected after it. Modeled as an explicit
//! immutable value so the patcher is testable without fixture files.

/// Separator used when joining permission declarations, matching the
/// indentation of the generated manifest.
pub const PERMISSION_SEPARATOR: &str = "\n\t\t";

/// Ordered permission declarations for the manifest patcher.
///
/// Invariant: the joined `base` block must appear verbatim (and only once)
/// in the target manifest for injection to succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionManifest {
    /// Declarations already present in the generated manifest; the joined
    /// block is the match anchor
    pub base: Vec<String>,
    /// Declarations injected after the base block
    pub additional: Vec<String>,
}

impl Default for PermissionManifest {
    /// The BlinkUp SDK's Android requirements: wifi scanning and state
    /// changes on top of the stock `INTERNET` permission.
    fn default() -> Self {
        Self {
            base: vec![
                r#"<uses-permission android:name="android.permission.INTERNET" />"#.to_string(),
            ],
            additional: vec![
                r#"<uses-permission android:name="android.permission.ACCESS_WIFI_STATE" />"#
                    .to_string(),
                r#"<uses-permission android:name="android.permission.CHANGE_WIFI_STATE" />"#
                    .to_string(),
            ],
        }
    }
}

impl PermissionManifest {
    /// The base block as it must appear in the target file.
    pub fn joined_base(&self) -> String {
        self.base.join(PERMISSION_SEPARATOR)
    }

    /// The base plus additional block written in place of the base block.
    pub fn joined_injected(&self) -> String {
        self.base
            .iter()
            .chain(self.additional.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(PERMISSION_SEPARATOR)
    }

    /// Idempotency marker: the first additional declaration. Its presence in
    /// the target means a previous run already injected.
    pub fn marker(&self) -> Option<&str> {
        self.additional.first().map(String::as_str)
    }
}
