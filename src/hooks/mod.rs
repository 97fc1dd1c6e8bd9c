//! Build-Time Patch Hooks
//!
//! Idempotent text-substitution hooks run by the host build orchestrator
//! before the Android project is compiled. Two independent patchers exist:
//!
//! - [`manifest::inject_manifest_permissions`] adds the BlinkUp permission
//!   set to the generated `AndroidManifest.xml`
//! - [`main_activity::inject_main_activity`] wires the BlinkUp controller
//!   into the generated `MainActivity.java`
//!
//! Each patcher performs one read and, when a change is needed, one write;
//! the two touch disjoint files and may run concurrently. A patcher's future
//! resolves or errors exactly once and has no cancellation semantics.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub mod main_activity;
pub mod manifest;
pub mod permissions;

pub use main_activity::inject_main_activity;
pub use manifest::inject_manifest_permissions;
pub use permissions::PermissionManifest;

/// Platform identifier gating both patchers.
pub const ANDROID_PLATFORM: &str = "android";

/// Build invocation context supplied by the host build orchestrator.
///
/// Read-only for the duration of a hook invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    /// Absolute project root
    pub project_root: PathBuf,
    /// Platforms included in this build
    pub platforms: Vec<String>,
}

impl BuildContext {
    pub fn new(project_root: impl Into<PathBuf>, platforms: Vec<String>) -> Self {
        Self {
            project_root: project_root.into(),
            platforms,
        }
    }

    /// Whether the Android platform is part of this build.
    pub fn targets_android(&self) -> bool {
        self.platforms.iter().any(|p| p == ANDROID_PLATFORM)
    }

    /// Resolve a path relative to the project root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }
}

/// Outcome of a successful patcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File rewritten with the injection applied
    Applied,
    /// Idempotency marker found; file left untouched
    AlreadyApplied,
    /// Target platform absent from the build; no file I/O performed
    SkippedPlatform,
}

/// One literal substitution against a file's contents.
///
/// `apply` replaces the first occurrence of the pattern and reports whether
/// the anchor was found, so callers can surface a missing anchor instead of
/// silently passing the text through unchanged.
#[derive(Debug, Clone)]
pub struct PatchSpec {
    pattern: String,
    replacement: String,
}

impl PatchSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Replace the first occurrence of the pattern in `input`.
    ///
    /// Returns the (possibly unchanged) text and whether the anchor matched.
    pub fn apply(&self, input: &str) -> (String, bool) {
        match input.find(&self.pattern) {
            Some(idx) => {
                let mut out =
                    String::with_capacity(input.len() + self.replacement.len());
                out.push_str(&input[..idx]);
                out.push_str(&self.replacement);
                out.push_str(&input[idx + self.pattern.len()..]);
                (out, true)
            }
            None => (input.to_string(), false),
        }
    }
}
