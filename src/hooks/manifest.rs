//! Manifest Permission Patcher
//!
//! Injects the BlinkUp permission set into the generated
//! `AndroidManifest.xml`. Safe to run on every build: a previous injection
//! is detected by marker and left alone.

use tokio::fs;

use crate::error::{Error, Result};
use crate::hooks::{BuildContext, PatchOutcome, PatchSpec, PermissionManifest};

/// Location of the generated manifest, relative to the project root.
pub const ANDROID_MANIFEST_PATH: &str = "platforms/android/AndroidManifest.xml";

/// Inject `permissions` into the generated Android manifest.
///
/// No-ops when the build does not target Android. Otherwise reads the
/// manifest, replaces the first occurrence of the joined base-permission
/// block with the joined base+additional block, and writes the file back.
pub async fn inject_manifest_permissions(
    ctx: &BuildContext,
    permissions: &PermissionManifest,
) -> Result<PatchOutcome> {
    if !ctx.targets_android() {
        return Ok(PatchOutcome::SkippedPlatform);
    }

    let path = ctx.resolve(ANDROID_MANIFEST_PATH);
    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::Read(format!("{ANDROID_MANIFEST_PATH}: {e}")))?;

    if let Some(marker) = permissions.marker() {
        if contents.contains(marker) {
            log::info!("AndroidManifest already injected");
            return Ok(PatchOutcome::AlreadyApplied);
        }
    }

    let spec = PatchSpec::new(permissions.joined_base(), permissions.joined_injected());
    let (patched, found) = spec.apply(&contents);
    if !found {
        log::warn!(
            "base permission block not found in {ANDROID_MANIFEST_PATH}; manifest left unchanged"
        );
    }

    fs::write(&path, patched)
        .await
        .map_err(|e| Error::Write(format!("{ANDROID_MANIFEST_PATH}: {e}")))?;

    log::info!("AndroidManifest injected successfully");
    Ok(PatchOutcome::Applied)
}
