//! Main-Activity Source Patcher
//!
//! Wires the BlinkUp controller into the generated `MainActivity.java`: two
//! extra imports after the stock Cordova import, and an `onActivityResult`
//! override injected at the class declaration so the SDK sees activity
//! results.
//!
//! The class-declaration anchor assumes the generator's exact formatting (the
//! declaration line followed by the opening brace on its own line). That is a
//! documented precondition of the generated source, not something this
//! patcher tries to parse.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Error, Result};
use crate::hooks::{BuildContext, PatchOutcome, PatchSpec};

/// Project configuration descriptor holding the application identifier.
pub const CONFIG_DESCRIPTOR: &str = "tauri.conf.json";

/// Root of the generated Android source tree, relative to the project root.
pub const ANDROID_SRC_ROOT: &str = "platforms/android/src";

const MAIN_ACTIVITY_FILE: &str = "MainActivity.java";

const IMPORT_ANCHOR: &str = "import org.apache.cordova.*;";

/// Import block after injection; doubles as the idempotency marker.
const IMPORT_INJECTION: &str = "import org.apache.cordova.*;\n\
                                import android.content.Intent;\n\
                                import com.electricimp.blinkup.BlinkupController;";

/// Class declaration as emitted by the generator, declaration line plus
/// opening brace.
const CLASS_ANCHOR: &str = "public class MainActivity extends CordovaActivity\n{";

const DEFAULT_TEMPLATE: &str = include_str!("../../assets/main_activity_inject.txt");

/// Source block injected at the class declaration.
///
/// The default template re-emits the class declaration followed by the
/// `onActivityResult` override; pass a custom template to override the
/// injected body.
#[derive(Debug, Clone)]
pub struct ActivityPatch {
    pub template: Cow<'static, str>,
}

impl Default for ActivityPatch {
    fn default() -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }
}

/// Path of the generated main activity for a reverse-domain application
/// identifier (`com.example.app` → `platforms/android/src/com/example/app/MainActivity.java`),
/// relative to the project root.
pub fn main_activity_path(identifier: &str) -> PathBuf {
    Path::new(ANDROID_SRC_ROOT)
        .join(identifier.replace('.', "/"))
        .join(MAIN_ACTIVITY_FILE)
}

/// Inject the BlinkUp wiring into the generated main activity.
///
/// No-ops when the build does not target Android. The application identifier
/// is read from the project's configuration descriptor; missing anchors in
/// the source file are warned about and skipped, preserving the legacy
/// behavior of the hook.
pub async fn inject_main_activity(
    ctx: &BuildContext,
    patch: &ActivityPatch,
) -> Result<PatchOutcome> {
    if !ctx.targets_android() {
        return Ok(PatchOutcome::SkippedPlatform);
    }

    let identifier = read_app_identifier(ctx).await?;
    let relative = main_activity_path(&identifier);
    let relative_display = relative.display().to_string();
    let path = ctx.resolve(&relative);

    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::Read(format!("{relative_display}: {e}")))?;

    if contents.contains(IMPORT_INJECTION) {
        log::info!("MainActivity already injected");
        return Ok(PatchOutcome::AlreadyApplied);
    }

    let (result, found) = PatchSpec::new(IMPORT_ANCHOR, IMPORT_INJECTION).apply(&contents);
    if !found {
        log::warn!("import anchor not found in {relative_display}; imports not injected");
    }

    let (result, found) =
        PatchSpec::new(CLASS_ANCHOR, patch.template.as_ref()).apply(&result);
    if !found {
        log::warn!(
            "class declaration anchor not found in {relative_display}; activity-result wiring not injected"
        );
    }

    fs::write(&path, result)
        .await
        .map_err(|e| Error::Write(format!("{relative_display}: {e}")))?;

    log::info!("MainActivity injected successfully");
    Ok(PatchOutcome::Applied)
}

/// Read the reverse-domain application identifier from the configuration
/// descriptor.
async fn read_app_identifier(ctx: &BuildContext) -> Result<String> {
    let path = ctx.resolve(CONFIG_DESCRIPTOR);
    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::Read(format!("{CONFIG_DESCRIPTOR}: {e}")))?;

    let descriptor: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| Error::Parse(format!("{CONFIG_DESCRIPTOR}: {e}")))?;

    descriptor
        .get("identifier")
        .and_then(|v| v.as_str())
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::Parse(format!("{CONFIG_DESCRIPTOR}: missing application identifier")))
}
