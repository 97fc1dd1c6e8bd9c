//! Plan-Id Cache
//!
//! Devices provisioned by the same app should share a plan id, so the id
//! assigned on the first successful flow is cached and reused until
//! explicitly cleared (see electricimp.com/docs/manufacturing/planids/).
//! Backed by a small JSON file in the app data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedPlan {
    plan_id: String,
}

/// File-backed cache for the SDK-assigned plan id.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Create a store persisting to `path`. The file is created lazily on
    /// the first [`store`](Self::store).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached plan id, if any.
    ///
    /// A missing file is an empty cache. A malformed file is treated the
    /// same way, with a warning; the cache is not a source of truth.
    pub async fn load(&self) -> Result<Option<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::Io(format!(
                    "plan cache read failed for {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_str::<CachedPlan>(&contents) {
            Ok(cached) => Ok(Some(cached.plan_id)),
            Err(e) => {
                log::warn!(
                    "ignoring malformed plan cache {}: {e}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    /// Persist `plan_id`, replacing any previous value.
    pub async fn store(&self, plan_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Io(format!("plan cache dir creation failed: {e}"))
            })?;
        }

        let json = serde_json::to_string(&CachedPlan {
            plan_id: plan_id.to_string(),
        })?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            Error::Io(format!(
                "plan cache write failed for {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Remove the cached plan id. Clearing an empty cache is a no-op.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(format!(
                "plan cache clear failed for {}: {e}",
                self.path.display()
            ))),
        }
    }
}
