use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub const REMOVAL_SCRIPT_NAME: &str = "RemoveFirewallRules.ps1";
pub const POWERSHELL: &str = "powershell.exe";

/// Source of the bundled removal script. Abstracted so tests can
/// substitute known contents without touching the embedded bytes.
pub trait AssetProvider {
    fn removal_script(&self) -> &[u8];
}

/// Script compiled into the binary at build time.
pub struct EmbeddedAssets;

impl AssetProvider for EmbeddedAssets {
    fn removal_script(&self) -> &[u8] {
        include_bytes!("../assets/RemoveFirewallRules.ps1")
    }
}

/// Removal script materialized on disk. Deleting the file is tied to
/// `Drop` so it happens on every exit path, including interpreter
/// failures.
pub struct TempScript {
    path: PathBuf,
}

impl TempScript {
    /// Writes `contents` to `<dir>/RemoveFirewallRules.ps1`, deleting any
    /// stale file of that name first.
    pub fn materialize(dir: &Path, contents: &[u8]) -> Result<Self> {
        let path = dir.join(REMOVAL_SCRIPT_NAME);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        fs::write(&path, contents)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempScript {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            debug!(path = %self.path.display(), error = %e, "failed to delete removal script");
        }
    }
}
