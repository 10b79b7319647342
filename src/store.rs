use crate::config::FormState;
use crate::error::{TireError, TireResult};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fixed key the form state is stored under.
pub const STATE_KEY: &str = "pressureGuideState";

/// Local key-value persistence for the form, one JSON file per key.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store in the platform config directory for this application.
    pub fn in_default_location() -> TireResult<Self> {
        let dirs = ProjectDirs::from("", "", env!("CARGO_PKG_NAME")).ok_or_else(|| {
            TireError::Config("Could not determine a home directory for saved state".to_string())
        })?;
        Ok(Self::in_dir(dirs.config_dir()))
    }

    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", STATE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the saved form. Never fails: anything unusable yields defaults.
    pub fn load(&self) -> FormState {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved state at {:?}, using defaults", self.path);
                return FormState::default();
            }
            Err(e) => {
                warn!("Failed to read saved state {:?}: {}", self.path, e);
                return FormState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => {
                debug!("Restored state from {:?}", self.path);
                state
            }
            Err(e) => {
                warn!("Failed to parse saved state, using defaults: {}", e);
                FormState::default()
            }
        }
    }

    pub fn save(&self, state: &FormState) -> TireResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        info!("Saved state to {:?}", self.path);
        Ok(())
    }

    /// Forgets the saved form. A store that was never written is already clear.
    pub fn clear(&self) -> TireResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed saved state {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
