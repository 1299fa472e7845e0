//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::io::file::DEFAULT_FILE_NAME;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the file dialogs open in.
    pub last_directory: Option<PathBuf>,
    /// File name suggested when exporting.
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_directory: None,
            export_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Where the settings file lives; falls back to the working directory.
    pub fn default_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", "ProjectTracker") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(".").join(SETTINGS_FILE),
        }
    }

    /// Load settings from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no settings file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt settings file");
                Self::default()
            }
        }
    }

    /// Write settings to `path`. Failures are logged, never fatal.
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize settings");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create config dir");
                return;
            }
        }
        if let Err(e) = std::fs::write(path, json) {
            warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }

    /// Remember the directory of a file the user just picked.
    pub fn remember_file(&mut self, file: &Path) {
        if let Some(dir) = file.parent() {
            self.last_directory = Some(dir.to_path_buf());
        }
    }
}
