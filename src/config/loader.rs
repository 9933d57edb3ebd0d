//! Config domain: RON loader for the popup settings file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::PopupConfigFile;

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the popup settings file from disk.
pub fn load_settings_file(path: &Path) -> Result<PopupConfigFile, SettingsLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| SettingsLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| SettingsLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}
