//! Content domain: RON loader for session defaults.

use ron::Options;
use std::fmt;
use std::fs;
use std::path::Path;

use super::data::SessionDefaults;

/// Error type for defaults loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load and validate session defaults from a RON file.
pub fn load_session_defaults(path: &Path) -> Result<SessionDefaults, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let defaults: SessionDefaults =
        ron_options()
            .from_str(&contents)
            .map_err(|e| ContentLoadError {
                file: file_name.clone(),
                message: format!("Parse error: {}", e),
            })?;

    defaults.validate().map_err(|message| ContentLoadError {
        file: file_name,
        message,
    })?;

    Ok(defaults)
}
