//! Loader for the locomotion tuning RON file.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::LocomotionTuning;

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning text. `file` only labels errors.
pub fn parse_tuning(contents: &str, file: &str) -> Result<LocomotionTuning, TuningLoadError> {
    let tuning: LocomotionTuning = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let errors = tuning.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(TuningLoadError {
            file: file.to_string(),
            message: format!("Invalid tuning: {}", details.join("; ")),
        });
    }

    Ok(tuning)
}

/// Load the tuning file at `path`.
pub fn load_tuning(path: &Path) -> Result<LocomotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}
