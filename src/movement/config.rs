//! Loader for the movement tuning RON file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. Missing fields fall back to their defaults.
pub fn parse_tuning(source: &str, file: &str) -> Result<MovementTuning, ConfigLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_tuning_file(path: &Path) -> Result<MovementTuning, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Replace the default tuning with the file contents, keeping defaults on failure.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("Loaded movement tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }

    for issue in tuning.validate() {
        warn!("Suspicious movement tuning: {}", issue);
    }
}
