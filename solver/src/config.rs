use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    render::DEFAULT_PATH_THICKNESS,
    solve::SolveOptions,
    util::DEFAULT_THRESHOLD,
};

/// Settings shared by the single-file and the batch driver.
///
/// Every field is optional in the JSON file; missing ones fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Pixels brighter than this are open space
    pub threshold: u8,
    /// Width of the drawn path, in pixels
    pub path_thickness: usize,
    /// Folder created inside the batch input folder for the results
    pub output_folder: String,
    /// Prepended to the input file name to name the result
    pub output_prefix: String,
    /// Accepted file extensions, compared case-insensitively
    pub extensions: Vec<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            path_thickness: DEFAULT_PATH_THICKNESS,
            output_folder: "solved_mazes".to_string(),
            output_prefix: "solved_".to_string(),
            extensions: ["png", "jpg", "jpeg", "bmp", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SolverConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_thickness == 0 {
            return Err(ConfigError::InvalidPathThickness(self.path_thickness));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        Ok(())
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            threshold: self.threshold,
            path_thickness: self.path_thickness,
        }
    }

    /// Whether the file has one of the accepted image extensions
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Where the result for `input` is written inside `output_dir`
    pub fn output_path(&self, input: &Path, output_dir: &Path) -> Option<PathBuf> {
        let name = input.file_name()?;
        let mut prefixed = OsString::from(&self.output_prefix);
        prefixed.push(name);
        Some(output_dir.join(prefixed))
    }
}
