use std::path::PathBuf;

/// An error type for solving a single maze.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Error when the border does not hold both a start and an end opening.
    #[error("Start or end point not found in the maze")]
    EndpointNotFound,
}

/// An error type for loading and validating the solver configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Error when the path would not be drawn at all.
    #[error("Path thickness must be at least 1, got {0}")]
    InvalidPathThickness(usize),

    /// Error when no image extension is accepted.
    #[error("At least one image extension must be configured")]
    NoExtensions,

    /// Error when the configuration file cannot be read.
    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error when the configuration file is not valid JSON for the config.
    #[error("Failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
