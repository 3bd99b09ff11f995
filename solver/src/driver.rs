use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context};
use log::{error, info, warn};

use crate::{
    config::SolverConfig,
    error::SolveError,
    solve::{solve_image, SolveOutcome},
    Point,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Solved {
        output: PathBuf,
        path_length: usize,
        explored: usize,
    },
    NoSolution {
        start: Point,
        goal: Point,
    },
    EndpointNotFound,
    /// The image could not be read, decoded or written
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub input: PathBuf,
    pub status: ImageStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub reports: Vec<ImageReport>,
}

impl BatchSummary {
    fn count(&self, f: impl Fn(&ImageStatus) -> bool) -> usize {
        self.reports.iter().filter(|r| f(&r.status)).count()
    }

    pub fn solved(&self) -> usize {
        self.count(|s| matches!(s, ImageStatus::Solved { .. }))
    }

    pub fn unsolvable(&self) -> usize {
        self.count(|s| matches!(s, ImageStatus::NoSolution { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ImageStatus::EndpointNotFound | ImageStatus::Failed(_)))
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} images: {} solved, {} without solution, {} failed",
            self.reports.len(),
            self.solved(),
            self.unsolvable(),
            self.failed()
        )
    }
}

/// Decodes `input`, solves it and writes the rendered solution into `output_dir`.
///
/// Maze-level outcomes (no openings, no route) are reported in the returned status; only I/O and
/// decoding problems are errors.
pub fn solve_file(
    input: &Path,
    output_dir: &Path,
    config: &SolverConfig,
) -> anyhow::Result<ImageReport> {
    let name = input
        .file_name()
        .ok_or_else(|| anyhow!("{} is not a file", input.display()))?;
    info!("Processing: {}", name.to_string_lossy());

    let img = image::open(input)
        .with_context(|| format!("Failed to decode {}", input.display()))?
        .to_luma8();

    let status = match solve_image(&img, &config.solve_options()) {
        Err(SolveError::EndpointNotFound) => {
            error!("{} in {}", SolveError::EndpointNotFound, input.display());
            ImageStatus::EndpointNotFound
        }
        Ok(SolveOutcome::NoSolution { start, goal, .. }) => {
            warn!("No solution found for {}", input.display());
            ImageStatus::NoSolution { start, goal }
        }
        Ok(SolveOutcome::Solved(solution)) => {
            let output = config
                .output_path(input, output_dir)
                .ok_or_else(|| anyhow!("{} is not a file", input.display()))?;

            solution
                .image
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Solution saved as {}", output.display());

            ImageStatus::Solved {
                output,
                path_length: solution.path.len(),
                explored: solution.explored.len(),
            }
        }
    };

    Ok(ImageReport {
        input: input.to_path_buf(),
        status,
    })
}

/// Lists the supported images directly inside `folder`, sorted by name
pub fn list_images(folder: &Path, config: &SolverConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(folder)
        .with_context(|| format!("Failed to list {}", folder.display()))?
    {
        let path = entry?.path();
        if path.is_file() && config.is_supported(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

fn solve_entry(
    index: usize,
    total: usize,
    input: &Path,
    output_dir: &Path,
    config: &SolverConfig,
) -> ImageReport {
    let report = solve_file(input, output_dir, config).unwrap_or_else(|e| {
        error!("{:#}", e);
        ImageReport {
            input: input.to_path_buf(),
            status: ImageStatus::Failed(format!("{:#}", e)),
        }
    });

    if matches!(report.status, ImageStatus::Solved { .. }) {
        info!("Maze {}/{} solved", index + 1, total);
    }

    report
}

/// Solves every supported image in `folder`, writing results into the configured sub-folder.
///
/// A failing image is recorded in the summary and the batch moves on to the next one.
pub fn solve_folder(folder: &Path, config: &SolverConfig) -> anyhow::Result<BatchSummary> {
    if !folder.is_dir() {
        bail!("Folder '{}' does not exist", folder.display());
    }

    let images = list_images(folder, config)?;
    if images.is_empty() {
        warn!("No supported image files found in {}", folder.display());
        return Ok(BatchSummary::default());
    }

    let output_dir = folder.join(&config.output_folder);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let total = images.len();

    #[cfg(feature = "parallel")]
    let reports = {
        use rayon::prelude::*;
        images
            .par_iter()
            .enumerate()
            .map(|(i, input)| solve_entry(i, total, input, &output_dir, config))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let reports = images
        .iter()
        .enumerate()
        .map(|(i, input)| solve_entry(i, total, input, &output_dir, config))
        .collect();

    let summary = BatchSummary { reports };
    info!("{}", summary);
    Ok(summary)
}
