use std::time::{Duration, Instant};

use image::{GrayImage, RgbImage};
use log::{debug, info};

use crate::{
    endpoints::find_start_end,
    error::SolveError,
    find::find_path,
    path::reconstruct_path,
    render::{render_solution, DEFAULT_PATH_THICKNESS},
    util::{binarize, DEFAULT_THRESHOLD},
    GridMap, Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub threshold: u8,
    pub path_thickness: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            path_thickness: DEFAULT_PATH_THICKNESS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub start: Point,
    pub goal: Point,
    pub path: Vec<Point>,
    pub explored: Vec<Point>,
    pub image: RgbImage,
    /// Time spent searching and reconstructing, rendering excluded
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved(Solution),
    /// Both openings exist but the search recorded no route between them, which includes the
    /// openings being the same cell
    NoSolution {
        start: Point,
        goal: Point,
        explored: usize,
    },
}

/// Solves an already binarized maze
pub fn solve_grid(map: &GridMap, path_thickness: usize) -> Result<SolveOutcome, SolveError> {
    let (start, goal) = find_start_end(map)?;

    debug!("Solving the maze from {} to {}", start, goal);
    let started = Instant::now();

    let res = find_path(map, start, goal);
    let path = if res.goal_reached() && !res.predecessors.is_empty() {
        reconstruct_path(&res.predecessors, start, goal)
    } else {
        Vec::new()
    };
    let elapsed = started.elapsed();

    if path.is_empty() {
        return Ok(SolveOutcome::NoSolution {
            start,
            goal,
            explored: res.explored.len(),
        });
    }

    info!(
        "Solved in {:.2} seconds, path of {} cells, {} cells explored",
        elapsed.as_secs_f64(),
        path.len(),
        res.explored.len()
    );

    let image = render_solution(map, &path, &res.explored, path_thickness);

    Ok(SolveOutcome::Solved(Solution {
        start,
        goal,
        path,
        explored: res.explored,
        image,
        elapsed,
    }))
}

/// Binarizes a grayscale maze picture and solves it
pub fn solve_image(img: &GrayImage, options: &SolveOptions) -> Result<SolveOutcome, SolveError> {
    let map = binarize(img, options.threshold);
    solve_grid(&map, options.path_thickness)
}
