//! Solves mazes drawn as images: open space is white, walls are black and the two openings in
//! the border are the entrance and the exit.
//!
//! The pipeline binarizes the picture into a [`GridMap`], locates the openings, runs a
//! breadth-first search, reconstructs the shortest path and renders it on top of the explored
//! cells.

pub mod config;
pub mod driver;
pub mod endpoints;
pub mod error;
pub mod find;
pub mod grid;
pub mod path;
pub mod render;
pub mod solve;
pub mod util;

pub use config::SolverConfig;
pub use error::{ConfigError, SolveError};
pub use find::{find_path, MapStorage, MapTrait, PathFinder, PathFinderState, SearchResult};
pub use grid::{Cell, CellStorage, GridMap, Point};
pub use solve::{solve_grid, solve_image, SolveOptions, SolveOutcome, Solution};
