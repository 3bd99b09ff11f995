use image::{DynamicImage, GrayImage};

use crate::{Cell, GridMap};

/// Intensity a pixel has to exceed to be considered open space
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Turns a grayscale image into a grid: pixels brighter than `threshold` are passable, everything
/// else is a wall. Row `r`, column `c` of the grid is pixel `(x = c, y = r)`.
pub fn binarize(img: &GrayImage, threshold: u8) -> GridMap {
    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut cells = vec![vec![Cell::Blocked; width]; height];

    for (col, row, p) in img.enumerate_pixels() {
        cells[row as usize][col as usize] = if p.0[0] > threshold {
            Cell::Passable
        } else {
            Cell::Blocked
        };
    }

    GridMap {
        rows: height,
        columns: width,
        cells,
    }
}

/// Converts any decoded image to 8-bit luma before binarizing it
pub fn parse_img(img: &DynamicImage, threshold: u8) -> GridMap {
    binarize(&img.to_luma8(), threshold)
}
