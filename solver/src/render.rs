use image::{Rgb, RgbImage};

use crate::{
    find::{MapStorage, MapTrait},
    grid::CellStorage,
    GridMap, Point,
};

pub const WALL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const OPEN_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const EXPLORED_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const PATH_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

pub const DEFAULT_PATH_THICKNESS: usize = 3;

/// Dilates a mask with a `ksize × ksize` square kernel anchored at `ksize / 2`.
///
/// A marked cell `q` marks every cell whose row and column lie in
/// `q - (ksize - 1 - ksize / 2) ..= q + ksize / 2`, clipped to the map. Cells outside the map
/// never contribute.
pub fn dilate_square(map: &GridMap, mask: &CellStorage<bool>, ksize: usize) -> CellStorage<bool> {
    let mut dilated = map.create_storage::<bool>();
    if ksize == 0 || map.is_empty() {
        return dilated;
    }

    let anchor = ksize / 2;
    let before = ksize - 1 - anchor;

    for row in 0..map.rows {
        for col in 0..map.columns {
            if !mask.get(Point { row, col }) {
                continue;
            }

            let rows = row.saturating_sub(before)..=(row + anchor).min(map.rows - 1);
            for r in rows {
                let cols = col.saturating_sub(before)..=(col + anchor).min(map.columns - 1);
                for c in cols {
                    *dilated.get_mut(Point { row: r, col: c }) = true;
                }
            }
        }
    }

    dilated
}

/// Draws the solved maze: open cells white, walls black, explored cells red and the path green,
/// thickened to `path_thickness` cells.
///
/// The layers are painted in that order so the path stays visible on top of explored cells.
pub fn render_solution(
    map: &GridMap,
    path: &[Point],
    explored: &[Point],
    path_thickness: usize,
) -> RgbImage {
    let mut img = RgbImage::from_fn(map.columns as u32, map.rows as u32, |x, y| {
        if map.is_passable(Point {
            row: y as usize,
            col: x as usize,
        }) {
            OPEN_COLOR
        } else {
            WALL_COLOR
        }
    });

    for &p in explored {
        if map.is_passable(p) {
            img.put_pixel(p.col as u32, p.row as u32, EXPLORED_COLOR);
        }
    }

    let mut mask = map.create_storage::<bool>();
    for &p in path.iter().filter(|p| map.is_valid(**p)) {
        *mask.get_mut(p) = true;
    }
    let thick_path = dilate_square(map, &mask, path_thickness);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if thick_path.get(Point {
            row: y as usize,
            col: x as usize,
        }) {
            *pixel = PATH_COLOR;
        }
    }

    img
}

#[cfg(test)]
mod test {

    use super::*;

    fn marked(map: &GridMap, storage: &CellStorage<bool>) -> Vec<Point> {
        let mut points = Vec::new();
        for row in 0..map.rows {
            for col in 0..map.columns {
                if storage.get(Point { row, col }) {
                    points.push(Point { row, col });
                }
            }
        }
        points
    }

    #[test]
    fn test_dilate_odd_kernel_is_centered() {
        let map = GridMap::new(5, 5);
        let mut mask = map.create_storage();
        *mask.get_mut(Point { row: 2, col: 2 }) = true;

        let dilated = dilate_square(&map, &mask, 3);
        let points = marked(&map, &dilated);
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| (1..=3).contains(&p.row) && (1..=3).contains(&p.col)));
    }

    #[test]
    fn test_dilate_even_kernel_leans_forward() {
        let map = GridMap::new(6, 6);
        let mut mask = map.create_storage();
        *mask.get_mut(Point { row: 2, col: 2 }) = true;

        let dilated = dilate_square(&map, &mask, 4);
        let points = marked(&map, &dilated);
        assert_eq!(points.len(), 16);
        assert!(points.iter().all(|p| (1..=4).contains(&p.row) && (1..=4).contains(&p.col)));
    }

    #[test]
    fn test_dilate_clips_at_border() {
        let map = GridMap::new(3, 3);
        let mut mask = map.create_storage();
        *mask.get_mut(Point { row: 0, col: 0 }) = true;

        let dilated = dilate_square(&map, &mask, 3);
        assert_eq!(
            marked(&map, &dilated),
            vec![
                Point { row: 0, col: 0 },
                Point { row: 0, col: 1 },
                Point { row: 1, col: 0 },
                Point { row: 1, col: 1 },
            ]
        );
    }

    #[test]
    fn test_dilate_size_one_is_identity() {
        let map = GridMap::new(3, 3);
        let mut mask = map.create_storage();
        *mask.get_mut(Point { row: 1, col: 2 }) = true;

        let dilated = dilate_square(&map, &mask, 1);
        assert_eq!(marked(&map, &dilated), vec![Point { row: 1, col: 2 }]);
    }

    #[test]
    fn test_layers() {
        let map: GridMap = [
            "X XXXXX", //
            "X     X",
            "XXXXX X",
            "X     X",
            "X XXXXX",
        ]
        .join("\n")
        .parse()
        .unwrap();
        let path = vec![Point { row: 0, col: 1 }, Point { row: 1, col: 1 }];
        let explored = vec![
            Point { row: 0, col: 1 },
            Point { row: 1, col: 1 },
            Point { row: 1, col: 2 },
            Point { row: 1, col: 3 },
            Point { row: 1, col: 4 },
            // a wall never turns red, even if it is handed in as explored
            Point { row: 2, col: 0 },
        ];

        let img = render_solution(&map, &path, &explored, 1);
        assert_eq!(img.dimensions(), (7, 5));
        assert_eq!(*img.get_pixel(0, 0), WALL_COLOR);
        assert_eq!(*img.get_pixel(1, 0), PATH_COLOR);
        assert_eq!(*img.get_pixel(1, 1), PATH_COLOR);
        assert_eq!(*img.get_pixel(4, 1), EXPLORED_COLOR);
        assert_eq!(*img.get_pixel(5, 1), OPEN_COLOR);
        assert_eq!(*img.get_pixel(1, 3), OPEN_COLOR);
        assert_eq!(*img.get_pixel(0, 2), WALL_COLOR);
    }

    #[test]
    fn test_thick_path_covers_walls_and_explored() {
        let map: GridMap = [
            "X XXX", //
            "X   X",
            "XXX X",
        ]
        .join("\n")
        .parse()
        .unwrap();
        let path = vec![Point { row: 0, col: 1 }, Point { row: 1, col: 1 }];
        let explored = vec![Point { row: 1, col: 2 }, Point { row: 1, col: 3 }];

        let img = render_solution(&map, &path, &explored, 3);
        // the wall next to the path is painted over
        assert_eq!(*img.get_pixel(0, 0), PATH_COLOR);
        assert_eq!(*img.get_pixel(2, 2), PATH_COLOR);
        // explored cell inside the dilated path turns green, the one outside stays red
        assert_eq!(*img.get_pixel(2, 1), PATH_COLOR);
        assert_eq!(*img.get_pixel(3, 1), EXPLORED_COLOR);
        assert_eq!(*img.get_pixel(4, 2), WALL_COLOR);
    }

    #[test]
    fn test_render_is_deterministic() {
        let map = GridMap::new(4, 4);
        let path = vec![Point { row: 0, col: 0 }, Point { row: 0, col: 1 }];
        let explored = vec![Point { row: 1, col: 1 }, Point { row: 3, col: 3 }];

        let a = render_solution(&map, &path, &explored, DEFAULT_PATH_THICKNESS);
        let b = render_solution(&map, &path, &explored, DEFAULT_PATH_THICKNESS);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
