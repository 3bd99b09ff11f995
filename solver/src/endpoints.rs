use log::debug;

use crate::{error::SolveError, GridMap, Point};

/// Finds the two openings in the border of the maze.
///
/// The top and bottom rows are scanned first, the start being the last open cell of the top row
/// and the end the last open cell of the bottom row. If either is missing, the left and right
/// columns are scanned the same way, each open cell overwriting what was found before.
///
/// When an edge has several openings, the last one in scan order is used.
pub fn find_start_end(map: &GridMap) -> Result<(Point, Point), SolveError> {
    if map.is_empty() {
        return Err(SolveError::EndpointNotFound);
    }

    let last_row = map.rows - 1;
    let last_col = map.columns - 1;

    let mut start = None;
    let mut end = None;

    for col in 0..map.columns {
        let top = Point { row: 0, col };
        if map.is_passable(top) {
            start = Some(top);
        }
        let bottom = Point { row: last_row, col };
        if map.is_passable(bottom) {
            end = Some(bottom);
        }
    }

    if let (Some(start), Some(end)) = (start, end) {
        debug!("Found openings in top and bottom rows: {} -> {}", start, end);
        return Ok((start, end));
    }

    for row in 0..map.rows {
        let left = Point { row, col: 0 };
        if map.is_passable(left) {
            start = Some(left);
        }
        let right = Point { row, col: last_col };
        if map.is_passable(right) {
            end = Some(right);
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => {
            debug!("Found openings on the border: {} -> {}", start, end);
            Ok((start, end))
        }
        _ => Err(SolveError::EndpointNotFound),
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn parse(rows: &[&str]) -> GridMap {
        rows.join("\n").parse().unwrap()
    }

    #[test]
    fn test_last_opening_wins() {
        let map = parse(&[
            "X  X", //
            "X  X",
            "X  X",
            "X XX",
        ]);

        let (start, end) = find_start_end(&map).unwrap();
        assert_eq!(start, Point { row: 0, col: 2 });
        assert_eq!(end, Point { row: 3, col: 1 });
    }

    #[test]
    fn test_falls_back_to_side_columns() {
        let map = parse(&[
            "XXXX", //
            "   X",
            "X   ",
            "XXXX",
        ]);

        let (start, end) = find_start_end(&map).unwrap();
        assert_eq!(start, Point { row: 1, col: 0 });
        assert_eq!(end, Point { row: 2, col: 3 });
    }

    #[test]
    fn test_side_scan_overwrites_row_match() {
        // the top opening is found first but the left column scan replaces it
        let map = parse(&[
            "X XX", //
            "   X",
            "X   ",
            "XXXX",
        ]);

        let (start, end) = find_start_end(&map).unwrap();
        assert_eq!(start, Point { row: 1, col: 0 });
        assert_eq!(end, Point { row: 2, col: 3 });
    }

    #[test]
    fn test_keeps_row_match_without_side_opening() {
        let map = parse(&[
            "X XX", //
            "X  X",
            "X   ",
            "XXXX",
        ]);

        let (start, end) = find_start_end(&map).unwrap();
        assert_eq!(start, Point { row: 0, col: 1 });
        assert_eq!(end, Point { row: 2, col: 3 });
    }

    #[test]
    fn test_no_openings() {
        let map = parse(&[
            "XXXX", //
            "X  X",
            "XXXX",
        ]);
        assert_eq!(find_start_end(&map), Err(SolveError::EndpointNotFound));
    }

    #[test]
    fn test_only_one_opening() {
        let map = parse(&[
            "X XX", //
            "X  X",
            "XXXX",
        ]);
        assert_eq!(find_start_end(&map), Err(SolveError::EndpointNotFound));
    }

    #[test]
    fn test_empty_map() {
        let map = GridMap::new(0, 0);
        assert_eq!(find_start_end(&map), Err(SolveError::EndpointNotFound));
    }

    #[test]
    fn test_single_row_map() {
        let map = parse(&["X X"]);
        let (start, end) = find_start_end(&map).unwrap();
        assert_eq!(start, Point { row: 0, col: 1 });
        assert_eq!(end, start);
    }
}
