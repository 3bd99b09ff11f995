use crate::find::{MapStorage, MapTrait, NodeReference};
use std::{fmt::Display, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Blocked,
    Passable,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Blocked
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cell::Blocked => "X",
                Cell::Passable => " ",
            }
        )
    }
}

impl TryFrom<char> for Cell {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | '#' => Ok(Cell::Blocked),
            ' ' | '.' => Ok(Cell::Passable),
            _ => Err(anyhow::anyhow!("Invalid cell: {:?}", c)),
        }
    }
}

/// A MapTrait implementation that uses a rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl GridMap {
    /// Creates a map where every cell is passable
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![vec![Cell::Passable; columns]; rows],
        }
    }

    pub fn get(&self, point: Point) -> Cell {
        self.cells[point.row][point.col]
    }

    pub fn is_passable(&self, point: Point) -> bool {
        self.is_valid(point) && self.get(point) == Cell::Passable
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Scales the map by the given factor, i.e. to make it twice as large, pass 2.
    /// Interpolates the cells by repeating the existing cells in the new grid.
    /// Used by the benchmarks to grow one maze into larger ones.
    pub fn scale_up(&mut self, factor: usize) {
        let mut new_cells = vec![vec![Cell::default(); self.columns * factor]; self.rows * factor];

        for row in 0..self.rows {
            for col in 0..self.columns {
                for r in 0..factor {
                    for c in 0..factor {
                        new_cells[row * factor + r][col * factor + c] = self.cells[row][col];
                    }
                }
            }
        }

        self.rows *= factor;
        self.columns *= factor;
        self.cells = new_cells;
    }
}

/// Parses the textual form produced by `Display`: `X` (or `#`) is a wall, a space (or `.`) is
/// open. All lines must have the same length.
impl FromStr for GridMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .lines()
            .map(|line| line.chars().map(Cell::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let columns = cells.first().map_or(0, Vec::len);
        if let Some(row) = cells.iter().position(|r| r.len() != columns) {
            return Err(anyhow::anyhow!(
                "Row {} has {} cells, expected {}",
                row,
                cells[row].len(),
                columns
            ));
        }

        Ok(GridMap {
            rows: cells.len(),
            columns,
            cells,
        })
    }
}

/// A MapStorage that uses a rectangular grid of cells (a vec in a vec)
#[derive(Debug, Clone)]
pub struct CellStorage<T>(Vec<Vec<T>>);

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn is_valid(&self, node: Self::Reference) -> bool {
        self.0.get(node.row).is_some_and(|row| node.col < row.len())
    }

    fn get(&self, node: Self::Reference) -> T {
        self.0[node.row][node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.0[node.row][node.col]
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl NodeReference for Point {}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Display for GridMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl MapTrait for GridMap {
    type Reference = Point;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.rows && node.col < self.columns
    }

    /// Right, down, left, up
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = Self::Reference> {
        let mut points = Vec::with_capacity(4);

        if node.col + 1 < self.columns {
            points.push(Point {
                row: node.row,
                col: node.col + 1,
            });
        }
        if node.row + 1 < self.rows {
            points.push(Point {
                row: node.row + 1,
                col: node.col,
            });
        }
        if node.col > 0 {
            points.push(Point {
                row: node.row,
                col: node.col - 1,
            });
        }
        if node.row > 0 {
            points.push(Point {
                row: node.row - 1,
                col: node.col,
            });
        }

        // filter to only keep open cells
        points.retain(|p| self.cells[p.row][p.col] == Cell::Passable);

        points.into_iter()
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage(vec![vec![Default::default(); self.columns]; self.rows])
    }
}
