use serde::Serialize;

use crate::geom::Position;

/// A fixed-size, row-major 2D grid.
///
/// Dimensions are set at construction and never change; only cell contents
/// are mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f` for every position in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Position) -> T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Position::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// True if `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Borrow the cell at `pos`.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Mutably borrow the cell at `pos`.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Position::new(i as i32 % width, i as i32 / width), c))
    }

    /// First position (row-major) whose cell satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Position> {
        self.iter().find(|(_, c)| pred(c)).map(|(p, _)| p)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_access() {
        let mut grid = Grid::filled(3, 2, 0u8);
        assert!(grid.in_bounds(Position::new(2, 1)));
        assert!(!grid.in_bounds(Position::new(3, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        *grid.get_mut(Position::new(1, 1)).unwrap() = 7;
        assert_eq!(grid.get(Position::new(1, 1)), Some(&7));
        assert_eq!(grid.get(Position::new(5, 5)), None);
    }

    #[test]
    fn find_scans_row_major() {
        let grid = Grid::from_fn(4, 3, |p| p.x == 2 || p.y == 2);
        assert_eq!(grid.find(|c| *c), Some(Position::new(2, 0)));
    }

    #[test]
    fn iter_yields_positions_in_order() {
        let grid = Grid::filled(2, 2, ());
        let positions: Vec<_> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
    }
}
