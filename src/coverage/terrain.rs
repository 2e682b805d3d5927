//! Immutable binary terrain grid.

use super::state::Position;
use crate::error::CoverageError;
use std::str::FromStr;

/// A rectangular grid of signal-bearing (`1`) and non-signal (`0`) cells.
///
/// Stored row-major. Dimensions are at least 1x1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terrain {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Terrain {
    /// Builds a terrain from rows of `0`/`1` values.
    ///
    /// # Errors
    ///
    /// Rejects an empty grid, rows of differing length, and any value
    /// other than `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_cover::coverage::Terrain;
    ///
    /// let terrain = Terrain::new(vec![vec![1, 0, 1, 0]]).unwrap();
    /// assert_eq!(terrain.cols(), 4);
    /// assert_eq!(terrain.signal_count(), 2);
    /// ```
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Self, CoverageError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(CoverageError::EmptyTerrain);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(CoverageError::RaggedTerrain {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    other => {
                        return Err(CoverageError::InvalidCell {
                            row: r,
                            col: c,
                            value: other.to_string(),
                        })
                    }
                }
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Builds a terrain from row-major bits. `rows * cols` must equal
    /// `cells.len()` and both dimensions must be non-zero.
    pub(crate) fn from_bits(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && rows * cols == cells.len());
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Whether the cell at `pos` must be covered. Off-grid cells are not.
    #[inline]
    pub fn is_signal(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)]
    }

    /// Number of signal-bearing cells; the upper bound of any objective.
    pub fn signal_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major index of an in-bounds position.
    #[inline]
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

impl FromStr for Terrain {
    type Err = CoverageError;

    /// Parses one row per line, cells separated by whitespace. Blank lines
    /// are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Vec::new();
        for (r, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut row = Vec::new();
            for (c, token) in line.split_whitespace().enumerate() {
                let value = match token {
                    "0" => 0,
                    "1" => 1,
                    other => {
                        return Err(CoverageError::InvalidCell {
                            row: r,
                            col: c,
                            value: other.to_string(),
                        })
                    }
                };
                row.push(value);
            }
            grid.push(row);
        }
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let t = Terrain::new(vec![vec![1, 1, 0], vec![0, 1, 0]]).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.signal_count(), 3);
        assert!(t.is_signal(Position::new(0, 1)));
        assert!(!t.is_signal(Position::new(1, 2)));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Terrain::new(vec![]), Err(CoverageError::EmptyTerrain));
        assert_eq!(Terrain::new(vec![vec![]]), Err(CoverageError::EmptyTerrain));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = Terrain::new(vec![vec![1, 0], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            CoverageError::RaggedTerrain {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_non_binary_rejected() {
        let err = Terrain::new(vec![vec![1, 2]]).unwrap_err();
        assert!(matches!(err, CoverageError::InvalidCell { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_off_grid_is_not_signal() {
        let t = Terrain::new(vec![vec![1]]).unwrap();
        assert!(!t.contains(Position::new(0, 1)));
        assert!(!t.is_signal(Position::new(1, 0)));
    }

    #[test]
    fn test_parse() {
        let t: Terrain = "1 0 1\n\n0 0 1\n".parse().unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.signal_count(), 3);
    }

    #[test]
    fn test_parse_bad_token() {
        let err = "1 x".parse::<Terrain>().unwrap_err();
        assert!(matches!(err, CoverageError::InvalidCell { col: 1, .. }));
    }

    #[test]
    fn test_all_zero_terrain_is_valid() {
        let t = Terrain::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
        assert_eq!(t.signal_count(), 0);
    }
}
