//! Sensor placement state, footprints and the coverage objective.

use super::terrain::Terrain;
use crate::error::CoverageError;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A grid cell, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relocation of one sensor to a new cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorMove {
    pub sensor: usize,
    pub to: Position,
}

/// Terrain, sensor positions and per-sensor coverage capacities.
///
/// Terrain and capacities are shared and never change during a run; only
/// the position list differs between states. Every transition returns a
/// new state.
///
/// A sensor at `(r, c)` with capacity `k` covers the square
/// `[r, r + k) x [c, c + k)`, clipped to the terrain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorState {
    terrain: Arc<Terrain>,
    positions: Vec<Position>,
    capacities: Arc<[usize]>,
}

impl SensorState {
    /// Creates a state from explicit positions.
    ///
    /// # Errors
    ///
    /// Fails when the number of positions and capacities differ or when a
    /// position lies outside the terrain.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_cover::coverage::{Position, SensorState, Terrain};
    ///
    /// let terrain = Terrain::new(vec![vec![1, 0, 1, 0]]).unwrap();
    /// let state = SensorState::new(terrain, vec![Position::new(0, 0)], vec![4usize]).unwrap();
    /// assert_eq!(state.objective(), 2);
    /// ```
    pub fn new(
        terrain: impl Into<Arc<Terrain>>,
        positions: Vec<Position>,
        capacities: impl Into<Arc<[usize]>>,
    ) -> Result<Self, CoverageError> {
        let terrain = terrain.into();
        let capacities = capacities.into();
        if positions.len() != capacities.len() {
            return Err(CoverageError::SensorCountMismatch {
                positions: positions.len(),
                capacities: capacities.len(),
            });
        }
        for (sensor, &position) in positions.iter().enumerate() {
            check_bounds(&terrain, sensor, position)?;
        }
        Ok(Self {
            terrain,
            positions,
            capacities,
        })
    }

    /// Places every sensor on an independent, uniformly random cell.
    pub fn randomized<R: Rng>(
        terrain: Arc<Terrain>,
        capacities: Arc<[usize]>,
        rng: &mut R,
    ) -> Self {
        let positions = (0..capacities.len())
            .map(|_| {
                Position::new(
                    rng.random_range(0..terrain.rows()),
                    rng.random_range(0..terrain.cols()),
                )
            })
            .collect();
        Self {
            terrain,
            positions,
            capacities,
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn capacities(&self) -> &[usize] {
        &self.capacities
    }

    pub fn sensor_count(&self) -> usize {
        self.positions.len()
    }

    /// The clipped footprint of `sensor`, row-major, regardless of terrain
    /// content.
    ///
    /// # Panics
    ///
    /// Panics if `sensor >= self.sensor_count()`.
    pub fn covered_cells(&self, sensor: usize) -> Vec<Position> {
        self.footprint(sensor).collect()
    }

    /// The part of the footprint of `sensor` that lies on signal cells.
    ///
    /// # Panics
    ///
    /// Panics if `sensor >= self.sensor_count()`.
    pub fn covered_signal_cells(&self, sensor: usize) -> Vec<Position> {
        self.footprint(sensor)
            .filter(|&p| self.terrain.is_signal(p))
            .collect()
    }

    /// Number of distinct signal cells covered by the union of all
    /// footprints. This is the score to maximize.
    pub fn objective(&self) -> usize {
        let mut covered = vec![false; self.terrain.len()];
        let mut count = 0;
        for sensor in 0..self.positions.len() {
            for cell in self.footprint(sensor) {
                let idx = self.terrain.index(cell);
                if !covered[idx] && self.terrain.is_signal(cell) {
                    covered[idx] = true;
                    count += 1;
                }
            }
        }
        count
    }

    /// In-bounds orthogonal neighbours of the sensor's cell, in the order
    /// left, right, up, down. Other sensors do not block a move.
    ///
    /// # Panics
    ///
    /// Panics if `sensor >= self.sensor_count()`.
    pub fn legal_moves(&self, sensor: usize) -> Vec<Position> {
        let Position { row, col } = self.positions[sensor];
        let mut moves = Vec::with_capacity(4);
        if col > 0 {
            moves.push(Position::new(row, col - 1));
        }
        if col + 1 < self.terrain.cols() {
            moves.push(Position::new(row, col + 1));
        }
        if row > 0 {
            moves.push(Position::new(row - 1, col));
        }
        if row + 1 < self.terrain.rows() {
            moves.push(Position::new(row + 1, col));
        }
        moves
    }

    /// Every single-step relocation available from this state, grouped by
    /// sensor.
    pub fn moves(&self) -> Vec<SensorMove> {
        (0..self.positions.len())
            .flat_map(|sensor| {
                self.legal_moves(sensor)
                    .into_iter()
                    .map(move |to| SensorMove { sensor, to })
            })
            .collect()
    }

    /// Returns a copy of this state with `sensor` placed at `to`.
    ///
    /// # Errors
    ///
    /// Fails for an unknown sensor index or an off-grid target.
    pub fn apply_move(&self, sensor: usize, to: Position) -> Result<Self, CoverageError> {
        if sensor >= self.positions.len() {
            return Err(CoverageError::UnknownSensor {
                sensor,
                count: self.positions.len(),
            });
        }
        check_bounds(&self.terrain, sensor, to)?;
        Ok(self.with_positions(|positions| positions[sensor] = to))
    }

    /// Applies a [`SensorMove`].
    pub fn apply(&self, mv: SensorMove) -> Result<Self, CoverageError> {
        self.apply_move(mv.sensor, mv.to)
    }

    /// Copy-on-write edit of the position list. Callers keep positions in
    /// bounds.
    pub(crate) fn with_positions(&self, edit: impl FnOnce(&mut Vec<Position>)) -> Self {
        let mut positions = self.positions.clone();
        edit(&mut positions);
        Self {
            terrain: Arc::clone(&self.terrain),
            positions,
            capacities: Arc::clone(&self.capacities),
        }
    }

    fn footprint(&self, sensor: usize) -> impl Iterator<Item = Position> {
        let Position { row, col } = self.positions[sensor];
        let k = self.capacities[sensor];
        let row_end = row.saturating_add(k).min(self.terrain.rows());
        let col_end = col.saturating_add(k).min(self.terrain.cols());
        (row..row_end).flat_map(move |r| (col..col_end).map(move |c| Position::new(r, c)))
    }
}

fn check_bounds(terrain: &Terrain, sensor: usize, position: Position) -> Result<(), CoverageError> {
    if terrain.contains(position) {
        Ok(())
    } else {
        Err(CoverageError::OutOfBounds {
            sensor,
            position,
            rows: terrain.rows(),
            cols: terrain.cols(),
        })
    }
}
