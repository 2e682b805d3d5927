//! Sensor placement as a Bees Algorithm and Simulated Annealing problem.

use super::state::{Position, SensorMove, SensorState};
use super::terrain::Terrain;
use crate::bees::BeesProblem;
use crate::error::CoverageError;
use crate::sa::SaProblem;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;

const CLASSIC_TERRAIN: [[bool; 6]; 6] = {
    const O: bool = false;
    const I: bool = true;
    [
        [I, I, O, O, I, O],
        [I, O, O, I, I, I],
        [O, O, I, I, I, I],
        [I, I, I, I, I, I],
        [O, O, O, I, I, I],
        [I, I, I, I, O, O],
    ]
};
const CLASSIC_CAPACITIES: [usize; 4] = [3, 2, 2, 1];
const CLASSIC_START: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 4),
    Position::new(3, 4),
    Position::new(4, 2),
];

/// Place sensors of fixed capacities on a terrain so that as many signal
/// cells as possible are covered.
///
/// Scouts place every sensor uniformly at random. A neighbour of a site
/// moves `patch_size` distinct sensors one step each, every step taken
/// from the site's own positions. Annealing moves one sensor one step.
#[derive(Debug, Clone)]
pub struct SensorCoverage {
    terrain: Arc<Terrain>,
    capacities: Arc<[usize]>,
}

impl SensorCoverage {
    pub fn new(terrain: impl Into<Arc<Terrain>>, capacities: impl Into<Arc<[usize]>>) -> Self {
        Self {
            terrain: terrain.into(),
            capacities: capacities.into(),
        }
    }

    /// The 6x6 benchmark terrain with sensors of capacity 3, 2, 2 and 1.
    pub fn classic() -> Self {
        let cells = CLASSIC_TERRAIN.iter().flatten().copied().collect();
        Self::new(Terrain::from_bits(6, 6, cells), CLASSIC_CAPACITIES.to_vec())
    }

    /// The starting placement used with [`classic`](Self::classic) for
    /// annealing.
    pub fn classic_start() -> Vec<Position> {
        CLASSIC_START.to_vec()
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn capacities(&self) -> &[usize] {
        &self.capacities
    }

    /// A state with explicit sensor positions.
    pub fn state(&self, positions: Vec<Position>) -> Result<SensorState, CoverageError> {
        SensorState::new(
            Arc::clone(&self.terrain),
            positions,
            Arc::clone(&self.capacities),
        )
    }
}

impl BeesProblem for SensorCoverage {
    type Solution = SensorState;
    type Score = usize;

    fn scout<R: Rng>(&self, rng: &mut R) -> SensorState {
        SensorState::randomized(Arc::clone(&self.terrain), Arc::clone(&self.capacities), rng)
    }

    fn score(&self, state: &SensorState) -> usize {
        state.objective()
    }

    fn neighbor<R: Rng>(&self, site: &SensorState, patch_size: usize, rng: &mut R) -> SensorState {
        // Sensors on a 1x1 terrain cannot move and are never picked.
        let movable: Vec<(usize, Vec<Position>)> = (0..site.sensor_count())
            .map(|sensor| (sensor, site.legal_moves(sensor)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect();
        let amount = patch_size.min(movable.len());

        let relocations: Vec<(usize, Position)> =
            rand::seq::index::sample(rng, movable.len(), amount)
                .into_iter()
                .filter_map(|i| {
                    let (sensor, moves) = &movable[i];
                    moves.choose(rng).map(|&to| (*sensor, to))
                })
                .collect();

        site.with_positions(|positions| {
            for (sensor, to) in relocations {
                positions[sensor] = to;
            }
        })
    }

    fn dimension(&self) -> usize {
        self.capacities.len()
    }
}

impl SaProblem for SensorCoverage {
    type State = SensorState;
    type Action = SensorMove;

    fn value(&self, state: &SensorState) -> f64 {
        state.objective() as f64
    }

    fn actions(&self, state: &SensorState) -> Vec<SensorMove> {
        state.moves()
    }

    fn result(&self, state: &SensorState, mv: &SensorMove) -> SensorState {
        state.with_positions(|positions| positions[mv.sensor] = mv.to)
    }
}
