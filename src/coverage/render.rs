//! Printable coverage overlay.

use super::state::{Position, SensorState};
use super::terrain::Terrain;
use std::fmt;

/// What a single overlay cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCell {
    /// Signal cell nobody covers (`-`).
    Uncovered,
    /// Non-signal cell nobody covers (`X`).
    Barren,
    /// Non-signal cell inside exactly one footprint (`#`).
    Wasted,
    /// Cell last painted by this sensor index. A non-signal cell shows an
    /// index once a second footprint covers it.
    Sensor(usize),
}

impl fmt::Display for OverlayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayCell::Uncovered => f.write_str("-"),
            OverlayCell::Barren => f.write_str("X"),
            OverlayCell::Wasted => f.write_str("#"),
            OverlayCell::Sensor(i) => write!(f, "{i}"),
        }
    }
}

/// A grid of [`OverlayCell`]s derived from a [`SensorState`].
///
/// Footprints are painted in sensor-index order. The first footprint over
/// a non-signal cell marks it `#`; every other paint writes the sensor
/// index, so overlaps show the highest index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    cols: usize,
    cells: Vec<OverlayCell>,
}

impl Overlay {
    /// The terrain alone: `-` for signal cells and `X` for the rest.
    pub fn bare(terrain: &Terrain) -> Self {
        let cols = terrain.cols();
        let cells = (0..terrain.rows())
            .flat_map(|r| (0..cols).map(move |c| Position::new(r, c)))
            .map(|pos| {
                if terrain.is_signal(pos) {
                    OverlayCell::Uncovered
                } else {
                    OverlayCell::Barren
                }
            })
            .collect();
        Self { cols, cells }
    }

    /// The terrain with every sensor footprint painted over it.
    pub fn new(state: &SensorState) -> Self {
        let terrain = state.terrain();
        let Self { cols, mut cells } = Self::bare(terrain);

        for sensor in 0..state.sensor_count() {
            for pos in state.covered_cells(sensor) {
                let cell = &mut cells[terrain.index(pos)];
                *cell = match *cell {
                    OverlayCell::Barren => OverlayCell::Wasted,
                    _ => OverlayCell::Sensor(sensor),
                };
            }
        }

        Self { cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, pos: Position) -> Option<OverlayCell> {
        if pos.col >= self.cols {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    /// Row slices, top to bottom.
    pub fn grid(&self) -> impl Iterator<Item = &[OverlayCell]> {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.cols {
            write!(f, "{c} ")?;
        }
        writeln!(f)?;
        for (r, row) in self.grid().enumerate() {
            write!(f, "{r} ")?;
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: Vec<Vec<u8>>, positions: &[(usize, usize)], caps: Vec<usize>) -> SensorState {
        let positions = positions.iter().map(|&rc| rc.into()).collect();
        SensorState::new(Terrain::new(cells).unwrap(), positions, caps).unwrap()
    }

    #[test]
    fn test_uncovered_symbols() {
        let s = state(vec![vec![1, 0], vec![1, 1]], &[(1, 1)], vec![1]);
        let overlay = Overlay::new(&s);
        assert_eq!(overlay.get(Position::new(0, 0)), Some(OverlayCell::Uncovered));
        assert_eq!(overlay.get(Position::new(0, 1)), Some(OverlayCell::Barren));
        assert_eq!(overlay.get(Position::new(1, 1)), Some(OverlayCell::Sensor(0)));
        assert_eq!(overlay.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_wasted_cells() {
        let s = state(vec![vec![1, 0], vec![0, 1]], &[(0, 0)], vec![2]);
        let overlay = Overlay::new(&s);
        assert_eq!(overlay.get(Position::new(0, 1)), Some(OverlayCell::Wasted));
        assert_eq!(overlay.get(Position::new(1, 0)), Some(OverlayCell::Wasted));
    }

    #[test]
    fn test_second_footprint_over_barren_shows_index() {
        let s = state(vec![vec![0, 1]], &[(0, 0), (0, 0)], vec![1, 1]);
        let overlay = Overlay::new(&s);
        assert_eq!(overlay.get(Position::new(0, 0)), Some(OverlayCell::Sensor(1)));
        assert_eq!(overlay.get(Position::new(0, 1)), Some(OverlayCell::Uncovered));

        let s = state(vec![vec![0, 0]], &[(0, 0), (0, 1), (0, 0)], vec![2, 1, 1]);
        let overlay = Overlay::new(&s);
        assert_eq!(overlay.get(Position::new(0, 0)), Some(OverlayCell::Sensor(2)));
        assert_eq!(overlay.get(Position::new(0, 1)), Some(OverlayCell::Sensor(1)));
        assert_eq!(overlay.to_string(), "  0 1 \n0 2 1 \n");
    }

    #[test]
    fn test_last_sensor_wins_on_overlap() {
        let s = state(vec![vec![1, 1]], &[(0, 0), (0, 1), (0, 0)], vec![2, 1, 1]);
        let overlay = Overlay::new(&s);
        assert_eq!(overlay.get(Position::new(0, 0)), Some(OverlayCell::Sensor(2)));
        assert_eq!(overlay.get(Position::new(0, 1)), Some(OverlayCell::Sensor(1)));
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let s = state(vec![vec![1, 1]], &[(0, 0)], vec![1]);
        let before = s.clone();
        let _ = Overlay::new(&s).to_string();
        assert_eq!(s, before);
    }

    #[test]
    fn test_bare_terrain() {
        let t = Terrain::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let overlay = Overlay::bare(&t);
        assert_eq!(overlay.rows(), 2);
        assert_eq!(overlay.to_string(), "  0 1 \n0 - X \n1 X - \n");
    }

    #[test]
    fn test_display() {
        let s = state(vec![vec![1, 0, 1], vec![0, 1, 1]], &[(0, 0)], vec![2]);
        let text = Overlay::new(&s).to_string();
        assert_eq!(text, "  0 1 2 \n0 0 # - \n1 # 0 - \n");
    }
}
