#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded board randomizer that scatters robots and targets and walls them in.
//!
//! Placement follows a fixed recipe: every object draws a uniformly random cell
//! from the remaining candidates, after which every candidate within distance
//! one of the chosen cell is discarded. Targets additionally receive two walls,
//! one on a random horizontal side and one on a random vertical side.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ricochet_core::{
    BoardSize, CapacityError, CellCoord, Direction, Layout, RobotColor, RobotPlacement,
    TargetPlacement, TargetToken, WallPos,
};

/// Configuration parameters required to construct the layout generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a configuration that seeds the generator with the provided value.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Neighbourhood used to keep placed objects apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Eight-neighbourhood: diagonal neighbours count as adjacent.
    Chebyshev,
    /// Four-neighbourhood: only orthogonal neighbours count as adjacent.
    Manhattan,
}

impl Metric {
    /// Chooses the metric a board with `candidates` free cells can afford for `objects` placements.
    #[must_use]
    pub const fn select(candidates: usize, objects: usize) -> Self {
        if candidates >= 9 * objects {
            Self::Chebyshev
        } else {
            Self::Manhattan
        }
    }

    /// Distance between two cells under this metric.
    #[must_use]
    pub fn distance(self, first: CellCoord, second: CellCoord) -> u32 {
        match self {
            Self::Chebyshev => first.chebyshev_distance(second),
            Self::Manhattan => first.manhattan_distance(second),
        }
    }
}

/// Cells eligible to host `objects` placements, in column-major order.
///
/// The center block is always excluded. The outer ring is excluded as well
/// whenever the interior alone leaves enough room.
#[must_use]
pub fn candidate_cells(size: BoardSize, objects: usize) -> Vec<CellCoord> {
    let interior = u64::from(size.columns() - 1) * u64::from(size.rows() - 1);
    let skip_edges = interior.saturating_sub(4) >= 5 * objects as u64;
    size.cells()
        .filter(|cell| !size.is_center(*cell))
        .filter(|cell| !(skip_edges && size.is_edge(*cell)))
        .collect()
}

/// Deterministic randomizer producing fresh layouts.
#[derive(Debug)]
pub struct LayoutGenerator {
    rng: ChaCha8Rng,
}

impl LayoutGenerator {
    /// Creates a generator using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Places every robot and target on a board of the given size.
    ///
    /// Robots are placed first, in the provided order, followed by targets.
    /// Fails without producing a partial layout when the candidate cells run
    /// out before every object has a cell.
    pub fn populate(
        &mut self,
        size: BoardSize,
        robots: &[RobotColor],
        targets: &[TargetToken],
    ) -> Result<Layout, CapacityError> {
        let required = robots.len() + targets.len();
        let mut candidates = candidate_cells(size, required);
        let metric = Metric::select(candidates.len(), required);

        let mut cells = Vec::with_capacity(required);
        for placed in 0..required {
            if candidates.is_empty() {
                return Err(CapacityError::Exhausted { required, placed });
            }
            let chosen = candidates[self.rng.gen_range(0..candidates.len())];
            candidates.retain(|cell| metric.distance(*cell, chosen) > 1);
            cells.push(chosen);
        }

        let (robot_cells, target_cells) = cells.split_at(robots.len());
        let mut layout = Layout {
            robots: robots
                .iter()
                .zip(robot_cells)
                .map(|(robot, cell)| RobotPlacement {
                    robot: *robot,
                    cell: *cell,
                })
                .collect(),
            targets: Vec::with_capacity(targets.len()),
            walls: Vec::with_capacity(targets.len() * 2),
        };
        for (token, cell) in targets.iter().zip(target_cells) {
            layout.targets.push(TargetPlacement {
                token: *token,
                cell: *cell,
            });
            let horizontal = self.pick_side(Direction::West, Direction::East);
            let vertical = self.pick_side(Direction::North, Direction::South);
            layout.walls.extend(target_wall(*cell, horizontal, size));
            layout.walls.extend(target_wall(*cell, vertical, size));
        }
        Ok(layout)
    }

    fn pick_side(&mut self, first: Direction, second: Direction) -> Direction {
        if self.rng.gen_bool(0.5) {
            first
        } else {
            second
        }
    }
}

/// Wall on the chosen side of the cell, falling back to the opposite side at the board edge.
fn target_wall(cell: CellCoord, side: Direction, size: BoardSize) -> Option<WallPos> {
    WallPos::beside(cell, side, size).or_else(|| WallPos::beside(cell, side.opposite(), size))
}

#[cfg(test)]
mod tests {
    use ricochet_core::{BoardSize, CellCoord, Direction, WallPos};

    use super::{candidate_cells, target_wall, Metric};

    #[test]
    fn standard_board_skips_the_outer_ring() {
        let candidates = candidate_cells(BoardSize::STANDARD, 21);
        assert_eq!(candidates.len(), 14 * 14 - 4);
        assert_eq!(candidates.first(), Some(&CellCoord::new(1, 1)));
        assert_eq!(candidates.get(1), Some(&CellCoord::new(1, 2)));
    }

    #[test]
    fn crowded_board_keeps_the_outer_ring() {
        let size = BoardSize::new(6, 6).expect("valid board");
        let candidates = candidate_cells(size, 5);
        assert_eq!(candidates.len(), 32);
        assert!(candidates.contains(&CellCoord::new(0, 0)));
    }

    #[test]
    fn metric_falls_back_to_manhattan_when_crowded() {
        assert_eq!(Metric::select(192, 21), Metric::Chebyshev);
        assert_eq!(Metric::select(32, 5), Metric::Manhattan);
        assert_eq!(
            Metric::Chebyshev.distance(CellCoord::new(1, 1), CellCoord::new(2, 2)),
            1
        );
        assert_eq!(
            Metric::Manhattan.distance(CellCoord::new(1, 1), CellCoord::new(2, 2)),
            2
        );
    }

    #[test]
    fn edge_targets_flip_walls_onto_the_board() {
        let size = BoardSize::STANDARD;
        let corner = CellCoord::new(0, 0);
        assert_eq!(
            target_wall(corner, Direction::West, size),
            WallPos::between(corner, CellCoord::new(1, 0))
        );
        assert_eq!(
            target_wall(corner, Direction::North, size),
            WallPos::between(corner, CellCoord::new(0, 1))
        );
    }
}
