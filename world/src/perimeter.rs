//! Fixed walls installed on the outer ring of every board.

use std::collections::BTreeSet;

use ricochet_core::{BoardSize, CellCoord, WallPos};

/// Builds the two walls per board side placed at the quarter points.
///
/// West and east edges receive walls between the rows at the first and third
/// quarter; north and south edges between the columns at those quarters.
/// Walls that would fall off a very small board are skipped.
pub(crate) fn perimeter_walls(size: BoardSize) -> BTreeSet<WallPos> {
    let columns = quarter_points(size.columns());
    let rows = quarter_points(size.rows());
    let last_column = size.columns() - 1;
    let last_row = size.rows() - 1;

    let mut walls = BTreeSet::new();
    for row in [rows[1], rows[3]] {
        for column in [0, last_column] {
            if let Some(wall) = row_split(column, row).filter(|wall| wall.is_within(size)) {
                let _ = walls.insert(wall);
            }
        }
    }
    for column in [columns[1], columns[3]] {
        for row in [0, last_row] {
            if let Some(wall) = column_split(column, row).filter(|wall| wall.is_within(size)) {
                let _ = walls.insert(wall);
            }
        }
    }
    walls
}

/// Wall between rows `row - 1` and `row` in `column`.
fn row_split(column: u32, row: u32) -> Option<WallPos> {
    let above = row.checked_sub(1)?;
    WallPos::between(CellCoord::new(column, above), CellCoord::new(column, row))
}

/// Wall between columns `column - 1` and `column` in `row`.
fn column_split(column: u32, row: u32) -> Option<WallPos> {
    let left = column.checked_sub(1)?;
    WallPos::between(CellCoord::new(left, row), CellCoord::new(column, row))
}

/// `round(i * length / 4)` for `i` in `0..=4`, rounding halves to even.
fn quarter_points(length: u32) -> [u32; 5] {
    let mut points = [0; 5];
    for (index, point) in (0u64..).zip(points.iter_mut()) {
        let scaled = u64::from(length) * index;
        let base = scaled / 4;
        let remainder = scaled % 4;
        let rounded = if remainder > 2 || (remainder == 2 && base % 2 == 1) {
            base + 1
        } else {
            base
        };
        *point = u32::try_from(rounded).unwrap_or(length);
    }
    points
}

#[cfg(test)]
mod tests {
    use ricochet_core::{BoardSize, CellCoord, WallPos};

    use super::{perimeter_walls, quarter_points};

    #[test]
    fn quarter_points_round_halves_to_even() {
        assert_eq!(quarter_points(16), [0, 4, 8, 12, 16]);
        assert_eq!(quarter_points(10), [0, 2, 5, 8, 10]);
        assert_eq!(quarter_points(6), [0, 2, 3, 4, 6]);
        assert_eq!(
            quarter_points(u32::MAX),
            [0, 1_073_741_824, 2_147_483_648, 3_221_225_471, u32::MAX]
        );
    }

    #[test]
    fn standard_board_has_two_walls_per_side() {
        let walls = perimeter_walls(BoardSize::STANDARD);
        assert_eq!(walls.len(), 8);

        let expected = [
            (CellCoord::new(0, 3), CellCoord::new(0, 4)),
            (CellCoord::new(0, 11), CellCoord::new(0, 12)),
            (CellCoord::new(15, 3), CellCoord::new(15, 4)),
            (CellCoord::new(15, 11), CellCoord::new(15, 12)),
            (CellCoord::new(3, 0), CellCoord::new(4, 0)),
            (CellCoord::new(11, 0), CellCoord::new(12, 0)),
            (CellCoord::new(3, 15), CellCoord::new(4, 15)),
            (CellCoord::new(11, 15), CellCoord::new(12, 15)),
        ];
        for (first, second) in expected {
            let wall = WallPos::between(first, second).expect("adjacent cells");
            assert!(walls.contains(&wall), "missing wall between {first} and {second}");
        }
    }

    #[test]
    fn tiny_boards_keep_only_walls_between_board_cells() {
        let size = BoardSize::new(2, 2).expect("valid board");
        for wall in perimeter_walls(size) {
            assert!(wall.is_within(size));
        }
    }
}
