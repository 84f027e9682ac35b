//! Linear undo/redo history of robot moves.

use ricochet_core::Move;

/// Sequence of applied moves with a cursor separating applied from undone moves.
///
/// Moves before the cursor are applied to the board; moves at or after it were
/// undone and may be redone. Recording a new move discards the undone tail, so
/// history never branches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
    cursor: usize,
}

impl MoveLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            moves: Vec::new(),
            cursor: 0,
        }
    }

    /// Appends a move after discarding any undone moves.
    pub fn record(&mut self, record: Move) {
        self.moves.truncate(self.cursor);
        self.moves.push(record);
        self.cursor = self.moves.len();
    }

    /// Steps the cursor back, yielding the move that must be reverted.
    pub fn undo(&mut self) -> Option<Move> {
        let index = self.cursor.checked_sub(1)?;
        let record = self.moves.get(index).copied()?;
        self.cursor = index;
        Some(record)
    }

    /// Steps the cursor forward, yielding the move that must be reapplied.
    pub fn redo(&mut self) -> Option<Move> {
        let record = self.moves.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(record)
    }

    /// Discards every move and rewinds the cursor.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.cursor = 0;
    }

    /// Number of applied moves, which doubles as the player's move count.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of recorded moves, undone ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Reports whether no move has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Reports whether a move can be undone.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Reports whether an undone move can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.moves.len()
    }

    /// Moves currently applied to the board, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[Move] {
        &self.moves[..self.cursor]
    }

    /// Every recorded move, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use ricochet_core::{CellCoord, Move, RobotColor};

    use super::MoveLog;

    fn sample(column: u32) -> Move {
        Move::new(
            RobotColor::Red,
            CellCoord::new(column, 0),
            CellCoord::new(column + 1, 0),
        )
    }

    #[test]
    fn undo_on_empty_log_is_a_no_op() {
        let mut log = MoveLog::new();
        assert_eq!(log.undo(), None);
        assert_eq!(log.cursor(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn redo_at_end_is_a_no_op() {
        let mut log = MoveLog::new();
        log.record(sample(0));
        assert_eq!(log.redo(), None);
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn record_after_undo_truncates_the_redo_tail() {
        let mut log = MoveLog::new();
        log.record(sample(0));
        log.record(sample(1));
        log.record(sample(2));

        assert_eq!(log.undo(), Some(sample(2)));
        assert_eq!(log.undo(), Some(sample(1)));
        assert!(log.can_redo());

        log.record(sample(7));

        assert_eq!(log.len(), 2);
        assert_eq!(log.cursor(), 2);
        assert!(!log.can_redo());
        assert_eq!(log.redo(), None);
        assert_eq!(log.applied(), &[sample(0), sample(7)]);
    }

    #[test]
    fn undo_then_redo_walks_the_same_records() {
        let mut log = MoveLog::new();
        for column in 0..4 {
            log.record(sample(column));
        }

        let undone: Vec<_> = std::iter::from_fn(|| log.undo()).collect();
        assert_eq!(log.cursor(), 0);
        let redone: Vec<_> = std::iter::from_fn(|| log.redo()).collect();
        assert_eq!(log.cursor(), 4);

        let mut reversed = redone.clone();
        reversed.reverse();
        assert_eq!(undone, reversed);
        assert_eq!(log.iter().copied().collect::<Vec<_>>(), redone);
    }
}
