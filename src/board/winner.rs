use crate::board::mark::Mark;
use crate::board::snapshot::Snapshot;

/// Every line that wins the game, scanned in this order:
/// rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line in [`LINES`] holding three equal, non-empty marks.
pub fn winning_line(snapshot: &Snapshot) -> Option<[usize; 3]> {
    let cells = snapshot.cells();
    LINES.into_iter().find(|&[a, b, c]| {
        let mark = cells[a];
        !mark.is_empty() && cells[b] == mark && cells[c] == mark
    })
}

/// The winning mark for `snapshot`, if any.
pub fn evaluate(snapshot: &Snapshot) -> Option<Mark> {
    winning_line(snapshot).map(|[first, _, _]| snapshot.cells()[first])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark::{Empty as E, PlayerOne as X, PlayerTwo as O};

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(evaluate(&Snapshot::empty()), None);
    }

    #[test]
    fn every_line_wins_on_its_own() {
        for line in LINES {
            let snapshot = line
                .iter()
                .fold(Snapshot::empty(), |board, &index| board.with_mark(index, O));
            assert_eq!(evaluate(&snapshot), Some(O), "line {line:?}");
            assert_eq!(winning_line(&snapshot), Some(line));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let snapshot = Snapshot::from_cells([X, X, O, E, E, E, E, E, E]);
        assert_eq!(evaluate(&snapshot), None);
    }

    #[test]
    fn full_board_without_line_has_no_winner() {
        let snapshot = Snapshot::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&snapshot), None);
    }

    #[test]
    fn rows_are_checked_before_columns() {
        // Top row and left column are both complete.
        let snapshot = Snapshot::from_cells([X, X, X, X, E, E, X, O, O]);
        assert_eq!(winning_line(&snapshot), Some([0, 1, 2]));
        assert_eq!(evaluate(&snapshot), Some(X));
    }

    #[test]
    fn columns_are_checked_before_diagonals() {
        let snapshot = Snapshot::from_cells([O, E, X, E, X, X, X, E, X]);
        assert_eq!(winning_line(&snapshot), Some([2, 5, 8]));
        assert_eq!(evaluate(&snapshot), Some(X));
    }
}
