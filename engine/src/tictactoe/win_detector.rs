use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Position, WinningLine};

/// The 8 completable lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win_for(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| line_complete(board, line, mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win_for(board, mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let (row, col) = line[0];
        let mark = board.mark_at(Position::new(row, col));
        if mark == Mark::Empty {
            continue;
        }
        if line_complete(board, line, mark) {
            let (end_row, end_col) = line[BOARD_SIZE - 1];
            return Some(WinningLine::new(
                mark,
                Position::new(row, col),
                Position::new(end_row, end_col),
            ));
        }
    }
    None
}

fn line_complete(board: &Board, line: &[(usize, usize); BOARD_SIZE], mark: Mark) -> bool {
    line.iter()
        .all(|&(row, col)| board.mark_at(Position::new(row, col)) == mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_win(&board), None);
        assert_eq!(check_win_with_line(&board), None);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[E, E, E], [X, X, X], [O, O, E]]);
        assert!(check_win_for(&board, X));
        assert!(!check_win_for(&board, O));
        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[X, O, E], [X, O, E], [E, O, X]]);
        assert_eq!(check_win(&board), Some(O));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);
        assert_eq!(check_win(&board), Some(O));
    }

    #[test]
    fn test_winning_line_endpoints() {
        let board = Board::from_rows([[E, E, E], [X, X, X], [O, O, E]]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.start, Position::new(1, 0));
        assert_eq!(line.end, Position::new(1, 2));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new();
        assert!(!check_win_for(&board, E));
    }
}
