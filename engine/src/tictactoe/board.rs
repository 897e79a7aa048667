use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn place(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = Mark::Empty;
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return false;
        }
        self.cells[position.row][position.col] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order (rows 0..2, then columns 0..2).
    /// The move selector's tie-break relies on this order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_has_nine_available_moves() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let moves = board.available_moves();
        let expected = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];
        assert_eq!(moves.len(), expected.len());
        for (position, &(row, col)) in moves.iter().zip(expected.iter()) {
            assert_eq!(*position, Position::new(row, col));
        }
    }

    #[test]
    fn test_place_then_clear_restores_cell() {
        let mut board = Board::new();
        let position = Position::new(1, 2);

        board.place(position, X);
        assert_eq!(board.mark_at(position), X);
        assert!(!board.is_valid_move(position));

        board.clear(position);
        assert_eq!(board.mark_at(position), E);
        assert!(board.is_valid_move(position));
    }

    #[test]
    fn test_out_of_bounds_is_not_valid() {
        let board = Board::new();
        assert!(!board.is_valid_move(Position::new(3, 0)));
        assert!(!board.is_valid_move(Position::new(0, 3)));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
