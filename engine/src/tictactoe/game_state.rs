use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// One game of tic-tac-toe. Owns the board; X always moves first.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_valid_move(position) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(position, self.current_mark);
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);

        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(Position::new(0, 0)));

        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        assert!(state.place_mark(Position::new(0, 0)).is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut state = TicTacToeGameState::new();
        assert!(state.place_mark(Position::new(3, 0)).is_err());
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut state = TicTacToeGameState::new();
        // X: top row; O: middle row.
        state.place_mark(Position::new(0, 0)).unwrap();
        state.place_mark(Position::new(1, 0)).unwrap();
        state.place_mark(Position::new(0, 1)).unwrap();
        state.place_mark(Position::new(1, 1)).unwrap();
        state.place_mark(Position::new(0, 2)).unwrap();

        assert_eq!(state.status, GameStatus::XWon);
        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);

        assert!(state.place_mark(Position::new(2, 2)).is_err());
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X with no completed line.
        let moves = [
            (0, 0), (0, 1), (0, 2), (1, 1), (1, 0),
            (1, 2), (2, 1), (2, 0), (2, 2),
        ];
        for (row, col) in moves {
            state.place_mark(Position::new(row, col)).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
    }
}
