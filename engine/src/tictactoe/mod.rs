mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot::{BotType, calculate_move, select_best_move};
pub use game_state::TicTacToeGameState;
pub use types::{FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_for, check_win_with_line};
