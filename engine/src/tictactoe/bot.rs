use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win_for;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => {
            let opponent_mark = bot_mark.opponent()?;
            let mut scratch = board.clone();
            select_best_move(&mut scratch, bot_mark, opponent_mark)
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Full-depth minimax over every empty cell, no pruning. Among moves with
/// equal score the first in row-major order wins (strict `>` keeps the
/// earlier one). Returns `None` only when the board is full.
///
/// The board is mutated speculatively during the search and restored on
/// every path before returning.
pub fn select_best_move(
    board: &mut Board,
    maximizer: Mark,
    minimizer: Mark,
) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for position in board.available_moves() {
        board.place(position, maximizer);
        let score = minimax(board, 0, false, maximizer, minimizer);
        board.clear(position);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Depth counts plies after the root placement, so an immediate win scores
/// exactly 10. Wins sooner score higher (`10 - depth`), losses later score
/// higher (`depth - 10`), a full board with no winner scores 0.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    maximizer: Mark,
    minimizer: Mark,
) -> i32 {
    if check_win_for(board, minimizer) {
        return depth - 10;
    }
    if check_win_for(board, maximizer) {
        return 10 - depth;
    }
    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if is_maximizing {
        (maximizer, i32::MIN)
    } else {
        (minimizer, i32::MAX)
    };

    for position in board.available_moves() {
        board.place(position, mark);
        let score = minimax(board, depth + 1, !is_maximizing, maximizer, minimizer);
        board.clear(position);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
