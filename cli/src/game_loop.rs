use std::io::{self, Write};
use std::time::Duration;

use engine::log;
use engine::session_rng::SessionRng;
use engine::tictactoe::{
    BotType, GameStatus, Mark, Position, TicTacToeGameState, calculate_move,
};

use crate::render::{describe_winning_line, render_board};

pub struct GameOptions {
    pub player_mark: Mark,
    pub bot_type: BotType,
    pub bot_delay_ms: u64,
}

pub fn run_game(options: &GameOptions, rng: &mut SessionRng) -> Result<GameStatus, String> {
    let mut state = TicTacToeGameState::new();

    println!("{}", render_board(&state.board));

    while state.status == GameStatus::InProgress {
        if state.current_mark == options.player_mark {
            let position = prompt_for_move(&state)?;
            if let Err(err) = state.place_mark(position) {
                println!("{}", err);
                continue;
            }
        } else {
            println!("Bot thinking...");
            if options.bot_delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(options.bot_delay_ms));
            }

            let Some(position) =
                calculate_move(options.bot_type, &state.board, state.current_mark, rng)
            else {
                break;
            };
            log!("Bot plays ({}, {})", position.row, position.col);
            state.place_mark(position)?;
        }

        println!("{}", render_board(&state.board));
    }

    announce_result(&state);
    Ok(state.status)
}

fn prompt_for_move(state: &TicTacToeGameState) -> Result<Position, String> {
    loop {
        print!("Your move ({}), row col: ", state.current_mark.symbol());
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Err("Input closed".to_string());
        }

        match parse_move(&line) {
            Ok(position) if state.board.is_valid_move(position) => return Ok(position),
            Ok(_) => println!("That cell is taken or out of bounds, try again"),
            Err(err) => println!("{}", err),
        }
    }
}

fn parse_move(line: &str) -> Result<Position, String> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter two numbers: row col (each 0-2)".to_string());
    };

    let row: usize = row
        .parse()
        .map_err(|_| "Row must be a number in 0-2".to_string())?;
    let col: usize = col
        .parse()
        .map_err(|_| "Column must be a number in 0-2".to_string())?;

    Ok(Position::new(row, col))
}

fn announce_result(state: &TicTacToeGameState) {
    match state.status {
        GameStatus::Draw => println!("Draw!"),
        GameStatus::XWon | GameStatus::OWon => {
            if let Some(line) = state.winning_line() {
                println!("{}", describe_winning_line(&line));
            }
        }
        GameStatus::InProgress => {}
    }
}

pub fn ask_play_again() -> Result<bool, String> {
    print!("Play again? [y/n]: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Ok(false);
    }

    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
