use engine::tictactoe::{BOARD_SIZE, Board, WinningLine};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("    0   1   2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!(
            "{}   {} | {} | {}\n",
            row,
            cells[0].symbol(),
            cells[1].symbol(),
            cells[2].symbol()
        ));
        if row + 1 < BOARD_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

pub fn describe_winning_line(line: &WinningLine) -> String {
    format!(
        "{} wins from ({}, {}) to ({}, {})",
        line.mark.symbol(),
        line.start.row,
        line.start.col,
        line.end.row,
        line.end.col
    )
}
