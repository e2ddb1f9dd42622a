//! Plain-text rendering of a store snapshot.

use std::fmt::Write;

use crate::board::Board;
use crate::ui::store::Snapshot;

const FLAG: &str = "F";
const MINE: &str = "X";

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let game = &snapshot.game;

    let _ = writeln!(
        out,
        "Duration: {}   Opened: {}   {FLAG}: {}   {MINE}: {}",
        game.duration(),
        game.opened(),
        game.flagged(),
        game.total_mines()
    );
    out.push_str(&render_board(game.board()));

    if snapshot.gate.end_dialog_visible(&snapshot.overlay) {
        if let Some(message) = snapshot.gate.end_message() {
            let _ = writeln!(out, "\n*** {message} ***  ('close' to dismiss, 'new' to play again)");
        }
    }

    if let Some(history) = snapshot.overlay.history() {
        out.push_str("\nTop Scores\n");
        if history.wins.is_empty() {
            out.push_str("  No wins yet.\n");
        }
        for (rank, win) in history.top() {
            let _ = writeln!(out, "  {rank:>2}. {}  {}", win.date, win.duration);
        }
        out.push_str("('close' to resume)\n");
    }

    out
}

/// Grid with 1-based column and row labels, laid out by engine coordinates.
pub fn render_board(board: &Board) -> String {
    let (width, height) = board.dimensions();
    let mut rows = vec![vec![' '; usize::from(width)]; usize::from(height)];
    for position in board.iter() {
        let (x, y) = (position.pos.x, position.pos.y);
        if x == 0 || y == 0 {
            continue;
        }
        let glyph = position.cell.to_string().chars().next().unwrap_or(' ');
        rows[usize::from(y - 1)][usize::from(x - 1)] = glyph;
    }

    let mut out = String::from("   ");
    for column in 1..=width {
        let _ = write!(out, "{column:<3}");
    }
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        let _ = write!(out, "{:<3}", i + 1);
        for glyph in row {
            let _ = write!(out, "{glyph:<3}");
        }
        out.push('\n');
    }
    out
}
