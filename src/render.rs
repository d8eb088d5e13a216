#![cfg(feature = "std")]

//! Plain-text board rendering for the CLI. Presentation only: reads the
//! engine's public accessors, never its internals.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::grid::Coord;

/// Render one board as a grid labelled with 0-indexed x and y, matching
/// the coordinates the engine takes.
///
/// With `reveal` the owner's view is drawn (ships visible); without it
/// the tracking view, showing only strike results. `X` marks a struck
/// ship cell, `o` a struck empty cell, `#` an afloat ship cell, `.`
/// unknown water.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'0' + x) as char);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        out.push_str(&format!("{:2} ", y));
        for x in 0..BOARD_SIZE {
            let coord = Coord::new(x, y);
            let struck = board.received_strikes().contains(&coord);
            let ship = board.ship_at(coord).is_some();
            let cell = match (struck, ship) {
                (true, true) => 'X',
                (true, false) => 'o',
                (false, true) if reveal => '#',
                _ => '.',
            };
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

/// Print both views a player cares about: their own fleet and their
/// record of strikes against the opponent.
pub fn print_player_view(own: &Board, opponent: &Board) {
    println!("Your fleet:");
    println!("{}", render_board(own, true));
    println!("Your strikes:");
    println!("{}", render_board(opponent, false));
}
