//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the command line, tests and
//! trace logs. It only reads the board.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is drawn first. The last line shows the side to move (`W`/`B`),
/// the en-passant target (or `-`) and both clocks.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(make_square(file, rank)) {
                Some(piece) => out.push(piece.to_unicode()),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&render_status_line(game_state));

    out
}

fn render_status_line(game_state: &GameState) -> String {
    let turn = if game_state.turn_is_white() { 'W' } else { 'B' };
    let en_passant = game_state
        .en_passant_square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{turn} ep:{en_passant} half:{} full:{}",
        game_state.halfmove_clock, game_state.fullmove_number
    )
}
