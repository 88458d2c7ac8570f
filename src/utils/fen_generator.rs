//! GameState-to-FEN writer, the inverse of `fen_parser`.
//!
//! A board decoded from a canonical FEN writes back the same text.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let placement = (0..8u8)
        .rev()
        .map(|rank| encode_rank(game_state, rank))
        .collect::<Vec<_>>()
        .join("/");
    let side = if game_state.turn_is_white() { 'w' } else { 'b' };
    let en_passant = game_state
        .en_passant_square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{placement} {side} {} {en_passant} {} {}",
        encode_castling(game_state.castling_rights),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// One rank, file a first, with runs of empty squares collapsed to a digit.
fn encode_rank(game_state: &GameState, rank: u8) -> String {
    let push_gap = |out: &mut String, gap: u8| {
        if gap > 0 {
            out.push(char::from(b'0' + gap));
        }
    };

    let (mut out, gap) = (0..8u8).fold((String::new(), 0u8), |(mut out, gap), file| {
        match game_state.piece_at(make_square(file, rank)) {
            Some(piece) => {
                push_gap(&mut out, gap);
                out.push(piece.to_fen_char());
                (out, 0)
            }
            None => (out, gap + 1),
        }
    });
    push_gap(&mut out, gap);

    out
}

fn encode_castling(rights: CastlingRights) -> String {
    let field: String = [
        (rights.light_kingside, 'K'),
        (rights.light_queenside, 'Q'),
        (rights.dark_kingside, 'k'),
        (rights.dark_queenside, 'q'),
    ]
    .into_iter()
    .filter_map(|(set, letter)| set.then_some(letter))
    .collect();

    if field.is_empty() {
        "-".to_owned()
    } else {
        field
    }
}
