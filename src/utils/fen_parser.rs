//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board from a Forsyth-Edwards Notation string:
//! piece placement, side to move, castling rights, en-passant target and both
//! clocks. The board is only handed back once every field has decoded, so a
//! caller never sees a half-written position.

use tracing::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::render_game_state::render_game_state;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let result = parse_fields(fen);
    if let Err(err) = &result {
        debug!(%err, fen, "FEN decode failed");
    }
    result
}

fn parse_fields(fen: &str) -> Result<GameState, ChessErrors> {
    // The bound counts a terminator slot.
    if fen.len() + 1 > MAX_FEN_LEN {
        return Err(ChessErrors::FenTooLong { length: fen.len() });
    }

    let mut parts = fen.split(' ');
    let mut next_field = |name: &'static str| {
        parts
            .next()
            .filter(|field| !field.is_empty())
            .ok_or(ChessErrors::MissingFenField(name))
    };

    let board_part = next_field("board layout")?;
    let side_part = next_field("side-to-move")?;
    let castling_part = next_field("castling rights")?;
    let en_passant_part = next_field("en-passant square")?;
    let halfmove_part = next_field("halfmove clock")?;
    let fullmove_part = next_field("fullmove number")?;

    if let Some(extra) = parts.next() {
        return Err(ChessErrors::ExtraFenField(extra.to_owned()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part);
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = parse_counter(halfmove_part, MAX_HALFMOVE_CLOCK)
        .ok_or_else(|| ChessErrors::InvalidHalfmoveClock(halfmove_part.to_owned()))?;
    game_state.fullmove_number = parse_counter(fullmove_part, MAX_FULLMOVE_NUMBER)
        .ok_or_else(|| ChessErrors::InvalidFullmoveNumber(fullmove_part.to_owned()))?;

    debug!(
        placement = board_part,
        side = side_part,
        castling = ?game_state.castling_rights,
        en_passant = ?game_state.en_passant_square,
        halfmove = game_state.halfmove_clock,
        fullmove = game_state.fullmove_number,
        pieces = game_state.piece_count(),
        "decoded FEN"
    );
    trace!("\n{}", render_game_state(&game_state));

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidRankCount(ranks.len()));
    }

    // Ranks are listed from rank 8 down but stored from rank 1 up.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidEmptySquareCount(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessErrors::RankOverflow { rank: board_rank + 1 });
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidPieceChar(ch))?;

            if file >= 8 {
                return Err(ChessErrors::RankOverflow { rank: board_rank + 1 });
            }

            game_state.place_piece(make_square(file, board_rank), piece)?;
            file += 1;
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

/// Each right is set by the presence of its letter; anything else is ignored.
fn parse_castling_rights(castling_part: &str) -> CastlingRights {
    CastlingRights {
        light_kingside: castling_part.contains('K'),
        light_queenside: castling_part.contains('Q'),
        dark_kingside: castling_part.contains('k'),
        dark_queenside: castling_part.contains('q'),
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let [file, rank] = en_passant_part.as_bytes() else {
        return Err(ChessErrors::InvalidEnPassantSquare(en_passant_part.to_owned()));
    };

    if !(b'a'..=b'h').contains(file) {
        return Err(ChessErrors::InvalidEnPassantSquare(en_passant_part.to_owned()));
    }
    if !EN_PASSANT_RANKS.contains(&char::from(*rank)) {
        return Err(ChessErrors::InvalidEnPassantRank(char::from(*rank)));
    }

    Ok(Some(make_square(file - b'a', rank - b'1')))
}

/// Unsigned decimal no greater than `max`.
fn parse_counter(field: &str, max: u16) -> Option<u16> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u16>().ok().filter(|value| *value <= max)
}
