//! Player move input in long algebraic form.
//!
//! Accepts `e2e4` or two whitespace-separated squares (`e2 e4`). Each square
//! is gated by `is_valid_algebraic` before it is decoded.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::{algebraic_to_square, is_valid_algebraic};

/// Split a typed move into its source and destination text.
pub fn split_coordinate_pair(input: &str) -> Result<(&str, &str), ChessErrors> {
    let trimmed = input.trim();
    let mut tokens = trimmed.split_whitespace();

    let pair = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(compact), None, None) if compact.len() == 4 && compact.is_ascii() => {
            compact.split_at(2)
        }
        (Some(from), Some(to), None) => (from, to),
        _ => return Err(ChessErrors::InvalidMoveInput(trimmed.to_owned())),
    };

    if !is_valid_algebraic(pair.0) || !is_valid_algebraic(pair.1) {
        return Err(ChessErrors::InvalidMoveInput(trimmed.to_owned()));
    }

    Ok(pair)
}

/// Parse a typed move into `(from, to)` square indices.
pub fn parse_coordinate_pair(input: &str) -> Result<(Square, Square), ChessErrors> {
    let (from, to) = split_coordinate_pair(input)?;
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}
