//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and square
//! indices. Every coordinate typed by a player passes `is_valid_algebraic`
//! before it is used to act on the board.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

/// True iff `text` is exactly a file `a..=h` followed by a rank `1..=8`.
#[inline]
pub fn is_valid_algebraic(text: &str) -> bool {
    matches!(
        text.as_bytes(),
        [file, rank] if (b'a'..=b'h').contains(file) && (b'1'..=b'8').contains(rank)
    )
}

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    if !is_valid_algebraic(text) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let bytes = text.as_bytes();
    Ok(make_square(bytes[0] - b'a', bytes[1] - b'1'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square > 63 {
        return Err(ChessErrors::SquareOutOfBounds(square));
    }

    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{algebraic_to_square, is_valid_algebraic, square_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 7);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(28).expect("28 should convert"), "e4");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn every_index_survives_encode_then_decode() {
        for sq in 0..64u8 {
            let text = square_to_algebraic(sq).expect("in-range square converts");
            assert!(is_valid_algebraic(&text));
            assert_eq!(algebraic_to_square(&text).expect("encoded text parses"), sq);
        }
    }

    #[test]
    fn random_valid_text_survives_decode_then_encode() {
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..256 {
            let file = char::from(b'a' + rng.random_range(0..8u8));
            let rank = char::from(b'1' + rng.random_range(0..8u8));
            let text = format!("{file}{rank}");

            let sq = algebraic_to_square(&text).expect("generated text is valid");
            assert_eq!(square_to_algebraic(sq).expect("decoded square converts"), text);
        }
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["", "e", "e44", "i1", "a0", "a9", "4e", "E4", "e 4", "é4"] {
            assert!(!is_valid_algebraic(text), "{text:?} should be invalid");
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessErrors::InvalidAlgebraicString(text.to_owned()))
            );
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(square_to_algebraic(64), Err(ChessErrors::SquareOutOfBounds(64)));
    }
}
