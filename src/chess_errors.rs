//! Errors used throughout the board crate.
//!
//! `ChessErrors` is the single error type returned by the FEN decoder and the
//! coordinate helpers. A decode either yields a complete `GameState` or one of
//! these variants; there is no partially-populated board to inspect.
//!
//! `MoveRejection` is kept separate because a rejected relocation is not a
//! failure of the program: the board is left untouched and the caller may
//! simply ask the player for another move.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for decoding positions and coordinates.
///
/// Every variant maps onto one failure class of FEN decoding (oversize input,
/// malformed field split, bad piece placement, bad side-to-move, bad
/// en-passant, bad clocks) or of coordinate parsing. Payloads carry the
/// offending token so callers can show a precise message before aborting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Input is longer than any legal FEN can be.
    ///
    /// Payload: the length of the rejected text.
    #[error("FEN is too long ({length} characters); it is probably not valid")]
    FenTooLong { length: usize },

    /// One of the six space-separated fields is absent.
    #[error("Missing {0} in FEN")]
    MissingFenField(&'static str),

    /// Text follows the sixth field.
    #[error("FEN has extra trailing field: {0}")]
    ExtraFenField(String),

    /// Piece placement did not split into exactly eight ranks.
    #[error("Board layout must contain 8 ranks, found {0}")]
    InvalidRankCount(usize),

    /// A digit outside `1..=8` appeared in the piece placement.
    #[error("Invalid empty-square count '{0}'")]
    InvalidEmptySquareCount(char),

    /// A rank consumed more than eight files.
    ///
    /// Payload: the rank as written in the FEN (`8` for the first rank string).
    #[error("Board rank {rank} has too many files")]
    RankOverflow { rank: u8 },

    /// A character in the piece placement is neither a digit nor a piece letter.
    #[error("Invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    /// More pieces were placed than the piece store can hold.
    #[error("Board layout places more than {max} pieces")]
    TooManyPieces { max: usize },

    /// Active color was neither `w` nor `b`.
    #[error("Invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    /// En-passant field is not `-` and not a two-character square.
    #[error("Invalid en-passant square: {0}")]
    InvalidEnPassantSquare(String),

    /// En-passant square is on a rank other than 3 or 6.
    #[error("Other ranks than 3 and 6 for en passant target are not valid, got '{0}'")]
    InvalidEnPassantRank(char),

    /// Halfmove clock is not a number or exceeds its bound.
    #[error("Invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    /// Fullmove number is not a number or exceeds its bound.
    #[error("Invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),

    /// Text is not a two-character square name such as `e4`.
    #[error("Invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// Square index is not in `0..=63`.
    #[error("Square index out of bounds: {0}")]
    SquareOutOfBounds(Square),

    /// A typed move could not be split into two square names.
    #[error("Invalid move input: {0}")]
    InvalidMoveInput(String),
}

/// Reasons a relocation was refused. The board is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// A square index lies outside `0..=63`.
    #[error("square index is off the board")]
    OffBoard,

    /// Nothing stands on the source square.
    #[error("no piece on source square")]
    EmptySource,

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on source square does not belong to the side to move")]
    NotSideToMove,

    /// The destination holds a piece of the mover's own color.
    #[error("destination square holds a piece of the same color")]
    SelfCapture,
}

/// Failure of a relocation requested by square names: either the text did not
/// name a square, or the gate refused the move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraicRelocationError {
    #[error(transparent)]
    Input(#[from] ChessErrors),

    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}
