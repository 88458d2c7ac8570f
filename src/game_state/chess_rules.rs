//! Canonical chess-rule constants.
//!
//! Static literals used to initialize and bound the decoded game state: the
//! standard starting position and the limits a legal FEN can never exceed.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Longest legal FEN, counting one terminator slot.
/// See <https://chess.stackexchange.com/a/30006>.
pub const MAX_FEN_LEN: usize = 88;

/// Most pieces standard material can put on the board at once.
pub const MAX_PIECES: usize = 32;

pub const MAX_HALFMOVE_CLOCK: u16 = 999;
pub const MAX_FULLMOVE_NUMBER: u16 = 9999;

/// Rank characters an en-passant target may sit on.
pub const EN_PASSANT_RANKS: [char; 2] = ['3', '6'];
