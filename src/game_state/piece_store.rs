//! Fixed-capacity arena owning every piece on the board.
//!
//! Squares refer to pieces by `PieceId`. A captured piece stays in the arena
//! but nothing points at it any more, so ids handed out are never invalidated.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::MAX_PIECES;
use crate::game_state::chess_types::{Piece, PieceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStore {
    slots: [Option<Piece>; MAX_PIECES],
    len: usize,
}

impl Default for PieceStore {
    fn default() -> Self {
        Self {
            slots: [None; MAX_PIECES],
            len: 0,
        }
    }
}

impl PieceStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a piece and return its handle, or fail once all slots are used.
    pub fn push(&mut self, piece: Piece) -> Result<PieceId, ChessErrors> {
        if self.len >= MAX_PIECES {
            return Err(ChessErrors::TooManyPieces { max: MAX_PIECES });
        }

        let id = PieceId(self.len as u8);
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<Piece> {
        self.slots.get(id.index()).copied().flatten()
    }

    /// Number of pieces ever stored, captured ones included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
