//! Decoded, mutable board state.
//!
//! `GameState` owns every piece through a fixed-capacity `PieceStore` and maps
//! the 64 squares onto it with plain ids. It is created only by the FEN
//! decoder and mutated only by the relocation gate; renderers read it through
//! the accessors below.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::piece_store::PieceStore;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [square] -> piece handle, `0 == a1`.
    pub(crate) squares: [Option<PieceId>; 64],
    pub(crate) pieces: PieceStore,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            pieces: PieceStore::new(),

            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub(crate) fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn turn_is_white(&self) -> bool {
        self.side_to_move.is_light()
    }

    /// Put a freshly decoded piece on an empty square.
    pub(crate) fn place_piece(
        &mut self,
        square: Square,
        piece: Piece,
    ) -> Result<PieceId, ChessErrors> {
        let slot = self
            .squares
            .get_mut(square as usize)
            .ok_or(ChessErrors::SquareOutOfBounds(square))?;
        let id = self.pieces.push(piece)?;
        *slot = Some(id);
        Ok(id)
    }

    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.piece_id_at(square).and_then(|id| self.pieces.get(id))
    }

    /// Occupied squares in index order, `a1` first.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64u8).filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Pieces currently standing on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn piece_count_for(&self, color: Color) -> usize {
        self.occupied_squares()
            .filter(|(_, piece)| piece.color == color)
            .count()
    }

    pub fn piece_store(&self) -> &PieceStore {
        &self.pieces
    }
}
