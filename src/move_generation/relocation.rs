//! Ownership-gated piece relocation.
//!
//! The only mutation a decoded board ever sees. A relocation is accepted when
//! the source holds a piece of the side to move and the destination does not
//! hold a piece of that same side. Piece geometry, check, castling, en-passant
//! captures and promotion are not considered, so geometrically impossible
//! moves pass the gate. Castling rights, the en-passant target and both clocks
//! are left as decoded.

use tracing::debug;

use crate::chess_errors::{AlgebraicRelocationError, MoveRejection};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

/// What an accepted relocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

/// Move the piece on `from` to `to` and hand the turn over.
///
/// On rejection the board is left exactly as it was.
pub fn apply_relocation(
    game_state: &mut GameState,
    from: Square,
    to: Square,
) -> Result<Relocation, MoveRejection> {
    let result = check_relocation(game_state, from, to);

    match result {
        Ok(relocation) => {
            let moved_id = game_state.squares[from as usize].take();
            game_state.squares[to as usize] = moved_id;
            game_state.side_to_move = game_state.side_to_move.opposite();

            debug!(
                from,
                to,
                moved = ?relocation.moved,
                captured = ?relocation.captured,
                "relocated piece"
            );
            Ok(relocation)
        }
        Err(reason) => {
            debug!(from, to, %reason, "relocation rejected");
            Err(reason)
        }
    }
}

/// Run the gate without touching the board.
pub fn check_relocation(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Result<Relocation, MoveRejection> {
    if from > 63 || to > 63 {
        return Err(MoveRejection::OffBoard);
    }

    let moved = game_state
        .piece_at(from)
        .ok_or(MoveRejection::EmptySource)?;

    if moved.color != game_state.side_to_move {
        return Err(MoveRejection::NotSideToMove);
    }

    let captured = game_state.piece_at(to);
    if captured.is_some_and(|target| target.color == moved.color) {
        return Err(MoveRejection::SelfCapture);
    }

    Ok(Relocation {
        from,
        to,
        moved,
        captured,
    })
}

/// Relocate using square names such as `"e2"` and `"e4"`.
pub fn apply_algebraic_relocation(
    game_state: &mut GameState,
    from: &str,
    to: &str,
) -> Result<Relocation, AlgebraicRelocationError> {
    let from = algebraic_to_square(from)?;
    let to = algebraic_to_square(to)?;
    Ok(apply_relocation(game_state, from, to)?)
}
