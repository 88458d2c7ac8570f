//! Value types shared by the decoder, the board and the relocation gate.
//!
//! Squares are plain indices with `0 == a1`, `7 == h1` and `63 == h8`.

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn is_light(self) -> bool {
        matches!(self, Color::Light)
    }
}

/// Piece kind, in the order the FEN letters `k q b n r p` are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        }
    }
}

/// An immutable piece record. Uppercase FEN letters are light, lowercase dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Build a piece from its FEN letter.
    ///
    /// Returns `None` for anything outside `kqbnrp` / `KQBNRP`; the decoder
    /// has already peeled off digits and `/` before calling this.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'p' => PieceKind::Pawn,
            _ => return None,
        };

        Some(Self { kind, color })
    }

    pub fn to_fen_char(self) -> char {
        let base = self.kind.fen_letter();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    /// Unicode board glyph: outlined for light, solid for dark.
    pub fn to_unicode(self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::King) => '♔',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Dark, PieceKind::King) => '♚',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Pawn) => '♟',
        }
    }
}

/// Handle of a piece inside the board's piece store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Four independent castling flags. Recorded only; castling is never executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn make_square(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_map_to_kind_and_color() {
        let cases = [
            ('k', PieceKind::King),
            ('q', PieceKind::Queen),
            ('b', PieceKind::Bishop),
            ('n', PieceKind::Knight),
            ('r', PieceKind::Rook),
            ('p', PieceKind::Pawn),
        ];

        for (letter, kind) in cases {
            let dark = Piece::from_fen_char(letter).expect("lowercase letter is a piece");
            assert_eq!(dark, Piece::new(kind, Color::Dark));

            let light = Piece::from_fen_char(letter.to_ascii_uppercase())
                .expect("uppercase letter is a piece");
            assert_eq!(light, Piece::new(kind, Color::Light));

            assert_eq!(light.to_fen_char(), letter.to_ascii_uppercase());
            assert_eq!(dark.to_fen_char(), letter);
        }
    }

    #[test]
    fn non_piece_characters_are_not_pieces() {
        for ch in ['1', '8', '/', 'x', 'Z', ' '] {
            assert_eq!(Piece::from_fen_char(ch), None, "{ch:?} should not decode");
        }
    }

    #[test]
    fn square_helpers_agree_with_index_formula() {
        assert_eq!(make_square(0, 0), 0);
        assert_eq!(make_square(7, 7), 63);
        assert_eq!(make_square(4, 3), 28);
        assert_eq!(square_file(28), 4);
        assert_eq!(square_rank(28), 3);
    }
}
