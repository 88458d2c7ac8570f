//! Crate root module declarations for the FEN board project.
//!
//! This file exposes the decoded board state, the ownership-gated relocation
//! and the notation helpers (coordinates, FEN decode/encode, text rendering)
//! so the binary, tests and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_store;
}

pub mod move_generation {
    pub mod relocation;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
