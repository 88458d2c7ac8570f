use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fen_board::chess_errors::AlgebraicRelocationError;
use fen_board::game_state::chess_rules::STARTING_POSITION_FEN;
use fen_board::game_state::game_state::GameState;
use fen_board::move_generation::relocation::{apply_algebraic_relocation, Relocation};
use fen_board::utils::algebraic::square_to_algebraic;
use fen_board::utils::long_algebraic::split_coordinate_pair;
use fen_board::utils::render_game_state::render_game_state;

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Load a chess position from FEN and move pieces between squares.
///
/// Moves are typed as `e2e4` or `e2 e4`. Only ownership and self-capture are
/// checked; type `fen` to print the position, `quit` or send EOF to leave.
#[derive(Parser, Debug)]
#[command(name = "fen_board", version)]
struct Args {
    /// The FEN representation of the board.
    #[arg(default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Comma-separated moves applied before the session starts, e.g. `e2e4,e7e5`.
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,

    /// Print the board after `--moves` and exit without reading stdin.
    #[arg(long)]
    no_interactive: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match run(&args, stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Drive one session and return the process exit status.
fn run(
    args: &Args,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    let mut game = match GameState::from_fen(&args.fen) {
        Ok(game) => game,
        Err(reason) => {
            writeln!(err, "Error while parsing FEN: {reason}")?;
            return Ok(EXIT_FAILURE);
        }
    };
    info!(fen = %game.get_fen(), "session started");

    for text in &args.moves {
        if let Err(reason) = play_move(&mut game, text) {
            writeln!(err, "Move '{text}' not applied: {reason}")?;
            return Ok(EXIT_FAILURE);
        }
    }

    writeln!(out, "{}", render_game_state(&game))?;
    if args.no_interactive {
        return Ok(EXIT_OK);
    }

    let mut lines = input.lines();

    loop {
        write!(out, "{}> ", if game.turn_is_white() { "W" } else { "B" })?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "fen" => {
                writeln!(out, "{}", game.get_fen())?;
                continue;
            }
            _ => {}
        }

        match play_move(&mut game, line) {
            Ok(relocation) => {
                writeln!(out, "{}", describe(&relocation))?;
                writeln!(out, "{}", render_game_state(&game))?;
            }
            Err(reason) => writeln!(out, "Move not applied: {reason}")?,
        }
    }

    info!(fen = %game.get_fen(), "session ended");
    Ok(EXIT_OK)
}

fn play_move(game: &mut GameState, text: &str) -> Result<Relocation, AlgebraicRelocationError> {
    let (from, to) = split_coordinate_pair(text)?;
    apply_algebraic_relocation(game, from, to)
}

fn describe(relocation: &Relocation) -> String {
    let name = |sq| square_to_algebraic(sq).unwrap_or_else(|_| "??".to_owned());
    let mut text = format!(
        "{} {}{}",
        relocation.moved.to_unicode(),
        name(relocation.from),
        name(relocation.to)
    );
    if let Some(captured) = relocation.captured {
        text.push_str(&format!(" x{}", captured.to_unicode()));
    }
    text
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{run, Args, EXIT_FAILURE, EXIT_OK};

    struct Session {
        status: u8,
        out: String,
        err: String,
    }

    fn session(argv: &[&str], script: &str) -> Session {
        let args = Args::parse_from(std::iter::once("fen_board").chain(argv.iter().copied()));
        let mut out = Vec::new();
        let mut err = Vec::new();

        let status = run(&args, script.as_bytes(), &mut out, &mut err).expect("in-memory I/O");

        Session {
            status,
            out: String::from_utf8(out).expect("output is UTF-8"),
            err: String::from_utf8(err).expect("error output is UTF-8"),
        }
    }

    #[test]
    fn bad_fen_exits_with_failure_and_reason() {
        let result = session(&["8/8/8/8/8/8/8/8 x - - 0 1"], "");

        assert_eq!(result.status, EXIT_FAILURE);
        assert_eq!(
            result.err,
            "Error while parsing FEN: Invalid side-to-move field: x\n"
        );
        assert!(result.out.is_empty());
    }

    #[test]
    fn scripted_moves_then_fen_then_quit() {
        let result = session(&[], "e2e4\ne7e4\nfen\nquit\n");

        assert_eq!(result.status, EXIT_OK);
        assert!(result.err.is_empty());
        assert!(result
            .out
            .contains("rnbqkbnr/pppp1ppp/8/8/4p3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1\n"));
        assert!(result.out.contains("♙ e2e4\n"));
        assert!(result.out.contains("♟ e7e4 x♙\n"));
        assert!(result.out.ends_with("W> "));
    }

    #[test]
    fn rejected_and_malformed_moves_are_reported_and_loop_continues() {
        let result = session(&[], "e7e5\nd1d2\nz9z9\n\ne2 e4\n");

        assert_eq!(result.status, EXIT_OK);
        assert!(result.out.contains(
            "Move not applied: piece on source square does not belong to the side to move\n"
        ));
        assert!(result
            .out
            .contains("Move not applied: destination square holds a piece of the same color\n"));
        assert!(result.out.contains("Move not applied: Invalid move input: z9z9\n"));
        assert!(result.out.contains("♙ e2e4\n"));
        // EOF ends the session on black's prompt.
        assert!(result.out.ends_with("B> \n"));
    }

    #[test]
    fn upfront_moves_are_applied_before_the_board_is_shown() {
        let result = session(&["--moves", "e2e4,e7e5", "--no-interactive"], "e2e4\n");

        assert_eq!(result.status, EXIT_OK);
        assert!(result.err.is_empty());
        assert!(result.out.ends_with("W ep:- half:0 full:1\n"));
        assert!(result.out.contains("5 · · · · ♟ · · · 5"));
        assert!(result.out.contains("4 · · · · ♙ · · · 4"));
        // Stdin is never read with --no-interactive.
        assert!(!result.out.contains("> "));
    }

    #[test]
    fn rejected_upfront_move_fails_the_run() {
        let result = session(&["--moves", "e2e4,e2e4", "--no-interactive"], "");

        assert_eq!(result.status, EXIT_FAILURE);
        assert_eq!(result.err, "Move 'e2e4' not applied: no piece on source square\n");
        assert!(result.out.is_empty());
    }

    #[test]
    fn custom_fen_argument_sets_the_start_position() {
        let result = session(&["4k3/8/8/8/8/8/8/4K3 b - - 3 20"], "fen\nexit\n");

        assert_eq!(result.status, EXIT_OK);
        assert!(result.out.contains("B ep:- half:3 full:20\n"));
        assert!(result.out.contains("4k3/8/8/8/8/8/8/4K3 b - - 3 20\n"));
    }
}
