use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mcu32_machines::Board;

/// Runs a flat binary program on the 32-bit machine until it halts.
#[derive(Parser)]
#[command(name = "mcu32", version, about)]
struct Cli {
    /// Path to the flat binary program to load into ROM.
    program: PathBuf,

    /// Print a per-instruction fetch/decode trace to stdout.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut board = Board::new().with_verbosity(cli.verbose);

    if let Err(e) = board.load_program(&cli.program) {
        eprintln!("mcu32: {e}");
        return ExitCode::FAILURE;
    }

    board.run();
    ExitCode::SUCCESS
}
