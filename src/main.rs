//! CLI entry point for running puzzle solvers over input files

use clap::Parser;
use puzzlekit::io::cli::{Cli, PuzzleRunner};

fn main() -> puzzlekit::Result<()> {
    let cli = Cli::parse();
    let mut runner = PuzzleRunner::new(cli);
    runner.run()
}
