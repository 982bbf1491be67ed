//! Command-line interface for running puzzle solvers over input files

use crate::io::configuration::INPUT_EXTENSION;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::input::read_text;
use crate::io::progress::ProgressManager;
use crate::puzzles;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Command-line arguments for the puzzle runner
#[derive(Parser)]
#[command(name = "puzzlekit")]
#[command(
    author,
    version,
    about = "Run daily puzzle solvers against input files"
)]
pub struct Cli {
    /// Puzzle to solve
    #[arg(value_enum)]
    pub puzzle: PuzzleKind,

    /// Input files or directories to process
    #[arg(value_name = "TARGET", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Selector for the available puzzle solvers
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleKind {
    /// Count dial pointer passes over position zero
    Dial,
    /// Sum pairwise distances between sorted location columns
    PairDistance,
    /// Weight left location ids by right-column occurrences
    Similarity,
    /// Sum ids whose decimal form is a repeated pattern
    RepeatedIds,
    /// Sum the best digit subsequence of every line
    BestDigits,
}

impl PuzzleKind {
    /// Run the selected solver on raw input text
    ///
    /// # Errors
    ///
    /// Propagates the solver's parse errors.
    pub fn solve(self, input: &str) -> Result<i64> {
        match self {
            Self::Dial => puzzles::dial::solve(input),
            Self::PairDistance => puzzles::location_pairs::total_distance(input),
            Self::Similarity => puzzles::location_pairs::similarity_score(input),
            Self::RepeatedIds => puzzles::repeated_ids::solve(input),
            Self::BestDigits => puzzles::digit_selection::solve(input),
        }
    }
}

/// Orchestrates solving one puzzle over a batch of input files
pub struct PuzzleRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleRunner {
    /// Create a new runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve the selected puzzle for every collected input file
    ///
    /// Prints one answer per file; a single input prints just the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if target collection, reading, or solving fails.
    pub fn run(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut answers = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(file);
            }

            let contents = read_text(file)?;
            let answer = self.cli.puzzle.solve(&contents)?;
            answers.push((file.clone(), answer));

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        // Answers print after progress teardown so bars never interleave
        // Allow print for the tool's one piece of real output
        #[allow(clippy::print_stdout)]
        for (file, answer) in &answers {
            if answers.len() == 1 {
                println!("{answer}");
            } else {
                println!("{}: {answer}", file.display());
            }
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for target in &self.cli.inputs {
            if target.is_file() {
                files.push(target.clone());
            } else if target.is_dir() {
                files.extend(Self::collect_directory(target)?);
            } else {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target must be an existing file or directory",
                ));
            }
        }
        Ok(files)
    }

    fn collect_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|source| PuzzleError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read_dir",
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| PuzzleError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read_dir",
                    source,
                })?
                .path();
            if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
