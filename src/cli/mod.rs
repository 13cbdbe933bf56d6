// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `inspect` — loads a dataset file and reports its rows
//   2. `merge`   — concatenates two dataset files into one
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, MergeArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "rag-dataset",
    version = "0.1.0",
    about = "Inspect and merge question/context/response dataset files."
)]
pub struct Cli {
    /// The subcommand to run (inspect or merge)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// The match moves the args out of `self.command`, so the
    /// handlers are associated functions taking only the args —
    /// they need nothing else from the Cli value anyway.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Merge(args)   => Self::run_merge(args),
        }
    }

    /// Handles the `inspect` subcommand.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = InspectUseCase::new(args.into());
        let report   = use_case.execute()?;

        print!("{report}");
        Ok(())
    }

    /// Handles the `merge` subcommand.
    fn run_merge(args: MergeArgs) -> Result<()> {
        use crate::application::merge_use_case::MergeUseCase;

        let out      = args.out.clone();
        let use_case = MergeUseCase::new(args.into());
        let rows     = use_case.execute()?;

        println!("Wrote {rows} rows to {out}");
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// End-to-end through parse + dispatch, so a change to the
// routing (which consumes self.command by value) stays covered.
#[cfg(test)]
mod tests {
    use super::*;

    fn one_row_jsonl() -> &'static str {
        "{\"question\":\"Q1\",\"context\":[\"C1\"],\"response\":\"R1\"}\n"
    }

    #[test]
    fn test_inspect_dispatch_runs_end_to_end() {
        let path = std::env::temp_dir().join("rag_dataset_cli_inspect.jsonl");
        std::fs::write(&path, one_row_jsonl()).unwrap();

        let cli = Cli::try_parse_from([
            "rag-dataset",
            "inspect",
            "--file",
            path.to_str().unwrap(),
            "--row",
            "0",
        ])
        .unwrap();
        let result = cli.run();
        std::fs::remove_file(&path).ok();

        result.unwrap();
    }

    #[test]
    fn test_merge_dispatch_runs_end_to_end() {
        let dir   = std::env::temp_dir();
        let left  = dir.join("rag_dataset_cli_merge_left.jsonl");
        let right = dir.join("rag_dataset_cli_merge_right.jsonl");
        let out   = dir.join("rag_dataset_cli_merge_out.jsonl");
        std::fs::write(&left, one_row_jsonl()).unwrap();
        std::fs::write(&right, one_row_jsonl()).unwrap();

        let cli = Cli::try_parse_from([
            "rag-dataset",
            "merge",
            "--left",
            left.to_str().unwrap(),
            "--right",
            right.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let result = cli.run();

        let written = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_file(&left).ok();
        std::fs::remove_file(&right).ok();
        std::fs::remove_file(&out).ok();

        result.unwrap();
        assert_eq!(written.lines().count(), 2);
    }
}
