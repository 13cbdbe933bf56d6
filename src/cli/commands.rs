// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `merge`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::inspect_use_case::InspectConfig;
use crate::application::merge_use_case::MergeConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the row count of a dataset file, and optionally one row
    Inspect(InspectArgs),

    /// Concatenate two dataset files into one JSONL file
    Merge(MergeArgs),
}

/// All arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset file to inspect (.csv or .jsonl)
    #[arg(long)]
    pub file: String,

    /// Print this row in full (0-based index)
    #[arg(long)]
    pub row: Option<usize>,
}

/// Convert CLI InspectArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            file: a.file,
            row:  a.row,
        }
    }
}

/// All arguments for the `merge` command
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Dataset whose rows come first (.csv or .jsonl)
    #[arg(long)]
    pub left: String,

    /// Dataset whose rows come second (.csv or .jsonl)
    #[arg(long)]
    pub right: String,

    /// Where to write the merged JSONL file
    #[arg(long, default_value = "merged.jsonl")]
    pub out: String,
}

impl From<MergeArgs> for MergeConfig {
    fn from(a: MergeArgs) -> Self {
        MergeConfig {
            left:  a.left,
            right: a.right,
            out:   a.out,
        }
    }
}
