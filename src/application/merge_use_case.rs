// ============================================================
// Layer 2 — MergeUseCase
// ============================================================
// Concatenates two dataset files into one:
//
//   Step 1: Load the left dataset   (Layer 4)
//   Step 2: Load the right dataset  (Layer 4)
//   Step 3: Concatenate with `+`    (Layer 3)
//   Step 4: Write the result        (Layer 4)
//
// Inputs may be any mix of .csv and .jsonl; the output is
// always JSONL so it round-trips through JsonlLoader.
// Concatenation is out-of-place — neither input dataset
// (nor input file) is touched.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::path::Path;

use crate::data::loader::{source_for, write_jsonl};

// ─── Merge Configuration ──────────────────────────────────────────────────────
/// Which files to merge and where the result goes.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Path to the dataset whose rows come first
    pub left: String,

    /// Path to the dataset whose rows come second
    pub right: String,

    /// Path of the JSONL file to write
    pub out: String,
}

// ─── MergeUseCase ─────────────────────────────────────────────────────────────
pub struct MergeUseCase {
    config: MergeConfig,
}

impl MergeUseCase {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Load both datasets, concatenate, write JSONL.
    /// Returns the number of rows written.
    pub fn execute(&self) -> Result<usize> {
        let left = source_for(self.config.left.as_str())?
            .load()
            .with_context(|| format!("loading '{}'", self.config.left))?;
        let right = source_for(self.config.right.as_str())?
            .load()
            .with_context(|| format!("loading '{}'", self.config.right))?;

        tracing::info!(
            "Merging {} rows + {} rows",
            left.len(),
            right.len()
        );

        // Left rows first, right rows second; operands untouched
        let combined = &left + &right;

        write_jsonl(&combined, Path::new(&self.config.out))?;
        Ok(combined.len())
    }
}
