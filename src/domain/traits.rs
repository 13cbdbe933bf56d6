// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvLoader implements DatasetSource
//   - JsonlLoader implements DatasetSource
//   - The application layer only sees DatasetSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::dataset::Dataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can hydrate a full dataset from somewhere.
///
/// Implementations:
///   - CsvLoader   → question,context,response columns in a CSV file
///   - JsonlLoader → one JSON record per line
///   - (future) a loader backed by an evaluation service
pub trait DatasetSource {
    /// Load the complete dataset from this source.
    /// The returned dataset already satisfies the equal-length
    /// invariant — loaders never hand back unchecked columns.
    fn load(&self) -> Result<Dataset>;
}
