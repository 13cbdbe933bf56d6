// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything between files on disk and
// a validated in-memory Dataset.
//
// The pipeline flows in this order:
//
//   .csv / .jsonl file
//       │
//       ▼
//   csv / serde_json   → raw records
//       │
//       ▼
//   cell (eval_cell)   → serialized list reprs become lists
//       │
//       ▼
//   loader             → rows appended into a Dataset
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §7 (Module System)
//            Rust Book §13 (Iterators and Closures)

/// Normalises raw cell values (serialized list reprs → lists)
pub mod cell;

/// Minimal quoted-field CSV record reader
pub mod csv;

/// CsvLoader and JsonlLoader (DatasetSource impls) + JSONL writer
pub mod loader;
