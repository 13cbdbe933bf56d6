// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO serialisation formats beyond the serde derives
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no files needed)
//   - Easy to understand (no pipeline noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single question/context/response example
pub mod data_node;

// The columnar container of examples, with its invariant
pub mod dataset;

// Typed errors for validation and row access
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
