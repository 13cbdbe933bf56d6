// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (inspecting or merging dataset files).
//
// Rules for this layer:
//   - No parsing or cell-format code here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The inspect workflow: load a file, report its contents
pub mod inspect_use_case;

// The merge workflow: load two files, concatenate, write JSONL
pub mod merge_use_case;
