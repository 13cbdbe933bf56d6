// ============================================================
// Layer 3 — DataNode Domain Type
// ============================================================
// Represents a single evaluation example:
//   - We have a question
//   - We have the context the retriever produced for it
//     (an ordered list of text snippets, not one blob —
//     each snippet is one retrieved passage)
//   - We have the response the generator gave
//
// A DataNode is a value type: two nodes with the same fields
// are the same example, so equality is derived field-wise.
// There are no mutation methods — once built, a node is done.
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One question/context/response triple.
///
/// Produced either directly by a caller or on demand by
/// `Dataset` row access. Serialises as one JSON object,
/// which is exactly the JSON-lines record format the
/// loaders read and the merge command writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataNode {
    /// The natural language question being evaluated
    pub question: String,

    /// The retrieved context passages, in retrieval order
    pub context: Vec<String>,

    /// The generated response under evaluation
    pub response: String,
}

impl DataNode {
    /// Create a new DataNode.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    ///
    /// Example:
    ///   let node = DataNode::new("Q1", vec!["C1".to_string()], "R1");
    pub fn new(
        question: impl Into<String>,
        context:  Vec<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            context,
            response: response.into(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = DataNode::new("Q1", vec!["C1".to_string()], "R1");
        let b = DataNode::new("Q1", vec!["C1".to_string()], "R1");
        let c = DataNode::new("Q2", vec!["C1".to_string()], "R1");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_round_trip() {
        let node = DataNode::new("Q1", vec!["C1".to_string(), "C2".to_string()], "R1");
        let json = serde_json::to_string(&node).unwrap();
        let back: DataNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
