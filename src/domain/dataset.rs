// ============================================================
// Layer 3 — Dataset Domain Type
// ============================================================
// A columnar container of evaluation examples.
//
// Storage is three parallel vectors rather than one
// Vec<DataNode>:
//
//   question: ["Q1", "Q2", ...]
//   context:  [["C1a","C1b"], ["C2a"], ...]
//   response: ["R1", "R2", ...]
//
// Row i across the three vectors composes one logical
// DataNode. The single structural invariant is that the
// three vectors always have the same length. It is checked
// once, inside the constructor, before a Dataset value can
// reach a caller — so every Dataset you can hold is valid,
// and every mutator only has to preserve the invariant,
// never re-establish it.
//
// Row access builds a fresh DataNode each call (no caching,
// no interior mutability), so the container stays a plain
// owned value with ordinary borrow-checker discipline:
// you cannot append while an iterator is alive, which is
// exactly the single-owner mutation model we want.
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §13 (Iterators)

use crate::domain::data_node::DataNode;
use crate::domain::error::DatasetError;
use std::ops::Add;

/// A set of question/context/response rows, stored column-wise.
///
/// Fields are private: handing out `&mut Vec<String>` would let a
/// caller grow one column and break the equal-length invariant.
/// Read access goes through the slice accessors; growth goes
/// through [`Dataset::append`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// One question per row
    question: Vec<String>,

    /// One list of context passages per row
    context: Vec<Vec<String>>,

    /// One response per row
    response: Vec<String>,
}

impl Dataset {
    /// Build a dataset from three equal-length columns.
    ///
    /// Validation runs exactly once, here, after the fields are
    /// assigned and before the value is returned — a caller can
    /// never observe a half-built dataset with uneven columns.
    pub fn new(
        question: Vec<String>,
        context:  Vec<Vec<String>>,
        response: Vec<String>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            question,
            context,
            response,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// An empty dataset — zero rows, trivially valid.
    /// Loaders start from this and `append` one row per record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The structural check the constructor runs: all three
    /// columns must agree on the row count. Public so callers
    /// that rebuilt a dataset from untrusted parts can re-check.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.question.len() != self.context.len()
            || self.question.len() != self.response.len()
        {
            return Err(DatasetError::LengthMismatch {
                question: self.question.len(),
                context:  self.context.len(),
                response: self.response.len(),
            });
        }
        Ok(())
    }

    /// Number of rows. The invariant makes any column's length
    /// the row count; the question column is the canonical one.
    pub fn len(&self) -> usize {
        self.question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_empty()
    }

    /// Build the DataNode for row `index`, or None past the end.
    /// A fresh node is constructed on every call — the dataset
    /// itself never hands out views into its columns as a node.
    pub fn get(&self, index: usize) -> Option<DataNode> {
        if index >= self.len() {
            return None;
        }
        Some(DataNode {
            question: self.question[index].clone(),
            context:  self.context[index].clone(),
            response: self.response[index].clone(),
        })
    }

    /// Like `get`, but surfaces the out-of-range case as a typed
    /// error for callers that need to report it (e.g. the CLI's
    /// `--row` flag) rather than branch on None.
    pub fn node(&self, index: usize) -> Result<DataNode, DatasetError> {
        self.get(index).ok_or(DatasetError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Iterate the rows in order, yielding one DataNode each.
    ///
    /// The iterator is just a row counter over `get`, so it is
    /// lazy and restartable — each call to `iter` starts a fresh
    /// pass from row 0. It holds a shared borrow of the dataset,
    /// so mutating while iterating is a compile error, not a
    /// runtime hazard.
    pub fn iter(&self) -> Rows<'_> {
        Rows {
            dataset: self,
            index:   0,
        }
    }

    /// Append one row. All three columns grow by one element,
    /// so the invariant holds again when this returns — Vec::push
    /// cannot partially fail under normal conditions.
    pub fn append(&mut self, node: DataNode) {
        self.question.push(node.question);
        self.context.push(node.context);
        self.response.push(node.response);
    }

    /// The question column, one entry per row.
    pub fn questions(&self) -> &[String] {
        &self.question
    }

    /// The context column, one passage list per row.
    pub fn contexts(&self) -> &[Vec<String>] {
        &self.context
    }

    /// The response column, one entry per row.
    pub fn responses(&self) -> &[String] {
        &self.response
    }
}

// ─── Concatenation ────────────────────────────────────────────────────────────
// `&a + &b` builds a new dataset with a's rows followed by b's
// rows. Both operands are read-only here, so they stay usable
// (and unchanged) afterwards. Two valid operands concatenate
// column-wise to equal-length columns, so the result satisfies
// the invariant by construction.

impl Add for &Dataset {
    type Output = Dataset;

    fn add(self, other: &Dataset) -> Dataset {
        let mut question = self.question.clone();
        let mut context  = self.context.clone();
        let mut response = self.response.clone();
        question.extend_from_slice(&other.question);
        context.extend_from_slice(&other.context);
        response.extend_from_slice(&other.response);
        Dataset {
            question,
            context,
            response,
        }
    }
}

/// By-value form for callers done with the operands.
impl Add for Dataset {
    type Output = Dataset;

    fn add(self, other: Dataset) -> Dataset {
        &self + &other
    }
}

// ─── Row Iterator ─────────────────────────────────────────────────────────────

/// Index-driven iterator over a dataset's rows.
/// No hidden state beyond the next row index.
pub struct Rows<'a> {
    dataset: &'a Dataset,
    index:   usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = DataNode;

    fn next(&mut self) -> Option<DataNode> {
        let node = self.dataset.get(self.index)?;
        self.index += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

impl<'a> IntoIterator for &'a Dataset {
    type Item = DataNode;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Reference: Rust Book §11 (Writing Automated Tests)
#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a dataset of n rows "Q1".."Qn" / ["C1"].. / "R1"..
    fn sample(n: usize) -> Dataset {
        let question = (1..=n).map(|i| format!("Q{i}")).collect();
        let context  = (1..=n).map(|i| vec![format!("C{i}")]).collect();
        let response = (1..=n).map(|i| format!("R{i}")).collect();
        Dataset::new(question, context, response).unwrap()
    }

    #[test]
    fn test_construction_with_equal_lengths() {
        let d = sample(3);
        assert_eq!(d.len(), 3);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let d = Dataset::empty();
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_construction_rejects_uneven_columns() {
        // Context column has 1 row while the others have 2
        let err = Dataset::new(
            vec!["Q1".into(), "Q2".into()],
            vec![vec!["C1".into()]],
            vec!["R1".into(), "R2".into()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::LengthMismatch {
                question: 2,
                context:  1,
                response: 2,
            }
        );
    }

    #[test]
    fn test_construction_rejects_short_response_column() {
        // Response is the odd one out — all three columns are checked
        let err = Dataset::new(
            vec!["Q1".into(), "Q2".into()],
            vec![vec!["C1".into()], vec!["C2".into()]],
            vec!["R1".into()],
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { .. }));
    }

    #[test]
    fn test_get_composes_the_row() {
        let d = sample(2);
        assert_eq!(
            d.get(1).unwrap(),
            DataNode::new("Q2", vec!["C2".to_string()], "R2")
        );
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let d = sample(1);
        assert!(d.get(0).is_some());
        assert!(d.get(1).is_none());
    }

    #[test]
    fn test_node_out_of_range_is_typed_error() {
        let d = sample(1);
        assert_eq!(
            d.node(1).unwrap_err(),
            DatasetError::IndexOutOfBounds { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_iteration_yields_every_row_in_order() {
        let d = sample(3);
        let nodes: Vec<DataNode> = d.iter().collect();
        assert_eq!(nodes.len(), 3);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(*node, d.get(i).unwrap());
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        // Each call to iter() starts fresh from row 0
        let d = sample(2);
        let first:  Vec<DataNode> = d.iter().collect();
        let second: Vec<DataNode> = d.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_reports_exact_length() {
        let d = sample(4);
        let mut rows = d.iter();
        assert_eq!(rows.len(), 4);
        rows.next();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_append_grows_by_one_row() {
        let mut d = sample(2);
        let node  = DataNode::new("Q3", vec!["C3".to_string()], "R3");
        d.append(node.clone());
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(2).unwrap(), node);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_append_onto_empty() {
        let mut d = Dataset::empty();
        d.append(DataNode::new("Q1", vec!["C1".to_string()], "R1"));
        assert_eq!(d.len(), 1);
        assert_eq!(d.questions(), &["Q1".to_string()]);
    }

    #[test]
    fn test_concatenation_orders_left_then_right() {
        let a = sample(2);
        let b = Dataset::new(
            vec!["Q9".into()],
            vec![vec!["C9".into()]],
            vec!["R9".into()],
        )
        .unwrap();

        let combined = &a + &b;
        assert_eq!(combined.len(), a.len() + b.len());
        // Prefix rows come from a, suffix rows from b
        for i in 0..a.len() {
            assert_eq!(combined.get(i), a.get(i));
        }
        assert_eq!(combined.get(2), b.get(0));
        assert!(combined.validate().is_ok());
    }

    #[test]
    fn test_concatenation_leaves_operands_unchanged() {
        let a      = sample(1);
        let b      = sample(1);
        let before = (a.clone(), b.clone());
        let _      = &a + &b;
        assert_eq!(a, before.0);
        assert_eq!(b, before.1);
    }

    #[test]
    fn test_concatenation_concrete_example() {
        // a = {Q1/[C1]/R1}, b = {Q2/[C2]/R2}: (a+b)[1] is b's row
        let a = Dataset::new(
            vec!["Q1".into()],
            vec![vec!["C1".into()]],
            vec!["R1".into()],
        )
        .unwrap();
        let b = Dataset::new(
            vec!["Q2".into()],
            vec![vec!["C2".into()]],
            vec!["R2".into()],
        )
        .unwrap();

        let combined = a + b;
        assert_eq!(combined.len(), 2);
        assert_eq!(
            combined.get(1).unwrap(),
            DataNode::new("Q2", vec!["C2".to_string()], "R2")
        );
    }

    #[test]
    fn test_for_loop_over_reference() {
        let d = sample(2);
        let mut seen = 0;
        for node in &d {
            assert!(!node.question.is_empty());
            seen += 1;
        }
        assert_eq!(seen, 2);
    }
}
