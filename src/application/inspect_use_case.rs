// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads one dataset file and reports what is in it:
//
//   Step 1: Pick the loader from the file extension (Layer 4)
//   Step 2: Load and validate the dataset            (Layer 4/3)
//   Step 3: Report row count, and optionally one row
//
// Printing happens here via the returned report string — the
// CLI decides where it goes (stdout today).
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};

use crate::data::loader::source_for;
use crate::domain::dataset::Dataset;

// ─── Inspect Configuration ────────────────────────────────────────────────────
/// What to inspect. Built from CLI args by the presentation layer.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Path to the .csv or .jsonl dataset file
    pub file: String,

    /// Row index to print in full, if any
    pub row: Option<usize>,
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Load the dataset and build a human-readable report.
    pub fn execute(&self) -> Result<String> {
        tracing::info!("Inspecting dataset file: {}", self.config.file);

        let dataset = source_for(self.config.file.as_str())?.load()?;

        let mut report = render_summary(&self.config.file, &dataset);

        if let Some(index) = self.config.row {
            report.push_str(&render_row(&dataset, index)?);
        }

        Ok(report)
    }
}

/// Summarise a dataset: row count, total context passages, and
/// a data-quality note when any row has an empty response —
/// those rows would score as unanswered in an evaluation run.
fn render_summary(file: &str, dataset: &Dataset) -> String {
    let passages: usize = dataset.contexts().iter().map(Vec::len).sum();

    let mut out = format!(
        "{file}: {} rows, {passages} context passages\n",
        dataset.len()
    );

    let empty_responses = dataset
        .responses()
        .iter()
        .filter(|r| r.trim().is_empty())
        .count();
    if empty_responses > 0 {
        out.push_str(&format!(
            "  warning: {empty_responses} rows have an empty response\n"
        ));
    }

    out
}

/// Render one row of a dataset for display.
/// An out-of-range index surfaces the domain's typed error,
/// wrapped with the file-level context the user typed.
fn render_row(dataset: &Dataset, index: usize) -> Result<String> {
    let node = dataset
        .node(index)
        .with_context(|| format!("cannot show row {index}"))?;

    let mut out = format!("row {index}\n  question: {}\n", node.question);
    for passage in &node.context {
        out.push_str(&format!("  context:  {passage}\n"));
    }
    out.push_str(&format!("  response: {}\n", node.response));
    Ok(out)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::data_node::DataNode;

    fn one_row() -> Dataset {
        let mut d = Dataset::empty();
        d.append(DataNode::new(
            "Q1",
            vec!["C1a".to_string(), "C1b".to_string()],
            "R1",
        ));
        d
    }

    #[test]
    fn test_summary_counts_rows_and_passages() {
        let text = render_summary("d.jsonl", &one_row());
        assert!(text.contains("d.jsonl: 1 rows, 2 context passages"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_summary_flags_empty_responses() {
        let mut d = one_row();
        d.append(DataNode::new("Q2", vec!["C2".to_string()], ""));
        let text = render_summary("d.jsonl", &d);
        assert!(text.contains("warning: 1 rows have an empty response"));
    }

    #[test]
    fn test_render_row_lists_every_passage() {
        let text = render_row(&one_row(), 0).unwrap();
        assert!(text.contains("question: Q1"));
        assert!(text.contains("context:  C1a"));
        assert!(text.contains("context:  C1b"));
        assert!(text.contains("response: R1"));
    }

    #[test]
    fn test_render_row_out_of_range_errors() {
        let err = render_row(&one_row(), 5).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn test_execute_reports_row_count() {
        let path = std::env::temp_dir().join("rag_dataset_inspect_test.jsonl");
        std::fs::write(
            &path,
            "{\"question\":\"Q1\",\"context\":[\"C1\"],\"response\":\"R1\"}\n",
        )
        .unwrap();

        let use_case = InspectUseCase::new(InspectConfig {
            file: path.display().to_string(),
            row:  None,
        });
        let report = use_case.execute().unwrap();
        std::fs::remove_file(&path).ok();

        assert!(report.contains("1 rows"));
    }
}
