// ============================================================
// Layer 4 — Dataset Loaders
// ============================================================
// Hydrates a Dataset from the two file formats evaluation
// runs exchange:
//
//   1. CSV   — a header row naming question/context/response
//              columns (any order, extra columns ignored);
//              context cells are serialized list reprs that
//              go through eval_cell on the way in
//   2. JSONL — one JSON object per line with question,
//              context (a string OR an array of strings)
//              and response fields
//
// Both loaders implement the DatasetSource trait from Layer 3,
// so the application layer never knows which format it got.
// Both build the dataset row by row through Dataset::append,
// which keeps the equal-length invariant holding at every
// intermediate step, and a malformed record is a hard error
// naming the offending line — a dataset with silently dropped
// rows would skew every metric computed from it.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::cell::{eval_cell, CellValue};
use crate::data::csv::parse_records;
use crate::domain::data_node::DataNode;
use crate::domain::dataset::Dataset;
use crate::domain::traits::DatasetSource;

// ─── Format Detection ─────────────────────────────────────────────────────────

/// The on-disk formats a dataset can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Jsonl,
}

impl DataFormat {
    /// Guess the format from the file extension.
    /// `.csv` → Csv; `.jsonl` / `.json` → Jsonl.
    pub fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(DataFormat::Csv),
            Some("jsonl") | Some("json") => Ok(DataFormat::Jsonl),
            other => bail!(
                "cannot infer dataset format of '{}' (extension {:?}); \
                 expected .csv or .jsonl",
                path.display(),
                other
            ),
        }
    }
}

/// Build the right loader for a path, detecting the format
/// from the extension. The caller only sees a DatasetSource.
pub fn source_for(path: impl Into<PathBuf>) -> Result<Box<dyn DatasetSource>> {
    let path = path.into();
    match DataFormat::detect(&path)? {
        DataFormat::Csv   => Ok(Box::new(CsvLoader::new(path))),
        DataFormat::Jsonl => Ok(Box::new(JsonlLoader::new(path))),
    }
}

// ─── CSV Loader ───────────────────────────────────────────────────────────────

/// Loads a dataset from a CSV file with a header row.
pub struct CsvLoader {
    /// Path to the .csv file
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvLoader {
    fn load(&self) -> Result<Dataset> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read '{}'", self.path.display()))?;

        let dataset = dataset_from_csv(&text)
            .with_context(|| format!("in CSV file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} rows from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}

/// Parse CSV text (header + data rows) into a Dataset.
/// Split out from the loader so it can be tested without files.
fn dataset_from_csv(text: &str) -> Result<Dataset> {
    let records = parse_records(text)?;

    let Some((header, rows)) = records.split_first() else {
        // An empty file is an empty dataset, not an error
        return Ok(Dataset::empty());
    };

    // Locate the three columns by name; order in the file is free
    let question_col = column(header, "question")?;
    let context_col  = column(header, "context")?;
    let response_col = column(header, "response")?;

    let mut dataset = Dataset::empty();

    for (row_num, row) in rows.iter().enumerate() {
        // Header is line 1, first data row is line 2
        let line = row_num + 2;

        // A blank line parses as one empty field; skip it
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }

        let question = cell(row, question_col, line)?;
        let context  = cell(row, context_col, line)?;
        let response = cell(row, response_col, line)?;

        // The context cell may be a serialized list repr;
        // a plain scalar becomes a one-passage context
        let context = eval_cell(CellValue::Scalar(context)).into_list();

        dataset.append(DataNode::new(question, context, response));
    }

    Ok(dataset)
}

/// Find the index of a named header column.
fn column(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.trim() == name)
        .with_context(|| format!("CSV header has no '{name}' column"))
}

/// Fetch one cell of a data row, erroring if the row is short.
fn cell(row: &[String], index: usize, line: usize) -> Result<String> {
    row.get(index)
        .cloned()
        .with_context(|| format!("line {line}: row has only {} fields", row.len()))
}

// ─── JSONL Loader ─────────────────────────────────────────────────────────────

/// The shape of one JSON-lines record. Context accepts either
/// a plain string or an array of strings via CellValue's
/// untagged deserialisation.
#[derive(Debug, Deserialize)]
struct JsonlRecord {
    question: String,
    context:  CellValue,
    response: String,
}

/// Loads a dataset from a JSON-lines file.
pub struct JsonlLoader {
    /// Path to the .jsonl file
    path: PathBuf,
}

impl JsonlLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonlLoader {
    fn load(&self) -> Result<Dataset> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read '{}'", self.path.display()))?;

        let dataset = dataset_from_jsonl(&text)
            .with_context(|| format!("in JSONL file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} rows from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}

/// Parse JSON-lines text into a Dataset.
/// Blank lines are skipped; a malformed line is a hard error.
fn dataset_from_jsonl(text: &str) -> Result<Dataset> {
    let mut dataset = Dataset::empty();

    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: JsonlRecord = serde_json::from_str(line)
            .with_context(|| format!("malformed JSON on line {}", line_num + 1))?;

        // String contexts may still be serialized list reprs
        let context = eval_cell(record.context).into_list();

        dataset.append(DataNode::new(record.question, context, record.response));
    }

    Ok(dataset)
}

// ─── JSONL Writer ─────────────────────────────────────────────────────────────

/// Write a dataset as JSON lines, one DataNode object per row.
/// This is the output side of the merge command; the result is
/// loadable by JsonlLoader unchanged.
pub fn write_jsonl(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut out = String::new();

    for node in dataset {
        let line = serde_json::to_string(&node).context("cannot serialise row")?;
        out.push_str(&line);
        out.push('\n');
    }

    fs::write(path, out)
        .with_context(|| format!("cannot write '{}'", path.display()))?;

    tracing::info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}
