// ============================================================
// Layer 4 — Cell Evaluation
// ============================================================
// Normalises one raw cell value on its way into a dataset.
//
// Context cells arrive in two shapes depending on the source:
//   - JSON lines give us a real array of strings
//   - CSV exports give us the stringified Python list repr,
//     e.g. the single cell text  ['passage one', 'passage two']
//
// eval_cell turns the second shape back into a list. The repr
// format puts a quote on each side of every element, so the
// delimiters are:
//
//   [ ' elem ' ,   ' elem ' ]
//   ^^^         ^^^^       ^^
//   strip 2     split on   strip 2
//   from front  quote,     from back
//               comma,
//               space,
//               quote
//
// That is why exactly TWO characters are dropped from each end
// (the bracket and the opening/closing quote) and why the split
// separator is the four characters  ' ,  space  '  — the element
// quotes belong to the delimiters, not the elements.
//
// Malformed bracket syntax raises no error: the split is
// best-effort and whatever falls out becomes the elements.
// Cells that never looked like a list pass through untouched.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            Rust Book §8 (Strings in Rust)

use serde::{Deserialize, Serialize};

/// A raw cell value: either already a list of strings or a
/// single scalar string. Serde's untagged mode lets a JSON
/// field deserialise into whichever shape it actually is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// The cell is a real list already
    List(Vec<String>),

    /// The cell is one string (possibly a serialized list repr)
    Scalar(String),
}

impl CellValue {
    /// Flatten to a list of strings: a list stays itself,
    /// a scalar becomes a single-element list. Used for the
    /// context column, which is always list-shaped in a dataset.
    pub fn into_list(self) -> Vec<String> {
        match self {
            CellValue::List(items)  => items,
            CellValue::Scalar(text) => vec![text],
        }
    }
}

/// Evaluate one cell value.
///
/// Lists pass through unchanged. A scalar that starts with `[`
/// and ends with `]` is decoded as a serialized list repr:
/// drop two characters from each end, split on `', '` (quote,
/// comma, space, quote). Any other scalar is returned as-is.
///
/// Example:
///   eval_cell(Scalar("['a', 'b']")) == List(["a", "b"])
pub fn eval_cell(value: CellValue) -> CellValue {
    let raw = match value {
        CellValue::List(items)  => return CellValue::List(items),
        CellValue::Scalar(text) => text,
    };

    if !(raw.starts_with('[') && raw.ends_with(']') && raw.len() >= 2) {
        return CellValue::Scalar(raw);
    }

    // Slice by characters, not bytes, so multi-byte text in the
    // first or last element cannot split a UTF-8 sequence.
    let chars: Vec<char> = raw.chars().collect();
    let inner: String = if chars.len() >= 4 {
        chars[2..chars.len() - 2].iter().collect()
    } else {
        // Degenerate reprs like "[]" — nothing between the delimiters
        String::new()
    };

    CellValue::List(inner.split("', '").map(str::to_string).collect())
}
