// ============================================================
// Layer 4 — CSV Record Reader
// ============================================================
// A small reader for the comma-separated files the evaluation
// exports produce. Handles the parts of RFC 4180 those files
// actually use:
//
//   - fields separated by commas
//   - records separated by \n or \r\n
//   - double-quoted fields, which may contain commas,
//     newlines, and doubled quotes ("" → ")
//
// Context cells are Python list reprs full of commas and
// quotes, so the quoting rules are not optional here — a
// plain split(',') would shred them.
//
// The reader is a single pass over the characters with two
// bits of state: the field built so far and whether we are
// inside quotes. No lookahead beyond one character.
//
// Reference: RFC 4180
//            Rust Book §8 (Strings in Rust)

use anyhow::{bail, Result};

/// Parse CSV text into records of fields.
///
/// Empty input produces no records. A trailing newline does not
/// produce a phantom empty record. An unterminated quote is a
/// hard error — silently guessing where the field ended would
/// corrupt every later row.
pub fn parse_records(input: &str) -> Result<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record:  Vec<String>      = Vec::new();
    let mut field    = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    // A doubled quote inside a quoted field is a
                    // literal quote; a lone quote closes the field
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => {
                record.push(std::mem::take(&mut field));
                // field is now empty, ready for the next cell
            }
            '\r' => {
                // Part of a \r\n record separator — the \n branch
                // finishes the record; a stray \r is just dropped
                if chars.peek() == Some(&'\n') {
                    continue;
                }
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        bail!("unterminated quoted field at end of CSV input");
    }

    // Final record when the file does not end with a newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}
