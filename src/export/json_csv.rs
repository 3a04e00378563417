//! JSON to CSV conversion
//!
//! Accepts a list of objects (or a single object). Columns are the union of
//! all keys in first-seen order, after a leading 1-based index column.

use super::bom_csv_writer;
use crate::error::{Result, ToolkitError};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_INDEX_COLUMN: &str = "index";

/// Convert `input` JSON to CSV at `output`.
///
/// # Returns
/// Number of data rows written. An empty list writes no file.
pub fn json_to_csv(input: &Path, output: &Path, index_column: &str) -> Result<usize> {
    if !input.is_file() {
        return Err(ToolkitError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    let data: Value = serde_json::from_str(&content)?;
    let items = as_objects(data)?;

    if items.is_empty() {
        warn!("JSON file is empty: {}", input.display());
        return Ok(0);
    }

    let columns = collect_columns(&items, index_column);

    let mut writer = bom_csv_writer(output)?;
    writer.write_record(&columns)?;

    for (index, item) in items.iter().enumerate() {
        let row = columns.iter().enumerate().map(|(i, column)| {
            if i == 0 {
                (index + 1).to_string()
            } else {
                item.get(column).map(render_cell).unwrap_or_default()
            }
        });
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(items.len())
}

/// A lone object becomes a one-element list; every element must be an object.
fn as_objects(data: Value) -> Result<Vec<Map<String, Value>>> {
    let items = match data {
        Value::Array(items) => items,
        other => vec![other],
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(ToolkitError::InvalidJson(format!(
                "element {} is not an object: {}",
                i + 1,
                other
            ))),
        })
        .collect()
}

/// A data key that collides with the index column is dropped.
fn collect_columns(items: &[Map<String, Value>], index_column: &str) -> Vec<String> {
    let mut columns = vec![index_column.to_string()];
    let mut seen: HashSet<&str> = HashSet::from([index_column]);

    for item in items {
        for key in item.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }

    columns
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => join_lines(s),
        other => other.to_string(),
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Join the lines of `text` with single spaces. `\r\n` is one break and a
/// trailing break adds nothing.
fn join_lines(text: &str) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if is_line_break(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(" ")
}
