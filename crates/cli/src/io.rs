//! JSON Lines datasets in, JSON feature tables out

use anyhow::{bail, Context};
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use text_features::{CellValue, FeatureTable, TextDataset};

/// Read one JSON object per line into a dataset.
///
/// The header is the key order of the first object. Later rows may omit
/// columns (read as null) but may not add new ones. Blank lines are skipped.
pub fn read_jsonl(reader: impl BufRead) -> anyhow::Result<TextDataset> {
    let mut dataset: Option<TextDataset> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let mut object: Map<String, Value> = serde_json::from_str(&line)
            .with_context(|| format!("line {line_no}: expected a JSON object"))?;

        let dataset = match &mut dataset {
            Some(dataset) => dataset,
            None => dataset.insert(TextDataset::new(object.keys().cloned())?),
        };

        let mut row = Vec::with_capacity(dataset.columns().len());
        for column in dataset.columns() {
            let value = object.remove(column).unwrap_or(Value::Null);
            row.push(to_cell(value).with_context(|| format!("line {line_no}, column {column}"))?);
        }
        if let Some(extra) = object.keys().next() {
            bail!("line {line_no}: unknown column {extra}");
        }

        dataset.push_row(row)?;
    }

    Ok(dataset.unwrap_or_default())
}

fn to_cell(value: Value) -> anyhow::Result<CellValue> {
    Ok(match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Integer(i),
            None => CellValue::Float(n.as_f64().context("number out of range")?),
        },
        Value::String(s) => CellValue::Text(s),
        Value::Array(_) | Value::Object(_) => bail!("nested values are not supported"),
    })
}

/// Write a feature table as pretty-printed JSON
pub fn write_table(table: &FeatureTable, mut writer: impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_keeps_key_order() {
        let input = "{\"text\": \"great\", \"label\": 1}\n\n{\"label\": 0, \"text\": \"bad\"}\n";
        let dataset = read_jsonl(input.as_bytes()).unwrap();
        assert_eq!(dataset.columns(), ["text", "label"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(1, "text"), Some(&CellValue::from("bad")));
    }

    #[test]
    fn test_missing_key_reads_as_null() {
        let input = "{\"text\": \"a\", \"score\": 0.5}\n{\"text\": \"b\"}\n";
        let dataset = read_jsonl(input.as_bytes()).unwrap();
        assert_eq!(dataset.get(0, "score"), Some(&CellValue::Float(0.5)));
        assert_eq!(dataset.get(1, "score"), Some(&CellValue::Null));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let input = "{\"text\": \"a\"}\n{\"text\": \"b\", \"label\": 1}\n";
        let err = read_jsonl(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown column label"));
    }

    #[test]
    fn test_nested_value_rejected() {
        let err = read_jsonl("{\"text\": [\"a\"]}".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("nested values"));
    }

    #[test]
    fn test_empty_input() {
        let dataset = read_jsonl("".as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
    }
}
