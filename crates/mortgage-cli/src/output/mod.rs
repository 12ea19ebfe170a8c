pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// A header row plus data rows, ready for any grid formatter.
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Recognise payloads that are already tabular.
///
/// Two shapes qualify: an amortization table (`headers` + `rows`) and chart
/// data (`labels` + `series`), which is transposed to one row per label.
pub fn as_grid(value: &Value) -> Option<Grid> {
    let map = value.as_object()?;

    if let (Some(Value::Array(headers)), Some(Value::Array(rows))) =
        (map.get("headers"), map.get("rows"))
    {
        let headers = headers.iter().map(format_cell).collect();
        let rows = rows
            .iter()
            .filter_map(Value::as_object)
            .map(|row| {
                let mut cells: Vec<String> = Vec::with_capacity(row.len() + 1);
                // A row without a year cell still occupies the Year column.
                if !row.contains_key("year") {
                    cells.push(String::new());
                }
                cells.extend(row.values().map(format_cell));
                cells
            })
            .collect();
        return Some(Grid { headers, rows });
    }

    if let (Some(Value::Array(labels)), Some(Value::Array(series))) =
        (map.get("labels"), map.get("series"))
    {
        let mut headers = vec!["Period".to_string()];
        headers.extend(
            series
                .iter()
                .map(|s| s.get("name").map(format_cell).unwrap_or_default()),
        );
        let rows = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut cells = vec![format_cell(label)];
                cells.extend(series.iter().map(|s| {
                    s.get("values")
                        .and_then(|v| v.get(i))
                        .map(format_cell)
                        .unwrap_or_default()
                }));
                cells
            })
            .collect();
        return Some(Grid { headers, rows });
    }

    None
}

/// Render a single value as cell text.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_cell).collect();
            items.join(", ")
        }
        Value::Object(map) => match map.get("label") {
            Some(Value::String(label)) => label.clone(),
            _ => serde_json::to_string(value).unwrap_or_default(),
        },
    }
}
