use serde_json::{Map, Value};
use std::io;

use super::{as_grid, format_cell};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(grid) = as_grid(value) {
        let _ = wtr.write_record(&grid.headers);
        for row in &grid.rows {
            let _ = wtr.write_record(row);
        }
        let _ = wtr.flush();
        return;
    }

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => write_object_csv(&mut wtr, result),
            _ => write_object_csv(&mut wtr, map),
        },
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_cell(value)]);
        }
    }

    let _ = wtr.flush();
}

/// A result carrying a schedule is written as that schedule; anything else
/// becomes two-column field/value rows.
fn write_object_csv(wtr: &mut StdoutWriter<'_>, map: &Map<String, Value>) {
    let listing = map.values().find_map(|v| match v {
        Value::Array(items) if items.first().is_some_and(Value::is_object) => Some(items),
        _ => None,
    });

    if let Some(items) = listing {
        write_array_csv(wtr, items);
        return;
    }

    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_cell(val)]);
    }
}

fn write_array_csv(wtr: &mut StdoutWriter<'_>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_cell).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_cell(item)]);
        }
    }
}
