use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{as_grid, format_cell, Grid};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(grid) = as_grid(value) {
        print_grid(&grid);
        return;
    }

    match value {
        Value::Object(map) => {
            // Check if "result" key holds the primary data
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_object(map);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => print_object(res_map),
        _ => print_object(envelope),
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Scalars and nested objects go in one Field/Value table; every array of
/// objects gets a table of its own underneath.
fn print_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut listings: Vec<(&str, &Vec<Value>)> = Vec::new();

    for (key, val) in map {
        match val {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                listings.push((key.as_str(), items));
            }
            Value::Object(inner) => {
                for (sub, sub_val) in inner {
                    builder.push_record([format!("{key}.{sub}"), format_cell(sub_val)]);
                }
            }
            _ => builder.push_record([key.clone(), format_cell(val)]),
        }
    }

    println!("{}", Table::from(builder));

    for (key, items) in listings {
        println!("\n{}:", key);
        print_array_table(items);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = arr
            .iter()
            .filter_map(Value::as_object)
            .map(|map| {
                headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                    .collect()
            })
            .collect();
        print_grid(&Grid { headers, rows });
    } else {
        // Simple array of values
        for item in arr {
            println!("{}", format_cell(item));
        }
    }
}

fn print_grid(grid: &Grid) {
    let mut builder = Builder::default();
    builder.push_record(grid.headers.iter().cloned());
    for row in &grid.rows {
        builder.push_record(row.iter().cloned());
    }
    println!("{}", Table::from(builder));
}
