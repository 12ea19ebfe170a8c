use serde_json::Value;

use super::format_cell;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority (descending into
/// a nested `summary`), then falls back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "label", "total_interest"];

    let summary = result_obj.get("summary");
    for scope in [summary, Some(result_obj)].into_iter().flatten() {
        for key in &priority_keys {
            if let Some(val) = scope.get(*key) {
                if !val.is_null() {
                    println!("{}", format_cell(val));
                    return;
                }
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_cell(val));
            return;
        }
    }

    println!("{}", format_cell(result_obj));
}
