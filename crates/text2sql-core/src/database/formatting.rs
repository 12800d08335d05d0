//! Result formatting for display

use crate::database::types::QueryResult;
use serde_json::Value;

/// Format query result as a pipe table
pub fn format_result(result: &QueryResult) -> String {
    let mut output = String::new();

    if result.is_empty() {
        output.push_str("(no rows)\n");
    } else {
        let columns = if result.columns.is_empty() {
            let width = result.rows.first().map(Vec::len).unwrap_or_default();
            (1..=width).map(|i| format!("column{}", i)).collect::<Vec<_>>()
        } else {
            result.columns.clone()
        };

        output.push_str(&format!("| {} |\n", columns.join(" | ")));
        output.push_str(&format!(
            "|{}|\n",
            columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        ));

        for row in &result.rows {
            let values: Vec<String> = row.iter().map(display_value).collect();
            output.push_str(&format!("| {} |\n", values.join(" | ")));
        }
    }

    output.push_str(&format!(
        "\n{} row{} in {}ms\n",
        result.row_count(),
        if result.row_count() == 1 { "" } else { "s" },
        result.execution_time_ms
    ));

    output
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
