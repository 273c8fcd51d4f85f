use serde_json::Value;

/// Fixed metric text mirrored from the core chart module
const NO_BREAK_EVEN_MESSAGE: &str = "No break-even within the given years";

/// Print just the key answer value from the output.
///
/// Heuristic: render tagged break-even results as their metric text, then
/// look for well-known result fields in order of priority, then fall back
/// to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // A statused result at the top level (unit break-even NotFound case)
    if let Some(text) = format_status(result_obj) {
        println!("{}", text);
        return;
    }

    // Priority list of key output fields
    let priority_keys = [
        "break_even",
        "break_even_display",
        "units",
        "revenue",
        "total_cash_flow",
    ];

    if let Value::Object(map) = result_obj {
        // Try priority keys first (skip null values)
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if val.is_null() {
                    continue;
                }
                match format_status(val) {
                    Some(text) => println!("{}", text),
                    None => println!("{}", format_minimal(val)),
                }
                return;
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

/// Render a tagged break-even object as its metric display text.
fn format_status(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    match obj.get("status")?.as_str()? {
        "found" => obj
            .get("year")
            .map(|year| format!("Year {}", format_minimal(year))),
        "not_found" => Some(NO_BREAK_EVEN_MESSAGE.to_string()),
        "invalid" => obj.get("message").map(|m| format_minimal(m)),
        _ => None,
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
