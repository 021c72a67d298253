use serde_json::Value;
use std::io;

use super::render_value;

/// Write output as field/value CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            // Prefer the result section of an envelope, otherwise the object itself
            let rows = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in rows {
                let _ = wtr.write_record([key.as_str(), &render_value(val)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&render_value(value)]);
        }
    }

    let _ = wtr.flush();
}
