use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::render_value;

/// Format output as a two-column table using the tabled crate.
///
/// All engine outputs are either a `ComputationOutput` envelope (result
/// object plus warnings/methodology) or a flat object such as the bare XIRR
/// outcome; both render as field/value rows.
pub fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", value);
        return;
    };

    match map.get("result") {
        Some(Value::Object(result)) => {
            print_rows(result);
            print_envelope_trailer(map);
        }
        _ => print_rows(map),
    }
}

fn print_rows(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &render_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_trailer(envelope: &serde_json::Map<String, Value>) {
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

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
