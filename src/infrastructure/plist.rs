//! XML Property-List Writer
//!
//! Renders a JSON value tree as an XML property list, the format of
//! Info.plist and entitlements files. Object keys come out sorted.

use serde_json::Value;

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
);

/// Render `value` as a complete property-list document
pub fn to_xml(value: &Value) -> String {
    let mut out = String::from(HEADER);
    write_value(&mut out, value, 0);
    out.push_str("</plist>\n");
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    let indent = "\t".repeat(depth);
    match value {
        Value::Null => {
            out.push_str(&indent);
            out.push_str("<string></string>\n");
        }
        Value::Bool(flag) => {
            out.push_str(&indent);
            out.push_str(if *flag { "<true/>\n" } else { "<false/>\n" });
        }
        Value::Number(number) => {
            let tag = if number.is_f64() { "real" } else { "integer" };
            out.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, number, tag));
        }
        Value::String(text) => {
            out.push_str(&format!("{}<string>{}</string>\n", indent, escape(text)));
        }
        Value::Array(items) if items.is_empty() => {
            out.push_str(&indent);
            out.push_str("<array/>\n");
        }
        Value::Array(items) => {
            out.push_str(&indent);
            out.push_str("<array>\n");
            for item in items {
                write_value(out, item, depth + 1);
            }
            out.push_str(&indent);
            out.push_str("</array>\n");
        }
        Value::Object(map) if map.is_empty() => {
            out.push_str(&indent);
            out.push_str("<dict/>\n");
        }
        Value::Object(map) => {
            out.push_str(&indent);
            out.push_str("<dict>\n");
            for (key, item) in map {
                out.push_str(&format!("{}\t<key>{}</key>\n", indent, escape(key)));
                write_value(out, item, depth + 1);
            }
            out.push_str(&indent);
            out.push_str("</dict>\n");
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
