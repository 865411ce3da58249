//! Utility functions for capture output: escaping and number formatting.

/// Escapes special XML characters (`&`, `<`, `>`, `"`) for use in attribute values.
pub fn escape_xml_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formats a coordinate as a plain decimal string (shortest round-trip form, never
/// exponent notation). Negative zero is written as `0`.
pub fn format_coord(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}
