//! Value escaping for content lines.

/// Escapes a TEXT value (RFC 5545 §3.3.11). Line breaks become `\n`; bare
/// carriage returns are dropped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | ',' | ';' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes a parameter value, quoting it when it holds a delimiter. Inside
/// quotes `^`, `"` and newlines use RFC 6868 caret encoding.
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    if !value.contains([':', ';', ',', '"', '\n']) {
        return value.to_string();
    }

    let encoded = value
        .replace('^', "^^")
        .replace('"', "^'")
        .replace('\n', "^n");
    format!("\"{encoded}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_delimiters_are_escaped() {
        assert_eq!(
            escape_text("Kaiser Oakland, Pharmacy 2"),
            "Kaiser Oakland\\, Pharmacy 2"
        );
        assert_eq!(escape_text("Bldg A;Floor 3"), "Bldg A\\;Floor 3");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn text_line_breaks() {
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn plain_param_value_is_unquoted() {
        assert_eq!(escape_param_value("DATE"), "DATE");
    }

    #[test]
    fn param_value_with_delimiters_is_quoted() {
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("Has\"quote^"), "\"Has^'quote^^\"");
    }
}
