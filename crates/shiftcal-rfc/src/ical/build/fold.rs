//! Content line folding (RFC 5545 §3.1).

/// Longest content line in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Terminates `line` with CRLF, folding it into continuation lines (each
/// starting with one space) so no physical line exceeds 75 octets. Folds
/// only fall on character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut width = 0;

    for c in line.chars() {
        if width + c.len_utf8() > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += c.len_utf8();
    }

    folded.push_str("\r\n");
    folded
}
