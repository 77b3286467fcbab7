//! Escaping for Markdown output.
//!
//! Club types, brands and issue text are typed by people, so a stray `|` or
//! newline would otherwise break a table row.

/// Escape text for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use clubfit::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("Hybrid | 4"), "Hybrid \\| 4");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape text for a Markdown list item.
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell() {
        assert_eq!(escape_markdown_table("a|b\nc"), "a\\|b c");
        assert_eq!(escape_markdown_table("[56°]"), "\\[56°\\]");
    }

    #[test]
    fn test_list_item() {
        assert_eq!(
            escape_markdown_list("lie_angle <flat>\nsecond"),
            "lie\\_angle \\<flat\\>; second"
        );
        assert_eq!(escape_markdown_list("7-Iron (36.5\")"), "7-Iron (36.5\")");
    }
}
