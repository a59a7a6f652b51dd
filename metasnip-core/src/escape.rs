//! Escaping of field values for the literals they are emitted into.
//!
//! Values without quotes, backslashes or markup characters come back unchanged.

/// Escape for a double-quoted string literal (Python, R, YAML).
pub fn double_quoted(s: &str) -> String {
    escape_quoted(s, '"')
}

/// Escape for a single-quoted Python string literal.
pub fn single_quoted(s: &str) -> String {
    escape_quoted(s, '\'')
}

fn escape_quoted(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape HTML text or an attribute value embedded in a Python `'''` string.
///
/// `{%` is written as `&#123;%` so Dash does not read the value as one of its
/// `{%...%}` index placeholders.
pub fn html_in_python(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'%') => out.push_str("&#123;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
