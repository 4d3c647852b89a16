//! Fixed-set percent-encoding for the part of a URL after the host.

use alloc::string::String;

/// Returns the escape sequence for characters in the replaced set.
fn escape(c: char) -> Option<&'static str> {
    let escaped = match c {
        ' ' => "%20",
        ';' => "%3B",
        ':' => "%3A",
        '[' => "%5B",
        ']' => "%5D",
        '{' => "%7B",
        '}' => "%7D",
        '<' => "%3C",
        '>' => "%3E",
        '\\' => "%5C",
        '^' => "%5E",
        '`' => "%60",
        '"' => "%22",
        _ => return None,
    };
    Some(escaped)
}

/// Percent-encodes the fixed set of unsafe characters in `s`.
///
/// Every other character, `%` included, is copied through unchanged, so
/// existing escape sequences survive and applying the function twice gives
/// the same result as applying it once.
///
/// ```rust
/// use libhttp::url::percent_encode;
///
/// assert_eq!(percent_encode("/a b;c"), "/a%20b%3Bc");
/// assert_eq!(percent_encode("/a%20b"), "/a%20b");
/// ```
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match escape(c) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    out
}
