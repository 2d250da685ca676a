/// Quotes a string as a single-quoted Python literal.
///
/// Control characters and Unicode line separators are escaped so that the
/// literal never spans lines.
pub fn quote(string: &str) -> String {
    let mut quoted = String::with_capacity(string.len() + 2);

    quoted.push('\'');

    for char in string.chars() {
        match char {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => quoted.push_str(&format!("\\u{:04x}", char as u32)),
            _ if char.is_control() => quoted.push_str(&format!("\\x{:02x}", char as u32)),
            _ => quoted.push(char),
        }
    }

    quoted.push('\'');

    quoted
}
