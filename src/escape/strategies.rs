//! Escapers for every strategy twigc applies through its own formatter.
//!
//! Output matches Twig's escapers so templates written for Twig render the
//! same bytes.

use std::fmt::Write;

/// Look up the escaper for a custom strategy name.
pub fn custom_escaper(name: &str) -> Option<fn(&str) -> String> {
    match name {
        "html" => Some(html),
        "css" => Some(css),
        "js" => Some(js),
        "json" => Some(json),
        "url" => Some(url),
        "html_attr" => Some(html_attr),
        "sh" => Some(sh),
        _ => None,
    }
}

/// HTML text: `htmlspecialchars` with both quote styles.
pub fn html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// CSS: every non-alphanumeric character becomes `\HEX `.
pub fn css(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            let _ = write!(out, "\\{:X} ", c as u32);
        }
    }
    out
}

/// JavaScript string contents.
pub fn js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '_') => out.push(c),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
    }
    out
}

/// JSON string literal, with slashes and Unicode left as-is.
pub fn json(input: &str) -> String {
    serde_json::Value::from(input).to_string()
}

/// RFC 3986 percent-encoding.
pub fn url(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{:02X}", byte);
        }
    }
    out
}

/// HTML attribute values.
pub fn html_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '-' | '_') => out.push(c),
            '\t' | '\n' | '\r' => {
                let _ = write!(out, "&#x{:02X};", c as u32);
            }
            c if c.is_ascii_control() => out.push_str("&#xFFFD;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if c.is_ascii() => {
                let _ = write!(out, "&#x{:02X};", c as u32);
            }
            c => {
                let _ = write!(out, "&#x{:04X};", c as u32);
            }
        }
    }
    out
}

/// POSIX shell double-quoted word.
pub fn sh(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for c in input.chars() {
        if matches!(c, '$' | '`' | '\\' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
