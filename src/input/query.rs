//! URL query string input.

use super::VariableMapping;
use url::form_urlencoded;

/// Parse a query string into variables.
///
/// Leading `?` characters are ignored. Both `&` and `;` separate entries;
/// each entry is form-decoded (`%XX` escapes, `+` as space). Keys are then
/// normalized like PHP's `parse_str`, and entries whose key ends up empty
/// are skipped. A repeated key keeps its last value.
pub fn parse(query: &str) -> VariableMapping {
    let query = query.trim_start_matches('?');
    let mut vars = VariableMapping::new();

    for segment in query.split(';') {
        for (key, value) in form_urlencoded::parse(segment.as_bytes()) {
            let key = normalize_key(&key);
            if key.is_empty() {
                continue;
            }
            vars.insert(key, value.into_owned());
        }
    }

    vars
}

/// Leading spaces go; `.`, space and an unmatched `[` become `_`. Everything
/// from a `[` that has a closing `]` on is kept as written.
fn normalize_key(key: &str) -> String {
    let key = key.trim_start_matches(' ');
    let mut out = String::with_capacity(key.len());

    for (i, c) in key.char_indices() {
        match c {
            '.' | ' ' => out.push('_'),
            '[' if key[i + 1..].contains(']') => {
                out.push_str(&key[i..]);
                break;
            }
            '[' => out.push('_'),
            c => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(parse("?a=1&b=2"), parse("a=1&b=2"));
    }

    #[test]
    fn decodes_values() {
        let vars = parse("name=J%C3%BCrgen+Doe&sym=%3C%26%3E");
        assert_eq!(vars.get("name"), Some(&json!("Jürgen Doe")));
        assert_eq!(vars.get("sym"), Some(&json!("<&>")));
    }

    #[test]
    fn semicolon_separates_entries() {
        let vars = parse("a=1;b=2&c=3");
        assert_eq!(vars.len(), 3);
        assert_eq!(vars.get("b"), Some(&json!("2")));
    }

    #[test]
    fn later_keys_overwrite_earlier() {
        let vars = parse("a=1&a=2");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("a"), Some(&json!("2")));
    }

    #[test]
    fn key_without_value_is_empty_string() {
        let vars = parse("flag&x=1");
        assert_eq!(vars.get("flag"), Some(&json!("")));
    }

    #[test]
    fn keys_are_normalized_like_parse_str() {
        let vars = parse("a.b=1&c+d=2&%20%20lead=3&open[x=4");
        let keys: Vec<_> = vars.keys().cloned().collect();
        assert_eq!(keys, vec!["a_b", "c_d", "lead", "open_x"]);
        assert_eq!(vars.get("a_b"), Some(&json!("1")));
    }

    #[test]
    fn bracketed_keys_are_kept() {
        assert_eq!(normalize_key("a.b[c.d]"), "a_b[c.d]");
        assert_eq!(normalize_key("list[]"), "list[]");
    }

    #[test]
    fn empty_keys_are_skipped() {
        let vars = parse("=x&%20=y&k=v");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("k"), Some(&json!("v")));
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
        assert!(parse("&&;").is_empty());
    }
}
