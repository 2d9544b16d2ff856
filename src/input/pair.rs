//! key=value pair input.

use crate::error::{Result, TwigcError};

/// Split a `key=value` entry on its first `=`.
pub fn parse(entry: &str) -> Result<(String, String)> {
    match entry.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(TwigcError::UsageError(format!(
            "Illegal key=value pair: {}",
            entry
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(
            parse("url=a=b").unwrap(),
            ("url".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn allows_empty_value() {
        assert_eq!(parse("x=").unwrap(), ("x".to_string(), String::new()));
    }

    #[test]
    fn keeps_quotes_literally() {
        assert_eq!(
            parse(r#"testEnv="<foo$bar>""#).unwrap().1,
            r#""<foo$bar>""#
        );
    }

    #[test]
    fn rejects_entry_without_separator() {
        let err = parse("novalue").unwrap_err();
        assert_eq!(err.to_string(), "Illegal key=value pair: novalue");
    }
}
