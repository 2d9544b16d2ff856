//! Output escaping strategy selection.
//!
//! The strategy is chosen once per invocation from the `-e` token (or its
//! absence) and the template's file name:
//!
//! - no token or `auto`: infer from the file extension
//! - boolean-ish tokens (`yes`, `never`, `1`, `off`, ...): html or disabled
//! - anything else: a strategy name, passed to the engine as-is

pub mod strategies;

use std::fmt;

/// Escaping applied to every interpolated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeStrategy {
    /// No escaping.
    Disabled,
    Html,
    Css,
    Js,
    Json,
    Url,
    HtmlAttr,
    Sh,
    /// A strategy name twigc does not know; the engine rejects it.
    Named(String),
}

impl EscapeStrategy {
    /// Map a (lower-case) strategy name to a strategy.
    pub fn from_name(name: &str) -> Self {
        match name {
            "html" => EscapeStrategy::Html,
            "css" => EscapeStrategy::Css,
            "js" => EscapeStrategy::Js,
            "json" => EscapeStrategy::Json,
            "url" => EscapeStrategy::Url,
            "html_attr" => EscapeStrategy::HtmlAttr,
            "sh" => EscapeStrategy::Sh,
            other => EscapeStrategy::Named(other.to_string()),
        }
    }

    /// The strategy's name, or `None` when escaping is disabled.
    pub fn name(&self) -> Option<&str> {
        match self {
            EscapeStrategy::Disabled => None,
            EscapeStrategy::Html => Some("html"),
            EscapeStrategy::Css => Some("css"),
            EscapeStrategy::Js => Some("js"),
            EscapeStrategy::Json => Some("json"),
            EscapeStrategy::Url => Some("url"),
            EscapeStrategy::HtmlAttr => Some("html_attr"),
            EscapeStrategy::Sh => Some("sh"),
            EscapeStrategy::Named(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for EscapeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("false"))
    }
}

/// Choose the escaping strategy for a render.
///
/// `template` is the template's path or name; only its final component is
/// inspected.
pub fn select(token: Option<&str>, template: &str) -> EscapeStrategy {
    let token = token.map(str::to_lowercase);

    let strategy = match token.as_deref() {
        None | Some("auto") => infer_from_name(template),
        Some(token) => match parse_bool(token) {
            Some(true) => EscapeStrategy::Html,
            Some(false) => EscapeStrategy::Disabled,
            None => EscapeStrategy::from_name(token),
        },
    };

    tracing::debug!(template, %strategy, "selected escape strategy");
    strategy
}

/// Infer a strategy from a template file name.
///
/// For `name.ext.twig` the extension before `.twig` is used.
pub fn infer_from_name(template: &str) -> EscapeStrategy {
    let file_name = template.rsplit(['/', '\\']).next().unwrap_or(template);

    let name = match file_name.strip_suffix(".twig") {
        Some(stem) if stem.find('.').is_some_and(|pos| pos > 0) => stem,
        _ => file_name,
    };

    let ext = match name.rfind('.') {
        Some(pos) => &name[pos + 1..],
        None => "",
    };

    match ext.to_lowercase().as_str() {
        "htm" | "html" | "phtml" | "thtml" | "xhtml" | "template" | "tmpl" | "tpl" => {
            EscapeStrategy::Html
        }
        "css" | "scss" => EscapeStrategy::Css,
        "js" => EscapeStrategy::Js,
        "json" => EscapeStrategy::Json,
        "bash" | "ksh" | "sh" | "zsh" => EscapeStrategy::Sh,
        _ => EscapeStrategy::Disabled,
    }
}

/// Parse a boolean-ish token (already lower-cased).
fn parse_bool(token: &str) -> Option<bool> {
    match token.trim() {
        "t" | "y" | "always" | "true" | "yes" | "on" | "1" => Some(true),
        "f" | "n" | "none" | "never" | "false" | "no" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_from_extension() {
        assert_eq!(select(None, "page.html"), EscapeStrategy::Html);
        assert_eq!(select(None, "script.sh"), EscapeStrategy::Sh);
        assert_eq!(select(None, "style.SCSS"), EscapeStrategy::Css);
        assert_eq!(select(None, "app.js"), EscapeStrategy::Js);
        assert_eq!(select(None, "data.json"), EscapeStrategy::Json);
        assert_eq!(select(None, "mail.tpl"), EscapeStrategy::Html);
        assert_eq!(select(None, "notes.txt"), EscapeStrategy::Disabled);
        assert_eq!(select(None, "Makefile"), EscapeStrategy::Disabled);
    }

    #[test]
    fn twig_suffix_uses_inner_extension() {
        assert_eq!(select(None, "page.html.twig"), EscapeStrategy::Html);
        assert_eq!(select(None, "deploy.zsh.twig"), EscapeStrategy::Sh);
        assert_eq!(select(None, "templates/page.HTML.twig"), EscapeStrategy::Html);
    }

    #[test]
    fn bare_twig_extension_is_disabled() {
        assert_eq!(select(None, "page.twig"), EscapeStrategy::Disabled);
        // A leading dot is a hidden file, not an extension.
        assert_eq!(select(None, ".html.twig"), EscapeStrategy::Disabled);
    }

    #[test]
    fn only_the_file_name_is_inspected() {
        assert_eq!(select(None, "/srv/site.html/readme"), EscapeStrategy::Disabled);
        assert_eq!(select(None, "/tmp/x.y/foo.twig"), EscapeStrategy::Disabled);
    }

    #[test]
    fn stdin_template_is_disabled() {
        assert_eq!(select(None, "-"), EscapeStrategy::Disabled);
    }

    #[test]
    fn auto_token_infers() {
        assert_eq!(select(Some("auto"), "page.html.twig"), EscapeStrategy::Html);
        assert_eq!(select(Some("AUTO"), "run.bash"), EscapeStrategy::Sh);
    }

    #[test]
    fn false_tokens_disable() {
        for token in ["f", "false", "n", "no", "none", "never", "NEVER", "off", "0"] {
            assert_eq!(
                select(Some(token), "page.html"),
                EscapeStrategy::Disabled,
                "token {}",
                token
            );
        }
    }

    #[test]
    fn true_tokens_select_html() {
        for token in ["t", "true", "y", "yes", "always", "Yes", "on", "1", "html"] {
            assert_eq!(
                select(Some(token), "notes.txt"),
                EscapeStrategy::Html,
                "token {}",
                token
            );
        }
    }

    #[test]
    fn named_strategies_pass_through() {
        assert_eq!(select(Some("html_attr"), "x"), EscapeStrategy::HtmlAttr);
        assert_eq!(select(Some("URL"), "x"), EscapeStrategy::Url);
        assert_eq!(
            select(Some("rot13"), "x"),
            EscapeStrategy::Named("rot13".to_string())
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(EscapeStrategy::Disabled.to_string(), "false");
        assert_eq!(EscapeStrategy::HtmlAttr.to_string(), "html_attr");
    }
}
