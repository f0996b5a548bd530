// src/infrastructure/highlight.rs
use crate::constants::CODE_CSS_CLASS;
use html_escape::{encode_double_quoted_attribute, encode_text};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use tracing::{trace, warn};

/// Class-based syntax highlighting for code blocks.
///
/// Only the language declared on the fence is used. There is no detection: a block
/// without a language, or with one syntect does not know, is emitted escaped and
/// unhighlighted.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_token(&language.to_lowercase()))
    }

    /// Render one code block, wrapper included.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let highlighted = language
            .and_then(|lang| self.find_syntax(lang))
            .and_then(|syntax| self.classed_html(code, syntax));

        let body = match highlighted {
            Some(html) => html,
            None => {
                trace!(?language, "Emitting code block without highlighting");
                encode_text(code).into_owned()
            }
        };

        let code_attrs = match language {
            Some(lang) => format!(" class=\"language-{}\"", encode_double_quoted_attribute(lang)),
            None => String::new(),
        };

        format!("<div class=\"{CODE_CSS_CLASS}\"><pre><code{code_attrs}>{body}</code></pre></div>\n")
    }

    fn classed_html(&self, code: &str, syntax: &SyntaxReference) -> Option<String> {
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced,
        );
        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                warn!(syntax = %syntax.name, error = %e, "Highlighting failed, falling back to plain code");
                return None;
            }
        }
        Some(generator.finalize())
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_declared_known_language_when_highlighting_then_emits_classed_spans() {
        let highlighter = CodeHighlighter::new();

        let html = highlighter.highlight("fn main() {}\n", Some("rust"));

        assert!(html.starts_with("<div class=\"highlight\"><pre><code class=\"language-rust\">"));
        assert!(html.contains("<span class=\""));
        assert!(html.contains("main"));
        assert!(html.ends_with("</code></pre></div>\n"));
    }

    #[test]
    fn given_no_language_when_highlighting_then_emits_plain_escaped_code() {
        let highlighter = CodeHighlighter::new();

        let html = highlighter.highlight("fn main() { a < b }\n", None);

        assert_eq!(
            html,
            "<div class=\"highlight\"><pre><code>fn main() { a &lt; b }\n</code></pre></div>\n"
        );
    }

    #[test]
    fn given_unknown_language_when_highlighting_then_keeps_label_without_spans() {
        let highlighter = CodeHighlighter::new();

        let html = highlighter.highlight("x := 1\n", Some("no-such-lang"));

        assert!(html.contains("<code class=\"language-no-such-lang\">x := 1"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn given_uppercase_language_when_highlighting_then_still_resolves() {
        let highlighter = CodeHighlighter::new();

        let html = highlighter.highlight("print(1)\n", Some("Python"));

        assert!(html.contains("<span class=\""));
    }
}
