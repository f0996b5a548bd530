// src/infrastructure/markdown.rs
use crate::application::NoteRenderer;
use crate::constants::{TOC_CSS_CLASS, TOC_MARKER};
use crate::domain::slugify;
use crate::infrastructure::highlight::CodeHighlighter;
use html_escape::{encode_double_quoted_attribute, encode_text};
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, instrument};

lazy_static! {
    static ref NUMBERED_ID_REGEX: Regex =
        Regex::new(r"^(.*)_([0-9]+)$").expect("Failed to compile numbered id regex");
}

/// Heading anchors handed out during one conversion.
#[derive(Debug, Default)]
struct HeadingIds {
    used: HashSet<String>,
}

impl HeadingIds {
    /// Claim `id`, or the first free `<id>_N` variant. An empty id becomes `_1`.
    fn claim(&mut self, id: String) -> String {
        let mut id = id;
        while id.is_empty() || self.used.contains(&id) {
            id = match NUMBERED_ID_REGEX.captures(&id) {
                Some(caps) => format!("{}_{}", &caps[1], increment_digits(&caps[2])),
                None => format!("{id}_1"),
            };
        }
        self.used.insert(id.clone());
        id
    }

    fn clear(&mut self) {
        self.used.clear();
    }
}

/// Add one to a run of ASCII digits, at any length.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

#[derive(Debug, Clone)]
struct TocEntry {
    depth: u8,
    id: String,
    text: String,
}

/// Markdown to HTML conversion with tables, heading anchors, a `[TOC]` table of
/// contents and class-based highlighting of fenced code.
///
/// The heading-id registry is the only state kept between calls, and
/// [`MarkdownRenderer::render`] clears it before converting, so anchors from one
/// document never influence the next.
pub struct MarkdownRenderer {
    highlighter: CodeHighlighter,
    heading_ids: HeadingIds,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            highlighter: CodeHighlighter::new(),
            heading_ids: HeadingIds::default(),
        }
    }

    /// Forget all state from previous conversions.
    pub fn reset(&mut self) {
        self.heading_ids.clear();
    }

    #[instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn render(&mut self, text: &str) -> String {
        self.reset();
        self.convert(text)
    }

    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options
    }

    fn convert(&mut self, text: &str) -> String {
        let mut parser = Parser::new_ext(text, Self::options());
        let mut events: Vec<Event> = Vec::new();
        let mut toc: Vec<TocEntry> = Vec::new();
        let mut toc_slots: Vec<usize> = Vec::new();

        while let Some(event) = parser.next() {
            match event {
                Event::Start(Tag::Heading {
                    level,
                    id: _,
                    classes,
                    attrs,
                }) => {
                    let inner = take_until(&mut parser, TagEnd::Heading(level));
                    let heading_text = plain_text(&inner);
                    let id = self.heading_ids.claim(slugify(&heading_text));
                    toc.push(TocEntry {
                        depth: level as u8,
                        id: id.clone(),
                        text: heading_text,
                    });
                    events.push(Event::Start(Tag::Heading {
                        level,
                        id: Some(CowStr::from(id)),
                        classes,
                        attrs,
                    }));
                    events.extend(inner);
                    events.push(Event::End(TagEnd::Heading(level)));
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    let code = plain_text(&take_until(&mut parser, TagEnd::CodeBlock));
                    let language = match &kind {
                        CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
                        CodeBlockKind::Indented => None,
                    };
                    let block = self.highlighter.highlight(&code, language);
                    events.push(Event::Html(CowStr::from(block)));
                }
                Event::Start(Tag::Paragraph) => {
                    let inner = take_until(&mut parser, TagEnd::Paragraph);
                    if is_toc_marker(&inner) {
                        toc_slots.push(events.len());
                        events.push(Event::Html(CowStr::Borrowed("")));
                    } else {
                        events.push(Event::Start(Tag::Paragraph));
                        events.extend(inner);
                        events.push(Event::End(TagEnd::Paragraph));
                    }
                }
                other => events.push(other),
            }
        }

        if !toc_slots.is_empty() {
            let toc_html = toc_html(&toc);
            for slot in toc_slots {
                events[slot] = Event::Html(CowStr::from(toc_html.clone()));
            }
        }

        debug!(headings = toc.len(), "Converted markdown");
        let mut html_output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRenderer for MarkdownRenderer {
    fn render(&mut self, markdown: &str) -> String {
        MarkdownRenderer::render(self, markdown)
    }
}

/// Collect events up to (and consuming) the matching end tag.
fn take_until<'a>(parser: &mut Parser<'a>, end: TagEnd) -> Vec<Event<'a>> {
    let mut inner = Vec::new();
    for event in parser.by_ref() {
        if matches!(&event, Event::End(tag) if *tag == end) {
            break;
        }
        inner.push(event);
    }
    inner
}

fn plain_text(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn is_toc_marker(events: &[Event]) -> bool {
    events.iter().all(|event| matches!(event, Event::Text(_)))
        && plain_text(events).trim() == TOC_MARKER
}

/// Nested `<ul>` of heading links. A heading deeper than its predecessor opens a
/// sub-list; one at or above an enclosing level closes back to it.
fn toc_html(entries: &[TocEntry]) -> String {
    let mut out = format!("<div class=\"{TOC_CSS_CLASS}\">\n");
    let mut open: Vec<u8> = Vec::new();

    for entry in entries {
        match open.last().copied() {
            None => {
                out.push_str("<ul>\n");
                open.push(entry.depth);
            }
            Some(top) if entry.depth > top => {
                out.push_str("\n<ul>\n");
                open.push(entry.depth);
            }
            Some(_) => {
                out.push_str("</li>\n");
                while open.len() > 1 && entry.depth <= open[open.len() - 2] {
                    open.pop();
                    out.push_str("</ul>\n</li>\n");
                }
            }
        }
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            encode_double_quoted_attribute(&entry.id),
            encode_text(&entry.text)
        ));
    }

    if !open.is_empty() {
        out.push_str("</li>\n");
        for _ in 1..open.len() {
            out.push_str("</ul>\n</li>\n");
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_markdown_text_when_rendering_then_produces_html() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("**bold** and *italic*");

        assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>\n");
    }

    #[test]
    fn given_heading_when_rendering_then_assigns_slug_id() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("## Getting Started!");

        assert_eq!(html, "<h2 id=\"getting-started\">Getting Started!</h2>\n");
    }

    #[test]
    fn given_repeated_headings_when_rendering_then_ids_get_numeric_suffix() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("# Intro\n\n# Intro\n\n# Intro");

        assert!(html.contains("<h1 id=\"intro\">"));
        assert!(html.contains("<h1 id=\"intro_1\">"));
        assert!(html.contains("<h1 id=\"intro_2\">"));
    }

    #[test]
    fn given_same_heading_in_two_documents_when_rendering_then_ids_do_not_leak() {
        let mut renderer = MarkdownRenderer::new();

        let first = renderer.render("# Summary\n\ntext");
        let second = renderer.render("# Summary\n\nother");

        assert!(first.contains("<h1 id=\"summary\">"));
        assert!(second.contains("<h1 id=\"summary\">"));
        assert!(!second.contains("summary_1"));
    }

    #[test]
    fn given_heading_with_inline_code_when_rendering_then_id_uses_code_text() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("### The `render` call");

        assert!(html.contains("<h3 id=\"the-render-call\">"));
    }

    #[test]
    fn given_heading_without_word_characters_when_rendering_then_id_is_placeholder() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("# ???\n\n# !!!");

        assert!(html.contains("<h1 id=\"_1\">"));
        assert!(html.contains("<h1 id=\"_2\">"));
    }

    #[test]
    fn given_toc_marker_when_rendering_then_inserts_nested_toc() {
        let mut renderer = MarkdownRenderer::new();
        let input = "[TOC]\n\n# Alpha\n\n## Beta\n\n# Gamma";

        let html = renderer.render(input);

        let expected_toc = "<div class=\"toc\">\n<ul>\n\
            <li><a href=\"#alpha\">Alpha</a>\n<ul>\n\
            <li><a href=\"#beta\">Beta</a></li>\n</ul>\n</li>\n\
            <li><a href=\"#gamma\">Gamma</a></li>\n</ul>\n</div>\n";
        assert!(html.starts_with(expected_toc), "got: {html}");
        assert!(!html.contains("[TOC]"));
    }

    #[test]
    fn given_no_toc_marker_when_rendering_then_no_toc_is_emitted() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("# Alpha\n\nSee [TOC] inline.");

        assert!(!html.contains("class=\"toc\""));
        assert!(html.contains("[TOC]"));
    }

    #[test]
    fn given_table_when_rendering_then_emits_table_markup() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn given_fenced_code_with_language_when_rendering_then_highlights() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("```rust\nlet x = 1;\n```");

        assert!(html.contains("<div class=\"highlight\"><pre><code class=\"language-rust\">"));
        assert!(html.contains("<span class=\""));
    }

    #[test]
    fn given_fenced_code_without_language_when_rendering_then_not_highlighted() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("```\nlet x = 1;\n```");

        assert!(html.contains("<div class=\"highlight\"><pre><code>let x = 1;\n</code></pre></div>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn given_indented_code_when_rendering_then_treated_as_undeclared() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("Intro\n\n    <tag> & more\n");

        assert!(html.contains("<pre><code>&lt;tag&gt; &amp; more\n</code></pre>"));
    }

    #[test]
    fn given_entries_at_mixed_depths_when_building_toc_then_closes_lists_correctly() {
        let entry = |depth, id: &str| TocEntry {
            depth,
            id: id.to_string(),
            text: id.to_uppercase(),
        };

        let html = toc_html(&[entry(2, "a"), entry(4, "b"), entry(3, "c"), entry(1, "d")]);

        assert_eq!(
            html,
            "<div class=\"toc\">\n<ul>\n\
             <li><a href=\"#a\">A</a>\n<ul>\n\
             <li><a href=\"#b\">B</a></li>\n\
             <li><a href=\"#c\">C</a></li>\n</ul>\n</li>\n\
             <li><a href=\"#d\">D</a></li>\n</ul>\n</div>\n"
        );
    }

    #[test]
    fn given_claimed_numbered_id_when_claiming_again_then_increments_suffix() {
        let mut ids = HeadingIds::default();

        assert_eq!(ids.claim("step_1".to_string()), "step_1");
        assert_eq!(ids.claim("step_1".to_string()), "step_2");
    }

    #[rstest]
    #[case("9", "10")]
    #[case("0", "1")]
    #[case("199", "200")]
    #[case("18446744073709551615", "18446744073709551616")]
    #[case("99999999999999999999999", "100000000000000000000000")]
    fn given_digit_run_when_incrementing_then_carries_without_overflow(
        #[case] digits: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(increment_digits(digits), expected);
    }

    #[test]
    fn given_repeated_heading_with_huge_number_when_rendering_then_suffix_grows() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("# s_99999999999999999999999\n\n# s_99999999999999999999999");

        assert!(html.contains("<h1 id=\"s_99999999999999999999999\">"), "{html}");
        assert!(html.contains("<h1 id=\"s_100000000000000000000000\">"), "{html}");
    }

    #[test]
    fn given_repeated_heading_at_u64_max_when_rendering_then_does_not_wrap() {
        let mut renderer = MarkdownRenderer::new();

        let html = renderer.render("# x_18446744073709551615\n\n# x_18446744073709551615");

        assert!(html.contains("<h1 id=\"x_18446744073709551616\">"), "{html}");
        assert!(!html.contains("x_0"));
    }
}
