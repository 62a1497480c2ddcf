//! Markdown rendering for bot messages and generated notes

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML. Handles the constructs the RAG service
/// actually emits: headings, bold, lists, horizontal rules, and code.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(source, options);

    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let html = render_markdown("# Title\n\n## Section");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<h2>Section</h2>"));
    }

    #[test]
    fn test_bold_and_lists() {
        let html = render_markdown("**key point**\n\n- first\n- second");
        assert!(html.contains("<strong>key point</strong>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>second</li>"));
    }

    #[test]
    fn test_horizontal_rule_and_code() {
        let html = render_markdown("above\n\n---\n\n`inline` and:\n\n```\nblock\n```");
        assert!(html.contains("<hr />"));
        assert!(html.contains("<code>inline</code>"));
        assert!(html.contains("<pre><code>block\n</code></pre>"));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let html = render_markdown("just a sentence");
        assert_eq!(html.trim(), "<p>just a sentence</p>");
    }
}
