//! Markdown to HTML conversion for profile biographies.

use pulldown_cmark::{html, Options, Parser};

/// Markdown processor with the "extra" extension set
pub struct MarkdownProcessor {
    options: Options,
}

impl MarkdownProcessor {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_DEFINITION_LIST);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        // Fenced code and raw HTML are part of CommonMark itself

        Self { options }
    }

    /// Convert markdown to HTML
    pub fn convert(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let processor = MarkdownProcessor::new();
        let html = processor.convert("# Hello World\n\nThis is a **test**.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<strong>test</strong>"));
    }

    #[test]
    fn test_tables() {
        let processor = MarkdownProcessor::new();
        let md = r#"
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
"#;
        let html = processor.convert(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Header 1</th>"));
    }

    #[test]
    fn test_footnotes() {
        let processor = MarkdownProcessor::new();
        let html = processor.convert("Born in the north.[^1]\n\n[^1]: Or so it is said.\n");
        assert!(html.contains("footnote-reference"));
        assert!(html.contains("footnote-definition"));
    }

    #[test]
    fn test_fenced_code() {
        let processor = MarkdownProcessor::new();
        let html = processor.convert("```\nserment\n```\n");
        assert!(html.contains("<pre><code>serment\n</code></pre>"));
    }

    #[test]
    fn test_list_type_change_starts_new_list() {
        let processor = MarkdownProcessor::new();
        let html = processor.convert("1. one\n2. two\n- bullet\n");
        assert!(html.contains("<ol>"));
        assert!(html.contains("<ul>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let processor = MarkdownProcessor::new();
        let html = processor.convert("<span class=\"rune\">ᚠ</span>\n");
        assert!(html.contains("<span class=\"rune\">ᚠ</span>"));
    }
}
