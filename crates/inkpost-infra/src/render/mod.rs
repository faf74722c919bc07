//! Markdown rendering via comrak.

use comrak::plugins::syntect::SyntectAdapter;
use comrak::{markdown_to_html_with_plugins, Options, Plugins};

use inkpost_core::ports::MarkdownRenderer;

/// Renderer configured for a GitHub-flavored editor preview: tables,
/// fenced code blocks with syntax highlighting, hard line breaks as
/// `<br>`, and CommonMark list parsing.
pub struct ComrakRenderer {
    adapter: SyntectAdapter,
}

impl ComrakRenderer {
    pub fn new() -> Self {
        // Loading syntax definitions is expensive; do it once and share
        // the adapter across renders.
        Self {
            adapter: SyntectAdapter::new(Some("InspiredGitHub")),
        }
    }

    fn options() -> Options {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.render.hardbreaks = true;
        // The preview shows whatever the author typed, raw HTML included.
        options.render.unsafe_ = true;
        options
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, content: &str) -> String {
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.adapter);

        markdown_to_html_with_plugins(content, &Self::options(), &plugins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> String {
        ComrakRenderer::new().render(content)
    }

    #[test]
    fn renders_bold_text() {
        assert!(render("**bold**").contains("<strong>bold</strong>"));
    }

    #[test]
    fn highlights_fenced_code_blocks() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("<code"));
        // The syntect adapter emits inline-styled spans.
        assert!(html.contains("<span"));
    }

    #[test]
    fn renders_tables() {
        let html = render("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn single_newlines_become_hard_breaks() {
        assert!(render("line one\nline two").contains("<br"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert!(render("").trim().is_empty());
    }
}
