/// Markdown-to-HTML rendering port.
///
/// Rendering is a pure function of the input text: no side effects, no
/// failure mode. Empty input yields empty output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, content: &str) -> String;
}
