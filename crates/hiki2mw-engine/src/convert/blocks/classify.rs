use super::kinds::{DefinitionList, Heading, Region, Table};

/// Block category of a single line, decided from its leading characters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCategory {
    /// Plain text; passed through untouched by the block builders.
    None,
    /// Starts with a space or tab.
    Pre,
    /// Starts with one or more `!`.
    Heading,
    /// A heading hidden behind a `//` comment prefix, e.g. `// !!Draft`.
    HeadingComment,
    /// Starts with `""`.
    Quote,
    /// Starts with `:`.
    DefinitionList,
    /// Starts with `||`.
    Table,
}

impl BlockCategory {
    /// Whether lines of this category form a wrapped region (`<pre>`, `<blockquote>`).
    pub fn region(self) -> Option<Region> {
        match self {
            BlockCategory::Pre => Some(Region::Preformatted),
            BlockCategory::Quote => Some(Region::Quote),
            _ => None,
        }
    }
}

/// Classifies individual lines for the block conversion pass.
///
/// Rules are tested in a fixed order and the first match wins:
/// pre, heading, heading comment, quote, definition list, table.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> BlockCategory {
        if Region::Preformatted.opens(line) {
            BlockCategory::Pre
        } else if line.starts_with(Heading::MARKER) {
            BlockCategory::Heading
        } else if Heading::strip_comment_prefix(line).is_some_and(|s| s.starts_with(Heading::MARKER))
        {
            BlockCategory::HeadingComment
        } else if Region::Quote.opens(line) {
            BlockCategory::Quote
        } else if line.starts_with(DefinitionList::MARKER) {
            BlockCategory::DefinitionList
        } else if line.starts_with(Table::MARKER) {
            BlockCategory::Table
        } else {
            BlockCategory::None
        }
    }
}
