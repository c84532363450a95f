/// A run of consecutive lines wrapped in a single open/close marker pair.
///
/// Hiki marks preformatted text with leading whitespace and quotations with
/// a leading `""`. MediaWiki wants explicit `<pre>` and `<blockquote>` tags
/// around the whole run instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Preformatted,
    Quote,
}

impl Region {
    pub const QUOTE_PREFIX: &'static str = "\"\"";

    /// Whether `line` carries this region's leading marker.
    pub fn opens(self, line: &str) -> bool {
        match self {
            Region::Preformatted => line.starts_with([' ', '\t']),
            Region::Quote => line.starts_with(Self::QUOTE_PREFIX),
        }
    }

    /// Removes the leading marker. Lines without it are returned unchanged.
    pub fn strip(self, line: &str) -> &str {
        match self {
            Region::Preformatted => line.strip_prefix([' ', '\t']).unwrap_or(line),
            Region::Quote => line.strip_prefix(Self::QUOTE_PREFIX).unwrap_or(line),
        }
    }

    /// Text prepended to the first line of a run.
    pub fn open_marker(self) -> &'static str {
        match self {
            Region::Preformatted => "\n<pre>",
            Region::Quote => "\n<blockquote>\n",
        }
    }

    /// Text appended to the last line of a run.
    pub fn close_marker(self) -> &'static str {
        match self {
            Region::Preformatted => "</pre>\n",
            Region::Quote => "\n</blockquote>\n",
        }
    }

    /// Rewrites one line of the run; `first` is true for the line that opens it.
    pub fn rewrite(self, line: &str, first: bool) -> String {
        let content = self.strip(line);
        if first {
            format!("{}{content}", self.open_marker())
        } else {
            content.to_string()
        }
    }
}
