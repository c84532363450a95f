use crate::{convert::cursor::Cursor, patterns::BracketLink};

/// Definition list syntax: `:term:definition` in Hiki, `;term` / `:definition` in MediaWiki.
pub struct DefinitionList;

impl DefinitionList {
    pub const MARKER: char = ':';
    pub const TERM_MARKER: char = ';';
    const DELIMITER: u8 = b':';

    /// Rewrites one definition list line.
    ///
    /// A remainder that itself starts with `:` is a continuation and is kept
    /// as is. Otherwise the first `:` outside a bracketed link splits the term
    /// from its definition, which moves to the next physical line.
    pub fn rewrite(line: &str) -> String {
        let rest = line.strip_prefix(Self::MARKER).unwrap_or(line);
        if rest.starts_with(Self::MARKER) {
            return rest.to_string();
        }

        match Self::find_delimiter(rest) {
            Some(at) => format!(
                "{}{}\n{}{}",
                Self::TERM_MARKER,
                &rest[..at],
                Self::MARKER,
                &rest[at + 1..]
            ),
            None => format!("{}{rest}", Self::TERM_MARKER),
        }
    }

    /// Byte offset of the first `:` not enclosed in `[[...]]`.
    ///
    /// A closed link is skipped whole and never revisited, so `[[Page:Sub]]`
    /// with no `:` after it has no delimiter rather than splitting inside the
    /// link. Only an unclosed `[[` falls back to a plain character scan.
    pub fn find_delimiter(s: &str) -> Option<usize> {
        let mut cur = Cursor::new(s);

        while !cur.eof() {
            if cur.starts_with(BracketLink::OPEN) {
                let saved = cur.clone();
                // A link needs at least one character between its brackets.
                cur.bump_n(BracketLink::OPEN.len() + 1);
                if let Some(close) = cur.find(BracketLink::CLOSE) {
                    cur.i = close + BracketLink::CLOSE.len();
                    continue;
                }
                cur = saved;
            }
            if cur.peek() == Some(Self::DELIMITER) {
                return Some(cur.i);
            }
            cur.bump();
        }
        None
    }
}
