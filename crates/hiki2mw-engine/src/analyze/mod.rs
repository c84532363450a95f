//! # Link Analysis
//!
//! Scans a wiki document for link-like tokens so page references can be
//! audited before and after conversion.
//!
//! Every line gets two independent scans:
//!
//! - **Bracketed links** (`[[...]]`): reported in `alphabetical` when the page
//!   name is printable ASCII, and in `parened` when it ends with a closing
//!   parenthesis and contains an opening one. A link can land in both.
//! - **Bare tokens**: camel-case WikiNames not already inside a link or URI,
//!   reported in `wikiname`.
//!
//! Both scans restart one character past the end of each match.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::patterns::{BRACKET_LINK, BRACKET_LINK_SRC, BracketLink, URI, URI_SRC, WIKI_NAME_SRC};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Invalid analyzer mode: {0:?} (expected \"hiki\" or \"mediawiki\")")]
    InvalidMode(String),
}

/// Markup dialect of the scanned document.
///
/// The dialects put label and target on opposite sides of `|`:
/// Hiki writes `[[label|page]]`, MediaWiki writes `[[page|label]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Hiki,
    MediaWiki,
}

impl Mode {
    /// Picks the page name out of a bracketed link's inner text.
    pub fn page_name(self, inner: &str) -> &str {
        match inner.split_once(BracketLink::LABEL) {
            Some((_, page)) if self == Mode::Hiki => page,
            Some((page, _)) => page,
            None => inner,
        }
    }

    fn token_pattern(self) -> &'static Regex {
        match self {
            Mode::Hiki => &HIKI_TOKEN,
            Mode::MediaWiki => &MEDIAWIKI_TOKEN,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hiki => f.write_str("hiki"),
            Mode::MediaWiki => f.write_str("mediawiki"),
        }
    }
}

impl FromStr for Mode {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiki" | "source" | "0" => Ok(Mode::Hiki),
            "mediawiki" | "mw" | "target" | "1" => Ok(Mode::MediaWiki),
            _ => Err(AnalyzeError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = AnalyzeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Hiki),
            1 => Ok(Mode::MediaWiki),
            other => Err(AnalyzeError::InvalidMode(other.to_string())),
        }
    }
}

/// Links, URIs and WikiNames in a Hiki document. Links and URIs are matched
/// only so they can be skipped.
static HIKI_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{BRACKET_LINK_SRC}|{URI_SRC}|{WIKI_NAME_SRC}"))
        .expect("Invalid Hiki token regex")
});

/// As [`HIKI_TOKEN`], plus MediaWiki's `[uri label]` external links.
static MEDIAWIKI_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{BRACKET_LINK_SRC}|\[{URI_SRC} .+?\]|{URI_SRC}|{WIKI_NAME_SRC}"
    ))
    .expect("Invalid MediaWiki token regex")
});

/// One reported occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// 1-based line number.
    pub line_num: usize,
    /// 1-based character (not byte) position of the match within its line.
    pub char_num: usize,
    /// Matched text, brackets included.
    pub link: String,
    pub page_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub alphabetical: Vec<LinkEntry>,
    pub parened: Vec<LinkEntry>,
    pub wikiname: Vec<LinkEntry>,
}

impl LinkReport {
    pub fn is_empty(&self) -> bool {
        self.alphabetical.is_empty() && self.parened.is_empty() && self.wikiname.is_empty()
    }

    /// Buckets in report order, with their names.
    pub fn buckets(&self) -> [(&'static str, &[LinkEntry]); 3] {
        [
            ("alphabetical", &self.alphabetical),
            ("parened", &self.parened),
            ("wikiname", &self.wikiname),
        ]
    }
}

pub struct LinkAnalyzer {
    mode: Mode,
}

impl LinkAnalyzer {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn analyze(&self, document: &str) -> LinkReport {
        let mut report = LinkReport::default();

        for (index, line) in document.split_inclusive('\n').enumerate() {
            let line_num = index + 1;
            self.scan_bracket_links(line_num, line, &mut report);
            self.scan_bare_tokens(line_num, line, &mut report);
        }

        log::debug!(
            "analyzed {} document: {} alphabetical, {} parened, {} wikiname",
            self.mode,
            report.alphabetical.len(),
            report.parened.len(),
            report.wikiname.len()
        );
        report
    }

    fn scan_bracket_links(&self, line_num: usize, line: &str, report: &mut LinkReport) {
        for (char_num, link) in matches_from(&BRACKET_LINK, line) {
            let inner = &link[BracketLink::OPEN.len()..link.len() - BracketLink::CLOSE.len()];
            let page_name = self.mode.page_name(inner);
            let entry = LinkEntry {
                line_num,
                char_num,
                link: link.to_string(),
                page_name: page_name.to_string(),
            };

            if is_parened(page_name) {
                report.parened.push(entry.clone());
            }
            if is_printable_ascii(page_name) {
                report.alphabetical.push(entry);
            }
        }
    }

    fn scan_bare_tokens(&self, line_num: usize, line: &str, report: &mut LinkReport) {
        for (char_num, token) in matches_from(self.mode.token_pattern(), line) {
            if token.starts_with('[') || URI.is_match(token) {
                continue;
            }
            report.wikiname.push(LinkEntry {
                line_num,
                char_num,
                link: token.to_string(),
                page_name: token.to_string(),
            });
        }
    }
}

/// Left-to-right matches of `re` in `line` as `(char_num, text)`, each search
/// resuming one character past the previous match.
fn matches_from<'a>(re: &Regex, line: &'a str) -> Vec<(usize, &'a str)> {
    let mut out = vec![];
    let mut start = 0;

    while start <= line.len() {
        let Some(m) = re.find_at(line, start) else {
            break;
        };
        out.push((line[..m.start()].chars().count() + 1, m.as_str()));
        start = m.end() + line[m.end()..].chars().next().map_or(1, char::len_utf8);
    }
    out
}

fn is_printable_ascii(s: &str) -> bool {
    s.chars().all(|c| (' '..='~').contains(&c))
}

fn is_parened(s: &str) -> bool {
    s.ends_with([')', '\u{FF09}']) && s.contains(['(', '\u{FF08}'])
}

pub fn analyze(document: &str, mode: Mode) -> LinkReport {
    LinkAnalyzer::new(mode).analyze(document)
}

pub fn analyze_links_hiki(document: &str) -> LinkReport {
    analyze(document, Mode::Hiki)
}

pub fn analyze_links_mediawiki(document: &str) -> LinkReport {
    analyze(document, Mode::MediaWiki)
}
