//! # Span Patterns
//!
//! Regular expressions shared by the converter and the link analyzer.
//!
//! - **`BRACKET_LINK`**: `[[...]]`, shortest match, single line
//! - **`URI`**: bare `http`, `https`, `ftp`, `file` and `mailto` URIs
//! - **`WIKI_NAME`**: camel-case page names such as `FrontPage` or `Foo2Bar`
//!
//! The `*_SRC` constants hold the raw pattern text so other modules can
//! embed them in larger expressions without repeating the syntax.

use std::sync::LazyLock;

use regex::Regex;

/// Delimiters of a bracketed link.
pub struct BracketLink;

impl BracketLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const LABEL: char = '|';
}

pub const BRACKET_LINK_SRC: &str = r"\[\[.+?\]\]";

pub const URI_SRC: &str = r"(?:https?|ftp|file|mailto):[A-Za-z0-9;/?:@&=+$,\-_.!~*'()#%]+";

pub const WIKI_NAME_SRC: &str = r"\b(?:[A-Z]+[a-z0-9]+){2,}\b";

pub static BRACKET_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BRACKET_LINK_SRC).expect("Invalid bracket link regex"));

pub static URI: LazyLock<Regex> = LazyLock::new(|| Regex::new(URI_SRC).expect("Invalid URI regex"));

pub static WIKI_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WIKI_NAME_SRC).expect("Invalid WikiName regex"));
