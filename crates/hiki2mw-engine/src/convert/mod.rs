//! # Conversion
//!
//! Hiki to MediaWiki conversion over a whole in-memory document.
//!
//! ## Pipeline
//!
//! 1. Normalize line endings to `\n`
//! 2. Collapse blank lines (`collapse_blank_lines`)
//! 3. Pre-pass substitutions (`substitute::PRE_PASS`)
//! 4. Block pass (`blocks`): classify every line, run the builders, rejoin
//! 5. Post-pass substitutions (`substitute::POST_PASS`)
//! 6. Collapse blank lines again
//!
//! Nothing here fails: constructs that are not recognised pass through unchanged.

pub mod blocks;
pub mod cursor;
pub mod substitute;

use std::sync::LazyLock;

use regex::Regex;

use blocks::{BlockBuilder, LineClassifier, kinds::Table};

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank line regex"));

/// Options for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// `class` attribute written on every emitted table.
    pub table_class: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            table_class: Table::DEFAULT_CLASS.to_string(),
        }
    }
}

/// Converts Hiki documents with a fixed set of options.
///
/// Holds no per-document state; each call to [`Converter::convert`] is independent.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn convert(&self, source: &str) -> String {
        let text = collapse_blank_lines(&normalize_line_endings(source));
        let text = substitute::apply(substitute::PRE_PASS, &text);
        let text = self.convert_blocks(&text);
        let text = substitute::apply(substitute::POST_PASS, &text);
        collapse_blank_lines(&text)
    }

    fn convert_blocks(&self, text: &str) -> String {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let (lines, stats) =
            BlockBuilder::new(lines, &self.options.table_class).run(&LineClassifier);
        log::debug!(
            "block pass: {} lines, {} headings, {} tables, {} regions",
            stats.lines,
            stats.headings,
            stats.tables,
            stats.regions
        );
        lines.join("\n")
    }
}

/// Converts with default options.
pub fn convert(source: &str) -> String {
    Converter::default().convert(source)
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Drops leading newlines, squeezes runs of three or more newlines to two
/// (at most one blank line) and drops trailing newlines.
pub fn collapse_blank_lines(text: &str) -> String {
    let text = text.trim_start_matches('\n');
    BLANK_RUN
        .replace_all(text, "\n\n")
        .trim_end_matches('\n')
        .to_string()
}
