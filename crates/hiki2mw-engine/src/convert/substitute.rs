//! # Pattern Substitution
//!
//! Whole-document regex rewrites that run around the block pass.
//!
//! Each rule is a pure `&str -> String` function. The two pipelines are plain
//! ordered slices and every rule sees the output of the rule before it.
//! Order matters: the comment rule must stay last because earlier rules
//! (index link demotion, comment headings) produce `//` lines for it to wrap.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::URI_SRC;

/// A named whole-document rewrite.
pub type Rule = (&'static str, fn(&str) -> String);

/// Runs before the block pass.
pub const PRE_PASS: &[Rule] = &[("strike-through", strike_through)];

/// Runs after the block pass.
pub const POST_PASS: &[Rule] = &[
    ("toc", remove_toc),
    ("index-link", demote_index_links),
    ("namazu-link", demote_namazu_links),
    ("bare-uri-link", unwrap_uri_links),
    ("labelled-uri-link", external_links),
    ("labelled-page-link", swap_link_label),
    ("line-break", line_break),
    ("isbn-image", isbn_image),
    ("blank-before-comment", squeeze_blank_before_comment),
    ("comment", wrap_comments),
];

/// Applies `rules` in order.
pub fn apply(rules: &[Rule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, (name, rule)| {
        log::trace!("applying substitution rule {name}");
        rule(&acc)
    })
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid substitution regex {pattern:?}: {e}"))
}

macro_rules! rule {
    ($name:ident, $pattern:expr, $replacement:expr) => {
        pub fn $name(text: &str) -> String {
            static RE: LazyLock<Regex> = LazyLock::new(|| regex(&$pattern));
            RE.replace_all(text, $replacement).into_owned()
        }
    };
}

// ==text== -> <del>text</del>
rule!(strike_through, "==(.*?)==", "<del>${1}</del>");

// {{toc}}
rule!(remove_toc, r"\{\{toc\}\}", "");

// *[[一覧:...]] lines are index pages generated by Hiki plugins.
rule!(demote_index_links, r"(?m)^(\*\[\[一覧:.+?\]\])", "//${1}");

// *[[namazu:...]] lines link to the full-text search index.
rule!(demote_namazu_links, r"(?m)^(\*\[\[namazu:.+?\]\])", "//${1}");

// [[http://...]] -> http://...
rule!(unwrap_uri_links, format!(r"\[\[({URI_SRC})\]\]"), "${1}");

// [[label|http://...]] -> [http://... label]
rule!(
    external_links,
    format!(r"\[\[([^\]|]+)\|({URI_SRC})\]\]"),
    "[${2} ${1}]"
);

// [[label|page]] -> [[page|label]]
rule!(swap_link_label, r"\[\[([^\]|]+)\|(.*?)\]\]", "[[${2}|${1}]]");

// {{br}}
rule!(line_break, r"\{\{br\}\}", "<br />");

// {{isbnImg('...')}} and {{isbnImg'...'}}
rule!(
    isbn_image,
    r"\{\{isbnImg\(?'([^']+)'\)?\}\}",
    "<amazon>${1}</amazon>"
);

rule!(squeeze_blank_before_comment, r"\n{2,}(//)", "\n${1}");

rule!(wrap_comments, r"(?m)^//(.*)", "<!-- ${1} -->");
