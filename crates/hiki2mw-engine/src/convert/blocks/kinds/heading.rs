use std::sync::LazyLock;

use regex::Regex;

/// Spaces (ASCII or full-width) in front of a full-width opening parenthesis.
static SPACE_BEFORE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[ \u{3000}]+\u{FF08}").expect("Invalid heading paren regex"));

/// Heading syntax: `!` per level, optionally behind a `//` comment prefix.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '!';
    pub const COMMENT_PREFIX: &'static str = "//";
    pub const TARGET_MARKER: char = '=';
    /// Deepest MediaWiki heading is `======`.
    pub const MAX_MARKERS: usize = 6;

    /// Strips `//` and the whitespace after it, if present.
    pub fn strip_comment_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::COMMENT_PREFIX)
            .map(|rest| rest.trim_start_matches(|c: char| c.is_ascii_whitespace()))
    }
}

/// A heading line recorded during the block pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    pub line_index: usize,
    /// Number of leading `!` markers in the source.
    pub level: usize,
    pub content: String,
    pub is_comment: bool,
    /// Index of the parent node in the tree, `None` for top-level headings.
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl HeadingNode {
    /// Parses a heading line; returns `None` if the line has no `!` marker.
    pub fn parse(line_index: usize, line: &str, is_comment: bool) -> Option<Self> {
        let text = if is_comment {
            Heading::strip_comment_prefix(line)?
        } else {
            line
        };
        let body = text.trim_start_matches(Heading::MARKER);
        let level = text.len() - body.len();
        if level == 0 {
            return None;
        }

        Some(Self {
            line_index,
            level,
            content: SPACE_BEFORE_PAREN.replace_all(body, "\u{FF08}").into_owned(),
            is_comment,
            parent: None,
            children: vec![],
        })
    }

    /// Renders the node at the given nesting depth (0 for top-level headings).
    pub fn render(&self, depth: usize) -> String {
        let markers = Heading::TARGET_MARKER
            .to_string()
            .repeat((depth + 1).min(Heading::MAX_MARKERS - 1) + 1);
        let prefix = if self.is_comment {
            Heading::COMMENT_PREFIX
        } else {
            ""
        };
        format!("\n{prefix}{markers} {} {markers}", self.content)
    }
}

/// Headings of one document arranged by logical nesting.
///
/// Source levels may skip (`!` followed by `!!!`); the tree records nesting
/// rather than raw levels. Insertion keeps an explicit stack of the open
/// ancestors of the most recent heading, whose levels strictly increase.
#[derive(Debug, Default)]
pub struct HeadingTree {
    nodes: Vec<HeadingNode>,
    roots: Vec<usize>,
    open: Vec<usize>,
}

impl HeadingTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: usize) -> &HeadingNode {
        &self.nodes[id]
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Attaches `node` and returns its id.
    ///
    /// A deeper level becomes a child of the previous heading. An equal or
    /// shallower level closes ancestors until one with a strictly lower level
    /// remains, and becomes its child (or a new top-level heading). Equal
    /// levels are therefore always siblings.
    pub fn insert(&mut self, mut node: HeadingNode) -> usize {
        let id = self.nodes.len();

        match self.open.last() {
            Some(&last) if node.level > self.nodes[last].level => {}
            Some(_) => {
                self.open.pop();
                while let Some(&top) = self.open.last() {
                    if self.nodes[top].level < node.level {
                        break;
                    }
                    self.open.pop();
                }
            }
            None => {}
        }

        node.parent = self.open.last().copied();
        match node.parent {
            Some(parent) => self.nodes[parent].children.push(id),
            None => self.roots.push(id),
        }
        self.nodes.push(node);
        self.open.push(id);
        id
    }

    /// Depth-first walk yielding `(depth, node)`, top-level headings at depth 0.
    pub fn depth_first(&self) -> Vec<(usize, &HeadingNode)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&id| (0, id)).collect();

        while let Some((depth, id)) = stack.pop() {
            let node = &self.nodes[id];
            out.push((depth, node));
            stack.extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
        }
        out
    }

    /// Overwrites each heading's source line with its MediaWiki form.
    pub fn render_into(&self, lines: &mut [String]) {
        for (depth, node) in self.depth_first() {
            if let Some(line) = lines.get_mut(node.line_index) {
                *line = node.render(depth);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tree_of(levels: &[usize]) -> HeadingTree {
        let mut tree = HeadingTree::new();
        for (i, level) in levels.iter().enumerate() {
            let line = format!("{}H{i}", "!".repeat(*level));
            tree.insert(HeadingNode::parse(i, &line, false).unwrap());
        }
        tree
    }

    fn depths(tree: &HeadingTree) -> Vec<usize> {
        let mut by_line: Vec<(usize, usize)> = tree
            .depth_first()
            .into_iter()
            .map(|(depth, node)| (node.line_index, depth))
            .collect();
        by_line.sort();
        by_line.into_iter().map(|(_, depth)| depth).collect()
    }

    #[test]
    fn parse_counts_markers() {
        let node = HeadingNode::parse(3, "!!Section", false).unwrap();
        assert_eq!(node.line_index, 3);
        assert_eq!(node.level, 2);
        assert_eq!(node.content, "Section");
        assert!(!node.is_comment);
    }

    #[test]
    fn parse_comment_heading() {
        let node = HeadingNode::parse(0, "//  !!!Draft", true).unwrap();
        assert_eq!(node.level, 3);
        assert_eq!(node.content, "Draft");
        assert!(node.is_comment);
    }

    #[test]
    fn parse_collapses_space_before_fullwidth_paren() {
        let node = HeadingNode::parse(0, "!概要 \u{3000} （仮）", false).unwrap();
        assert_eq!(node.content, "概要（仮）");

        let ascii = HeadingNode::parse(0, "!Intro (draft)", false).unwrap();
        assert_eq!(ascii.content, "Intro (draft)");
    }

    #[test]
    fn parse_rejects_unmarked_line() {
        assert!(HeadingNode::parse(0, "plain", false).is_none());
        assert!(HeadingNode::parse(0, "// plain", true).is_none());
    }

    #[rstest]
    #[case(&[1, 3, 2, 1], &[0, 1, 1, 0])]
    #[case(&[1, 2, 3], &[0, 1, 2])]
    #[case(&[2, 2, 2], &[0, 0, 0])]
    #[case(&[3, 1], &[0, 0])]
    #[case(&[1, 2, 3, 2, 3, 1, 2], &[0, 1, 2, 1, 2, 0, 1])]
    fn nesting_follows_logical_depth(#[case] levels: &[usize], #[case] expected: &[usize]) {
        assert_eq!(depths(&tree_of(levels)), expected);
    }

    #[test]
    fn empty_tree_has_no_roots() {
        let tree = HeadingTree::new();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());

        let tree = tree_of(&[2]);
        assert!(!tree.is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn equal_level_is_sibling_not_child() {
        let tree = tree_of(&[1, 3, 3]);
        let top = tree.node(tree.roots()[0]);
        assert_eq!(top.children, vec![1, 2]);
        assert_eq!(tree.node(2).parent, Some(0));
    }

    #[test]
    fn levels_strictly_increase_along_every_path() {
        let tree = tree_of(&[2, 5, 3, 4, 1, 6, 6, 2]);
        for (_, node) in tree.depth_first() {
            if let Some(parent) = node.parent {
                assert!(tree.node(parent).level < node.level);
            }
        }
    }

    #[test]
    fn render_clamps_marker_width() {
        let node = HeadingNode::parse(0, "!T", false).unwrap();
        assert_eq!(node.render(0), "\n== T ==");
        assert_eq!(node.render(3), "\n===== T =====");
        assert_eq!(node.render(4), "\n====== T ======");
        assert_eq!(node.render(9), "\n====== T ======");
    }

    #[test]
    fn render_keeps_comment_prefix() {
        let node = HeadingNode::parse(0, "//!Hidden", true).unwrap();
        assert_eq!(node.render(0), "\n//== Hidden ==");
    }

    #[test]
    fn render_into_overwrites_source_lines() {
        let mut lines: Vec<String> = ["!A", "text", "!!B"].map(String::from).to_vec();
        let mut tree = HeadingTree::new();
        tree.insert(HeadingNode::parse(0, &lines[0], false).unwrap());
        tree.insert(HeadingNode::parse(2, &lines[2], false).unwrap());

        tree.render_into(&mut lines);

        assert_eq!(lines, vec!["\n== A ==", "text", "\n=== B ==="]);
    }
}
