use super::{
    classify::{BlockCategory, LineClassifier},
    kinds::{DefinitionList, HeadingNode, HeadingTree, TableBlock},
};

/// Counts reported after a block pass, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    pub lines: usize,
    pub headings: usize,
    pub tables: usize,
    pub regions: usize,
}

/// Single left-to-right pass over the document's lines.
///
/// Regions and definition lists are rewritten as soon as their lines are
/// seen. Headings and tables only record structure during the traversal;
/// [`BlockBuilder::finish`] writes them back to their recorded line indices.
/// All state belongs to one pass, so a builder is never reused.
pub struct BlockBuilder {
    lines: Vec<String>,
    last: BlockCategory,
    headings: HeadingTree,
    tables: Vec<TableBlock>,
    table_class: String,
    regions: usize,
}

impl BlockBuilder {
    pub fn new(lines: Vec<String>, table_class: &str) -> Self {
        Self {
            lines,
            last: BlockCategory::None,
            headings: HeadingTree::new(),
            tables: vec![],
            table_class: table_class.to_string(),
            regions: 0,
        }
    }

    /// Classifies and processes every line in document order.
    pub fn run(mut self, classifier: &LineClassifier) -> (Vec<String>, BlockStats) {
        for i in 0..self.lines.len() {
            let category = classifier.classify(&self.lines[i]);
            self.push(i, category);
        }
        self.finish()
    }

    pub fn push(&mut self, i: usize, category: BlockCategory) {
        if category != self.last {
            self.close_region(i);
        }

        match category {
            BlockCategory::Pre | BlockCategory::Quote => {
                if let Some(region) = category.region() {
                    let first = category != self.last;
                    if first {
                        self.regions += 1;
                    }
                    self.lines[i] = region.rewrite(&self.lines[i], first);
                }
            }
            BlockCategory::Table => {
                if self.last == BlockCategory::Table
                    && let Some(table) = self.tables.last_mut()
                {
                    table.push_row(&self.lines[i]);
                    self.lines[i].clear();
                } else {
                    let mut table = TableBlock::new(i);
                    table.push_row(&self.lines[i]);
                    self.tables.push(table);
                }
            }
            BlockCategory::Heading | BlockCategory::HeadingComment => {
                let is_comment = category == BlockCategory::HeadingComment;
                if let Some(node) = HeadingNode::parse(i, &self.lines[i], is_comment) {
                    self.headings.insert(node);
                }
            }
            BlockCategory::DefinitionList => {
                self.lines[i] = DefinitionList::rewrite(&self.lines[i]);
            }
            BlockCategory::None => {}
        }

        self.last = category;
    }

    /// Closes any open region and renders the recorded headings and tables.
    pub fn finish(mut self) -> (Vec<String>, BlockStats) {
        // EOF close
        self.close_region(self.lines.len());

        if !self.headings.is_empty() {
            self.headings.render_into(&mut self.lines);
        }
        for table in &self.tables {
            if let Some(line) = self.lines.get_mut(table.line_index) {
                *line = table.render(&self.table_class);
            }
        }

        let stats = BlockStats {
            lines: self.lines.len(),
            headings: self.headings.len(),
            tables: self.tables.len(),
            regions: self.regions,
        };
        (self.lines, stats)
    }

    /// Appends the close marker of the region ending just before line `i`.
    fn close_region(&mut self, i: usize) {
        let Some(region) = self.last.region() else {
            return;
        };
        if let Some(line) = i.checked_sub(1).and_then(|prev| self.lines.get_mut(prev)) {
            line.push_str(region.close_marker());
        }
    }

    pub fn tables(&self) -> &[TableBlock] {
        &self.tables
    }
}
