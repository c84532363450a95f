/// Table syntax markers shared by parsing and rendering.
pub struct Table;

impl Table {
    pub const MARKER: &'static str = "||";
    pub const HEADING_MARKER: char = '!';
    pub const ROWSPAN_MARKER: char = '^';
    pub const COLSPAN_MARKER: char = '>';
    pub const DEFAULT_CLASS: &'static str = "wikitable";
}

/// One table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub content: String,
    pub is_heading: bool,
    /// 0 when unspecified.
    pub rowspan: usize,
    /// 0 when unspecified.
    pub colspan: usize,
}

impl Column {
    /// Parses a cell such as `!^>text`.
    pub fn parse(cell: &str) -> Self {
        let (is_heading, cell) = match cell.strip_prefix(Table::HEADING_MARKER) {
            Some(rest) => (true, rest),
            None => (false, cell),
        };

        let content = cell.trim_start_matches([Table::ROWSPAN_MARKER, Table::COLSPAN_MARKER]);
        let spans = &cell[..cell.len() - content.len()];

        Self {
            content: content.to_string(),
            is_heading,
            rowspan: span_count(spans, Table::ROWSPAN_MARKER),
            colspan: span_count(spans, Table::COLSPAN_MARKER),
        }
    }

    fn span_attributes(&self) -> String {
        let mut attributes = vec![];
        if self.rowspan > 0 {
            attributes.push(format!("rowspan=\"{}\"", self.rowspan));
        }
        if self.colspan > 0 {
            attributes.push(format!("colspan=\"{}\"", self.colspan));
        }

        if attributes.is_empty() {
            String::new()
        } else {
            format!("{} | ", attributes.join(" "))
        }
    }

    fn marker(&self) -> &'static str {
        if self.is_heading { "! " } else { "| " }
    }

    fn joiner(&self) -> &'static str {
        if self.is_heading { " !! " } else { " || " }
    }
}

/// `n` markers merge `n + 1` cells; no markers means no attribute.
fn span_count(spans: &str, marker: char) -> usize {
    match spans.matches(marker).count() {
        0 => 0,
        n => n + 1,
    }
}

/// One table line split into cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub columns: Vec<Column>,
}

impl Row {
    /// Splits a `||`-prefixed line into columns. Trailing empty cells are
    /// dropped, so `||a||b||` yields two columns and `||` yields none.
    pub fn parse(line: &str) -> Self {
        let body = line.strip_prefix(Table::MARKER).unwrap_or(line);
        let mut cells: Vec<&str> = body.split(Table::MARKER).collect();
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }

        Self {
            columns: cells.into_iter().map(Column::parse).collect(),
        }
    }

    fn render(&self, out: &mut String) {
        out.push_str("|-\n");

        let Some((first, rest)) = self.columns.split_first() else {
            return;
        };

        out.push_str(first.marker());
        out.push_str(&first.span_attributes());
        out.push_str(&first.content);

        let mut last_is_heading = first.is_heading;
        for column in rest {
            if column.is_heading == last_is_heading {
                out.push_str(column.joiner());
            } else {
                out.push('\n');
                out.push_str(column.marker());
            }
            out.push_str(&column.span_attributes());
            out.push_str(&column.content);
            last_is_heading = column.is_heading;
        }
        out.push('\n');
    }
}

/// A contiguous run of table lines, anchored at its first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub line_index: usize,
    pub rows: Vec<Row>,
}

impl TableBlock {
    pub fn new(line_index: usize) -> Self {
        Self {
            line_index,
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, line: &str) {
        self.rows.push(Row::parse(line));
    }

    /// Serializes the whole table as one MediaWiki table block.
    pub fn render(&self, class: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{{| class=\"{class}\"\n"));
        for row in &self.rows {
            row.render(&mut out);
        }
        out.push_str("|}\n");
        out
    }
}
