//! Rendering of link analysis reports.

use hiki2mw_engine::LinkReport;

/// One section per bucket, one `line:char link -> page_name` row per entry.
pub fn render_text(report: &LinkReport) -> String {
    let mut out = String::new();
    for (name, entries) in report.buckets() {
        out.push_str(&format!("{name} ({})\n", entries.len()));
        for entry in entries {
            out.push_str(&format!(
                "  {}:{} {} -> {}\n",
                entry.line_num, entry.char_num, entry.link, entry.page_name
            ));
        }
    }
    out
}

pub fn render_json(report: &LinkReport) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
