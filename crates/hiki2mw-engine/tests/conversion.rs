use hiki2mw_engine::{ConvertOptions, Converter, convert};
use pretty_assertions::assert_eq;

#[test]
fn fixture_page() {
    assert_fixture("page");
}

#[test]
fn fixture_structure() {
    assert_fixture("structure");
}

fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{file}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let hiki = read_fixture(&format!("{name}.hiki"));
    let expected = read_fixture(&format!("{name}.mw"));

    let out = convert(&hiki);
    assert_eq!(out, expected.trim_end_matches('\n'));

    // Converting the same source twice gives the same document
    assert_eq!(convert(&hiki), out);
}

#[test]
fn output_has_no_edge_or_repeated_blank_lines() {
    let hiki = read_fixture("page.hiki");
    let out = convert(&hiki);

    assert!(!out.starts_with('\n'));
    assert!(!out.ends_with('\n'));
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn links() {
    let out = convert(
        "[[Example|http://example.com/]]\n[[Label|PageName]]\n[[http://example.org/]]\n[[PageName]]",
    );
    insta::assert_snapshot!(out, @r"
    [http://example.com/ Example]
    [[PageName|Label]]
    http://example.org/
    [[PageName]]
    ");
}

#[test]
fn heading_levels_follow_nesting() {
    let out = convert("!One\n!!!Three\n!!Two\n!One again\n!!!!!!!Seven");
    insta::assert_snapshot!(out, @r"
    == One ==

    === Three ===

    === Two ===

    == One again ==

    === Seven ===
    ");
}

#[test]
fn deep_nesting_caps_at_six_markers() {
    let out = convert("!a\n!!b\n!!!c\n!!!!d\n!!!!!e\n!!!!!!f\n!!!!!!!g");
    let last = out.lines().last().unwrap();
    assert_eq!(last, "====== g ======");
    assert_eq!(out.matches("====== ").count(), 3);
}

#[test]
fn hidden_heading_becomes_comment() {
    // First heading of the document, so it is top level whatever its marker count
    assert_eq!(convert("text\n// !!Draft"), "text\n<!-- == Draft == -->");
}

#[test]
fn definition_term_keeps_link_intact() {
    insta::assert_snapshot!(convert(":[[a:b]]:c"), @r"
    ;[[a:b]]
    :c
    ");
}

#[test]
fn quote_and_pre_regions() {
    let out = convert("\"\"quoted\n\"\"twice\n after");
    insta::assert_snapshot!(out, @r"
    <blockquote>
    quoted
    twice
    </blockquote>

    <pre>after</pre>
    ");
}

#[test]
fn table_class_from_options() {
    let converter = Converter::new(ConvertOptions {
        table_class: "wikitable sortable".to_string(),
    });
    let out = converter.convert("||!Name||!Value\n||a||1");
    insta::assert_snapshot!(out, @r#"
    {| class="wikitable sortable"
    |-
    ! Name !! Value
    |-
    | a || 1
    |}
    "#);
}

#[test]
fn mixed_heading_and_data_cells_start_new_lines() {
    let out = convert("||!Key||value||!Other");
    assert_eq!(
        out,
        "{| class=\"wikitable\"\n|-\n! Key\n| value\n! Other\n|}"
    );
}

#[test]
fn plugins() {
    let out = convert("{{toc}}\nbody{{br}}\n{{isbnImg('4774142042')}}\n*[[namazu:search]]");
    insta::assert_snapshot!(out, @r"
    body<br />
    <amazon>4774142042</amazon>
    <!-- *[[namazu:search]] -->
    ");
}
