use quire_core::{
    color::Color,
    dom::{DocumentElement, HeaderFooterSlot, ParagraphElement},
};
use quire_parser::{DdlObject, error::ErrorCode, parse_document, parse_object};

const REPORT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document>
  <attributes>
    <Info Title="Quarterly report" Author="Finance"/>
  </attributes>
  <styles>
    <style Name="Emphasis" BaseStyle="Normal">
      <Font Bold="true" Color="RGB(0x20, 64, 128)"/>
    </style>
    <style Name="Caption" BaseStyle="Unknown"/>
  </styles>
  <sections>
    <section>
      <header><p Style="Header">Quarterly report <field Type="Page"/></p></header>
      <p Style="Heading1">Summary</p>
      Revenue grew in every region.
      <table>
        <columns><column Width="4cm"/><column Width="2cm"/></columns>
        <rows>
          <row HeadingFormat="true"><cell>Region</cell><cell>Growth</cell></row>
          <row><cell>North</cell><cell>12%</cell></row>
        </rows>
      </table>
      <chart Type="Line">
        <series Name="North"><point>1</point><point>2.5</point></series>
      </chart>
    </section>
    <section>
      <p>Appendix<footnote>Unaudited.</footnote></p>
    </section>
  </sections>
</document>
"#;

#[test]
fn test_full_document() {
    let parsed = parse_document(REPORT, Some("report.xml")).expect("Failed to parse");

    let codes: Vec<_> = parsed.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E301]);
    assert!(!parsed.has_errors());
    assert!(parsed.has_warnings());

    let document = parsed.value();
    assert_eq!(document.info.title.as_deref(), Some("Quarterly report"));

    let emphasis = document.styles().get("Emphasis").expect("Style not added");
    assert_eq!(emphasis.paragraph_format.font.bold, Some(true));
    assert_eq!(
        emphasis.paragraph_format.font.color,
        Some(Color::from_rgb(0x20, 64, 128))
    );

    let sections = document.sections();
    assert_eq!(sections.len(), 2);

    let first = &sections[0];
    assert!(first.headers().get(HeaderFooterSlot::EvenPage).is_some());
    let kinds: Vec<_> = first.elements().iter().map(DocumentElement::kind).collect();
    assert_eq!(kinds, ["paragraph", "paragraph", "table", "chart"]);

    let table = first.elements().get(2).and_then(DocumentElement::as_table).unwrap();
    assert_eq!(table.columns().len(), 2);
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows().get(0).and_then(|r| r.heading_format), Some(true));

    let chart = first.elements().get(3).and_then(DocumentElement::as_chart).unwrap();
    assert_eq!(chart.series()[0].points().len(), 2);

    let appendix = sections[1]
        .elements()
        .get(0)
        .and_then(DocumentElement::as_paragraph)
        .unwrap();
    assert!(matches!(
        appendix.elements().get(1),
        Some(ParagraphElement::Footnote(_))
    ));
}

#[test]
fn test_recoverable_errors_keep_siblings() {
    let source = r#"
        <document>
          <sections>
            <section>
              <p Format.Alignment="Diagonal">First</p>
              <p><b Size="huge">Second</b></p>
              <p>Third</p>
            </section>
          </sections>
        </document>"#;

    let parsed = parse_document(source, None).expect("Failed to parse");

    let codes: Vec<_> = parsed.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E203, ErrorCode::E205]);
    assert!(parsed.has_errors());
    assert_eq!(parsed.value().sections()[0].elements().len(), 3);
}

#[test]
fn test_fatal_error_returns_collected_diagnostics() {
    let source = r#"<document><styles><style Name="X"/></styles><sections><section>"#;

    let err = parse_document(source, Some("broken.xml")).expect_err("Expected a fatal error");

    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics[0].code(), Some(ErrorCode::E302));
    let last = diagnostics.last().expect("No diagnostics");
    assert!(last.is_fatal());
    assert_eq!(last.file(), Some("broken.xml"));
}

#[test]
fn test_single_section_object() {
    let parsed = parse_object("<section><p>Only</p></section>", None).expect("Failed to parse");

    match parsed.value() {
        DdlObject::Section(section) => assert_eq!(section.elements().len(), 1),
        other => panic!("Expected a section, found `{}`", other.kind()),
    }
}
