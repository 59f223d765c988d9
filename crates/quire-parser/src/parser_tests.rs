//! Walker tests, grouped by construct.
//!
//! Each test feeds a complete markup run through the public entry points and
//! inspects both the resulting tree and the collected diagnostics.

use float_cmp::approx_eq;
use quire_core::{
    color::Color,
    dom::{
        AxisKind, ChartType, Document, DocumentElement, FieldKind, HeaderFooterSlot,
        HyperlinkType, INVALID_STYLE_NAME, Paragraph, ParagraphAlignment, ParagraphElement,
        Section, SymbolName, TextAreaKind,
    },
    unit::UnitType,
};

use crate::{
    DdlObject, Parsed,
    error::{Diagnostic, ErrorCode, Severity},
    parse_document, parse_object,
};

/// Parse a full document, failing the test on a fatal outcome.
fn parse(source: &str) -> Parsed<Document> {
    parse_document(source, Some("test.xml")).expect("Failed to parse")
}

/// Parse `body` as the content of the only section of a document.
fn parse_section(body: &str) -> (Section, Vec<Diagnostic>) {
    let source = format!("<document><sections><section>{body}</section></sections></document>");
    let (document, diagnostics) = parse(&source).into_parts();
    let section = document
        .sections()
        .first()
        .cloned()
        .expect("Expected one section");
    (section, diagnostics)
}

/// Parse a single `<p>` through the object entry point.
fn parse_paragraph(source: &str) -> (Paragraph, Vec<Diagnostic>) {
    let (object, diagnostics) = parse_object(source, Some("test.xml"))
        .expect("Failed to parse")
        .into_parts();
    match object {
        DdlObject::Paragraph(paragraph) => (paragraph, diagnostics),
        other => panic!("Expected a paragraph, found `{}`", other.kind()),
    }
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().filter_map(Diagnostic::code).collect()
}

fn paragraph_at(section: &Section, index: usize) -> &Paragraph {
    section
        .elements()
        .get(index)
        .and_then(DocumentElement::as_paragraph)
        .expect("Expected a paragraph")
}

mod implicit_paragraph_tests {
    use super::*;

    #[test]
    fn test_bare_text_becomes_paragraph() {
        let (section, diagnostics) = parse_section(" Hello World ");

        assert!(diagnostics.is_empty());
        assert_eq!(section.elements().len(), 1);
        assert_eq!(paragraph_at(&section, 0).plain_text(), "Hello World");
    }

    #[test]
    fn test_implicit_and_explicit_paragraphs_are_equivalent() {
        let (implicit, _) = parse_section("Hello World");
        let (explicit, _) = parse_section("<p>Hello World</p>");

        assert_eq!(implicit.elements(), explicit.elements());
    }

    #[test]
    fn test_image_in_section_is_section_level() {
        let (section, diagnostics) = parse_section(r#"<image Name="logo.png"/>Caption"#);

        assert!(diagnostics.is_empty());
        assert_eq!(section.elements().len(), 2);
        let image = section
            .elements()
            .get(0)
            .and_then(DocumentElement::as_image)
            .expect("Expected a section-level image");
        assert_eq!(image.name(), "logo.png");
        assert_eq!(paragraph_at(&section, 1).plain_text(), "Caption");
    }

    #[test]
    fn test_self_closing_paragraph_inside_paragraph_recovers() {
        let (section, diagnostics) = parse_section("<p>a<p/>b</p><p>After</p>");

        assert_eq!(codes(&diagnostics), [ErrorCode::E100]);
        assert_eq!(section.elements().len(), 2);
        assert_eq!(paragraph_at(&section, 0).plain_text(), "a");
        assert_eq!(paragraph_at(&section, 1).plain_text(), "After");
    }

    #[test]
    fn test_block_construct_ends_implicit_paragraph() {
        let (section, _) = parse_section("First <b>bold</b><pagebreak/>Second");

        let kinds: Vec<_> = section.elements().iter().map(DocumentElement::kind).collect();
        assert_eq!(kinds, ["paragraph", "pagebreak", "paragraph"]);
        assert_eq!(paragraph_at(&section, 0).elements().len(), 2);
    }
}

mod style_tests {
    use super::*;

    #[test]
    fn test_undefined_base_style_warns_once() {
        let parsed = parse(
            r#"<document>
                 <styles>
                   <style Name="Fancy" BaseStyle="Missing"/>
                 </styles>
               </document>"#,
        );

        let diagnostics = parsed.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity(), Severity::Warning);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E301));
        assert_eq!(diagnostics[0].file(), Some("test.xml"));
        assert_eq!(diagnostics[0].location().map(|l| l.line()), Some(3));

        let style = parsed.value().styles().get("fancy").expect("Style not added");
        assert_eq!(style.base_style(), INVALID_STYLE_NAME);
    }

    #[test]
    fn test_new_style_without_base_warns() {
        let parsed = parse(r#"<document><styles><style Name="Loose"/></styles></document>"#);

        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E302]);
        let style = parsed.value().styles().get("Loose").expect("Style not added");
        assert_eq!(style.base_style(), INVALID_STYLE_NAME);
    }

    #[test]
    fn test_existing_style_is_rebased() {
        let parsed = parse(
            r#"<document>
                 <styles><style Name="Heading2" BaseStyle="Heading3"/></styles>
               </document>"#,
        );

        assert!(parsed.diagnostics().is_empty());
        let style = parsed.value().styles().get("Heading2").expect("Standard style missing");
        assert_eq!(style.base_style(), "Heading3");
    }

    #[test]
    fn test_style_attribute_blocks() {
        let parsed = parse(
            r#"<document>
                 <styles>
                   <style Name="Quote" BaseStyle="Normal" Comment="block quotes">
                     <Font Italic="true" Size="9"/>
                     <ParagraphFormat Alignment="center"/>
                   </style>
                 </styles>
               </document>"#,
        );

        assert!(parsed.diagnostics().is_empty());
        let style = parsed.value().styles().get("Quote").expect("Style not added");
        assert_eq!(style.comment.as_deref(), Some("block quotes"));
        assert_eq!(style.paragraph_format.font.italic, Some(true));
        assert_eq!(
            style.paragraph_format.alignment,
            Some(ParagraphAlignment::Center)
        );
        let size = style.paragraph_format.font.size.expect("Size not set");
        assert!(approx_eq!(f64, size.value(), 9.0));
    }

    #[test]
    fn test_style_without_name_is_skipped() {
        let parsed = parse(
            r#"<document>
                 <styles>
                   <style BaseStyle="Normal"><Font Bold="true"/></style>
                   <style Name="Kept" BaseStyle="Normal"/>
                 </styles>
               </document>"#,
        );

        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E212]);
        assert!(parsed.value().styles().contains("Kept"));
    }
}

mod table_tests {
    use super::*;

    const TABLE: &str = r#"
        <table Style="Grid">
          <columns Width="2cm">
            <column/>
            <column Width="3cm"/>
          </columns>
          <rows>
            <row><cell MergeRight="99999999999">A</cell><cell>B</cell></row>
            <row><cell VerticalAlignment="bottom">C</cell><cell><p>D</p></cell></row>
          </rows>
        </table>"#;

    fn cell_text(table: &quire_core::dom::Table, row: usize, column: usize) -> String {
        table
            .rows()
            .get(row)
            .and_then(|r| r.cell(column))
            .and_then(|c| c.elements().get(0))
            .and_then(DocumentElement::as_paragraph)
            .map(Paragraph::plain_text)
            .unwrap_or_default()
    }

    #[test]
    fn test_bad_cell_attribute_does_not_stop_table() {
        let (section, diagnostics) = parse_section(TABLE);

        assert_eq!(codes(&diagnostics), [ErrorCode::E200]);
        assert!(diagnostics[0].severity().is_error());

        let table = section
            .elements()
            .get(0)
            .and_then(DocumentElement::as_table)
            .expect("Expected a table");
        assert_eq!(table.style.as_deref(), Some("Grid"));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(cell_text(table, 0, 0), "A");
        assert_eq!(cell_text(table, 0, 1), "B");
        assert_eq!(cell_text(table, 1, 0), "C");
        assert_eq!(cell_text(table, 1, 1), "D");
    }

    #[test]
    fn test_columns_inherit_default_width() {
        let (section, _) = parse_section(TABLE);
        let table = section.elements().get(0).and_then(DocumentElement::as_table).unwrap();

        let widths: Vec<_> = table
            .columns()
            .iter()
            .map(|c| c.width.map(|w| (w.value(), w.unit_type())))
            .collect();
        assert_eq!(
            widths,
            [
                Some((2.0, UnitType::Centimeter)),
                Some((3.0, UnitType::Centimeter))
            ]
        );
    }

    #[test]
    fn test_surplus_cell_is_reported_and_skipped() {
        let (section, diagnostics) = parse_section(
            r#"<table>
                 <columns><column/></columns>
                 <rows>
                   <row><cell>A</cell><cell>extra</cell></row>
                   <row><cell>B</cell></row>
                 </rows>
               </table>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E104]);
        let table = section.elements().get(0).and_then(DocumentElement::as_table).unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows().get(0).map(|r| r.cells().len()), Some(1));
        assert_eq!(cell_text(table, 1, 0), "B");
    }

    #[test]
    fn test_table_without_columns_recovers() {
        let (section, diagnostics) = parse_section(r#"<table><rows/></table><p>After</p>"#);

        assert_eq!(codes(&diagnostics), [ErrorCode::E101]);
        assert_eq!(section.elements().count_kind("table"), 1);
        assert_eq!(paragraph_at(&section, 1).plain_text(), "After");
    }

    #[test]
    fn test_nested_table_recovers_at_outer_end_tag() {
        let (section, diagnostics) = parse_section(
            r#"<table>
                 <columns><column/></columns>
                 <rows><row><table><columns/><rows/></table></row></rows>
               </table>
               <p>After</p>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E100]);
        assert_eq!(section.elements().len(), 2);
        assert_eq!(section.elements().count_kind("table"), 1);
        assert_eq!(paragraph_at(&section, 1).plain_text(), "After");
    }
}

mod inline_tests {
    use super::*;

    #[test]
    fn test_space_type_and_count() {
        let (paragraph, diagnostics) = parse_paragraph(r#"<p>A<space Type="em" Count="3"/>B</p>"#);

        assert!(diagnostics.is_empty());
        let elements: Vec<_> = paragraph.elements().iter().collect();
        assert_eq!(elements.len(), 3);
        match elements[1] {
            ParagraphElement::Character(character) => {
                assert_eq!(character.symbol, SymbolName::Em);
                assert_eq!(character.count, 3);
            }
            other => panic!("Expected a space, found {other:?}"),
        }
    }

    #[test]
    fn test_space_defaults() {
        let (paragraph, _) = parse_paragraph(r#"<p><space/><space Type="Em4"/></p>"#);

        let characters: Vec<_> = paragraph
            .elements()
            .iter()
            .filter_map(|e| match e {
                ParagraphElement::Character(c) => Some((c.symbol, c.count)),
                _ => None,
            })
            .collect();
        assert_eq!(
            characters,
            [(SymbolName::Blank, 1), (SymbolName::EmQuarter, 1)]
        );
    }

    #[test]
    fn test_bad_space_count_recovers_paragraph() {
        let parsed =
            parse_object(r#"<p>A<space Count="many"/>B</p>"#, None).expect("Failed to parse");

        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E200]);
        assert!(matches!(parsed.value(), DdlObject::Paragraph(_)));
    }

    #[test]
    fn test_formatting_wrappers_nest() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p>Plain <b>bold <i>both</i></b></p>"#);

        assert!(diagnostics.is_empty());
        let Some(ParagraphElement::FormattedText(bold)) = paragraph.elements().get(1) else {
            panic!("Expected a formatted run");
        };
        assert_eq!(bold.font.bold, Some(true));
        let Some(ParagraphElement::FormattedText(italic)) = bold.elements().get(1) else {
            panic!("Expected a nested run");
        };
        assert_eq!(italic.font.italic, Some(true));
        assert_eq!(italic.elements().plain_text(), "both");
    }

    #[test]
    fn test_font_wrapper_attributes() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p><font Size="14" Color="RGB(255,0,0)">Red</font></p>"#);

        assert!(diagnostics.is_empty());
        let Some(ParagraphElement::FormattedText(run)) = paragraph.elements().get(0) else {
            panic!("Expected a formatted run");
        };
        let size = run.font.size.expect("Size not set");
        assert!(approx_eq!(f64, size.value(), 14.0));
        assert_eq!(run.font.color, Some(Color::from_rgb(255, 0, 0)));
    }

    #[test]
    fn test_bad_color_keeps_text() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p><fontcolor Color="RGB(256,0,0)">x</fontcolor></p>"#);

        assert_eq!(codes(&diagnostics), [ErrorCode::E206]);
        assert_eq!(paragraph.plain_text(), "x");
    }

    #[test]
    fn test_trailing_blank_removed_before_tab() {
        let (paragraph, _) = parse_paragraph("<p><![CDATA[Name: ]]><tab/>Value</p>");

        assert_eq!(paragraph.plain_text(), "Name:\tValue");
    }

    #[test]
    fn test_fields() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p>Page <field Type="page"/> of <field Type="NumPages" Format="0"/></p>"#,
        );

        assert!(diagnostics.is_empty());
        let fields: Vec<_> = paragraph
            .elements()
            .iter()
            .filter_map(|e| match e {
                ParagraphElement::Field(f) => Some((f.kind(), f.format.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            [
                (FieldKind::Page, None),
                (FieldKind::NumPages, Some("0".to_owned()))
            ]
        );
    }

    #[test]
    fn test_field_type_errors() {
        let (_, missing) = parse_paragraph(r#"<p><field/></p>"#);
        assert_eq!(codes(&missing), [ErrorCode::E105]);

        let (_, unknown) = parse_paragraph(r#"<p><field Type="weather"/></p>"#);
        assert_eq!(codes(&unknown), [ErrorCode::E210]);
    }

    #[test]
    fn test_footnote_holds_document_elements() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p>Claim<footnote Reference="1">Source text</footnote></p>"#);

        assert!(diagnostics.is_empty());
        let Some(ParagraphElement::Footnote(footnote)) = paragraph.elements().get(1) else {
            panic!("Expected a footnote");
        };
        assert_eq!(footnote.reference.as_deref(), Some("1"));
        let text = footnote
            .elements()
            .get(0)
            .and_then(DocumentElement::as_paragraph)
            .map(Paragraph::plain_text);
        assert_eq!(text.as_deref(), Some("Source text"));
    }

    #[test]
    fn test_hyperlink() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p><hyperlink Name="https://example.org" Type="Web">site</hyperlink></p>"#,
        );

        assert!(diagnostics.is_empty());
        let Some(ParagraphElement::Hyperlink(link)) = paragraph.elements().get(0) else {
            panic!("Expected a hyperlink");
        };
        assert_eq!(link.name.as_deref(), Some("https://example.org"));
        assert_eq!(link.hyperlink_type, Some(HyperlinkType::Web));
        assert_eq!(link.elements().plain_text(), "site");
    }

    #[test]
    fn test_inline_image_stays_in_paragraph() {
        let (paragraph, _) = parse_paragraph(r#"<p>See <image Name="a.png"/></p>"#);

        assert!(matches!(
            paragraph.elements().get(1),
            Some(ParagraphElement::Image(image)) if image.name() == "a.png"
        ));
    }

    #[test]
    fn test_unsupported_inline_constructs() {
        let (_, diagnostics) = parse_paragraph(r#"<p><symbol Name="Euro"/></p>"#);
        assert_eq!(codes(&diagnostics), [ErrorCode::E400]);

        let (section, diagnostics) = parse_section("<image Name=\"x\">aGVsbG8=</image>");
        assert_eq!(codes(&diagnostics), [ErrorCode::E400]);
        assert_eq!(section.elements().count_kind("image"), 1);
    }
}

mod attribute_tests {
    use super::*;

    #[test]
    fn test_errors_are_reported_per_statement() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p Style="Heading1" Bogus="1">
                 <attributes>
                   <Format Alignment="Sideways" KeepTogether="true">
                     <Font Bold="yes" Italic="true"/>
                   </Format>
                 </attributes>
                 Text
               </p>"#,
        );

        assert_eq!(
            codes(&diagnostics),
            [ErrorCode::E300, ErrorCode::E203, ErrorCode::E202]
        );
        assert_eq!(paragraph.style.as_deref(), Some("Heading1"));
        assert_eq!(paragraph.format.keep_together, Some(true));
        assert_eq!(paragraph.format.font.italic, Some(true));
        assert_eq!(paragraph.format.font.bold, None);
        assert_eq!(paragraph.plain_text(), "Text");
    }

    #[test]
    fn test_bad_position_keeps_image() {
        let (section, diagnostics) = parse_section(r#"<image Name="a.png" Top="up"/>"#);

        assert_eq!(codes(&diagnostics), [ErrorCode::E208]);
        let image = section
            .elements()
            .get(0)
            .and_then(DocumentElement::as_image)
            .expect("Expected an image");
        assert_eq!(image.name(), "a.png");
        assert_eq!(image.top, None);
    }

    #[test]
    fn test_dotted_attribute_names() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p Format.Font.Bold="true" format.alignment="Right">x</p>"#);

        assert!(diagnostics.is_empty());
        assert_eq!(paragraph.format.font.bold, Some(true));
        assert_eq!(paragraph.format.alignment, Some(ParagraphAlignment::Right));
    }

    #[test]
    fn test_block_on_non_object_field() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p><attributes><Style Name="x"/><Format Alignment="Left"/></attributes>x</p>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E303]);
        assert_eq!(paragraph.format.alignment, Some(ParagraphAlignment::Left));
    }

    #[test]
    fn test_null_assignment() {
        let (paragraph, diagnostics) =
            parse_paragraph(r#"<p Format.Font="" Format.Shading="null">x</p>"#);

        assert_eq!(codes(&diagnostics), [ErrorCode::E209]);
        assert!(paragraph.format.shading.is_cleared());
    }

    #[test]
    fn test_tab_stops_add_and_remove() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p>
                 <attributes>
                   <Format>
                     <TabStops>
                       <TabStop Position="2cm" Alignment="Center"/>
                       <TabStop Position="4cm"/>
                       <TabStop Position="2cm" Add="false"/>
                     </TabStops>
                   </Format>
                 </attributes>
                 x
               </p>"#,
        );

        assert!(diagnostics.is_empty());
        let stops: Vec<_> = paragraph
            .format
            .tab_stops
            .iter()
            .filter_map(|s| s.position)
            .map(|p| p.value())
            .collect();
        assert_eq!(stops, [4.0]);
    }

    #[test]
    fn test_tab_stop_errors() {
        let (paragraph, diagnostics) = parse_paragraph(
            r#"<p>
                 <attributes>
                   <Format><TabStops><TabStop Alignment="Left"/></TabStops></Format>
                   <TabStops/>
                 </attributes>
                 x
               </p>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E105, ErrorCode::E103]);
        assert!(paragraph.format.tab_stops.is_empty());
        assert_eq!(paragraph.plain_text(), "x");
    }
}

mod section_tests {
    use super::*;

    #[test]
    fn test_headers_and_footers() {
        let (section, diagnostics) = parse_section(
            r#"<header>Top</header>
               <firstpagefooter><p>Bottom</p></firstpagefooter>
               Body"#,
        );

        assert!(diagnostics.is_empty());
        for slot in [
            HeaderFooterSlot::Primary,
            HeaderFooterSlot::FirstPage,
            HeaderFooterSlot::EvenPage,
        ] {
            assert!(section.headers().get(slot).is_some());
        }
        assert!(section.footers().get(HeaderFooterSlot::FirstPage).is_some());
        assert!(section.footers().get(HeaderFooterSlot::Primary).is_none());
        assert_eq!(paragraph_at(&section, 0).plain_text(), "Body");
    }

    #[test]
    fn test_unexpected_element_recovers_at_section() {
        let parsed = parse(
            r#"<document>
                 <sections>
                   <section><p>One</p><bogus><p>lost</p></bogus><p>lost too</p></section>
                   <section><p>Two</p></section>
                 </sections>
               </document>"#,
        );

        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E100]);
        let sections = parsed.value().sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].elements().len(), 1);
        assert_eq!(paragraph_at(&sections[0], 0).plain_text(), "One");
        assert_eq!(paragraph_at(&sections[1], 0).plain_text(), "Two");
    }

    #[test]
    fn test_text_frame_and_barcode() {
        let (section, diagnostics) = parse_section(
            r#"<textframe Width="5cm">Framed</textframe><barcode Code="12345"/>"#,
        );

        assert!(diagnostics.is_empty());
        let kinds: Vec<_> = section.elements().iter().map(DocumentElement::kind).collect();
        assert_eq!(kinds, ["textframe", "barcode"]);
    }
}

mod chart_tests {
    use super::*;

    #[test]
    fn test_chart_parts() {
        let (section, diagnostics) = parse_section(
            r#"<chart Type="Column2D" Width="10cm">
                 <plotarea TopPadding="2pt"/>
                 <headerarea><p>Sales</p><legend Style="Normal"/></headerarea>
                 <xaxis MajorTick="10" HasMajorGridlines="true"/>
                 <series Name="2024"><point>1.5</point><point Value="2"/><point>abc</point></series>
                 <series Name="2025"><point>3</point></series>
                 <xseries><xvalue>Q1</xvalue><xvalue>Q2</xvalue></xseries>
               </chart>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E201]);
        let chart = section
            .elements()
            .get(0)
            .and_then(DocumentElement::as_chart)
            .expect("Expected a chart");
        assert_eq!(chart.chart_type(), ChartType::Column2D);
        assert!(chart.plot_area().is_some());

        let header = chart.text_area(TextAreaKind::Header).expect("Missing header area");
        assert_eq!(header.elements().len(), 1);
        assert!(header.legend().is_some());

        let axis = chart.axis(AxisKind::X).expect("Missing x axis");
        assert_eq!(axis.major_tick, Some(10.0));
        assert_eq!(axis.has_major_gridlines, Some(true));

        let values: Vec<Vec<Option<f64>>> = chart
            .series()
            .iter()
            .map(|s| s.points().iter().map(|p| p.value).collect())
            .collect();
        assert_eq!(values, [vec![Some(1.5), Some(2.0)], vec![Some(3.0)]]);

        let labels: Vec<_> = chart.x_values()[0]
            .values()
            .iter()
            .map(|x| x.value.as_deref())
            .collect();
        assert_eq!(labels, [Some("Q1"), Some("Q2")]);
    }

    #[test]
    fn test_chart_type_errors() {
        let (section, diagnostics) = parse_section(
            r#"<chart><plotarea/></chart><chart Type="Radar"/><p>After</p>"#,
        );

        assert_eq!(codes(&diagnostics), [ErrorCode::E105, ErrorCode::E211]);
        assert_eq!(section.elements().count_kind("chart"), 0);
        assert_eq!(paragraph_at(&section, 0).plain_text(), "After");
    }
}

mod entry_point_tests {
    use super::*;

    #[test]
    fn test_empty_input_is_fatal() {
        let err = parse_document("", None).expect_err("Expected a fatal error");
        assert_eq!(codes(err.diagnostics()), [ErrorCode::E002]);
    }

    #[test]
    fn test_mismatched_end_tag_is_fatal() {
        let err = parse_document("<document><sections></section></document>", None)
            .expect_err("Expected a fatal error");
        let last = err.diagnostics().last().expect("No diagnostics");
        assert_eq!(last.code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_unterminated_input_is_fatal() {
        let err = parse_document("<document><sections><section>text", None)
            .expect_err("Expected a fatal error");
        assert!(err.diagnostics().last().is_some_and(Diagnostic::is_fatal));
    }

    #[test]
    fn test_wrong_root_yields_empty_document() {
        let parsed = parse("<section/>");

        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E101]);
        assert!(parsed.value().sections().is_empty());
    }

    #[test]
    fn test_trailing_content_is_reported() {
        let parsed = parse("<document/><document/>");
        assert_eq!(codes(parsed.diagnostics()), [ErrorCode::E102]);
    }

    #[test]
    fn test_comments_and_declarations_are_ignored() {
        let parsed = parse(
            r#"<?xml version="1.0"?>
               <!-- generated -->
               <document xmlns="urn:quire"><sections/><!-- end --></document>"#,
        );
        assert!(parsed.diagnostics().is_empty());
    }

    #[test]
    fn test_object_roots() {
        let parsed = parse_object(
            r#"<styles><style Name="Quote" BaseStyle="Normal"/></styles>"#,
            None,
        )
        .expect("Failed to parse");
        let DdlObject::Styles(styles) = parsed.value() else {
            panic!("Expected styles");
        };
        assert!(styles.contains("Quote"));

        let parsed = parse_object(
            "<table><columns><column/></columns><rows><row><cell>1</cell></row></rows></table>",
            None,
        )
        .expect("Failed to parse");
        assert_eq!(parsed.value().kind(), "table");
    }

    #[test]
    fn test_unsupported_object_roots() {
        let chart = parse_object(r#"<chart Type="Line"/>"#, None).expect_err("Expected an error");
        assert_eq!(codes(chart.diagnostics()), [ErrorCode::E400]);

        let unknown = parse_object("<bogus/>", None).expect_err("Expected an error");
        assert_eq!(codes(unknown.diagnostics()), [ErrorCode::E100]);
    }

    #[test]
    fn test_bad_entity_is_fatal() {
        let err = parse_object("<p>&bogus;</p>", None).expect_err("Expected a fatal error");
        assert_eq!(
            err.diagnostics().last().and_then(Diagnostic::code),
            Some(ErrorCode::E001)
        );
    }
}
