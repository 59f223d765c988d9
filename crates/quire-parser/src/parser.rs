//! Grammar walker.
//!
//! A recursive-descent walker over the [`Cursor`]. Every rule returns
//! `Result<_, Diagnostic>`. Rules that own a closing boundary (sections,
//! paragraphs, tables, chart parts, attribute blocks and so on) are recovery
//! points: a non-fatal error raised inside them is recorded and the cursor
//! skips to the rule's end tag, so siblings still parse. Fatal diagnostics
//! (`E001`, `E002`) pass through every recovery point.

mod attributes;
mod chart;
mod inline;
mod table;

use log::{debug, trace};
use quire_core::dom::{
    Barcode, Document, DocumentElements, HeaderFooter, HeaderFooterSlot, Image, Paragraph,
    Section, Styles, Table, TextFrame,
};

use crate::{
    cursor::{Boundary, Cursor, Mark},
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    symbol::Symbol,
};

pub(crate) type PResult<T = ()> = Result<T, Diagnostic>;

/// A single top-level construct read by [`parse_object`](crate::parse_object).
#[derive(Debug, Clone, PartialEq)]
pub enum DdlObject {
    Document(Document),
    Styles(Styles),
    Section(Section),
    Table(Table),
    TextFrame(TextFrame),
    Paragraph(Paragraph),
}

impl DdlObject {
    /// Element name of the root construct.
    pub fn kind(&self) -> &'static str {
        match self {
            DdlObject::Document(_) => "document",
            DdlObject::Styles(_) => "styles",
            DdlObject::Section(_) => "section",
            DdlObject::Table(_) => "table",
            DdlObject::TextFrame(_) => "textframe",
            DdlObject::Paragraph(_) => "p",
        }
    }
}

pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    diagnostics: DiagnosticCollector,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, file: Option<&str>) -> Self {
        Self {
            cursor: Cursor::new(source, file),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_diagnostics()
    }

    /// Reads a `<document>` root. Returns `None` if the run ended fatally.
    pub fn document(&mut self) -> Option<Document> {
        let result = self.document_root();
        self.finish(result)
    }

    /// Reads exactly one supported top-level construct. Returns `None` if
    /// the run ended fatally or the root is not supported.
    pub fn object(&mut self) -> Option<DdlObject> {
        let result = self.object_root();
        self.finish(result).flatten()
    }

    fn finish<T>(&mut self, result: PResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(diagnostic) => {
                debug!(diagnostic:% = diagnostic; "Parse run aborted");
                self.report(diagnostic);
                None
            }
        }
    }

    fn document_root(&mut self) -> PResult<Document> {
        self.cursor.move_next(true)?;
        let mut document = Document::default();
        if self.cursor.is_element(Symbol::Document) {
            let mark = self.cursor.mark();
            let result = self.document_body(&mut document);
            self.recover(result, mark)?;
            self.expect_eof()?;
        } else {
            let diagnostic = self.expected(Symbol::Document)?;
            self.report(diagnostic);
        }
        Ok(document)
    }

    fn object_root(&mut self) -> PResult<Option<DdlObject>> {
        self.cursor.move_next(true)?;
        let object = match self.cursor.symbol() {
            _ if !self.cursor.node().is_element() => {
                let diagnostic = self.unexpected()?;
                self.report(diagnostic);
                return Ok(None);
            }
            Symbol::Document => {
                let mut document = Document::default();
                let mark = self.cursor.mark();
                let result = self.document_body(&mut document);
                self.recover(result, mark)?;
                DdlObject::Document(document)
            }
            Symbol::Styles => {
                let mut styles = Styles::default();
                self.parse_styles(&mut styles)?;
                DdlObject::Styles(styles)
            }
            Symbol::Section => {
                let mut section = Section::default();
                self.parse_section(&mut section)?;
                DdlObject::Section(section)
            }
            Symbol::Table => {
                let mut table = Table::default();
                self.parse_table(&mut table)?;
                DdlObject::Table(table)
            }
            Symbol::TextFrame => {
                let mut frame = TextFrame::default();
                self.parse_text_frame(&mut frame)?;
                DdlObject::TextFrame(frame)
            }
            Symbol::Paragraph => {
                let mut paragraph = Paragraph::default();
                self.parse_paragraph(&mut paragraph)?;
                DdlObject::Paragraph(paragraph)
            }
            Symbol::Chart => {
                let diagnostic =
                    self.error(ErrorCode::E400, "a chart cannot be read as a top-level object");
                self.report(diagnostic);
                return Ok(None);
            }
            _ => {
                let diagnostic = self.unexpected()?;
                self.report(diagnostic);
                return Ok(None);
            }
        };
        self.expect_eof()?;
        Ok(Some(object))
    }

    // =========================================================================
    // Diagnostics and recovery
    // =========================================================================

    fn report(&mut self, diagnostic: Diagnostic) {
        let diagnostic = self.cursor.locate(diagnostic);
        self.diagnostics.emit(diagnostic);
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> Diagnostic {
        self.cursor.locate(Diagnostic::error(message).with_code(code))
    }

    fn warning(&self, code: ErrorCode, message: impl Into<String>) -> Diagnostic {
        self.cursor.locate(Diagnostic::warning(message).with_code(code))
    }

    fn unexpected_eof(&self) -> Diagnostic {
        self.error(ErrorCode::E002, "unexpected end of file")
    }

    /// The current node is not allowed here. At end of input this is the
    /// fatal error itself.
    fn unexpected(&self) -> PResult<Diagnostic> {
        if self.cursor.is_eof() {
            return Err(self.unexpected_eof());
        }
        Ok(self.error(
            ErrorCode::E100,
            format!("unexpected {}", self.cursor.node()),
        ))
    }

    /// `symbol` was required at the current node.
    fn expected(&self, symbol: Symbol) -> PResult<Diagnostic> {
        if self.cursor.is_eof() {
            return Err(self.error(
                ErrorCode::E002,
                format!("unexpected end of file, expected `<{symbol}>`"),
            ));
        }
        Ok(self.error(
            ErrorCode::E101,
            format!("expected `<{symbol}>`, found {}", self.cursor.node()),
        ))
    }

    /// Turns a non-fatal error of the rule entered at `mark` into a
    /// diagnostic and moves the cursor past the end of that element.
    fn recover(&mut self, result: PResult, mark: Mark) -> PResult {
        let diagnostic = match result {
            Ok(()) => return Ok(()),
            Err(diagnostic) if diagnostic.is_fatal() => return Err(diagnostic),
            Err(diagnostic) => diagnostic,
        };
        debug!(
            boundary:% = mark,
            location:% = self.cursor.location();
            "Recovering at end of rule"
        );
        self.report(diagnostic);
        self.cursor.skip_to_end(&mark)?;
        self.cursor.move_next(false)
    }

    fn enter(&self, symbol: Symbol) {
        trace!(rule:% = symbol, location:% = self.cursor.location(); "Entering rule");
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Whether the cursor is on the end of `symbol`. End of input is fatal.
    fn at_end(&self, symbol: Symbol) -> PResult<bool> {
        self.at_boundary(&Boundary::Symbol(symbol))
    }

    fn at_boundary(&self, boundary: &Boundary) -> PResult<bool> {
        if self.cursor.is_eof() {
            return Err(self.error(
                ErrorCode::E002,
                format!("unexpected end of file, expected `</{boundary}>`"),
            ));
        }
        Ok(self.cursor.is_end(boundary))
    }

    /// Skips character data in element-only content, then reports whether
    /// another child precedes the end of `symbol`.
    fn next_child(&mut self, symbol: Symbol) -> PResult<bool> {
        self.skip_text()?;
        Ok(!self.at_end(symbol)?)
    }

    fn skip_text(&mut self) -> PResult {
        if self.cursor.is_text() {
            self.cursor.move_next(true)?;
        }
        Ok(())
    }

    fn expect_element(&self, symbol: Symbol) -> PResult {
        if self.cursor.is_element(symbol) {
            return Ok(());
        }
        Err(self.expected(symbol)?)
    }

    fn expect_end(&self, symbol: Symbol) -> PResult {
        if self.at_end(symbol)? {
            return Ok(());
        }
        Err(self.error(
            ErrorCode::E101,
            format!("expected `</{symbol}>`, found {}", self.cursor.node()),
        ))
    }

    /// Only end of input may follow the top-level construct.
    fn expect_eof(&mut self) -> PResult {
        self.skip_text()?;
        if !self.cursor.is_eof() {
            let diagnostic = self.error(
                ErrorCode::E102,
                format!("expected end of file, found {}", self.cursor.node()),
            );
            self.report(diagnostic);
        }
        Ok(())
    }

    /// Skips the current element and its content.
    fn skip_element(&mut self) -> PResult {
        let mark = self.cursor.mark();
        self.cursor.skip_to_end(&mark)?;
        self.cursor.move_next(false)
    }

    /// Consumes an element that has no content of its own, such as `<tab/>`.
    fn finish_empty(&mut self, symbol: Symbol) -> PResult {
        if self.cursor.is_start() {
            self.cursor.move_next(true)?;
            self.expect_end(symbol)?;
        }
        self.cursor.move_next(false)
    }

    // =========================================================================
    // Document structure
    // =========================================================================

    fn document_body(&mut self, document: &mut Document) -> PResult {
        self.enter(Symbol::Document);
        let has_content = self.cursor.is_start();
        self.parse_attributes(document, None, true)?;
        if has_content {
            self.skip_text()?;
            if self.cursor.is_element(Symbol::Styles) {
                self.parse_styles(document.styles_mut())?;
                self.skip_text()?;
            }
            if self.cursor.is_element(Symbol::Sections) {
                self.parse_sections(document)?;
                self.skip_text()?;
            }
            self.expect_end(Symbol::Document)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_styles(&mut self, styles: &mut Styles) -> PResult {
        let mark = self.cursor.mark();
        let result = self.styles_body(styles);
        self.recover(result, mark)
    }

    fn styles_body(&mut self, styles: &mut Styles) -> PResult {
        self.enter(Symbol::Styles);
        let has_content = self.cursor.is_start();
        self.cursor.move_next(true)?;
        if has_content {
            while self.next_child(Symbol::Styles)? {
                if !self.cursor.is_element(Symbol::Style) {
                    return Err(self.unexpected()?);
                }
                self.parse_style(styles)?;
            }
            self.cursor.move_next(false)?;
        }
        Ok(())
    }

    fn parse_sections(&mut self, document: &mut Document) -> PResult {
        let mark = self.cursor.mark();
        let result = self.sections_body(document);
        self.recover(result, mark)
    }

    fn sections_body(&mut self, document: &mut Document) -> PResult {
        self.enter(Symbol::Sections);
        let has_content = self.cursor.is_start();
        self.cursor.move_next(true)?;
        if has_content {
            while self.next_child(Symbol::Sections)? {
                if !self.cursor.is_element(Symbol::Section) {
                    return Err(self.unexpected()?);
                }
                let mut section = Section::default();
                let result = self.parse_section(&mut section);
                document.push_section(section);
                result?;
            }
            self.cursor.move_next(false)?;
        }
        Ok(())
    }

    fn parse_section(&mut self, section: &mut Section) -> PResult {
        let mark = self.cursor.mark();
        let result = self.section_body(section);
        self.recover(result, mark)
    }

    fn section_body(&mut self, section: &mut Section) -> PResult {
        self.enter(Symbol::Section);
        let has_content = self.cursor.is_start();
        self.parse_attributes(section, None, false)?;
        if has_content {
            while self.cursor.node().is_element() && self.cursor.symbol().is_header_footer() {
                self.parse_header_footer(section)?;
            }
            self.parse_document_elements(section.elements_mut(), Symbol::Section)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_header_footer(&mut self, section: &mut Section) -> PResult {
        let symbol = self.cursor.symbol();
        self.enter(symbol);
        let mut header_footer = HeaderFooter::default();
        let mark = self.cursor.mark();
        let result = self.header_footer_body(&mut header_footer, symbol);

        let (target, slot) = match symbol {
            Symbol::Header => (section.headers_mut(), None),
            Symbol::Footer => (section.footers_mut(), None),
            Symbol::PrimaryHeader => (section.headers_mut(), Some(HeaderFooterSlot::Primary)),
            Symbol::PrimaryFooter => (section.footers_mut(), Some(HeaderFooterSlot::Primary)),
            Symbol::FirstPageHeader => (section.headers_mut(), Some(HeaderFooterSlot::FirstPage)),
            Symbol::FirstPageFooter => (section.footers_mut(), Some(HeaderFooterSlot::FirstPage)),
            Symbol::EvenPageHeader => (section.headers_mut(), Some(HeaderFooterSlot::EvenPage)),
            _ => (section.footers_mut(), Some(HeaderFooterSlot::EvenPage)),
        };
        match slot {
            Some(slot) => target.set(slot, header_footer),
            None => target.set_all(header_footer),
        }

        self.recover(result, mark)
    }

    fn header_footer_body(&mut self, header_footer: &mut HeaderFooter, symbol: Symbol) -> PResult {
        let has_content = self.cursor.is_start();
        self.parse_attributes(header_footer, None, false)?;
        if has_content {
            self.parse_document_elements(header_footer.elements_mut(), symbol)?;
        }
        self.cursor.move_next(false)
    }

    // =========================================================================
    // Block content
    // =========================================================================

    /// Reads block content up to the end of `container`.
    fn parse_document_elements(
        &mut self,
        elements: &mut DocumentElements,
        container: Symbol,
    ) -> PResult {
        while !self.at_end(container)? {
            self.parse_document_element(elements)?;
        }
        Ok(())
    }

    /// Reads one block construct, or an implicit paragraph of text and
    /// inline constructs.
    fn parse_document_element(&mut self, elements: &mut DocumentElements) -> PResult {
        if self.cursor.is_text() {
            return self.parse_implicit_paragraph(elements);
        }
        if !self.cursor.node().is_element() {
            return Err(self.unexpected()?);
        }
        match self.cursor.symbol() {
            Symbol::Paragraph => {
                let mut paragraph = Paragraph::default();
                let result = self.parse_paragraph(&mut paragraph);
                elements.push(paragraph);
                result
            }
            Symbol::PageBreak => {
                elements.add_page_break();
                self.finish_empty(Symbol::PageBreak)
            }
            Symbol::Table => {
                let mut table = Table::default();
                let result = self.parse_table(&mut table);
                elements.push(table);
                result
            }
            Symbol::Image => {
                let mut image = Image::default();
                let result = self.parse_image(&mut image);
                elements.push(image);
                result
            }
            Symbol::TextFrame => {
                let mut frame = TextFrame::default();
                let result = self.parse_text_frame(&mut frame);
                elements.push(frame);
                result
            }
            Symbol::Barcode => {
                let mut barcode = Barcode::default();
                let result = self.parse_barcode(&mut barcode);
                elements.push(barcode);
                result
            }
            Symbol::Chart => self.parse_chart(elements),
            symbol if symbol.is_inline() => self.parse_implicit_paragraph(elements),
            _ => Err(self.unexpected()?),
        }
    }

    /// Text and inline constructs directly inside a container form a
    /// paragraph that runs until the next block construct.
    fn parse_implicit_paragraph(&mut self, elements: &mut DocumentElements) -> PResult {
        trace!(location:% = self.cursor.location(); "Starting implicit paragraph");
        let mut paragraph = Paragraph::default();
        let mut result = Ok(());
        while self.cursor.is_text()
            || (self.cursor.node().is_element() && self.cursor.symbol().is_inline())
        {
            result = self.parse_inline(paragraph.elements_mut());
            if result.is_err() {
                break;
            }
        }
        if !paragraph.elements().is_empty() {
            elements.push(paragraph);
        }
        result
    }

    pub(crate) fn parse_paragraph(&mut self, paragraph: &mut Paragraph) -> PResult {
        let mark = self.cursor.mark();
        let result = self.paragraph_body(paragraph);
        self.recover(result, mark)
    }

    fn paragraph_body(&mut self, paragraph: &mut Paragraph) -> PResult {
        self.enter(Symbol::Paragraph);
        let has_content = self.cursor.is_start();
        self.parse_attributes(paragraph, None, false)?;
        if has_content {
            self.parse_inline_content(paragraph.elements_mut(), Symbol::Paragraph)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_image(&mut self, image: &mut Image) -> PResult {
        let mark = self.cursor.mark();
        let result = self.image_body(image);
        self.recover(result, mark)
    }

    fn image_body(&mut self, image: &mut Image) -> PResult {
        self.enter(Symbol::Image);
        let mut attributes = self.cursor.node().attributes.clone();
        if let Some(name) = attributes.remove("Name") {
            image.set_name(name);
        }
        let has_content = self.cursor.is_start();
        self.parse_attributes(image, Some(attributes), false)?;
        if has_content {
            if self.cursor.is_text() {
                return Err(self.error(
                    ErrorCode::E400,
                    "embedded image data is not supported",
                ));
            }
            self.expect_end(Symbol::Image)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_text_frame(&mut self, frame: &mut TextFrame) -> PResult {
        let mark = self.cursor.mark();
        let result = self.text_frame_body(frame);
        self.recover(result, mark)
    }

    fn text_frame_body(&mut self, frame: &mut TextFrame) -> PResult {
        self.enter(Symbol::TextFrame);
        let has_content = self.cursor.is_start();
        self.parse_attributes(frame, None, false)?;
        if has_content {
            self.parse_document_elements(frame.elements_mut(), Symbol::TextFrame)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_barcode(&mut self, barcode: &mut Barcode) -> PResult {
        let mark = self.cursor.mark();
        let result = self.barcode_body(barcode);
        self.recover(result, mark)
    }

    fn barcode_body(&mut self, barcode: &mut Barcode) -> PResult {
        self.enter(Symbol::Barcode);
        let has_content = self.cursor.is_start();
        self.parse_attributes(barcode, None, true)?;
        if has_content {
            self.expect_end(Symbol::Barcode)?;
        }
        self.cursor.move_next(false)
    }
}
