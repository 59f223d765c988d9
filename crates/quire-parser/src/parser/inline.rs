//! Paragraph content: text runs, formatting wrappers, fields, footnotes,
//! hyperlinks and special characters.
//!
//! None of these rules recovers on its own; errors end the enclosing
//! paragraph. Inline images are the exception.

use quire_core::dom::{
    Character, Field, FieldKind, Footnote, FormattedText, Hyperlink, Image, ParagraphElements,
    SymbolName, TextFormat,
};

use super::{PResult, Parser};
use crate::{cursor::NodeKind, error::ErrorCode, symbol::Symbol};

impl Parser<'_> {
    /// Reads inline content up to the end of `container`.
    pub(super) fn parse_inline_content(
        &mut self,
        elements: &mut ParagraphElements,
        container: Symbol,
    ) -> PResult {
        while !self.at_end(container)? {
            self.parse_inline(elements)?;
        }
        Ok(())
    }

    /// Reads one inline node. Always advances the cursor or fails.
    pub(super) fn parse_inline(&mut self, elements: &mut ParagraphElements) -> PResult {
        let node = self.cursor.node();
        let symbol = node.symbol;
        match node.kind {
            NodeKind::Text => {
                let text = node.text.trim();
                if !text.is_empty() {
                    elements.add_text(text);
                }
                return self.cursor.move_next(false);
            }
            NodeKind::CData => {
                if !node.text.is_empty() {
                    elements.add_text(node.text.clone());
                }
                return self.cursor.move_next(false);
            }
            NodeKind::Start | NodeKind::Empty => {}
            NodeKind::End | NodeKind::Eof => return Err(self.unexpected()?),
        }

        match symbol {
            Symbol::Bold => self.parse_formatted(elements, Some(TextFormat::Bold)),
            Symbol::Italic => self.parse_formatted(elements, Some(TextFormat::Italic)),
            Symbol::Underline => self.parse_formatted(elements, Some(TextFormat::Underline)),
            Symbol::Font | Symbol::FontSize | Symbol::FontColor => {
                self.parse_formatted(elements, None)
            }
            Symbol::Tab => {
                elements.remove_trailing_blank();
                elements.add_tab();
                self.finish_empty(Symbol::Tab)
            }
            Symbol::LineBreak => {
                elements.remove_trailing_blank();
                elements.add_line_break();
                self.finish_empty(Symbol::LineBreak)
            }
            Symbol::Space => {
                elements.remove_trailing_blank();
                self.parse_space(elements)
            }
            Symbol::Field => self.parse_field(elements),
            Symbol::Footnote => self.parse_footnote(elements),
            Symbol::Hyperlink => self.parse_hyperlink(elements),
            Symbol::Image => {
                let mut image = Image::default();
                let result = self.parse_image(&mut image);
                elements.push(image);
                result
            }
            Symbol::Symbol | Symbol::Chr => Err(self.error(
                ErrorCode::E400,
                format!("{} is not supported", self.cursor.node()),
            )),
            _ => Err(self.unexpected()?),
        }
    }

    /// `<b>`, `<i>`, `<u>` and the `<font>` family wrap a formatted run.
    /// The wrapper's attributes (`Size`, `Color`, `Name`, ...) apply to the
    /// run's font.
    fn parse_formatted(
        &mut self,
        elements: &mut ParagraphElements,
        format: Option<TextFormat>,
    ) -> PResult {
        let symbol = self.cursor.symbol();
        self.enter(symbol);
        let mut text = match format {
            Some(format) => FormattedText::with_format(format),
            None => FormattedText::default(),
        };
        let has_content = self.cursor.is_start();
        let mut result = self.parse_attributes(&mut text, None, false);
        if result.is_ok() && has_content {
            result = self.parse_inline_content(text.elements_mut(), symbol);
        }
        elements.push(text);
        result?;
        self.cursor.move_next(false)
    }

    /// `<space Type="Em" Count="3"/>`; the type defaults to a blank and the
    /// count to one.
    fn parse_space(&mut self, elements: &mut ParagraphElements) -> PResult {
        let attributes = &self.cursor.node().attributes;
        let symbol = match attributes.get("Type") {
            None => SymbolName::Blank,
            Some(name) => SymbolName::from_space_type(name.trim()).ok_or_else(|| {
                self.error(ErrorCode::E203, format!("`{name}` is not a valid space type"))
                    .with_help("expected one of: Blank, Em, EmQuarter, Em4, En")
            })?,
        };
        let count = match attributes.get("Count") {
            None => 1,
            Some(count) => count.trim().parse::<i32>().map_err(|_| {
                self.error(
                    ErrorCode::E200,
                    format!("integer expected for `Count`, found `{count}`"),
                )
            })?,
        };
        elements.push(Character::new(symbol, count));
        self.finish_empty(Symbol::Space)
    }

    /// `<field Type="page"/>`; `Type` is required, the rest (`Format`,
    /// `Name`) is assigned to the field.
    fn parse_field(&mut self, elements: &mut ParagraphElements) -> PResult {
        self.enter(Symbol::Field);
        let mut attributes = self.cursor.node().attributes.clone();
        let Some(type_name) = attributes.remove("Type") else {
            return Err(self.error(
                ErrorCode::E105,
                "missing obligatory property `Type` of `<field>`",
            ));
        };
        let Some(kind) = FieldKind::from_name(type_name.trim()) else {
            return Err(self.error(
                ErrorCode::E210,
                format!("`{type_name}` is not a field type"),
            ));
        };

        let mut field = Field::new(kind);
        let has_content = self.cursor.is_start();
        let result = self.parse_attributes(&mut field, Some(attributes), true);
        elements.push(field);
        result?;
        if has_content {
            self.expect_end(Symbol::Field)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_footnote(&mut self, elements: &mut ParagraphElements) -> PResult {
        self.enter(Symbol::Footnote);
        let mut footnote = Footnote::default();
        let has_content = self.cursor.is_start();
        let mut result = self.parse_attributes(&mut footnote, None, false);
        if result.is_ok() && has_content {
            result = self.parse_document_elements(footnote.elements_mut(), Symbol::Footnote);
        }
        elements.push(footnote);
        result?;
        self.cursor.move_next(false)
    }

    fn parse_hyperlink(&mut self, elements: &mut ParagraphElements) -> PResult {
        self.enter(Symbol::Hyperlink);
        let mut hyperlink = Hyperlink::default();
        let has_content = self.cursor.is_start();
        let mut result = self.parse_attributes(&mut hyperlink, None, false);
        if result.is_ok() && has_content {
            result = self.parse_inline_content(hyperlink.elements_mut(), Symbol::Hyperlink);
        }
        elements.push(hyperlink);
        result?;
        self.cursor.move_next(false)
    }
}
