//! Paragraphs and inline content.

use strum::{Display, EnumString, VariantNames};

use crate::{
    dom::{DocumentElements, Font, Image, ParagraphFormat},
    meta::{DocumentObject, assign_enum},
};

// =============================================================================
// Paragraph
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub comment: Option<String>,
    elements: ParagraphElements,
}

impl Paragraph {
    pub fn elements(&self) -> &ParagraphElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ParagraphElements {
        &mut self.elements
    }

    /// Concatenated text content, with tabs, breaks and spaces rendered as
    /// whitespace.
    pub fn plain_text(&self) -> String {
        self.elements.plain_text()
    }
}

described!(Paragraph, meta => meta
    .string("Style", |p| &mut p.style)
    .object("Format", "ParagraphFormat", |p| &mut p.format as &mut dyn DocumentObject)
    .string("Comment", |p| &mut p.comment));

// =============================================================================
// Inline elements
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphElement {
    Text(String),
    FormattedText(FormattedText),
    Character(Character),
    Field(Field),
    Footnote(Footnote),
    Hyperlink(Hyperlink),
    Image(Image),
}

macro_rules! inline_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ParagraphElement {
                fn from(value: $variant) -> Self {
                    ParagraphElement::$variant(value)
                }
            }
        )*
    };
}

inline_from!(FormattedText, Character, Field, Footnote, Hyperlink, Image);

/// Inline content of a paragraph or of a formatted run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParagraphElements {
    items: Vec<ParagraphElement>,
}

impl ParagraphElements {
    pub fn push(&mut self, element: impl Into<ParagraphElement>) {
        self.items.push(element.into());
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.items.push(ParagraphElement::Text(text.into()));
    }

    pub fn add_tab(&mut self) {
        self.push(Character::new(SymbolName::Tab, 1));
    }

    pub fn add_line_break(&mut self) {
        self.push(Character::new(SymbolName::LineBreak, 1));
    }

    /// Drops one trailing blank from the last element if it is plain text.
    pub fn remove_trailing_blank(&mut self) {
        if let Some(ParagraphElement::Text(text)) = self.items.last_mut() {
            if text.ends_with(' ') {
                text.pop();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParagraphElement> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParagraphElement> {
        self.items.iter()
    }

    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        self.write_plain_text(&mut text);
        text
    }

    fn write_plain_text(&self, out: &mut String) {
        for element in &self.items {
            match element {
                ParagraphElement::Text(text) => out.push_str(text),
                ParagraphElement::FormattedText(formatted) => {
                    formatted.elements.write_plain_text(out)
                }
                ParagraphElement::Hyperlink(link) => link.elements.write_plain_text(out),
                ParagraphElement::Character(character) => {
                    for _ in 0..character.count.max(0) {
                        out.push(character.symbol.as_char());
                    }
                }
                ParagraphElement::Field(_)
                | ParagraphElement::Footnote(_)
                | ParagraphElement::Image(_) => {}
            }
        }
    }
}

impl<'a> IntoIterator for &'a ParagraphElements {
    type Item = &'a ParagraphElement;
    type IntoIter = std::slice::Iter<'a, ParagraphElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Formatted text
// =============================================================================

/// Shorthand formats of the `<b>`, `<i>` and `<u>` wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Bold,
    Italic,
    Underline,
}

/// A run of inline content with its own character formatting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormattedText {
    pub style: Option<String>,
    pub font: Font,
    elements: ParagraphElements,
}

impl FormattedText {
    pub fn with_format(format: TextFormat) -> Self {
        let mut text = Self::default();
        match format {
            TextFormat::Bold => text.font.bold = Some(true),
            TextFormat::Italic => text.font.italic = Some(true),
            TextFormat::Underline => text.font.underline = Some(crate::dom::Underline::Single),
        }
        text
    }

    pub fn elements(&self) -> &ParagraphElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ParagraphElements {
        &mut self.elements
    }
}

described!(FormattedText, meta => meta
    .string("Style", |t| &mut t.style)
    .object("Font", "Font", |t| &mut t.font as &mut dyn DocumentObject)
    .string("FontName", |t| &mut t.font.name)
    .string("Name", |t| &mut t.font.name)
    .unit("Size", |t| &mut t.font.size)
    .boolean("Bold", |t| &mut t.font.bold)
    .boolean("Italic", |t| &mut t.font.italic)
    .enumeration::<crate::dom::Underline>("Underline", |t, v| {
        assign_enum(&mut t.font.underline, v)
    })
    .color("Color", |t| &mut t.font.color)
    .boolean("Superscript", |t| &mut t.font.superscript)
    .boolean("Subscript", |t| &mut t.font.subscript));

// =============================================================================
// Characters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolName {
    Blank,
    Em,
    EmQuarter,
    En,
    Tab,
    LineBreak,
}

impl SymbolName {
    /// Resolves the `Type` of a `<space>` element, ignoring ASCII case.
    /// `Em4` is accepted as an alias of `EmQuarter`.
    pub fn from_space_type(name: &str) -> Option<Self> {
        [
            ("Blank", SymbolName::Blank),
            ("Em", SymbolName::Em),
            ("EmQuarter", SymbolName::EmQuarter),
            ("Em4", SymbolName::EmQuarter),
            ("En", SymbolName::En),
        ]
        .into_iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(name))
        .map(|(_, symbol)| symbol)
    }

    fn as_char(self) -> char {
        match self {
            SymbolName::Blank => ' ',
            SymbolName::Em => '\u{2003}',
            SymbolName::EmQuarter => '\u{2005}',
            SymbolName::En => '\u{2002}',
            SymbolName::Tab => '\t',
            SymbolName::LineBreak => '\n',
        }
    }
}

/// A special character repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub symbol: SymbolName,
    pub count: i32,
}

impl Character {
    pub fn new(symbol: SymbolName, count: i32) -> Self {
        Self { symbol, count }
    }
}

// =============================================================================
// Fields
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldKind {
    Date,
    Page,
    NumPages,
    Info,
    SectionPages,
    Section,
    Bookmark,
    PageRef,
}

impl FieldKind {
    const ALL: [FieldKind; 8] = [
        FieldKind::Date,
        FieldKind::Page,
        FieldKind::NumPages,
        FieldKind::Info,
        FieldKind::SectionPages,
        FieldKind::Section,
        FieldKind::Bookmark,
        FieldKind::PageRef,
    ];

    /// Resolves a field `Type` attribute, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(name))
    }
}

/// A value computed at render time (page number, date, bookmark, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: FieldKind,
    pub format: Option<String>,
    pub name: Option<String>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            format: None,
            name: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

described!(Field, meta => meta
    .string("Format", |f| &mut f.format)
    .string("Name", |f| &mut f.name));

// =============================================================================
// Footnotes and hyperlinks
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Footnote {
    pub reference: Option<String>,
    pub style: Option<String>,
    pub format: ParagraphFormat,
    elements: DocumentElements,
}

impl Footnote {
    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }
}

described!(Footnote, meta => meta
    .string("Reference", |f| &mut f.reference)
    .string("Style", |f| &mut f.style)
    .object("Format", "ParagraphFormat", |f| &mut f.format as &mut dyn DocumentObject));

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum HyperlinkType {
    Local,
    Web,
    File,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Hyperlink {
    pub name: Option<String>,
    pub hyperlink_type: Option<HyperlinkType>,
    pub font: Font,
    elements: ParagraphElements,
}

impl Hyperlink {
    pub fn elements(&self) -> &ParagraphElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ParagraphElements {
        &mut self.elements
    }
}

described!(Hyperlink, meta => meta
    .string("Name", |h| &mut h.name)
    .enumeration::<HyperlinkType>("Type", |h, v| assign_enum(&mut h.hyperlink_type, v))
    .object("Font", "Font", |h| &mut h.font as &mut dyn DocumentObject));
