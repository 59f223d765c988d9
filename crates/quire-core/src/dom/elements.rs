//! Block-level content containers.

use crate::dom::{Barcode, Chart, Image, Paragraph, Table, TextFrame};

/// One block of a section, cell, header, footer, footnote or text frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    Paragraph(Paragraph),
    Table(Table),
    Image(Image),
    TextFrame(TextFrame),
    Chart(Chart),
    Barcode(Barcode),
    PageBreak,
}

impl DocumentElement {
    /// A short lowercase name for the kind of block.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentElement::Paragraph(_) => "paragraph",
            DocumentElement::Table(_) => "table",
            DocumentElement::Image(_) => "image",
            DocumentElement::TextFrame(_) => "textframe",
            DocumentElement::Chart(_) => "chart",
            DocumentElement::Barcode(_) => "barcode",
            DocumentElement::PageBreak => "pagebreak",
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            DocumentElement::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            DocumentElement::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            DocumentElement::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_chart(&self) -> Option<&Chart> {
        match self {
            DocumentElement::Chart(chart) => Some(chart),
            _ => None,
        }
    }
}

macro_rules! element_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for DocumentElement {
                fn from(value: $variant) -> Self {
                    DocumentElement::$variant(value)
                }
            }
        )*
    };
}

element_from!(Paragraph, Table, Image, TextFrame, Chart, Barcode);

/// An ordered list of [`DocumentElement`]s.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentElements {
    items: Vec<DocumentElement>,
}

impl DocumentElements {
    pub fn push(&mut self, element: impl Into<DocumentElement>) {
        self.items.push(element.into());
    }

    pub fn add_page_break(&mut self) {
        self.items.push(DocumentElement::PageBreak);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DocumentElement> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentElement> {
        self.items.iter()
    }

    pub fn last_mut(&mut self) -> Option<&mut DocumentElement> {
        self.items.last_mut()
    }

    /// Counts the elements of the given [`DocumentElement::kind`].
    pub fn count_kind(&self, kind: &str) -> usize {
        self.items.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn into_vec(self) -> Vec<DocumentElement> {
        self.items
    }
}

impl<'a> IntoIterator for &'a DocumentElements {
    type Item = &'a DocumentElement;
    type IntoIter = std::slice::Iter<'a, DocumentElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
