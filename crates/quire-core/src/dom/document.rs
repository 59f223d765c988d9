//! The document root.

use strum::{Display, EnumString, VariantNames};

use crate::{
    dom::{Section, Styles},
    meta::{DocumentObject, assign_enum},
    unit::Unit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum FootnoteLocation {
    BottomOfPage,
    EndOfDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum FootnoteNumberStyle {
    Arabic,
    LowercaseLetter,
    UppercaseLetter,
    LowercaseRoman,
    UppercaseRoman,
}

/// Descriptive metadata of a document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub comment: Option<String>,
}

described!(DocumentInfo, meta => meta
    .string("Title", |i| &mut i.title)
    .string("Author", |i| &mut i.author)
    .string("Subject", |i| &mut i.subject)
    .string("Keywords", |i| &mut i.keywords)
    .string("Comment", |i| &mut i.comment));

/// The root of the object model.
///
/// A new document starts with the standard [`Styles`] and no sections.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    pub info: DocumentInfo,
    pub comment: Option<String>,
    pub image_path: Option<String>,
    pub default_tab_stop: Option<Unit>,
    pub footnote_location: Option<FootnoteLocation>,
    pub footnote_number_style: Option<FootnoteNumberStyle>,
    pub footnote_starting_number: Option<i32>,
    pub use_cmyk_color: Option<bool>,
    styles: Styles,
    sections: Vec<Section>,
}

impl Document {
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }
}

described!(Document, meta => meta
    .object("Info", "DocumentInfo", |d| &mut d.info as &mut dyn DocumentObject)
    .string("Comment", |d| &mut d.comment)
    .string("ImagePath", |d| &mut d.image_path)
    .unit("DefaultTabStop", |d| &mut d.default_tab_stop)
    .enumeration::<FootnoteLocation>("FootnoteLocation", |d, v| {
        assign_enum(&mut d.footnote_location, v)
    })
    .enumeration::<FootnoteNumberStyle>("FootnoteNumberStyle", |d, v| {
        assign_enum(&mut d.footnote_number_style, v)
    })
    .integer("FootnoteStartingNumber", |d| &mut d.footnote_starting_number)
    .boolean("UseCmykColor", |d| &mut d.use_cmyk_color));
