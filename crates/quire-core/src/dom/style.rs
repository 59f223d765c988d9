//! Named styles.

use indexmap::{IndexMap, map::Entry};
use log::debug;
use strum::{Display, EnumString, VariantNames};

use crate::{
    dom::ParagraphFormat,
    meta::{DocumentObject, assign_enum},
};

/// Base style assigned when a requested base style does not exist.
pub const INVALID_STYLE_NAME: &str = "InvalidStyleName";

const DEFAULT_PARAGRAPH_FONT: &str = "DefaultParagraphFont";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    name: String,
    base_style: String,
    pub style_type: Option<StyleType>,
    pub paragraph_format: ParagraphFormat,
    pub comment: Option<String>,
}

impl Style {
    pub fn new(name: impl Into<String>, base_style: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_style: base_style.into(),
            style_type: None,
            paragraph_format: ParagraphFormat::default(),
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the style this one inherits from; empty for root styles.
    pub fn base_style(&self) -> &str {
        &self.base_style
    }

    pub fn set_base_style(&mut self, base_style: impl Into<String>) {
        self.base_style = base_style.into();
    }
}

described!(Style, meta => meta
    .enumeration::<StyleType>("StyleType", |s, v| assign_enum(&mut s.style_type, v))
    .object("Font", "Font", |s| &mut s.paragraph_format.font as &mut dyn DocumentObject)
    .object("ParagraphFormat", "ParagraphFormat", |s| {
        &mut s.paragraph_format as &mut dyn DocumentObject
    })
    .string("Comment", |s| &mut s.comment));

/// Style collection, keyed case-insensitively by name.
///
/// [`Styles::default`] contains the standard styles every document starts
/// with:
///
/// ```
/// # use quire_core::dom::{Styles, INVALID_STYLE_NAME};
/// let styles = Styles::default();
/// assert_eq!(styles.get("heading3").unwrap().base_style(), "Heading2");
/// assert!(styles.contains(INVALID_STYLE_NAME));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    styles: IndexMap<String, Style>,
}

impl Styles {
    /// An empty collection without the standard styles.
    pub fn empty() -> Self {
        Self {
            styles: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(&name.to_ascii_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.styles.get_mut(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_ascii_lowercase())
    }

    /// Adds a style, replacing any style with the same name, and returns it.
    pub fn add(&mut self, name: &str, base_style: &str) -> &mut Style {
        debug!(name, base_style; "Adding style");
        let style = Style::new(name, base_style);
        match self.styles.entry(name.to_ascii_lowercase()) {
            Entry::Occupied(mut entry) => {
                entry.insert(style);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(style),
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.values()
    }
}

impl Default for Styles {
    fn default() -> Self {
        let mut styles = Self::empty();
        styles.add(DEFAULT_PARAGRAPH_FONT, "");
        styles.add("Normal", "");
        styles.add("Heading1", "Normal");
        for level in 2..=9 {
            styles.add(&format!("Heading{level}"), &format!("Heading{}", level - 1));
        }
        for name in ["List", "Footnote", "Header", "Footer"] {
            styles.add(name, "Normal");
        }
        styles.add("Hyperlink", DEFAULT_PARAGRAPH_FONT).style_type = Some(StyleType::Character);
        styles.add(INVALID_STYLE_NAME, "Normal");
        styles
    }
}
