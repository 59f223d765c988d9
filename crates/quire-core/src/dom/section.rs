//! Sections, page setup and headers/footers.

use strum::{Display, EnumString, VariantNames};

use crate::{
    dom::{DocumentElements, ParagraphFormat},
    meta::{DocumentObject, assign_enum},
    unit::Unit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum PageFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    B5,
    Letter,
    Legal,
    Ledger,
    P11x17,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum BreakType {
    BreakNextPage,
    BreakEvenPage,
    BreakOddPage,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageSetup {
    pub orientation: Option<Orientation>,
    pub page_format: Option<PageFormat>,
    pub page_width: Option<Unit>,
    pub page_height: Option<Unit>,
    pub top_margin: Option<Unit>,
    pub bottom_margin: Option<Unit>,
    pub left_margin: Option<Unit>,
    pub right_margin: Option<Unit>,
    pub header_distance: Option<Unit>,
    pub footer_distance: Option<Unit>,
    pub section_start: Option<BreakType>,
    pub start_page_number: Option<i32>,
    pub mirror_margins: Option<bool>,
    pub different_first_page_header_footer: Option<bool>,
    pub odd_and_even_pages_header_footer: Option<bool>,
}

described!(PageSetup, meta => meta
    .enumeration::<Orientation>("Orientation", |p, v| assign_enum(&mut p.orientation, v))
    .enumeration::<PageFormat>("PageFormat", |p, v| assign_enum(&mut p.page_format, v))
    .unit("PageWidth", |p| &mut p.page_width)
    .unit("PageHeight", |p| &mut p.page_height)
    .unit("TopMargin", |p| &mut p.top_margin)
    .unit("BottomMargin", |p| &mut p.bottom_margin)
    .unit("LeftMargin", |p| &mut p.left_margin)
    .unit("RightMargin", |p| &mut p.right_margin)
    .unit("HeaderDistance", |p| &mut p.header_distance)
    .unit("FooterDistance", |p| &mut p.footer_distance)
    .enumeration::<BreakType>("SectionStart", |p, v| assign_enum(&mut p.section_start, v))
    .integer("StartingNumber", |p| &mut p.start_page_number)
    .boolean("MirrorMargins", |p| &mut p.mirror_margins)
    .boolean("DifferentFirstPageHeaderFooter", |p| {
        &mut p.different_first_page_header_footer
    })
    .boolean("OddAndEvenPagesHeaderFooter", |p| {
        &mut p.odd_and_even_pages_header_footer
    }));

// =============================================================================
// Headers and footers
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeaderFooter {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    elements: DocumentElements,
}

impl HeaderFooter {
    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }
}

described!(HeaderFooter, meta => meta
    .string("Style", |h| &mut h.style)
    .object("Format", "ParagraphFormat", |h| &mut h.format as &mut dyn DocumentObject));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterSlot {
    Primary,
    FirstPage,
    EvenPage,
}

/// The three header (or footer) variants of a section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeadersFooters {
    primary: Option<HeaderFooter>,
    first_page: Option<HeaderFooter>,
    even_page: Option<HeaderFooter>,
}

impl HeadersFooters {
    pub fn get(&self, slot: HeaderFooterSlot) -> Option<&HeaderFooter> {
        match slot {
            HeaderFooterSlot::Primary => self.primary.as_ref(),
            HeaderFooterSlot::FirstPage => self.first_page.as_ref(),
            HeaderFooterSlot::EvenPage => self.even_page.as_ref(),
        }
    }

    pub fn set(&mut self, slot: HeaderFooterSlot, header_footer: HeaderFooter) {
        let target = match slot {
            HeaderFooterSlot::Primary => &mut self.primary,
            HeaderFooterSlot::FirstPage => &mut self.first_page,
            HeaderFooterSlot::EvenPage => &mut self.even_page,
        };
        *target = Some(header_footer);
    }

    /// Puts a copy of `header_footer` into every slot.
    pub fn set_all(&mut self, header_footer: HeaderFooter) {
        self.primary = Some(header_footer.clone());
        self.first_page = Some(header_footer.clone());
        self.even_page = Some(header_footer);
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.first_page.is_none() && self.even_page.is_none()
    }
}

// =============================================================================
// Section
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Section {
    pub page_setup: PageSetup,
    pub comment: Option<String>,
    headers: HeadersFooters,
    footers: HeadersFooters,
    elements: DocumentElements,
}

impl Section {
    pub fn headers(&self) -> &HeadersFooters {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeadersFooters {
        &mut self.headers
    }

    pub fn footers(&self) -> &HeadersFooters {
        &self.footers
    }

    pub fn footers_mut(&mut self) -> &mut HeadersFooters {
        &mut self.footers
    }

    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }
}

described!(Section, meta => meta
    .object("PageSetup", "PageSetup", |s| &mut s.page_setup as &mut dyn DocumentObject)
    .string("Comment", |s| &mut s.comment));
