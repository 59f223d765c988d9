//! Document object model.
//!
//! The tree produced by the markup reader:
//!
//! - [`Document`] owns [`Styles`], [`DocumentInfo`] and a list of [`Section`]s.
//! - A [`Section`] owns its [`PageSetup`], [`HeadersFooters`] and a
//!   [`DocumentElements`] container.
//! - [`DocumentElements`] holds block-level content: [`Paragraph`], [`Table`],
//!   [`Image`], [`TextFrame`], [`Chart`], [`Barcode`] and page breaks.
//! - A [`Paragraph`] holds inline content as [`ParagraphElements`].
//!
//! Every entity whose fields can be set from markup implements
//! [`Described`](crate::meta::Described) and therefore
//! [`DocumentObject`](crate::meta::DocumentObject). Attribute-like fields are
//! public `Option`s, where `None` means "inherit" or "not set".

/// Implements [`Described`](crate::meta::Described) for a type by building its
/// field table once, on first use.
macro_rules! described {
    ($ty:ident, $meta:ident => $build:expr) => {
        impl $crate::meta::Described for $ty {
            fn meta() -> &'static $crate::meta::Meta<Self> {
                static META: ::std::sync::LazyLock<$crate::meta::Meta<$ty>> =
                    ::std::sync::LazyLock::new(|| {
                        let $meta = $crate::meta::Meta::<$ty>::new(stringify!($ty));
                        $build
                    });
                &META
            }
        }
    };
}

mod chart;
mod document;
mod elements;
mod format;
mod paragraph;
mod section;
mod shape;
mod style;
mod table;

pub use chart::{
    Axis, AxisKind, AxisTitle, BlankType, Chart, ChartType, DataLabel, DataLabelPosition,
    DataLabelType, Gridlines, Legend, MarkerStyle, PlotArea, Point, Series, TextArea,
    TextAreaKind, TickLabels, TickMarkType, XSeries, XValue,
};
pub use document::{Document, DocumentInfo, FootnoteLocation, FootnoteNumberStyle};
pub use elements::{DocumentElement, DocumentElements};
pub use format::{
    Border, BorderStyle, Borders, Font, LineSpacingRule, OutlineLevel, ParagraphAlignment,
    ParagraphFormat, Shading, TabAlignment, TabLeader, TabStop, TabStops, Underline,
};
pub use paragraph::{
    Character, Field, FieldKind, Footnote, FormattedText, Hyperlink, HyperlinkType, Paragraph,
    ParagraphElement, ParagraphElements, SymbolName, TextFormat,
};
pub use section::{
    BreakType, HeaderFooter, HeaderFooterSlot, HeadersFooters, Orientation, PageFormat,
    PageSetup, Section,
};
pub use shape::{
    Barcode, BarcodeType, DashStyle, FillFormat, HorizontalPosition, Image, LeftPosition,
    LineFormat, PictureFormat, RelativeHorizontal, RelativeVertical, TextFrame,
    TextOrientation, TopPosition, VerticalPosition, WrapFormat, WrapStyle,
};
pub use style::{INVALID_STYLE_NAME, Style, StyleType, Styles};
pub use table::{
    Cell, Column, Columns, Row, RowAlignment, RowHeightRule, Rows, Table, VerticalAlignment,
};
