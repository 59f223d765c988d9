//! Symbol registry.
//!
//! Maps markup element names to the closed set of grammar [`Symbol`]s and
//! back. Element names are matched ASCII case-insensitively; the two boolean
//! literals only accept `true`/`True` and `false`/`False`.

use std::{collections::HashMap, fmt, sync::LazyLock};

use strum::EnumIter;

/// A recognized markup construct or literal keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Symbol {
    /// The name is not part of the language.
    None,
    /// End of input.
    Eof,

    True,
    False,

    Attributes,
    Document,
    Styles,
    Style,
    Sections,
    Section,

    Header,
    Footer,
    PrimaryHeader,
    PrimaryFooter,
    FirstPageHeader,
    FirstPageFooter,
    EvenPageHeader,
    EvenPageFooter,

    Paragraph,
    PageBreak,
    Table,
    Columns,
    Column,
    Rows,
    Row,
    Cell,
    Image,
    TextFrame,
    Barcode,

    Chart,
    PlotArea,
    HeaderArea,
    FooterArea,
    TopArea,
    BottomArea,
    LeftArea,
    RightArea,
    Legend,
    XAxis,
    YAxis,
    ZAxis,
    Series,
    XSeries,
    Point,
    XValue,

    TabStops,
    TabStop,

    Bold,
    Italic,
    Underline,
    Font,
    FontSize,
    FontColor,
    Field,
    Symbol,
    Chr,
    Footnote,
    Hyperlink,
    Tab,
    LineBreak,
    Space,
}

const NAMES: &[(Symbol, &str)] = &[
    (Symbol::True, "true"),
    (Symbol::False, "false"),
    (Symbol::Attributes, "attributes"),
    (Symbol::Document, "document"),
    (Symbol::Styles, "styles"),
    (Symbol::Style, "style"),
    (Symbol::Sections, "sections"),
    (Symbol::Section, "section"),
    (Symbol::Header, "header"),
    (Symbol::Footer, "footer"),
    (Symbol::PrimaryHeader, "primaryheader"),
    (Symbol::PrimaryFooter, "primaryfooter"),
    (Symbol::FirstPageHeader, "firstpageheader"),
    (Symbol::FirstPageFooter, "firstpagefooter"),
    (Symbol::EvenPageHeader, "evenpageheader"),
    (Symbol::EvenPageFooter, "evenpagefooter"),
    (Symbol::Paragraph, "p"),
    (Symbol::PageBreak, "pagebreak"),
    (Symbol::Table, "table"),
    (Symbol::Columns, "columns"),
    (Symbol::Column, "column"),
    (Symbol::Rows, "rows"),
    (Symbol::Row, "row"),
    (Symbol::Cell, "cell"),
    (Symbol::Image, "image"),
    (Symbol::TextFrame, "textframe"),
    (Symbol::Barcode, "barcode"),
    (Symbol::Chart, "chart"),
    (Symbol::PlotArea, "plotarea"),
    (Symbol::HeaderArea, "headerarea"),
    (Symbol::FooterArea, "footerarea"),
    (Symbol::TopArea, "toparea"),
    (Symbol::BottomArea, "bottomarea"),
    (Symbol::LeftArea, "leftarea"),
    (Symbol::RightArea, "rightarea"),
    (Symbol::Legend, "legend"),
    (Symbol::XAxis, "xaxis"),
    (Symbol::YAxis, "yaxis"),
    (Symbol::ZAxis, "zaxis"),
    (Symbol::Series, "series"),
    (Symbol::XSeries, "xseries"),
    (Symbol::Point, "point"),
    (Symbol::XValue, "xvalue"),
    (Symbol::TabStops, "tabstops"),
    (Symbol::TabStop, "tabstop"),
    (Symbol::Bold, "b"),
    (Symbol::Italic, "i"),
    (Symbol::Underline, "u"),
    (Symbol::Font, "font"),
    (Symbol::FontSize, "fontsize"),
    (Symbol::FontColor, "fontcolor"),
    (Symbol::Field, "field"),
    (Symbol::Symbol, "symbol"),
    (Symbol::Chr, "chr"),
    (Symbol::Footnote, "footnote"),
    (Symbol::Hyperlink, "hyperlink"),
    (Symbol::Tab, "tab"),
    (Symbol::LineBreak, "br"),
    (Symbol::Space, "space"),
];

/// Lowercase element name to symbol. The boolean literals are resolved
/// separately because they are case-sensitive.
static BY_NAME: LazyLock<HashMap<&'static str, Symbol>> = LazyLock::new(|| {
    NAMES
        .iter()
        .filter(|(symbol, _)| !symbol.is_literal())
        .map(|&(symbol, name)| (name, symbol))
        .collect()
});

static BY_SYMBOL: LazyLock<HashMap<Symbol, &'static str>> =
    LazyLock::new(|| NAMES.iter().copied().collect());

impl Symbol {
    /// Resolves a markup name. Unknown names yield [`Symbol::None`].
    pub fn from_name(name: &str) -> Symbol {
        match name {
            "true" | "True" => return Symbol::True,
            "false" | "False" => return Symbol::False,
            _ => {}
        }
        BY_NAME
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(Symbol::None)
    }

    /// Canonical spelling, if the symbol has one.
    pub fn name(self) -> Option<&'static str> {
        BY_SYMBOL.get(&self).copied()
    }

    /// `true` and `false`.
    pub fn is_literal(self) -> bool {
        matches!(self, Symbol::True | Symbol::False)
    }

    /// Any of the eight header and footer variants.
    pub fn is_header_footer(self) -> bool {
        matches!(
            self,
            Symbol::Header
                | Symbol::Footer
                | Symbol::PrimaryHeader
                | Symbol::PrimaryFooter
                | Symbol::FirstPageHeader
                | Symbol::FirstPageFooter
                | Symbol::EvenPageHeader
                | Symbol::EvenPageFooter
        )
    }

    /// Constructs that can only appear inside paragraph content.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Symbol::Bold
                | Symbol::Italic
                | Symbol::Underline
                | Symbol::Font
                | Symbol::FontSize
                | Symbol::FontColor
                | Symbol::Field
                | Symbol::Symbol
                | Symbol::Chr
                | Symbol::Footnote
                | Symbol::Hyperlink
                | Symbol::Tab
                | Symbol::LineBreak
                | Symbol::Space
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (_, Some(name)) => write!(f, "{name}"),
            (Symbol::Eof, None) => write!(f, "end of file"),
            _ => write!(f, "unknown symbol"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;

    fn named_symbol_strategy() -> impl Strategy<Value = Symbol> {
        let named: Vec<Symbol> = Symbol::iter().filter(|s| s.name().is_some()).collect();
        prop::sample::select(named)
    }

    /// Randomizes the ASCII case of every character.
    fn recased(name: &str, mask: &[bool]) -> String {
        name.chars()
            .zip(mask.iter().cycle())
            .map(|(c, &upper)| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    fn check_round_trip(symbol: Symbol) -> Result<(), TestCaseError> {
        let name = symbol.name().ok_or_else(|| TestCaseError::fail("no name"))?;
        prop_assert_eq!(Symbol::from_name(name), symbol);
        Ok(())
    }

    fn check_case_insensitive(symbol: Symbol, mask: Vec<bool>) -> Result<(), TestCaseError> {
        prop_assume!(!symbol.is_literal());
        let name = symbol.name().ok_or_else(|| TestCaseError::fail("no name"))?;
        prop_assert_eq!(Symbol::from_name(&recased(name, &mask)), symbol);
        Ok(())
    }

    fn check_total(name: String) -> Result<(), TestCaseError> {
        // Never panics; unknown names fall back to `None`.
        let symbol = Symbol::from_name(&name);
        if symbol != Symbol::None {
            prop_assert!(symbol.name().is_some());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn test_name_round_trip(symbol in named_symbol_strategy()) {
            check_round_trip(symbol)?;
        }

        #[test]
        fn test_lookup_ignores_case(
            symbol in named_symbol_strategy(),
            mask in prop::collection::vec(any::<bool>(), 1..8),
        ) {
            check_case_insensitive(symbol, mask)?;
        }

        #[test]
        fn test_lookup_is_total(name in "\\PC{0,16}") {
            check_total(name)?;
        }
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert_eq!(Symbol::from_name("true"), Symbol::True);
        assert_eq!(Symbol::from_name("True"), Symbol::True);
        assert_eq!(Symbol::from_name("TRUE"), Symbol::None);
        assert_eq!(Symbol::from_name("false"), Symbol::False);
        assert_eq!(Symbol::from_name("False"), Symbol::False);
        assert_eq!(Symbol::from_name("fALSE"), Symbol::None);
    }

    #[test]
    fn test_element_names() {
        assert_eq!(Symbol::from_name("P"), Symbol::Paragraph);
        assert_eq!(Symbol::from_name("TextFrame"), Symbol::TextFrame);
        assert_eq!(Symbol::from_name("br"), Symbol::LineBreak);
        assert_eq!(Symbol::from_name("paragraph"), Symbol::None);
        assert_eq!(Symbol::from_name(""), Symbol::None);
    }

    #[test]
    fn test_symbols_without_spelling() {
        assert_eq!(Symbol::None.name(), None);
        assert_eq!(Symbol::Eof.name(), None);
        assert_eq!(Symbol::Eof.to_string(), "end of file");
        assert_eq!(Symbol::TabStops.to_string(), "tabstops");
    }

    #[test]
    fn test_classification() {
        assert!(Symbol::EvenPageFooter.is_header_footer());
        assert!(!Symbol::Section.is_header_footer());
        assert!(Symbol::Hyperlink.is_inline());
        assert!(!Symbol::Image.is_inline());
    }
}
