//! Markup cursor.
//!
//! A forward-only view over the XML event stream. Comments, processing
//! instructions, declarations and whitespace-only text never surface; the
//! grammar rules see element starts, empty elements, end tags, character
//! data and end of input.

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::{LineIndex, Location, Span},
    symbol::Symbol,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// An element start tag with content to follow.
    Start,
    /// A self-closing element.
    Empty,
    End,
    Text,
    CData,
    Eof,
}

/// Attributes of one element, keyed by lowercase name.
///
/// The original spelling of each name is kept. A later attribute whose name
/// differs only in case replaces the earlier one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Attributes {
    items: IndexMap<String, (String, String)>,
}

impl Attributes {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.items
            .insert(name.to_ascii_lowercase(), (name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    /// Removes and returns the value of `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.items
            .shift_remove(&name.to_ascii_lowercase())
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// The node the cursor is positioned on.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub name: String,
    pub symbol: Symbol,
    pub attributes: Attributes,
    pub text: String,
    pub span: Span,
}

impl Node {
    fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            name: String::new(),
            symbol: match kind {
                NodeKind::Eof => Symbol::Eof,
                _ => Symbol::None,
            },
            attributes: Attributes::default(),
            text: String::new(),
            span,
        }
    }

    fn named(kind: NodeKind, name: String, span: Span) -> Self {
        Self {
            symbol: Symbol::from_name(&name),
            name,
            ..Self::new(kind, span)
        }
    }

    fn text(kind: NodeKind, text: String, span: Span) -> Self {
        Self {
            text,
            ..Self::new(kind, span)
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Start | NodeKind::Empty)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text | NodeKind::CData)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Start | NodeKind::Empty => write!(f, "`<{}>`", self.name),
            NodeKind::End => write!(f, "`</{}>`", self.name),
            NodeKind::Text => write!(f, "text"),
            NodeKind::CData => write!(f, "CDATA section"),
            NodeKind::Eof => write!(f, "end of file"),
        }
    }
}

/// The closing point of a grammar rule: an element identified by symbol,
/// or by literal name for attribute blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Boundary {
    Symbol(Symbol),
    Name(String),
}

impl Boundary {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Boundary::Symbol(symbol) => node.symbol == *symbol,
            Boundary::Name(name) => node.name.eq_ignore_ascii_case(name),
        }
    }
}

impl From<Symbol> for Boundary {
    fn from(symbol: Symbol) -> Self {
        Boundary::Symbol(symbol)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Symbol(symbol) => write!(f, "{symbol}"),
            Boundary::Name(name) => write!(f, "{name}"),
        }
    }
}

/// The element a grammar rule was entered on. Recovery skips to the end
/// tag that closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mark {
    name: String,
    /// Open elements once the marked element has closed.
    depth: usize,
    empty: bool,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub(crate) struct Cursor<'src> {
    reader: Reader<&'src [u8]>,
    lines: LineIndex<'src>,
    file: Option<String>,
    node: Node,
    /// Open elements, counting the current node if it is a start tag.
    depth: usize,
}

impl<'src> Cursor<'src> {
    /// A cursor positioned before the first node; call [`Cursor::move_next`]
    /// to read it.
    pub fn new(source: &'src str, file: Option<&str>) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            lines: LineIndex::new(source),
            file: file.map(str::to_owned),
            node: Node::new(NodeKind::Eof, Span::default()),
            depth: 0,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn symbol(&self) -> Symbol {
        self.node.symbol
    }

    pub fn location(&self) -> Location {
        self.lines.location(self.node.span.start())
    }

    /// Positions `diagnostic` at the current node, unless it already is.
    pub fn locate(&self, mut diagnostic: Diagnostic) -> Diagnostic {
        if diagnostic.location().is_none() {
            diagnostic = diagnostic
                .with_location(self.location())
                .with_label(self.node.span, format!("at {}", self.node));
        }
        if diagnostic.file().is_none() {
            if let Some(file) = &self.file {
                diagnostic = diagnostic.with_file(file.clone());
            }
        }
        diagnostic
    }

    pub fn is_start(&self) -> bool {
        self.node.kind == NodeKind::Start
    }

    /// A start tag or self-closing element for `symbol`.
    pub fn is_element(&self, symbol: Symbol) -> bool {
        self.node.is_element() && self.node.symbol == symbol
    }

    /// The end tag of `boundary`.
    pub fn is_end(&self, boundary: &Boundary) -> bool {
        self.node.kind == NodeKind::End && boundary.matches(&self.node)
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text()
    }

    pub fn is_eof(&self) -> bool {
        self.node.kind == NodeKind::Eof
    }

    /// Advances to the next significant node. With `skip_text` set,
    /// character data is skipped as well.
    ///
    /// # Errors
    ///
    /// Malformed markup is reported as a fatal `E001`.
    pub fn move_next(&mut self, skip_text: bool) -> Result<(), Diagnostic> {
        loop {
            let start = self.offset();
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => return Err(self.malformed(&err.to_string())),
            };
            let span = Span::new(start..self.offset());

            let node = match event {
                Event::Start(e) => self.element(NodeKind::Start, &e, span)?,
                Event::Empty(e) => self.element(NodeKind::Empty, &e, span)?,
                Event::End(e) => {
                    let name = self.utf8(e.local_name().into_inner())?;
                    Node::named(NodeKind::End, name.into_owned(), span)
                }
                Event::Text(e) => {
                    if skip_text {
                        continue;
                    }
                    let text = e.unescape().map_err(|err| self.malformed(&err.to_string()))?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    Node::text(NodeKind::Text, text.into_owned(), span)
                }
                Event::CData(e) => {
                    if skip_text {
                        continue;
                    }
                    let text = self.utf8(&e.into_inner())?.into_owned();
                    Node::text(NodeKind::CData, text, span)
                }
                Event::Eof => Node::new(NodeKind::Eof, span),
                _ => continue,
            };
            match node.kind {
                NodeKind::Start => self.depth += 1,
                NodeKind::End => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
            self.node = node;
            return Ok(());
        }
    }

    /// Marks the element under the cursor as the one a rule recovers to.
    pub fn mark(&self) -> Mark {
        let empty = self.node.kind != NodeKind::Start;
        Mark {
            name: self.node.name.clone(),
            depth: if empty { self.depth } else { self.depth.saturating_sub(1) },
            empty,
        }
    }

    /// Skips forward to the end tag closing the `mark`ed element and leaves
    /// the cursor on it, whichever node inside the element the cursor starts
    /// on. A self-closing element has no end tag; the cursor stays put.
    ///
    /// # Errors
    ///
    /// Reaching end of input first is a fatal `E002`.
    pub fn skip_to_end(&mut self, mark: &Mark) -> Result<(), Diagnostic> {
        if mark.empty {
            return Ok(());
        }
        loop {
            match self.node.kind {
                NodeKind::End if self.depth <= mark.depth => return Ok(()),
                NodeKind::Eof => {
                    return Err(self.locate(
                        Diagnostic::error(format!(
                            "unexpected end of file while looking for `</{mark}>`"
                        ))
                        .with_code(ErrorCode::E002),
                    ));
                }
                _ => self.move_next(true)?,
            }
        }
    }

    fn element(&self, kind: NodeKind, e: &BytesStart<'_>, span: Span) -> Result<Node, Diagnostic> {
        let name = self.utf8(e.local_name().into_inner())?.into_owned();
        let mut node = Node::named(kind, name, span);
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.malformed(&err.to_string()))?;
            let key = self.utf8(attr.key.as_ref())?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let value = attr
                .unescape_value()
                .map_err(|err| self.malformed(&err.to_string()))?;
            node.attributes.insert(key.into_owned(), value.into_owned());
        }
        Ok(node)
    }

    fn utf8<'b>(&self, bytes: &'b [u8]) -> Result<Cow<'b, str>, Diagnostic> {
        std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|err| self.malformed(&err.to_string()))
    }

    fn offset(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX)
    }

    fn malformed(&self, reason: &str) -> Diagnostic {
        let offset = usize::try_from(self.reader.error_position()).unwrap_or(usize::MAX);
        let diagnostic = Diagnostic::error(format!("malformed markup: {reason}"))
            .with_code(ErrorCode::E001)
            .with_location(self.lines.location(offset))
            .with_label(Span::new(offset..offset), "here");
        match &self.file {
            Some(file) => diagnostic.with_file(file.clone()),
            None => diagnostic,
        }
    }
}
