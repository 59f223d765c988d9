//! Tables.
//!
//! A [`Table`] declares its [`Columns`] first; every [`Row`] created through
//! [`Table::new_row`] then carries exactly one [`Cell`] per column.

use strum::{Display, EnumString, VariantNames};

use crate::{
    dom::{Borders, DocumentElements, ParagraphFormat, Shading},
    meta::{DocumentObject, assign_enum},
    unit::Unit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum RowHeightRule {
    AtLeast,
    Auto,
    Exactly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum RowAlignment {
    Left,
    Center,
    Right,
}

// =============================================================================
// Columns
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Column {
    pub width: Option<Unit>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
    pub style: Option<String>,
    pub keep_with: Option<i32>,
    pub heading_format: Option<bool>,
    pub format: ParagraphFormat,
    pub borders: Borders,
    pub shading: Shading,
}

described!(Column, meta => meta
    .unit("Width", |c| &mut c.width)
    .unit("LeftPadding", |c| &mut c.left_padding)
    .unit("RightPadding", |c| &mut c.right_padding)
    .string("Style", |c| &mut c.style)
    .integer("KeepWith", |c| &mut c.keep_with)
    .boolean("HeadingFormat", |c| &mut c.heading_format)
    .object("Format", "ParagraphFormat", |c| &mut c.format as &mut dyn DocumentObject)
    .object("Borders", "Borders", |c| &mut c.borders as &mut dyn DocumentObject)
    .object("Shading", "Shading", |c| &mut c.shading as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Columns {
    /// Width given to columns that do not declare their own.
    pub width: Option<Unit>,
    items: Vec<Column>,
}

impl Columns {
    /// A column initialized with the collection's default width.
    pub fn new_column(&self) -> Column {
        Column {
            width: self.width,
            ..Column::default()
        }
    }

    pub fn push(&mut self, column: Column) {
        self.items.push(column);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.items.iter()
    }
}

described!(Columns, meta => meta.unit("Width", |c| &mut c.width));

// =============================================================================
// Rows and cells
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cell {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub borders: Borders,
    pub shading: Shading,
    pub merge_right: Option<i32>,
    pub merge_down: Option<i32>,
    elements: DocumentElements,
}

impl Cell {
    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }
}

described!(Cell, meta => meta
    .string("Style", |c| &mut c.style)
    .object("Format", "ParagraphFormat", |c| &mut c.format as &mut dyn DocumentObject)
    .enumeration::<VerticalAlignment>("VerticalAlignment", |c, v| {
        assign_enum(&mut c.vertical_alignment, v)
    })
    .object("Borders", "Borders", |c| &mut c.borders as &mut dyn DocumentObject)
    .object("Shading", "Shading", |c| &mut c.shading as &mut dyn DocumentObject)
    .integer("MergeRight", |c| &mut c.merge_right)
    .integer("MergeDown", |c| &mut c.merge_down));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    pub height: Option<Unit>,
    pub height_rule: Option<RowHeightRule>,
    pub heading_format: Option<bool>,
    pub keep_with: Option<i32>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub borders: Borders,
    pub shading: Shading,
    cells: Vec<Cell>,
}

impl Row {
    /// A row with `count` empty cells.
    pub fn with_cells(count: usize) -> Self {
        Self {
            cells: vec![Cell::default(); count],
            ..Self::default()
        }
    }

    /// The cell in column `index`, if the table declares that many columns.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

described!(Row, meta => meta
    .unit("Height", |r| &mut r.height)
    .enumeration::<RowHeightRule>("HeightRule", |r, v| assign_enum(&mut r.height_rule, v))
    .boolean("HeadingFormat", |r| &mut r.heading_format)
    .integer("KeepWith", |r| &mut r.keep_with)
    .enumeration::<VerticalAlignment>("VerticalAlignment", |r, v| {
        assign_enum(&mut r.vertical_alignment, v)
    })
    .unit("TopPadding", |r| &mut r.top_padding)
    .unit("BottomPadding", |r| &mut r.bottom_padding)
    .string("Style", |r| &mut r.style)
    .object("Format", "ParagraphFormat", |r| &mut r.format as &mut dyn DocumentObject)
    .object("Borders", "Borders", |r| &mut r.borders as &mut dyn DocumentObject)
    .object("Shading", "Shading", |r| &mut r.shading as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rows {
    pub height: Option<Unit>,
    pub height_rule: Option<RowHeightRule>,
    pub alignment: Option<RowAlignment>,
    pub left_indent: Option<Unit>,
    pub vertical_alignment: Option<VerticalAlignment>,
    items: Vec<Row>,
}

impl Rows {
    pub fn push(&mut self, row: Row) {
        self.items.push(row);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.items.iter()
    }
}

described!(Rows, meta => meta
    .unit("Height", |r| &mut r.height)
    .enumeration::<RowHeightRule>("HeightRule", |r, v| assign_enum(&mut r.height_rule, v))
    .enumeration::<RowAlignment>("Alignment", |r, v| assign_enum(&mut r.alignment, v))
    .unit("LeftIndent", |r| &mut r.left_indent)
    .enumeration::<VerticalAlignment>("VerticalAlignment", |r, v| {
        assign_enum(&mut r.vertical_alignment, v)
    }));

// =============================================================================
// Table
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub borders: Borders,
    pub shading: Shading,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
    pub keep_together: Option<bool>,
    pub comment: Option<String>,
    columns: Columns,
    rows: Rows,
}

impl Table {
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut Columns {
        &mut self.columns
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Rows {
        &mut self.rows
    }

    /// A row with one cell per declared column.
    pub fn new_row(&self) -> Row {
        Row::with_cells(self.columns.len())
    }
}

described!(Table, meta => meta
    .string("Style", |t| &mut t.style)
    .object("Format", "ParagraphFormat", |t| &mut t.format as &mut dyn DocumentObject)
    .object("Borders", "Borders", |t| &mut t.borders as &mut dyn DocumentObject)
    .object("Shading", "Shading", |t| &mut t.shading as &mut dyn DocumentObject)
    .unit("TopPadding", |t| &mut t.top_padding)
    .unit("BottomPadding", |t| &mut t.bottom_padding)
    .unit("LeftPadding", |t| &mut t.left_padding)
    .unit("RightPadding", |t| &mut t.right_padding)
    .boolean("KeepTogether", |t| &mut t.keep_together)
    .string("Comment", |t| &mut t.comment));
