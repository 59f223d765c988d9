//! Character and paragraph formatting.
//!
//! [`Border`], [`Borders`], [`Shading`] and [`TabStops`] are the clearable
//! composites: markup can reset them but never assign them a literal value.

use strum::{Display, EnumString, VariantNames};

use crate::{
    color::Color,
    meta::{DocumentObject, assign_enum},
    unit::Unit,
};

// =============================================================================
// Enumerations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum Underline {
    None,
    Single,
    Words,
    Dotted,
    Dash,
    DotDash,
    DotDotDash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum LineSpacingRule {
    Single,
    OnePtFive,
    Double,
    AtLeast,
    Exactly,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum OutlineLevel {
    BodyText,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
    Level8,
    Level9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum BorderStyle {
    None,
    Single,
    Dot,
    DashSmallGap,
    DashLargeGap,
    DashDot,
    DashDotDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum TabAlignment {
    Left,
    Center,
    Right,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum TabLeader {
    None,
    Dots,
    Dashes,
    Lines,
    Heavy,
    MiddleDot,
}

// =============================================================================
// Font
// =============================================================================

/// Character formatting. Unset fields inherit from the style.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<Unit>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<Underline>,
    pub color: Option<Color>,
    pub superscript: Option<bool>,
    pub subscript: Option<bool>,
}

described!(Font, meta => meta
    .string("Name", |f| &mut f.name)
    .unit("Size", |f| &mut f.size)
    .boolean("Bold", |f| &mut f.bold)
    .boolean("Italic", |f| &mut f.italic)
    .enumeration::<Underline>("Underline", |f, v| assign_enum(&mut f.underline, v))
    .color("Color", |f| &mut f.color)
    .boolean("Superscript", |f| &mut f.superscript)
    .boolean("Subscript", |f| &mut f.subscript));

// =============================================================================
// Borders and shading
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Border {
    pub visible: Option<bool>,
    pub style: Option<BorderStyle>,
    pub width: Option<Unit>,
    pub color: Option<Color>,
}

impl Border {
    /// Resets every property, so the border inherits again.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

described!(Border, meta => meta
    .boolean("Visible", |b| &mut b.visible)
    .enumeration::<BorderStyle>("Style", |b, v| assign_enum(&mut b.style, v))
    .unit("Width", |b| &mut b.width)
    .color("Color", |b| &mut b.color));

/// The four borders of a box plus defaults shared by all of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Borders {
    pub top: Border,
    pub left: Border,
    pub bottom: Border,
    pub right: Border,
    pub visible: Option<bool>,
    pub style: Option<BorderStyle>,
    pub width: Option<Unit>,
    pub color: Option<Color>,
    pub distance: Option<Unit>,
}

impl Borders {
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

described!(Borders, meta => meta
    .object("Top", "Border", |b| &mut b.top as &mut dyn DocumentObject)
    .object("Left", "Border", |b| &mut b.left as &mut dyn DocumentObject)
    .object("Bottom", "Border", |b| &mut b.bottom as &mut dyn DocumentObject)
    .object("Right", "Border", |b| &mut b.right as &mut dyn DocumentObject)
    .boolean("Visible", |b| &mut b.visible)
    .enumeration::<BorderStyle>("Style", |b, v| assign_enum(&mut b.style, v))
    .unit("Width", |b| &mut b.width)
    .color("Color", |b| &mut b.color)
    .unit("Distance", |b| &mut b.distance));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shading {
    pub visible: Option<bool>,
    pub color: Option<Color>,
}

impl Shading {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

described!(Shading, meta => meta
    .boolean("Visible", |s| &mut s.visible)
    .color("Color", |s| &mut s.color));

// =============================================================================
// Tab stops
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TabStop {
    pub position: Option<Unit>,
    pub alignment: Option<TabAlignment>,
    pub leader: Option<TabLeader>,
}

described!(TabStop, meta => meta
    .unit("Position", |t| &mut t.position)
    .enumeration::<TabAlignment>("Alignment", |t, v| assign_enum(&mut t.alignment, v))
    .enumeration::<TabLeader>("Leader", |t, v| assign_enum(&mut t.leader, v)));

/// Tab stops ordered by position.
///
/// Positions are compared in points, so `1in` and `72pt` name the same stop.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TabStops {
    items: Vec<TabStop>,
    cleared: bool,
}

impl TabStops {
    /// Inserts `stop`, replacing any stop at the same position.
    ///
    /// A stop without a position is placed at zero.
    pub fn add(&mut self, stop: TabStop) {
        let position = stop.position.unwrap_or_default();
        match self
            .items
            .iter()
            .position(|s| s.position.unwrap_or_default().same_length(&position))
        {
            Some(index) => self.items[index] = stop,
            None => {
                let index = self
                    .items
                    .iter()
                    .position(|s| s.position.unwrap_or_default().to_points() > position.to_points())
                    .unwrap_or(self.items.len());
                self.items.insert(index, stop);
            }
        }
    }

    /// Removes the stop at `position`. Returns `false` if there was none.
    pub fn remove_at(&mut self, position: &Unit) -> bool {
        let before = self.items.len();
        self.items
            .retain(|s| !s.position.unwrap_or_default().same_length(position));
        self.items.len() != before
    }

    /// Removes every stop, including the ones inherited from the style.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.cleared = true;
    }

    /// Whether [`TabStops::clear_all`] was applied.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabStop> {
        self.items.iter()
    }
}

described!(TabStops, meta => meta);

// =============================================================================
// Paragraph format
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<ParagraphAlignment>,
    pub first_line_indent: Option<Unit>,
    pub left_indent: Option<Unit>,
    pub right_indent: Option<Unit>,
    pub space_before: Option<Unit>,
    pub space_after: Option<Unit>,
    pub line_spacing: Option<Unit>,
    pub line_spacing_rule: Option<LineSpacingRule>,
    pub keep_together: Option<bool>,
    pub keep_with_next: Option<bool>,
    pub widow_control: Option<bool>,
    pub page_break_before: Option<bool>,
    pub outline_level: Option<OutlineLevel>,
    pub font: Font,
    pub borders: Borders,
    pub shading: Shading,
    pub tab_stops: TabStops,
}

described!(ParagraphFormat, meta => meta
    .enumeration::<ParagraphAlignment>("Alignment", |p, v| assign_enum(&mut p.alignment, v))
    .unit("FirstLineIndent", |p| &mut p.first_line_indent)
    .unit("LeftIndent", |p| &mut p.left_indent)
    .unit("RightIndent", |p| &mut p.right_indent)
    .unit("SpaceBefore", |p| &mut p.space_before)
    .unit("SpaceAfter", |p| &mut p.space_after)
    .unit("LineSpacing", |p| &mut p.line_spacing)
    .enumeration::<LineSpacingRule>("LineSpacingRule", |p, v| {
        assign_enum(&mut p.line_spacing_rule, v)
    })
    .boolean("KeepTogether", |p| &mut p.keep_together)
    .boolean("KeepWithNext", |p| &mut p.keep_with_next)
    .boolean("WidowControl", |p| &mut p.widow_control)
    .boolean("PageBreakBefore", |p| &mut p.page_break_before)
    .enumeration::<OutlineLevel>("OutlineLevel", |p, v| assign_enum(&mut p.outline_level, v))
    .object("Font", "Font", |p| &mut p.font as &mut dyn DocumentObject)
    .object("Borders", "Borders", |p| &mut p.borders as &mut dyn DocumentObject)
    .object("Shading", "Shading", |p| &mut p.shading as &mut dyn DocumentObject)
    .object("TabStops", "TabStops", |p| &mut p.tab_stops as &mut dyn DocumentObject));
