//! Positioned shapes: images, text frames and barcodes, plus the line, fill
//! and wrap formats they share with charts.

use std::{fmt, str::FromStr};

use strum::{Display, EnumString, VariantNames};

use crate::{
    color::Color,
    dom::DocumentElements,
    meta::{DocumentObject, assign_enum, assign_parsed},
    unit::Unit,
};

// =============================================================================
// Enumerations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum RelativeHorizontal {
    Character,
    Column,
    Margin,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum RelativeVertical {
    Line,
    Margin,
    Page,
    Paragraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum WrapStyle {
    TopBottom,
    None,
    Through,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum DashStyle {
    Solid,
    Dash,
    SquareDot,
    DashDot,
    LongDash,
    LongDashDot,
    LongDashDotDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum TextOrientation {
    Horizontal,
    HorizontalRotatedFarEast,
    Upward,
    Vertical,
    VerticalFarEast,
    Downward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum BarcodeType {
    Barcode25,
    Barcode39,
    Barcode128,
}

// =============================================================================
// Positions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum VerticalPosition {
    Top,
    Center,
    Bottom,
    Inside,
    Outside,
}

/// Horizontal placement of a shape: a named alignment or an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeftPosition {
    Named(HorizontalPosition),
    Offset(Unit),
}

/// Vertical placement of a shape: a named alignment or an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopPosition {
    Named(VerticalPosition),
    Offset(Unit),
}

impl FromStr for LeftPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(named) = s.trim().parse() {
            return Ok(LeftPosition::Named(named));
        }
        s.parse()
            .map(LeftPosition::Offset)
            .map_err(|_| format!("`{s}` is neither a horizontal position nor a length"))
    }
}

impl FromStr for TopPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(named) = s.trim().parse() {
            return Ok(TopPosition::Named(named));
        }
        s.parse()
            .map(TopPosition::Offset)
            .map_err(|_| format!("`{s}` is neither a vertical position nor a length"))
    }
}

impl fmt::Display for LeftPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeftPosition::Named(named) => write!(f, "{named}"),
            LeftPosition::Offset(unit) => write!(f, "{unit}"),
        }
    }
}

impl fmt::Display for TopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopPosition::Named(named) => write!(f, "{named}"),
            TopPosition::Offset(unit) => write!(f, "{unit}"),
        }
    }
}

// =============================================================================
// Shared formats
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineFormat {
    pub visible: Option<bool>,
    pub width: Option<Unit>,
    pub color: Option<Color>,
    pub dash_style: Option<DashStyle>,
}

described!(LineFormat, meta => meta
    .boolean("Visible", |l| &mut l.visible)
    .unit("Width", |l| &mut l.width)
    .color("Color", |l| &mut l.color)
    .enumeration::<DashStyle>("DashStyle", |l, v| assign_enum(&mut l.dash_style, v)));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FillFormat {
    pub visible: Option<bool>,
    pub color: Option<Color>,
}

described!(FillFormat, meta => meta
    .boolean("Visible", |f| &mut f.visible)
    .color("Color", |f| &mut f.color));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WrapFormat {
    pub style: Option<WrapStyle>,
    pub distance_top: Option<Unit>,
    pub distance_bottom: Option<Unit>,
    pub distance_left: Option<Unit>,
    pub distance_right: Option<Unit>,
}

described!(WrapFormat, meta => meta
    .enumeration::<WrapStyle>("Style", |w, v| assign_enum(&mut w.style, v))
    .unit("DistanceTop", |w| &mut w.distance_top)
    .unit("DistanceBottom", |w| &mut w.distance_bottom)
    .unit("DistanceLeft", |w| &mut w.distance_left)
    .unit("DistanceRight", |w| &mut w.distance_right));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PictureFormat {
    pub crop_left: Option<Unit>,
    pub crop_right: Option<Unit>,
    pub crop_top: Option<Unit>,
    pub crop_bottom: Option<Unit>,
}

described!(PictureFormat, meta => meta
    .unit("CropLeft", |p| &mut p.crop_left)
    .unit("CropRight", |p| &mut p.crop_right)
    .unit("CropTop", |p| &mut p.crop_top)
    .unit("CropBottom", |p| &mut p.crop_bottom));

// =============================================================================
// Image
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Image {
    name: String,
    pub width: Option<Unit>,
    pub height: Option<Unit>,
    pub lock_aspect_ratio: Option<bool>,
    pub scale_width: Option<f64>,
    pub scale_height: Option<f64>,
    pub resolution: Option<f64>,
    pub left: Option<LeftPosition>,
    pub top: Option<TopPosition>,
    pub relative_horizontal: Option<RelativeHorizontal>,
    pub relative_vertical: Option<RelativeVertical>,
    pub wrap_format: WrapFormat,
    pub line_format: LineFormat,
    pub picture_format: PictureFormat,
}

impl Image {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Path of the image file.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

described!(Image, meta => meta
    .unit("Width", |i| &mut i.width)
    .unit("Height", |i| &mut i.height)
    .boolean("LockAspectRatio", |i| &mut i.lock_aspect_ratio)
    .real("ScaleWidth", |i| &mut i.scale_width)
    .real("ScaleHeight", |i| &mut i.scale_height)
    .real("Resolution", |i| &mut i.resolution)
    .value("Left", "LeftPosition", |i, raw| assign_parsed(&mut i.left, raw))
    .value("Top", "TopPosition", |i, raw| assign_parsed(&mut i.top, raw))
    .enumeration::<RelativeHorizontal>("RelativeHorizontal", |i, v| {
        assign_enum(&mut i.relative_horizontal, v)
    })
    .enumeration::<RelativeVertical>("RelativeVertical", |i, v| {
        assign_enum(&mut i.relative_vertical, v)
    })
    .object("WrapFormat", "WrapFormat", |i| &mut i.wrap_format as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |i| &mut i.line_format as &mut dyn DocumentObject)
    .object("PictureFormat", "PictureFormat", |i| {
        &mut i.picture_format as &mut dyn DocumentObject
    }));

// =============================================================================
// Text frame
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextFrame {
    pub width: Option<Unit>,
    pub height: Option<Unit>,
    pub left: Option<LeftPosition>,
    pub top: Option<TopPosition>,
    pub relative_horizontal: Option<RelativeHorizontal>,
    pub relative_vertical: Option<RelativeVertical>,
    pub margin_left: Option<Unit>,
    pub margin_right: Option<Unit>,
    pub margin_top: Option<Unit>,
    pub margin_bottom: Option<Unit>,
    pub orientation: Option<TextOrientation>,
    pub wrap_format: WrapFormat,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
    elements: DocumentElements,
}

impl TextFrame {
    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }
}

described!(TextFrame, meta => meta
    .unit("Width", |t| &mut t.width)
    .unit("Height", |t| &mut t.height)
    .value("Left", "LeftPosition", |t, raw| assign_parsed(&mut t.left, raw))
    .value("Top", "TopPosition", |t, raw| assign_parsed(&mut t.top, raw))
    .enumeration::<RelativeHorizontal>("RelativeHorizontal", |t, v| {
        assign_enum(&mut t.relative_horizontal, v)
    })
    .enumeration::<RelativeVertical>("RelativeVertical", |t, v| {
        assign_enum(&mut t.relative_vertical, v)
    })
    .unit("MarginLeft", |t| &mut t.margin_left)
    .unit("MarginRight", |t| &mut t.margin_right)
    .unit("MarginTop", |t| &mut t.margin_top)
    .unit("MarginBottom", |t| &mut t.margin_bottom)
    .enumeration::<TextOrientation>("Orientation", |t, v| assign_enum(&mut t.orientation, v))
    .object("WrapFormat", "WrapFormat", |t| &mut t.wrap_format as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |t| &mut t.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |t| &mut t.fill_format as &mut dyn DocumentObject));

// =============================================================================
// Barcode
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Barcode {
    pub code: Option<String>,
    pub barcode_type: Option<BarcodeType>,
    pub orientation: Option<TextOrientation>,
    pub width: Option<Unit>,
    pub height: Option<Unit>,
    pub left: Option<LeftPosition>,
    pub top: Option<TopPosition>,
    pub bearer_bars: Option<bool>,
    pub text: Option<bool>,
    pub line_ratio: Option<f64>,
    pub line_height: Option<Unit>,
    pub narrow_line_width: Option<Unit>,
}

described!(Barcode, meta => meta
    .string("Code", |b| &mut b.code)
    .enumeration::<BarcodeType>("Type", |b, v| assign_enum(&mut b.barcode_type, v))
    .enumeration::<TextOrientation>("Orientation", |b, v| assign_enum(&mut b.orientation, v))
    .unit("Width", |b| &mut b.width)
    .unit("Height", |b| &mut b.height)
    .value("Left", "LeftPosition", |b, raw| assign_parsed(&mut b.left, raw))
    .value("Top", "TopPosition", |b, raw| assign_parsed(&mut b.top, raw))
    .boolean("BearerBars", |b| &mut b.bearer_bars)
    .boolean("Text", |b| &mut b.text)
    .real("LineRatio", |b| &mut b.line_ratio)
    .unit("LineHeight", |b| &mut b.line_height)
    .unit("NarrowLineWidth", |b| &mut b.narrow_line_width));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::Value;

    #[test]
    fn test_left_position_named_or_offset() {
        assert_eq!(
            "center".parse::<LeftPosition>().unwrap(),
            LeftPosition::Named(HorizontalPosition::Center)
        );
        assert_eq!(
            "2cm".parse::<LeftPosition>().unwrap(),
            LeftPosition::Offset(Unit::from_centimeters(2.0))
        );
        assert!("sideways".parse::<LeftPosition>().is_err());
    }

    #[test]
    fn test_top_position_named_or_offset() {
        assert_eq!(
            "Bottom".parse::<TopPosition>().unwrap(),
            TopPosition::Named(VerticalPosition::Bottom)
        );
        assert_eq!(TopPosition::Offset(Unit::from_points(5.0)).to_string(), "5pt");
    }

    #[test]
    fn test_image_value_type_field() {
        let mut image = Image::new("a.png");
        image
            .set_value("Left", Value::Raw("outside".to_string()))
            .unwrap();
        assert_eq!(image.left, Some(LeftPosition::Named(HorizontalPosition::Outside)));
        assert!(image.set_value("Top", Value::Raw("up".to_string())).is_err());
    }
}
