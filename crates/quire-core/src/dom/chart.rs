//! Charts.
//!
//! A [`Chart`] owns a plot area, up to six surrounding [`TextArea`]s, up to
//! three [`Axis`] definitions and any number of [`Series`] and [`XSeries`].
//! Areas and axes are created on first access.

use strum::{Display, EnumString, VariantNames};

use crate::{
    color::Color,
    dom::{
        DocumentElements, FillFormat, Font, LeftPosition, LineFormat, ParagraphFormat,
        RelativeHorizontal, RelativeVertical, TopPosition, VerticalAlignment, WrapFormat,
    },
    meta::{DocumentObject, assign_enum, assign_parsed},
    unit::Unit,
};

// =============================================================================
// Enumerations
// =============================================================================

/// The kind of chart. Parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
#[strum(ascii_case_insensitive)]
pub enum ChartType {
    Line,
    Column2D,
    ColumnStacked2D,
    Bar2D,
    BarStacked2D,
    Area2D,
    Pie2D,
    PieExploded2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum BlankType {
    NotPlotted,
    Interpolated,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum TickMarkType {
    None,
    Inside,
    Outside,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum MarkerStyle {
    None,
    Circle,
    Dash,
    Diamond,
    Dot,
    Plus,
    Square,
    Star,
    Triangle,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum DataLabelPosition {
    Center,
    InsideBase,
    InsideEnd,
    OutsideEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
pub enum DataLabelType {
    None,
    Percent,
    Value,
}

/// Selects one of the six text areas around the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAreaKind {
    Header,
    Footer,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
    Z,
}

// =============================================================================
// Chart parts
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataLabel {
    pub format: Option<String>,
    pub style: Option<String>,
    pub position: Option<DataLabelPosition>,
    pub label_type: Option<DataLabelType>,
    pub font: Font,
}

described!(DataLabel, meta => meta
    .string("Format", |d| &mut d.format)
    .string("Style", |d| &mut d.style)
    .enumeration::<DataLabelPosition>("Position", |d, v| assign_enum(&mut d.position, v))
    .enumeration::<DataLabelType>("Type", |d, v| assign_enum(&mut d.label_type, v))
    .object("Font", "Font", |d| &mut d.font as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gridlines {
    pub line_format: LineFormat,
}

described!(Gridlines, meta => meta
    .object("LineFormat", "LineFormat", |g| &mut g.line_format as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickLabels {
    pub format: Option<String>,
    pub style: Option<String>,
    pub font: Font,
}

described!(TickLabels, meta => meta
    .string("Format", |t| &mut t.format)
    .string("Style", |t| &mut t.style)
    .object("Font", "Font", |t| &mut t.font as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AxisTitle {
    pub caption: Option<String>,
    pub style: Option<String>,
    pub orientation: Option<Unit>,
    pub font: Font,
}

described!(AxisTitle, meta => meta
    .string("Caption", |t| &mut t.caption)
    .string("Style", |t| &mut t.style)
    .unit("Orientation", |t| &mut t.orientation)
    .object("Font", "Font", |t| &mut t.font as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Axis {
    pub title: AxisTitle,
    pub minimum_scale: Option<f64>,
    pub maximum_scale: Option<f64>,
    pub major_tick: Option<f64>,
    pub minor_tick: Option<f64>,
    pub major_tick_mark: Option<TickMarkType>,
    pub minor_tick_mark: Option<TickMarkType>,
    pub has_major_gridlines: Option<bool>,
    pub has_minor_gridlines: Option<bool>,
    pub tick_labels: TickLabels,
    pub line_format: LineFormat,
    pub major_gridlines: Gridlines,
    pub minor_gridlines: Gridlines,
}

described!(Axis, meta => meta
    .object("Title", "AxisTitle", |a| &mut a.title as &mut dyn DocumentObject)
    .real("MinimumScale", |a| &mut a.minimum_scale)
    .real("MaximumScale", |a| &mut a.maximum_scale)
    .real("MajorTick", |a| &mut a.major_tick)
    .real("MinorTick", |a| &mut a.minor_tick)
    .enumeration::<TickMarkType>("MajorTickMark", |a, v| assign_enum(&mut a.major_tick_mark, v))
    .enumeration::<TickMarkType>("MinorTickMark", |a, v| assign_enum(&mut a.minor_tick_mark, v))
    .boolean("HasMajorGridlines", |a| &mut a.has_major_gridlines)
    .boolean("HasMinorGridlines", |a| &mut a.has_minor_gridlines)
    .object("TickLabels", "TickLabels", |a| &mut a.tick_labels as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |a| &mut a.line_format as &mut dyn DocumentObject)
    .object("MajorGridlines", "Gridlines", |a| {
        &mut a.major_gridlines as &mut dyn DocumentObject
    })
    .object("MinorGridlines", "Gridlines", |a| {
        &mut a.minor_gridlines as &mut dyn DocumentObject
    }));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlotArea {
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
}

described!(PlotArea, meta => meta
    .object("LineFormat", "LineFormat", |p| &mut p.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |p| &mut p.fill_format as &mut dyn DocumentObject)
    .unit("TopPadding", |p| &mut p.top_padding)
    .unit("BottomPadding", |p| &mut p.bottom_padding)
    .unit("LeftPadding", |p| &mut p.left_padding)
    .unit("RightPadding", |p| &mut p.right_padding));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Legend {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub line_format: LineFormat,
}

described!(Legend, meta => meta
    .string("Style", |l| &mut l.style)
    .object("Format", "ParagraphFormat", |l| &mut l.format as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |l| &mut l.line_format as &mut dyn DocumentObject));

/// A region around the plot holding free content and optionally the legend.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextArea {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
    pub height: Option<Unit>,
    pub width: Option<Unit>,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
    pub vertical_alignment: Option<VerticalAlignment>,
    elements: DocumentElements,
    legend: Option<Legend>,
}

impl TextArea {
    pub fn elements(&self) -> &DocumentElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut DocumentElements {
        &mut self.elements
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Replaces the area's legend.
    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }
}

described!(TextArea, meta => meta
    .string("Style", |t| &mut t.style)
    .object("Format", "ParagraphFormat", |t| &mut t.format as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |t| &mut t.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |t| &mut t.fill_format as &mut dyn DocumentObject)
    .unit("Height", |t| &mut t.height)
    .unit("Width", |t| &mut t.width)
    .unit("TopPadding", |t| &mut t.top_padding)
    .unit("BottomPadding", |t| &mut t.bottom_padding)
    .unit("LeftPadding", |t| &mut t.left_padding)
    .unit("RightPadding", |t| &mut t.right_padding)
    .enumeration::<VerticalAlignment>("VerticalAlignment", |t, v| {
        assign_enum(&mut t.vertical_alignment, v)
    }));

// =============================================================================
// Series
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point {
    pub value: Option<f64>,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
}

described!(Point, meta => meta
    .real("Value", |p| &mut p.value)
    .object("LineFormat", "LineFormat", |p| &mut p.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |p| &mut p.fill_format as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Series {
    pub name: Option<String>,
    pub chart_type: Option<ChartType>,
    pub marker_size: Option<Unit>,
    pub marker_style: Option<MarkerStyle>,
    pub marker_foreground_color: Option<Color>,
    pub marker_background_color: Option<Color>,
    pub has_data_label: Option<bool>,
    pub data_label: DataLabel,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
    points: Vec<Point>,
}

impl Series {
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

described!(Series, meta => meta
    .string("Name", |s| &mut s.name)
    .value("ChartType", "ChartType", |s, raw| assign_parsed(&mut s.chart_type, raw))
    .unit("MarkerSize", |s| &mut s.marker_size)
    .enumeration::<MarkerStyle>("MarkerStyle", |s, v| assign_enum(&mut s.marker_style, v))
    .color("MarkerForegroundColor", |s| &mut s.marker_foreground_color)
    .color("MarkerBackgroundColor", |s| &mut s.marker_background_color)
    .boolean("HasDataLabel", |s| &mut s.has_data_label)
    .object("DataLabel", "DataLabel", |s| &mut s.data_label as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |s| &mut s.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |s| &mut s.fill_format as &mut dyn DocumentObject));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct XValue {
    pub value: Option<String>,
}

described!(XValue, meta => meta.string("Value", |x| &mut x.value));

/// Category labels for the x axis.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XSeries {
    values: Vec<XValue>,
}

impl XSeries {
    pub fn push(&mut self, value: XValue) {
        self.values.push(value);
    }

    pub fn values(&self) -> &[XValue] {
        &self.values
    }
}

described!(XSeries, meta => meta);

// =============================================================================
// Chart
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    chart_type: ChartType,
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub width: Option<Unit>,
    pub height: Option<Unit>,
    pub left: Option<LeftPosition>,
    pub top: Option<TopPosition>,
    pub relative_horizontal: Option<RelativeHorizontal>,
    pub relative_vertical: Option<RelativeVertical>,
    pub display_blanks_as: Option<BlankType>,
    pub pie_display_percent: Option<bool>,
    pub has_data_label: Option<bool>,
    pub data_label: DataLabel,
    pub font: Font,
    pub wrap_format: WrapFormat,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
    plot_area: Option<PlotArea>,
    header_area: Option<TextArea>,
    footer_area: Option<TextArea>,
    top_area: Option<TextArea>,
    bottom_area: Option<TextArea>,
    left_area: Option<TextArea>,
    right_area: Option<TextArea>,
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
    z_axis: Option<Axis>,
    series: Vec<Series>,
    x_values: Vec<XSeries>,
}

impl Chart {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            style: None,
            format: ParagraphFormat::default(),
            width: None,
            height: None,
            left: None,
            top: None,
            relative_horizontal: None,
            relative_vertical: None,
            display_blanks_as: None,
            pie_display_percent: None,
            has_data_label: None,
            data_label: DataLabel::default(),
            font: Font::default(),
            wrap_format: WrapFormat::default(),
            line_format: LineFormat::default(),
            fill_format: FillFormat::default(),
            plot_area: None,
            header_area: None,
            footer_area: None,
            top_area: None,
            bottom_area: None,
            left_area: None,
            right_area: None,
            x_axis: None,
            y_axis: None,
            z_axis: None,
            series: Vec::new(),
            x_values: Vec::new(),
        }
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn plot_area(&self) -> Option<&PlotArea> {
        self.plot_area.as_ref()
    }

    pub fn plot_area_mut(&mut self) -> &mut PlotArea {
        self.plot_area.get_or_insert_with(PlotArea::default)
    }

    pub fn text_area(&self, kind: TextAreaKind) -> Option<&TextArea> {
        match kind {
            TextAreaKind::Header => self.header_area.as_ref(),
            TextAreaKind::Footer => self.footer_area.as_ref(),
            TextAreaKind::Top => self.top_area.as_ref(),
            TextAreaKind::Bottom => self.bottom_area.as_ref(),
            TextAreaKind::Left => self.left_area.as_ref(),
            TextAreaKind::Right => self.right_area.as_ref(),
        }
    }

    pub fn text_area_mut(&mut self, kind: TextAreaKind) -> &mut TextArea {
        let slot = match kind {
            TextAreaKind::Header => &mut self.header_area,
            TextAreaKind::Footer => &mut self.footer_area,
            TextAreaKind::Top => &mut self.top_area,
            TextAreaKind::Bottom => &mut self.bottom_area,
            TextAreaKind::Left => &mut self.left_area,
            TextAreaKind::Right => &mut self.right_area,
        };
        slot.get_or_insert_with(TextArea::default)
    }

    pub fn axis(&self, kind: AxisKind) -> Option<&Axis> {
        match kind {
            AxisKind::X => self.x_axis.as_ref(),
            AxisKind::Y => self.y_axis.as_ref(),
            AxisKind::Z => self.z_axis.as_ref(),
        }
    }

    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        let slot = match kind {
            AxisKind::X => &mut self.x_axis,
            AxisKind::Y => &mut self.y_axis,
            AxisKind::Z => &mut self.z_axis,
        };
        slot.get_or_insert_with(Axis::default)
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn push_x_series(&mut self, x_series: XSeries) {
        self.x_values.push(x_series);
    }

    pub fn x_values(&self) -> &[XSeries] {
        &self.x_values
    }
}

described!(Chart, meta => meta
    .string("Style", |c| &mut c.style)
    .object("Format", "ParagraphFormat", |c| &mut c.format as &mut dyn DocumentObject)
    .unit("Width", |c| &mut c.width)
    .unit("Height", |c| &mut c.height)
    .value("Left", "LeftPosition", |c, raw| assign_parsed(&mut c.left, raw))
    .value("Top", "TopPosition", |c, raw| assign_parsed(&mut c.top, raw))
    .enumeration::<RelativeHorizontal>("RelativeHorizontal", |c, v| {
        assign_enum(&mut c.relative_horizontal, v)
    })
    .enumeration::<RelativeVertical>("RelativeVertical", |c, v| {
        assign_enum(&mut c.relative_vertical, v)
    })
    .enumeration::<BlankType>("DisplayBlanksAs", |c, v| assign_enum(&mut c.display_blanks_as, v))
    .boolean("PieDisplayPercent", |c| &mut c.pie_display_percent)
    .boolean("HasDataLabel", |c| &mut c.has_data_label)
    .object("DataLabel", "DataLabel", |c| &mut c.data_label as &mut dyn DocumentObject)
    .object("Font", "Font", |c| &mut c.font as &mut dyn DocumentObject)
    .object("WrapFormat", "WrapFormat", |c| &mut c.wrap_format as &mut dyn DocumentObject)
    .object("LineFormat", "LineFormat", |c| &mut c.line_format as &mut dyn DocumentObject)
    .object("FillFormat", "FillFormat", |c| &mut c.fill_format as &mut dyn DocumentObject));
