//! Charts and their parts.
//!
//! Every part (plot area, text areas, axes, series) recovers on its own, so
//! one broken series does not cost the rest of the chart.

use quire_core::{
    dom::{
        AxisKind, Chart, ChartType, DocumentElements, Legend, Point, Series, TextArea,
        TextAreaKind, XSeries, XValue,
    },
    meta::DocumentObject,
};
use strum::VariantNames;

use super::{PResult, Parser};
use crate::{cursor::NodeKind, error::ErrorCode, symbol::Symbol};

impl Parser<'_> {
    /// `<chart Type="Line">`. A chart whose type could not be read is not
    /// added to `elements`.
    pub(super) fn parse_chart(&mut self, elements: &mut DocumentElements) -> PResult {
        let mut chart = None;
        let mark = self.cursor.mark();
        let result = self.chart_body(&mut chart);
        if let Some(chart) = chart {
            elements.push(chart);
        }
        self.recover(result, mark)
    }

    fn chart_body(&mut self, slot: &mut Option<Chart>) -> PResult {
        self.enter(Symbol::Chart);
        let mut attributes = self.cursor.node().attributes.clone();
        let Some(type_name) = attributes.remove("Type") else {
            return Err(self.error(
                ErrorCode::E105,
                "missing obligatory property `Type` of `<chart>`",
            ));
        };
        let chart_type = type_name.trim().parse::<ChartType>().map_err(|_| {
            self.error(ErrorCode::E211, format!("`{type_name}` is not a chart type"))
                .with_help(format!("expected one of: {}", ChartType::VARIANTS.join(", ")))
        })?;

        let chart = slot.insert(Chart::new(chart_type));
        let has_content = self.cursor.is_start();
        self.parse_attributes(chart, Some(attributes), true)?;
        if has_content {
            while self.next_child(Symbol::Chart)? {
                if !self.cursor.node().is_element() {
                    return Err(self.unexpected()?);
                }
                self.parse_chart_part(chart)?;
            }
        }
        self.cursor.move_next(false)
    }

    fn parse_chart_part(&mut self, chart: &mut Chart) -> PResult {
        let symbol = self.cursor.symbol();
        match symbol {
            Symbol::PlotArea => self.parse_simple_part(chart.plot_area_mut(), symbol),
            Symbol::HeaderArea => self.parse_text_area(chart, TextAreaKind::Header),
            Symbol::FooterArea => self.parse_text_area(chart, TextAreaKind::Footer),
            Symbol::TopArea => self.parse_text_area(chart, TextAreaKind::Top),
            Symbol::BottomArea => self.parse_text_area(chart, TextAreaKind::Bottom),
            Symbol::LeftArea => self.parse_text_area(chart, TextAreaKind::Left),
            Symbol::RightArea => self.parse_text_area(chart, TextAreaKind::Right),
            Symbol::XAxis => self.parse_simple_part(chart.axis_mut(AxisKind::X), symbol),
            Symbol::YAxis => self.parse_simple_part(chart.axis_mut(AxisKind::Y), symbol),
            Symbol::ZAxis => self.parse_simple_part(chart.axis_mut(AxisKind::Z), symbol),
            Symbol::Series => {
                let mut series = Series::default();
                let result = self.parse_series(&mut series);
                chart.push_series(series);
                result
            }
            Symbol::XSeries => {
                let mut x_series = XSeries::default();
                let result = self.parse_x_series(&mut x_series);
                chart.push_x_series(x_series);
                result
            }
            _ => Err(self.unexpected()?),
        }
    }

    /// A part that only carries attributes, such as `<plotarea>` or an axis.
    fn parse_simple_part(&mut self, target: &mut dyn DocumentObject, symbol: Symbol) -> PResult {
        let mark = self.cursor.mark();
        let result = self.simple_part_body(target, symbol);
        self.recover(result, mark)
    }

    fn simple_part_body(&mut self, target: &mut dyn DocumentObject, symbol: Symbol) -> PResult {
        self.enter(symbol);
        let has_content = self.cursor.is_start();
        self.parse_attributes(target, None, true)?;
        if has_content {
            self.expect_end(symbol)?;
        }
        self.cursor.move_next(false)
    }

    fn parse_text_area(&mut self, chart: &mut Chart, kind: TextAreaKind) -> PResult {
        let symbol = self.cursor.symbol();
        let mark = self.cursor.mark();
        let result = self.text_area_body(chart.text_area_mut(kind), symbol);
        self.recover(result, mark)
    }

    /// Text areas hold free block content and at most one `<legend>`; a
    /// later legend replaces an earlier one.
    fn text_area_body(&mut self, area: &mut TextArea, symbol: Symbol) -> PResult {
        self.enter(symbol);
        let has_content = self.cursor.is_start();
        self.parse_attributes(area, None, false)?;
        if has_content {
            while !self.at_end(symbol)? {
                if self.cursor.is_element(Symbol::Legend) {
                    let mut legend = Legend::default();
                    self.parse_simple_part(&mut legend, Symbol::Legend)?;
                    area.set_legend(legend);
                } else {
                    self.parse_document_element(area.elements_mut())?;
                }
            }
        }
        self.cursor.move_next(true)
    }

    fn parse_series(&mut self, series: &mut Series) -> PResult {
        let mark = self.cursor.mark();
        let result = self.series_body(series);
        self.recover(result, mark)
    }

    fn series_body(&mut self, series: &mut Series) -> PResult {
        self.enter(Symbol::Series);
        let has_content = self.cursor.is_start();
        self.parse_attributes(series, None, true)?;
        if has_content {
            while self.next_child(Symbol::Series)? {
                if !self.cursor.is_element(Symbol::Point) {
                    return Err(self.unexpected()?);
                }
                series.push(self.parse_point()?);
            }
        }
        self.cursor.move_next(true)
    }

    /// `<point>4.5</point>` or `<point Value="4.5"/>`.
    fn parse_point(&mut self) -> PResult<Point> {
        let mut point = Point::default();
        let has_content = self.cursor.is_start();
        self.parse_attributes(&mut point, None, false)?;
        if has_content {
            let text = self.read_text(Symbol::Point)?;
            let text = text.trim();
            if !text.is_empty() {
                let value = text.parse::<f64>().ok().filter(|value| value.is_finite());
                let Some(value) = value else {
                    return Err(self.error(
                        ErrorCode::E201,
                        format!("real number expected for `<point>`, found `{text}`"),
                    ));
                };
                point.value = Some(value);
            }
        }
        self.cursor.move_next(true)?;
        Ok(point)
    }

    fn parse_x_series(&mut self, x_series: &mut XSeries) -> PResult {
        let mark = self.cursor.mark();
        let result = self.x_series_body(x_series);
        self.recover(result, mark)
    }

    fn x_series_body(&mut self, x_series: &mut XSeries) -> PResult {
        self.enter(Symbol::XSeries);
        let has_content = self.cursor.is_start();
        self.parse_attributes(x_series, None, true)?;
        if has_content {
            while self.next_child(Symbol::XSeries)? {
                if !self.cursor.is_element(Symbol::XValue) {
                    return Err(self.unexpected()?);
                }
                let mut value = XValue::default();
                let has_content = self.cursor.is_start();
                self.parse_attributes(&mut value, None, false)?;
                if has_content {
                    let text = self.read_text(Symbol::XValue)?;
                    if !text.is_empty() {
                        value.value = Some(text);
                    }
                }
                x_series.push(value);
                self.cursor.move_next(true)?;
            }
        }
        self.cursor.move_next(true)
    }

    /// Collects character data up to the end of `symbol`, leaving the
    /// cursor on the end tag.
    fn read_text(&mut self, symbol: Symbol) -> PResult<String> {
        let mut text = String::new();
        while !self.at_end(symbol)? {
            match self.cursor.node().kind {
                NodeKind::Text => text.push_str(self.cursor.node().text.trim()),
                NodeKind::CData => text.push_str(&self.cursor.node().text),
                _ => return Err(self.unexpected()?),
            }
            self.cursor.move_next(false)?;
        }
        Ok(text)
    }
}
