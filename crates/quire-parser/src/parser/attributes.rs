//! Inline attributes, `<attributes>` blocks, tab stops and style
//! definitions.

use log::trace;
use quire_core::{
    dom::{INVALID_STYLE_NAME, ParagraphFormat, Styles, TabStop, TabStops},
    meta::DocumentObject,
};

use super::{PResult, Parser};
use crate::{
    assign::assign_attribute,
    cursor::{Attributes, Boundary},
    error::ErrorCode,
    symbol::Symbol,
};

impl Parser<'_> {
    /// Applies the inline attributes of the current element to `target`,
    /// then any `<attributes>` blocks that open its content.
    ///
    /// `attributes` replaces the element's own attributes when the caller
    /// has already consumed some of them. On return the cursor is on the
    /// first content node, or still on the element if it was self-closing.
    pub(super) fn parse_attributes(
        &mut self,
        target: &mut dyn DocumentObject,
        attributes: Option<Attributes>,
        skip_text: bool,
    ) -> PResult {
        let attributes = attributes.unwrap_or_else(|| self.cursor.node().attributes.clone());
        self.apply_attributes(target, &attributes);

        if !self.cursor.is_start() {
            return Ok(());
        }
        self.cursor.move_next(skip_text)?;
        loop {
            if skip_text {
                self.skip_text()?;
            }
            if !self.cursor.is_element(Symbol::Attributes) {
                return Ok(());
            }
            if self.cursor.is_start() {
                self.cursor.move_next(true)?;
                while self.next_child(Symbol::Attributes)? {
                    self.parse_attribute_block(target)?;
                }
            }
            self.cursor.move_next(skip_text)?;
        }
    }

    /// Assigns every attribute, recording failures one by one.
    fn apply_attributes(&mut self, target: &mut dyn DocumentObject, attributes: &Attributes) {
        for (name, value) in attributes.iter() {
            trace!(name = name, value = value; "Assigning attribute");
            if let Err(diagnostic) = assign_attribute(target, name, value) {
                self.report(diagnostic);
            }
        }
    }

    /// A nested block such as `<Font Bold="true"/>` names an object-typed
    /// field of `target` and sets that object's fields.
    pub(super) fn parse_attribute_block(&mut self, target: &mut dyn DocumentObject) -> PResult {
        if !self.cursor.node().is_element() {
            return Err(self.unexpected()?);
        }
        let name = self.cursor.node().name.clone();

        if name.eq_ignore_ascii_case("TabStops") {
            let format = target.as_any_mut().downcast_mut::<ParagraphFormat>();
            return match format {
                Some(format) => self.parse_tab_stops(&mut format.tab_stops),
                None => {
                    let diagnostic = self.error(
                        ErrorCode::E103,
                        format!("`<{name}>` is not allowed here"),
                    );
                    self.report(diagnostic);
                    self.skip_element()
                }
            };
        }

        let mark = self.cursor.mark();
        let result = self.attribute_block_body(target, &name);
        self.recover(result, mark)
    }

    fn attribute_block_body(&mut self, target: &mut dyn DocumentObject, name: &str) -> PResult {
        let type_name = target.type_name();
        if target.descriptor(name).is_none() {
            return Err(self.error(
                ErrorCode::E300,
                format!("`{type_name}` has no value named `{name}`"),
            ));
        }
        let Some(child) = target.child_mut(name) else {
            return Err(self.error(
                ErrorCode::E303,
                format!("`{name}` of `{type_name}` is not an object"),
            ));
        };

        let attributes = self.cursor.node().attributes.clone();
        self.apply_attributes(child, &attributes);
        if self.cursor.is_start() {
            let boundary = Boundary::Name(name.to_owned());
            self.cursor.move_next(true)?;
            loop {
                self.skip_text()?;
                if self.at_boundary(&boundary)? {
                    break;
                }
                self.parse_attribute_block(child)?;
            }
        }
        self.cursor.move_next(true)
    }

    fn parse_tab_stops(&mut self, tab_stops: &mut TabStops) -> PResult {
        let mark = self.cursor.mark();
        let result = self.tab_stops_body(tab_stops);
        self.recover(result, mark)
    }

    fn tab_stops_body(&mut self, tab_stops: &mut TabStops) -> PResult {
        self.enter(Symbol::TabStops);
        let has_content = self.cursor.is_start();
        self.cursor.move_next(true)?;
        if has_content {
            while self.next_child(Symbol::TabStops)? {
                if !self.cursor.is_element(Symbol::TabStop) {
                    return Err(self.unexpected()?);
                }
                self.parse_tab_stop(tab_stops)?;
            }
            self.cursor.move_next(true)?;
        }
        Ok(())
    }

    /// `<TabStop Position=".." Add="false"/>` removes the stop at that
    /// position; anything else adds one.
    fn parse_tab_stop(&mut self, tab_stops: &mut TabStops) -> PResult {
        let mut attributes = self.cursor.node().attributes.clone();
        let add = match attributes.remove("Add") {
            None => true,
            Some(add) => match Symbol::from_name(add.trim()) {
                Symbol::True => true,
                Symbol::False => false,
                _ => {
                    return Err(self.error(
                        ErrorCode::E202,
                        format!("boolean expected for `Add`, found `{add}`"),
                    ));
                }
            },
        };

        let mut stop = TabStop::default();
        let has_content = self.cursor.is_start();
        self.parse_attributes(&mut stop, Some(attributes), true)?;
        if has_content {
            self.expect_end(Symbol::TabStop)?;
        }

        let Some(position) = stop.position else {
            return Err(self.error(
                ErrorCode::E105,
                "missing obligatory property `Position` of `<TabStop>`",
            ));
        };
        if add {
            tab_stops.add(stop);
        } else {
            tab_stops.remove_at(&position);
        }
        self.cursor.move_next(true)
    }

    /// `<style Name=".." BaseStyle="..">` defines a new style or changes an
    /// existing one. Undefined base styles are replaced by a sentinel.
    pub(super) fn parse_style(&mut self, styles: &mut Styles) -> PResult {
        let mark = self.cursor.mark();
        let result = self.style_body(styles);
        self.recover(result, mark)
    }

    fn style_body(&mut self, styles: &mut Styles) -> PResult {
        self.enter(Symbol::Style);
        let mut attributes = self.cursor.node().attributes.clone();
        let name = attributes.remove("Name").unwrap_or_default();
        let mut base = attributes.remove("BaseStyle");
        if name.is_empty() {
            return Err(self.error(ErrorCode::E212, "style name expected"));
        }

        if let Some(requested) = base.as_deref() {
            if !requested.is_empty() && !styles.contains(requested) {
                let diagnostic = self.warning(
                    ErrorCode::E301,
                    format!("use of undefined base style `{requested}`"),
                );
                self.report(diagnostic);
                base = Some(INVALID_STYLE_NAME.to_owned());
            }
        }

        if !styles.contains(&name) {
            let base = match base {
                Some(base) if !base.is_empty() => base,
                _ => {
                    let diagnostic = self.warning(
                        ErrorCode::E302,
                        format!("new style `{name}` has no base style"),
                    );
                    self.report(diagnostic);
                    INVALID_STYLE_NAME.to_owned()
                }
            };
            styles.add(&name, &base);
        } else if let Some(base) = base {
            if let Some(style) = styles.get_mut(&name) {
                style.set_base_style(base);
            }
        }
        let Some(style) = styles.get_mut(&name) else {
            return self.cursor.move_next(false);
        };

        self.apply_attributes(style, &attributes);
        if self.cursor.is_start() {
            self.cursor.move_next(true)?;
            while self.next_child(Symbol::Style)? {
                self.parse_attribute_block(style)?;
            }
        }
        self.cursor.move_next(false)
    }
}
