//! Value assignment.
//!
//! Converts attribute text according to a field's declared [`ValueType`] and
//! stores it through the [`DocumentObject`] contract.

use quire_core::{
    dom::{Border, Borders, Shading, TabStops},
    meta::{DocumentObject, DomError, Value, ValueDescriptor, ValueType},
    unit::Unit,
};

use crate::{color::parse_color, error::Diagnostic, error::ErrorCode, symbol::Symbol};

/// Assigns `raw` to the field named `name` of `target`.
///
/// `name` may be a dotted path such as `Format.Font.Bold`; every segment but
/// the last must name an object-typed field.
///
/// ```
/// # use quire_core::dom::Paragraph;
/// # use quire_parser::assign_attribute;
/// let mut paragraph = Paragraph::default();
/// assign_attribute(&mut paragraph, "Format.Font.Bold", "true").unwrap();
/// assert_eq!(paragraph.format.font.bold, Some(true));
///
/// let err = assign_attribute(&mut paragraph, "Style.Size", "1").unwrap_err();
/// assert_eq!(err.code().map(|c| c.as_str()), Some("E303"));
/// ```
pub fn assign_attribute(
    target: &mut dyn DocumentObject,
    name: &str,
    raw: &str,
) -> Result<(), Diagnostic> {
    match name.split_once('.') {
        Some((head, rest)) => {
            let type_name = target.type_name();
            if target.descriptor(head).is_none() {
                return Err(unknown_field(type_name, head));
            }
            let child = target.child_mut(head).ok_or_else(|| {
                Diagnostic::error(format!("`{head}` of `{type_name}` is not an object"))
                    .with_code(ErrorCode::E303)
            })?;
            assign_attribute(child, rest, raw)
        }
        None => {
            let descriptor = target
                .descriptor(name)
                .ok_or_else(|| unknown_field(target.type_name(), name))?;
            assign(target, descriptor, raw)
        }
    }
}

/// Converts `raw` to `descriptor`'s declared type and stores it.
pub fn assign(
    target: &mut dyn DocumentObject,
    descriptor: ValueDescriptor,
    raw: &str,
) -> Result<(), Diagnostic> {
    let field = descriptor.name();
    let value = match descriptor.value_type() {
        ValueType::String => Value::String(raw.to_owned()),
        ValueType::Integer => {
            let value = raw.trim().parse::<i32>().map_err(|_| {
                Diagnostic::error(format!("integer expected for `{field}`, found `{raw}`"))
                    .with_code(ErrorCode::E200)
            })?;
            Value::Integer(value)
        }
        ValueType::Real => {
            let value = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Diagnostic::error(format!("real number expected for `{field}`, found `{raw}`"))
                        .with_code(ErrorCode::E201)
                })?;
            Value::Real(value)
        }
        ValueType::Boolean => match Symbol::from_name(raw.trim()) {
            Symbol::True => Value::Boolean(true),
            Symbol::False => Value::Boolean(false),
            _ => {
                return Err(
                    Diagnostic::error(format!("boolean expected for `{field}`, found `{raw}`"))
                        .with_code(ErrorCode::E202)
                        .with_help("use `true` or `false`"),
                );
            }
        },
        ValueType::Unit => {
            let unit = raw.parse::<Unit>().map_err(|err| {
                Diagnostic::error(format!("invalid unit for `{field}`: {err}"))
                    .with_code(ErrorCode::E205)
            })?;
            Value::Unit(unit)
        }
        ValueType::Enum(info) => {
            let member = info.member(raw.trim()).ok_or_else(|| {
                Diagnostic::error(format!("`{raw}` is not a valid value for `{field}`"))
                    .with_code(ErrorCode::E203)
                    .with_help(format!(
                        "`{}` accepts: {}",
                        info.name(),
                        info.members().join(", ")
                    ))
            })?;
            Value::Enum(member.to_owned())
        }
        ValueType::Color => Value::Color(parse_color(raw)?),
        ValueType::Value(_) => Value::Raw(raw.to_owned()),
        ValueType::Object(type_name) => return reset_object(target, field, type_name),
    };

    target
        .set_value(field, value)
        .map_err(|err| invalid_assignment(&err))
}

/// Assigning to an object-typed field resets it, whatever the text says.
fn reset_object(
    target: &mut dyn DocumentObject,
    field: &str,
    type_name: &str,
) -> Result<(), Diagnostic> {
    let not_supported = || {
        Diagnostic::error(format!("cannot reset `{field}` of type `{type_name}`"))
            .with_code(ErrorCode::E209)
            .with_help("only borders, shading and tab stops can be reset")
    };
    let any = target.child_mut(field).ok_or_else(not_supported)?.as_any_mut();

    if let Some(border) = any.downcast_mut::<Border>() {
        border.clear();
    } else if let Some(borders) = any.downcast_mut::<Borders>() {
        borders.clear_all();
    } else if let Some(shading) = any.downcast_mut::<Shading>() {
        shading.clear();
    } else if let Some(tab_stops) = any.downcast_mut::<TabStops>() {
        tab_stops.clear_all();
    } else {
        return Err(not_supported());
    }
    Ok(())
}

fn unknown_field(type_name: &str, field: &str) -> Diagnostic {
    Diagnostic::error(format!("`{type_name}` has no value named `{field}`"))
        .with_code(ErrorCode::E300)
}

fn invalid_assignment(err: &DomError) -> Diagnostic {
    let code = match err {
        DomError::UnknownField { .. } => ErrorCode::E300,
        DomError::InvalidEnum { .. } => ErrorCode::E203,
        DomError::TypeMismatch { .. } | DomError::InvalidValue { .. } => ErrorCode::E208,
    };
    Diagnostic::error(err.to_string()).with_code(code)
}
