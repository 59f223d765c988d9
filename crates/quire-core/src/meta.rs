//! Field registry for document objects.
//!
//! Every DOM entity publishes a [`Meta`] table mapping field names to a
//! [`Slot`]: the declared kind of the field plus the accessor used to read or
//! write it. The table is built once per type (see [`Described`]) and consumed
//! through the object-safe [`DocumentObject`] trait, which is all a markup
//! reader needs to populate a document:
//!
//! - [`DocumentObject::descriptor`] looks up a field's [`ValueDescriptor`],
//! - [`DocumentObject::child_mut`] yields a nested object by field name,
//! - [`DocumentObject::set_value`] commits a typed [`Value`].
//!
//! Field names are matched ASCII case-insensitively.
//!
//! # Example
//!
//! ```
//! use quire_core::dom::Font;
//! use quire_core::meta::{DocumentObject, Value, ValueType};
//!
//! let mut font = Font::default();
//! let descriptor = font.descriptor("bold").unwrap();
//! assert_eq!(descriptor.value_type(), ValueType::Boolean);
//!
//! font.set_value("Bold", Value::Boolean(true)).unwrap();
//! assert_eq!(font.bold, Some(true));
//! ```

use std::{any::Any, fmt, str::FromStr};

use indexmap::IndexMap;
use strum::VariantNames;
use thiserror::Error;

use crate::{color::Color, unit::Unit};

/// Name and member list of an enumeration-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumInfo {
    name: &'static str,
    members: &'static [&'static str],
}

impl EnumInfo {
    fn of<E: VariantNames>() -> Self {
        let full = std::any::type_name::<E>();
        Self {
            name: full.rsplit("::").next().unwrap_or(full),
            members: E::VARIANTS,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared member names, in declaration order.
    pub fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// Finds the canonical spelling of `name`, ignoring ASCII case.
    pub fn member(&self, name: &str) -> Option<&'static str> {
        self.members
            .iter()
            .copied()
            .find(|member| member.eq_ignore_ascii_case(name))
    }
}

/// The declared semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Integer,
    Real,
    Boolean,
    Enum(EnumInfo),
    Unit,
    Color,
    /// An inline composite that converts itself from a string.
    Value(&'static str),
    /// A nested document object, named by its type.
    Object(&'static str),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Real => write!(f, "real"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Enum(info) => write!(f, "enum `{}`", info.name()),
            ValueType::Unit => write!(f, "unit"),
            ValueType::Color => write!(f, "color"),
            ValueType::Value(name) | ValueType::Object(name) => write!(f, "`{name}`"),
        }
    }
}

/// Metadata describing one assignable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDescriptor {
    name: &'static str,
    value_type: ValueType,
}

impl ValueDescriptor {
    /// Canonical field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// A converted value ready to be stored in a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i32),
    Real(f64),
    Boolean(bool),
    /// Canonical member name of an enumeration.
    Enum(String),
    Unit(Unit),
    Color(Color),
    /// Raw text handed to a nested value type's own conversion.
    Raw(String),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Boolean(_) => "boolean",
            Value::Enum(_) => "enum member",
            Value::Unit(_) => "unit",
            Value::Color(_) => "color",
            Value::Raw(_) => "raw text",
        }
    }
}

/// Errors raised by the generic field access of [`DocumentObject`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("`{type_name}` has no field `{field}`")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    #[error("field `{field}` expects {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: ValueType,
        found: &'static str,
    },

    #[error("`{value}` is not a member of `{enum_name}`")]
    InvalidEnum {
        enum_name: &'static str,
        value: String,
    },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Accessor for one field of `T`.
pub enum Slot<T: 'static> {
    String(fn(&mut T) -> &mut Option<String>),
    Integer(fn(&mut T) -> &mut Option<i32>),
    Real(fn(&mut T) -> &mut Option<f64>),
    Boolean(fn(&mut T) -> &mut Option<bool>),
    Unit(fn(&mut T) -> &mut Option<Unit>),
    Color(fn(&mut T) -> &mut Option<Color>),
    /// Stores a canonical member name; returns `false` if it does not parse.
    Enum(EnumInfo, fn(&mut T, &str) -> bool),
    Value(&'static str, fn(&mut T, &str) -> Result<(), String>),
    Object(&'static str, fn(&mut T) -> &mut dyn DocumentObject),
}

impl<T> Slot<T> {
    fn value_type(&self) -> ValueType {
        match self {
            Slot::String(_) => ValueType::String,
            Slot::Integer(_) => ValueType::Integer,
            Slot::Real(_) => ValueType::Real,
            Slot::Boolean(_) => ValueType::Boolean,
            Slot::Unit(_) => ValueType::Unit,
            Slot::Color(_) => ValueType::Color,
            Slot::Enum(info, _) => ValueType::Enum(*info),
            Slot::Value(name, _) => ValueType::Value(*name),
            Slot::Object(name, _) => ValueType::Object(*name),
        }
    }
}

/// A named [`Slot`].
pub struct Field<T: 'static> {
    name: &'static str,
    slot: Slot<T>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor {
            name: self.name,
            value_type: self.slot.value_type(),
        }
    }
}

/// The field table of one DOM type.
///
/// Built with a chain of typed registration calls:
///
/// ```
/// # use quire_core::meta::Meta;
/// #[derive(Default)]
/// struct Caption {
///     text: Option<String>,
///     lines: Option<i32>,
/// }
///
/// let meta = Meta::<Caption>::new("Caption")
///     .string("Text", |c| &mut c.text)
///     .integer("Lines", |c| &mut c.lines);
/// assert_eq!(meta.len(), 2);
/// assert!(meta.field("TEXT").is_some());
/// ```
pub struct Meta<T: 'static> {
    type_name: &'static str,
    fields: IndexMap<String, Field<T>>,
}

impl<T> Meta<T> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: IndexMap::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks a field up by name, ignoring ASCII case.
    pub fn field(&self, name: &str) -> Option<&Field<T>> {
        self.fields.get(&name.to_ascii_lowercase())
    }

    /// Iterates over the fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.values()
    }

    pub fn string(self, name: &'static str, get: fn(&mut T) -> &mut Option<String>) -> Self {
        self.with(name, Slot::String(get))
    }

    pub fn integer(self, name: &'static str, get: fn(&mut T) -> &mut Option<i32>) -> Self {
        self.with(name, Slot::Integer(get))
    }

    pub fn real(self, name: &'static str, get: fn(&mut T) -> &mut Option<f64>) -> Self {
        self.with(name, Slot::Real(get))
    }

    pub fn boolean(self, name: &'static str, get: fn(&mut T) -> &mut Option<bool>) -> Self {
        self.with(name, Slot::Boolean(get))
    }

    pub fn unit(self, name: &'static str, get: fn(&mut T) -> &mut Option<Unit>) -> Self {
        self.with(name, Slot::Unit(get))
    }

    pub fn color(self, name: &'static str, get: fn(&mut T) -> &mut Option<Color>) -> Self {
        self.with(name, Slot::Color(get))
    }

    /// Registers an enumeration field; `set` receives canonical member names.
    /// Use [`assign_enum`] to implement it.
    pub fn enumeration<E: VariantNames>(
        self,
        name: &'static str,
        set: fn(&mut T, &str) -> bool,
    ) -> Self {
        self.with(name, Slot::Enum(EnumInfo::of::<E>(), set))
    }

    /// Registers a nested value type that converts itself from a string.
    /// Use [`assign_parsed`] to implement `set`.
    pub fn value(
        self,
        name: &'static str,
        type_name: &'static str,
        set: fn(&mut T, &str) -> Result<(), String>,
    ) -> Self {
        self.with(name, Slot::Value(type_name, set))
    }

    /// Registers a nested document object.
    pub fn object(
        self,
        name: &'static str,
        type_name: &'static str,
        get: fn(&mut T) -> &mut dyn DocumentObject,
    ) -> Self {
        self.with(name, Slot::Object(type_name, get))
    }

    fn with(mut self, name: &'static str, slot: Slot<T>) -> Self {
        self.fields
            .insert(name.to_ascii_lowercase(), Field { name, slot });
        self
    }
}

/// Stores the enumeration member named `member` into `slot`.
pub fn assign_enum<E: FromStr>(slot: &mut Option<E>, member: &str) -> bool {
    match member.parse() {
        Ok(value) => {
            *slot = Some(value);
            true
        }
        Err(_) => false,
    }
}

/// Converts `raw` with `V`'s [`FromStr`] and stores it into `slot`.
pub fn assign_parsed<V>(slot: &mut Option<V>, raw: &str) -> Result<(), String>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    let value = raw.parse().map_err(|err: V::Err| err.to_string())?;
    *slot = Some(value);
    Ok(())
}

/// A DOM type with a static field table.
pub trait Described: Sized + 'static {
    fn meta() -> &'static Meta<Self>;
}

/// Object-safe, name-driven access to a DOM entity.
///
/// Implemented for every [`Described`] type.
pub trait DocumentObject: Any {
    fn type_name(&self) -> &'static str;

    fn descriptor(&self, name: &str) -> Option<ValueDescriptor>;

    fn descriptors(&self) -> Vec<ValueDescriptor>;

    /// Stores `value` into the field called `name`.
    ///
    /// # Errors
    ///
    /// Fails if the field does not exist, if `value` does not match the
    /// field's declared type, or if the field rejects it.
    fn set_value(&mut self, name: &str, value: Value) -> Result<(), DomError>;

    /// Returns the nested object stored under `name`, if that field is an
    /// object field.
    fn child_mut(&mut self, name: &str) -> Option<&mut dyn DocumentObject>;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Described> DocumentObject for T {
    fn type_name(&self) -> &'static str {
        T::meta().type_name()
    }

    fn descriptor(&self, name: &str) -> Option<ValueDescriptor> {
        T::meta().field(name).map(Field::descriptor)
    }

    fn descriptors(&self) -> Vec<ValueDescriptor> {
        T::meta().fields().map(Field::descriptor).collect()
    }

    fn set_value(&mut self, name: &str, value: Value) -> Result<(), DomError> {
        let meta = T::meta();
        let field = meta.field(name).ok_or_else(|| DomError::UnknownField {
            type_name: meta.type_name(),
            field: name.to_string(),
        })?;

        match (&field.slot, value) {
            (Slot::String(get), Value::String(v)) => *get(self) = Some(v),
            (Slot::Integer(get), Value::Integer(v)) => *get(self) = Some(v),
            (Slot::Real(get), Value::Real(v)) => *get(self) = Some(v),
            (Slot::Boolean(get), Value::Boolean(v)) => *get(self) = Some(v),
            (Slot::Unit(get), Value::Unit(v)) => *get(self) = Some(v),
            (Slot::Color(get), Value::Color(v)) => *get(self) = Some(v),
            (Slot::Enum(info, set), Value::Enum(member)) => {
                if !set(self, &member) {
                    return Err(DomError::InvalidEnum {
                        enum_name: info.name(),
                        value: member,
                    });
                }
            }
            (Slot::Value(_, set), Value::Raw(raw)) => {
                set(self, &raw).map_err(|reason| DomError::InvalidValue {
                    field: field.name,
                    reason,
                })?;
            }
            (slot, value) => {
                return Err(DomError::TypeMismatch {
                    field: field.name,
                    expected: slot.value_type(),
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut dyn DocumentObject> {
        match T::meta().field(name).map(|field| &field.slot) {
            Some(Slot::Object(_, get)) => Some(get(self)),
            _ => None,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use strum::{EnumString, VariantNames};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, EnumString, VariantNames)]
    enum Tone {
        Warm,
        Cold,
    }

    #[derive(Debug, Default)]
    struct Swatch {
        label: Option<String>,
        tone: Option<Tone>,
        weight: Option<f64>,
        edge: Option<Unit>,
        inner: Inner,
    }

    #[derive(Debug, Default)]
    struct Inner {
        count: Option<i32>,
    }

    impl Described for Inner {
        fn meta() -> &'static Meta<Self> {
            static META: LazyLock<Meta<Inner>> =
                LazyLock::new(|| Meta::new("Inner").integer("Count", |i| &mut i.count));
            &META
        }
    }

    impl Described for Swatch {
        fn meta() -> &'static Meta<Self> {
            static META: LazyLock<Meta<Swatch>> = LazyLock::new(|| {
                Meta::<Swatch>::new("Swatch")
                    .string("Label", |s| &mut s.label)
                    .enumeration::<Tone>("Tone", |s, v| assign_enum(&mut s.tone, v))
                    .real("Weight", |s| &mut s.weight)
                    .value("Edge", "Unit", |s, raw| assign_parsed(&mut s.edge, raw))
                    .object("Inner", "Inner", |s| &mut s.inner)
            });
            &META
        }
    }

    #[test]
    fn test_descriptor_lookup_is_case_insensitive() {
        let swatch = Swatch::default();
        let descriptor = swatch.descriptor("LABEL").unwrap();
        assert_eq!(descriptor.name(), "Label");
        assert_eq!(descriptor.value_type(), ValueType::String);
        assert!(swatch.descriptor("missing").is_none());
    }

    #[test]
    fn test_descriptors_keep_registration_order() {
        let names: Vec<_> = Swatch::default()
            .descriptors()
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, ["Label", "Tone", "Weight", "Edge", "Inner"]);
    }

    #[test]
    fn test_enum_info() {
        let Some(ValueType::Enum(info)) = Swatch::default()
            .descriptor("tone")
            .map(|d| d.value_type())
        else {
            panic!("expected enum descriptor");
        };
        assert_eq!(info.name(), "Tone");
        assert_eq!(info.members(), ["Warm", "Cold"]);
        assert_eq!(info.member("cOLD"), Some("Cold"));
        assert_eq!(info.member("hot"), None);
    }

    #[test]
    fn test_set_value_by_kind() {
        let mut swatch = Swatch::default();
        swatch
            .set_value("label", Value::String("x".to_string()))
            .unwrap();
        swatch.set_value("Tone", Value::Enum("Cold".to_string())).unwrap();
        swatch.set_value("Weight", Value::Real(0.5)).unwrap();
        swatch.set_value("Edge", Value::Raw("1cm".to_string())).unwrap();

        assert_eq!(swatch.label.as_deref(), Some("x"));
        assert_eq!(swatch.tone, Some(Tone::Cold));
        assert_eq!(swatch.weight, Some(0.5));
        assert_eq!(swatch.edge, Some(Unit::from_centimeters(1.0)));
    }

    #[test]
    fn test_set_value_errors() {
        let mut swatch = Swatch::default();
        assert!(matches!(
            swatch.set_value("nope", Value::Integer(1)),
            Err(DomError::UnknownField { .. })
        ));
        assert!(matches!(
            swatch.set_value("Label", Value::Integer(1)),
            Err(DomError::TypeMismatch { .. })
        ));
        assert!(matches!(
            swatch.set_value("Tone", Value::Enum("cold".to_string())),
            Err(DomError::InvalidEnum { .. })
        ));
        assert!(matches!(
            swatch.set_value("Edge", Value::Raw("wide".to_string())),
            Err(DomError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_child_mut() {
        let mut swatch = Swatch::default();
        let inner = swatch.child_mut("inner").unwrap();
        assert_eq!(inner.type_name(), "Inner");
        inner.set_value("Count", Value::Integer(3)).unwrap();
        assert_eq!(swatch.inner.count, Some(3));

        assert!(swatch.child_mut("Label").is_none());
    }

    #[test]
    fn test_downcast_through_any() {
        let mut swatch = Swatch::default();
        let inner = swatch.child_mut("Inner").unwrap();
        assert!(inner.as_any_mut().downcast_mut::<Inner>().is_some());
        assert!(inner.as_any_mut().downcast_mut::<Swatch>().is_none());
    }
}
