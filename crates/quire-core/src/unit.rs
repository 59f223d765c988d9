//! Length units.
//!
//! A [`Unit`] is a decimal magnitude tagged with the measure it was written
//! in. Markup spells units as a number followed by an optional suffix
//! (`"12"`, `"2.5cm"`, `"0.5 in"`); the number alone means points.
//!
//! # Example
//!
//! ```
//! # use quire_core::unit::{Unit, UnitType};
//! let margin: Unit = "2.5cm".parse().unwrap();
//! assert_eq!(margin.unit_type(), UnitType::Centimeter);
//! assert!((margin.to_points() - 70.866).abs() < 0.001);
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;
use winnow::{
    Parser as _,
    ascii::{float, multispace0},
    combinator::{delimited, preceded},
    error::{ContextError, ErrMode},
    token::take_while,
};

/// Tolerance used when comparing two lengths in points.
const POINT_EPSILON: f64 = 1e-4;

/// The measure a [`Unit`] is expressed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    #[default]
    Point,
    Centimeter,
    Millimeter,
    Inch,
    Pica,
}

impl UnitType {
    /// Returns the suffix used to spell this measure in markup.
    pub fn suffix(self) -> &'static str {
        match self {
            UnitType::Point => "pt",
            UnitType::Centimeter => "cm",
            UnitType::Millimeter => "mm",
            UnitType::Inch => "in",
            UnitType::Pica => "pc",
        }
    }

    /// Number of points in one unit of this measure.
    pub fn points_per_unit(self) -> f64 {
        match self {
            UnitType::Point => 1.0,
            UnitType::Centimeter => 72.0 / 2.54,
            UnitType::Millimeter => 72.0 / 25.4,
            UnitType::Inch => 72.0,
            UnitType::Pica => 12.0,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        if suffix.is_empty() {
            return Some(UnitType::Point);
        }
        [
            UnitType::Point,
            UnitType::Centimeter,
            UnitType::Millimeter,
            UnitType::Inch,
            UnitType::Pica,
        ]
        .into_iter()
        .find(|unit_type| unit_type.suffix().eq_ignore_ascii_case(suffix))
    }
}

/// Errors produced when converting a string into a [`Unit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("`{0}` is not a length")]
    Malformed(String),

    #[error("unknown unit suffix `{suffix}` in `{input}`")]
    UnknownSuffix { input: String, suffix: String },
}

/// A length with its original measure.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Unit {
    value: f64,
    unit_type: UnitType,
}

impl Unit {
    pub fn new(value: f64, unit_type: UnitType) -> Self {
        Self { value, unit_type }
    }

    /// Creates a length in points.
    pub fn from_points(value: f64) -> Self {
        Self::new(value, UnitType::Point)
    }

    /// Creates a length in centimeters.
    pub fn from_centimeters(value: f64) -> Self {
        Self::new(value, UnitType::Centimeter)
    }

    /// Returns the magnitude in the unit's own measure.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// Converts the length to points.
    pub fn to_points(&self) -> f64 {
        self.value * self.unit_type.points_per_unit()
    }

    /// Returns `true` if both lengths denote the same distance, whatever
    /// measure they were written in.
    pub fn same_length(&self, other: &Unit) -> bool {
        (self.to_points() - other.to_points()).abs() < POINT_EPSILON
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit_type.suffix())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suffix) = unit_literal
            .parse(s)
            .map_err(|_| UnitError::Malformed(s.to_string()))?;

        let unit_type = UnitType::from_suffix(suffix).ok_or_else(|| UnitError::UnknownSuffix {
            input: s.to_string(),
            suffix: suffix.to_string(),
        })?;

        Ok(Self::new(value, unit_type))
    }
}

/// Parses `<float> <suffix>?` with optional surrounding whitespace.
fn unit_literal<'a>(input: &mut &'a str) -> Result<(f64, &'a str), ErrMode<ContextError>> {
    delimited(
        multispace0,
        (
            float,
            preceded(multispace0, take_while(0.., |c: char| c.is_ascii_alphabetic())),
        ),
        multispace0,
    )
    .parse_next(input)
}
