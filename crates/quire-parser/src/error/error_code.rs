//! Error codes for the Quire diagnostic system.
//!
//! Error codes are organized by category:
//! - `E0xx` - Fatal markup errors
//! - `E1xx` - Structural errors
//! - `E2xx` - Value and type errors
//! - `E3xx` - Reference errors
//! - `E4xx` - Unsupported constructs

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Fatal Errors (E0xx)
    // =========================================================================
    /// Malformed markup.
    ///
    /// The input is not well-formed XML (mismatched end tag, bad entity,
    /// broken attribute syntax). Parsing stops.
    E001,

    /// Unexpected end of file.
    ///
    /// The input ended inside an open construct, so there is nothing left
    /// to recover against. Parsing stops.
    E002,

    // =========================================================================
    // Structural Errors (E1xx)
    // =========================================================================
    /// Unexpected symbol.
    ///
    /// An element appeared where the enclosing construct does not allow it.
    E100,

    /// Symbol expected.
    ///
    /// A specific element (or its end tag) was required here.
    E101,

    /// End of file expected.
    ///
    /// Content follows the single top-level construct.
    E102,

    /// Symbol not allowed.
    ///
    /// The element is known but not legal on this object, such as
    /// `<TabStops>` on an object without tab stops.
    E103,

    /// Too many cells.
    ///
    /// A row holds more cells than the table declares columns.
    E104,

    /// Missing obligatory property.
    ///
    /// A required attribute, such as the `Type` of a field, is absent.
    E105,

    // =========================================================================
    // Value Errors (E2xx)
    // =========================================================================
    /// Integer expected.
    E200,

    /// Real number expected.
    E201,

    /// Boolean expected.
    ///
    /// Only `true`, `True`, `false` and `False` are booleans.
    E202,

    /// Invalid enumeration value.
    E203,

    /// Invalid color.
    E204,

    /// Invalid unit.
    E205,

    /// Value out of range.
    E206,

    /// Missing comma.
    ///
    /// Two channels of a color function are not separated by a comma.
    E207,

    /// Invalid assignment.
    ///
    /// The value converted, but the target field rejected it.
    E208,

    /// Null assignment not supported.
    ///
    /// Only borders, border sets, shading and tab stops can be reset by
    /// assigning to them; other object-typed fields cannot.
    E209,

    /// Invalid field type.
    E210,

    /// Unknown chart type.
    E211,

    /// Style name expected.
    E212,

    // =========================================================================
    // Reference Errors (E3xx)
    // =========================================================================
    /// Invalid value name.
    ///
    /// The target object has no field with this name.
    E300,

    /// Use of undefined base style.
    E301,

    /// Use of undefined style.
    ///
    /// A new style was defined without a base style.
    E302,

    /// Symbol is not an object.
    ///
    /// A nested attribute block names a field that is not an object.
    E303,

    // =========================================================================
    // Unsupported Constructs (E4xx)
    // =========================================================================
    /// Not implemented.
    ///
    /// The construct is recognized but not supported: `CMYK`, `HSB`, `Lab`
    /// and `GRAY` colors, `<symbol>`, `<chr>`, embedded image data and
    /// top-level charts.
    E400,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
            ErrorCode::E208 => "E208",
            ErrorCode::E209 => "E209",
            ErrorCode::E210 => "E210",
            ErrorCode::E211 => "E211",
            ErrorCode::E212 => "E212",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E400 => "E400",
        }
    }

    /// Returns the numeric value of the code (e.g., 204 for `E204`).
    pub fn number(&self) -> u16 {
        self.as_str()[1..].parse().unwrap_or_default()
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed markup",
            ErrorCode::E002 => "unexpected end of file",
            ErrorCode::E100 => "unexpected symbol",
            ErrorCode::E101 => "symbol expected",
            ErrorCode::E102 => "end of file expected",
            ErrorCode::E103 => "symbol not allowed",
            ErrorCode::E104 => "too many cells",
            ErrorCode::E105 => "missing obligatory property",
            ErrorCode::E200 => "integer expected",
            ErrorCode::E201 => "real number expected",
            ErrorCode::E202 => "boolean expected",
            ErrorCode::E203 => "invalid enumeration value",
            ErrorCode::E204 => "invalid color",
            ErrorCode::E205 => "invalid unit",
            ErrorCode::E206 => "value out of range",
            ErrorCode::E207 => "missing comma",
            ErrorCode::E208 => "invalid assignment",
            ErrorCode::E209 => "null assignment not supported",
            ErrorCode::E210 => "invalid field type",
            ErrorCode::E211 => "unknown chart type",
            ErrorCode::E212 => "style name expected",
            ErrorCode::E300 => "invalid value name",
            ErrorCode::E301 => "use of undefined base style",
            ErrorCode::E302 => "use of undefined style",
            ErrorCode::E303 => "symbol is not an object",
            ErrorCode::E400 => "not implemented",
        }
    }

    /// Returns `true` for codes that end the parse run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::E001 | ErrorCode::E002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
