//! Attribute scanner.
//!
//! A small forward-only tokenizer over a single attribute value, used to
//! pick apart function-style values such as `RGB(255, 0, 0)`.

/// Splits an attribute value into separator-delimited tokens.
///
/// ```
/// # use quire_parser::AttributeScanner;
/// let mut scanner = AttributeScanner::new("RGB( 10, 20 ,30)", true);
/// scanner.scan('(');
/// assert_eq!(scanner.token(), "RGB");
/// assert!(scanner.peek(','));
/// scanner.scan(',');
/// assert_eq!(scanner.token(), "10");
/// assert!(scanner.is_integer());
/// ```
#[derive(Debug, Clone)]
pub struct AttributeScanner<'a> {
    rest: &'a str,
    token: String,
    collapse_whitespace: bool,
}

impl<'a> AttributeScanner<'a> {
    /// With `collapse_whitespace` set, whitespace is dropped from tokens.
    pub fn new(text: &'a str, collapse_whitespace: bool) -> Self {
        Self {
            rest: text,
            token: String::new(),
            collapse_whitespace,
        }
    }

    /// Consumes input up to and including `separator`; the consumed text
    /// before it becomes the current token. Without a separator the rest of
    /// the input is consumed.
    pub fn scan(&mut self, separator: char) -> &str {
        let (token, rest) = match self.rest.find(separator) {
            Some(index) => (
                &self.rest[..index],
                &self.rest[index + separator.len_utf8()..],
            ),
            None => (self.rest, ""),
        };
        self.token = if self.collapse_whitespace {
            token.chars().filter(|c| !c.is_whitespace()).collect()
        } else {
            token.to_owned()
        };
        self.rest = rest;
        &self.token
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns `true` if `ch` occurs anywhere in the unconsumed input.
    pub fn peek(&self, ch: char) -> bool {
        self.rest.contains(ch)
    }

    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }

    /// Decimal literal fitting in 32 unsigned bits.
    pub fn is_integer(&self) -> bool {
        is_digits(&self.token) && self.token.parse::<u32>().is_ok()
    }

    /// Hexadecimal literal with a `0x` prefix, fitting in 32 unsigned bits.
    pub fn is_hex_integer(&self) -> bool {
        self.hex_digits()
            .is_some_and(|digits| u32::from_str_radix(digits, 16).is_ok())
    }

    /// Value of the current token as a decimal or hexadecimal literal.
    pub fn to_u32(&self) -> Option<u32> {
        match self.hex_digits() {
            Some(digits) => u32::from_str_radix(digits, 16).ok(),
            None if is_digits(&self.token) => self.token.parse().ok(),
            None => None,
        }
    }

    fn hex_digits(&self) -> Option<&str> {
        if self.token.len() <= 2 {
            return None;
        }
        let (prefix, digits) = self.token.split_at(2);
        if !prefix.eq_ignore_ascii_case("0x") {
            return None;
        }
        // `from_str_radix` accepts a leading sign; hex literals don't.
        digits
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
            .then_some(digits)
    }
}

/// Non-empty run of ASCII digits. `str::parse` would also take a sign.
pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
