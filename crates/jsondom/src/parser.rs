//! The JSON text parser.
//!
//! A hand-written recursive-descent parser over a byte cursor. Decoded
//! string content and pending aggregate elements accumulate on the
//! [`Scratch`] stacks; completed aggregates move into owned storage on the
//! returned [`Value`] tree. Recursion depth is bounded by the input length.
//!
//! The accepted grammar is strict [RFC 8259]: no comments, no trailing
//! commas, no leading `+` or bare `.` in numbers, and every `\u` escape
//! must form a Unicode scalar value (surrogates must pair up).
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::escape;
use crate::scratch::Scratch;
use crate::value::{Member, Value};

/// The reasons a JSON text can be rejected.
///
/// The status says *what* was wrong, not where; no byte offset is carried.
/// On any error the caller receives no value at all, so there is no
/// partially populated tree to observe.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The input does not start a valid value at the current position.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was parsed but non-whitespace input remains.
    #[error("root is not singular")]
    RootNotSingular,
    /// A number overflows the range of a 64-bit float.
    #[error("number too big")]
    NumberTooBig,
    /// A string is missing its closing quotation mark.
    #[error("missing quotation mark")]
    MissQuotationMark,
    /// A string contains an unknown escape sequence.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A string contains an unescaped control character.
    #[error("invalid string char")]
    InvalidStringChar,
    /// A `\u` escape encodes an unpaired or malformed surrogate.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// A `\u` escape is not followed by four hex digits.
    #[error("invalid unicode hex")]
    InvalidUnicodeHex,
    /// An array element is not followed by `,` or `]`.
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object member does not start with a quoted key.
    #[error("missing key")]
    MissKey,
    /// An object key is not followed by `:`.
    #[error("missing colon")]
    MissColon,
    /// An object member is not followed by `,` or `}`.
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,
}

/// Parses a JSON text into a [`Value`] tree.
///
/// Exactly one value may appear in the input; surrounding whitespace
/// (space, tab, carriage return, line feed) is skipped.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. Whatever had been built
/// by then is released before returning.
///
/// # Examples
///
/// ```
/// use jsondom::{ParseError, parse};
///
/// let v = parse("[1, 2, 3]").unwrap();
/// assert_eq!(v.as_array().unwrap().len(), 3);
///
/// assert_eq!(parse("1e999"), Err(ParseError::NumberTooBig));
/// assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(ParseError::RootNotSingular);
    }
    debug_assert!(parser.scratch.is_empty());
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    scratch: Scratch,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            scratch: Scratch::new(),
        }
    }

    fn byte(&self, at: usize) -> Option<u8> {
        self.input.as_bytes().get(at).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.byte(self.pos)
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Boolean(false)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
            None => Err(ParseError::ExpectValue),
        }
    }

    /// Matches one of the literal names `null`, `true`, `false`.
    fn parse_literal(
        &mut self,
        literal: &'static [u8],
        value: Value,
    ) -> Result<Value, ParseError> {
        if self.input.as_bytes()[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Validates a number span by lookahead, then converts it.
    ///
    /// The grammar is an optional `-`, an integer part (`0` or a non-zero
    /// digit run), an optional fraction, and an optional exponent. A
    /// leading zero followed by more digits is *not* consumed beyond the
    /// zero; the leftover digits then trip the top-level singular-root
    /// check.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;
        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        match bytes.get(end) {
            Some(b'0') => end += 1,
            Some(b'1'..=b'9') => {
                end += 1;
                while matches!(bytes.get(end), Some(b'0'..=b'9')) {
                    end += 1;
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            if !matches!(bytes.get(end), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(bytes.get(end), Some(b'0'..=b'9')) {
                end += 1;
            }
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            end += 1;
            if matches!(bytes.get(end), Some(b'+' | b'-')) {
                end += 1;
            }
            if !matches!(bytes.get(end), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(bytes.get(end), Some(b'0'..=b'9')) {
                end += 1;
            }
        }
        // The validated span is a well-formed decimal literal.
        let number: f64 = self.input[start..end].parse().unwrap();
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.pos = end;
        Ok(Value::Number(number))
    }

    fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.parse_string_raw().map(Value::String)
    }

    /// Parses a quoted string into owned storage.
    ///
    /// Object keys call this directly; string values wrap the result. On
    /// failure the text stack is rewound to where this production started.
    fn parse_string_raw(&mut self) -> Result<String, ParseError> {
        let mark = self.scratch.text_mark();
        match self.scan_string(mark) {
            Ok(content) => Ok(content),
            Err(err) => {
                self.scratch.rewind_text(mark);
                Err(err)
            }
        }
    }

    fn scan_string(&mut self, mark: usize) -> Result<String, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        loop {
            // Batch-copy the run up to the next quote, backslash, or
            // control byte. Runs break only at ASCII bytes, so the slice
            // below always lands on character boundaries.
            let run = self.pos;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' || b < 0x20 {
                    break;
                }
                self.pos += 1;
            }
            if run < self.pos {
                self.scratch.push_str(&self.input[run..self.pos]);
            }
            match self.peek() {
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(self.scratch.take_text(mark));
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.parse_escape()?;
                }
                // NUL is the grammar's end-of-text marker, same as running
                // out of input.
                None | Some(0) => return Err(ParseError::MissQuotationMark),
                Some(_) => return Err(ParseError::InvalidStringChar),
            }
        }
    }

    /// Decodes one escape sequence after the backslash and pushes the
    /// resulting character onto the text stack.
    fn parse_escape(&mut self) -> Result<(), ParseError> {
        let Some(b) = self.peek() else {
            return Err(ParseError::InvalidStringEscape);
        };
        self.pos += 1;
        let ch = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => self.parse_unicode_escape()?,
            _ => return Err(ParseError::InvalidStringEscape),
        };
        self.scratch.push_char(ch);
        Ok(())
    }

    /// Decodes `XXXX` (and `XXXX\uXXXX` for surrogate pairs) after `\u`.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let hi = self.parse_hex4()?;
        let scalar = match hi {
            0xD800..=0xDBFF => {
                if self.byte(self.pos) != Some(b'\\') || self.byte(self.pos + 1) != Some(b'u') {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                self.pos += 2;
                let lo = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&lo) {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                escape::combine_surrogates(hi, lo)
            }
            0xDC00..=0xDFFF => return Err(ParseError::InvalidUnicodeSurrogate),
            scalar => scalar,
        };
        char::from_u32(scalar).ok_or(ParseError::InvalidUnicodeSurrogate)
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let unit = self
            .input
            .get(self.pos..self.pos + 4)
            .and_then(escape::hex4)
            .ok_or(ParseError::InvalidUnicodeHex)?;
        self.pos += 4;
        Ok(unit)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(Vec::new()));
        }
        let mark = self.scratch.values_mark();
        match self.parse_array_elements(mark) {
            Ok(elements) => Ok(Value::Array(elements)),
            Err(err) => {
                self.scratch.rewind_values(mark);
                Err(err)
            }
        }
    }

    fn parse_array_elements(&mut self, mark: usize) -> Result<Vec<Value>, ParseError> {
        loop {
            let element = self.parse_value()?;
            self.scratch.push_value(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(self.scratch.take_values(mark));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(Vec::new()));
        }
        let mark = self.scratch.members_mark();
        match self.parse_object_members(mark) {
            Ok(members) => Ok(Value::Object(members)),
            Err(err) => {
                self.scratch.rewind_members(mark);
                Err(err)
            }
        }
    }

    fn parse_object_members(&mut self, mark: usize) -> Result<Vec<Member>, ParseError> {
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string_raw()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.scratch.push_member(Member { key, value });
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(self.scratch.take_members(mark));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
