//! An in-memory JSON document model.
//!
//! `jsondom` parses JSON ([RFC 8259]) text into a [`Value`] tree, lets you
//! inspect and mutate the tree through a small typed surface, and
//! serializes trees back to canonical text that parses to an equal tree.
//!
//! Parsing is strict: no comments, no trailing commas, numbers are IEEE-754
//! binary64. Objects keep their members in parse order, keep duplicate
//! keys, and compare order-sensitively.
//!
//! # Examples
//!
//! ```
//! use jsondom::{parse, stringify, Value};
//!
//! let value = parse(r#"{"name":"Elvis","albums":[null,true,18]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Elvis"));
//! assert_eq!(
//!     stringify(&value),
//!     r#"{"name":"Elvis","albums":[null,true,18]}"#
//! );
//! ```
//!
//! Errors carry the reason, not a position:
//!
//! ```
//! use jsondom::{parse, ParseError};
//!
//! assert_eq!(parse(r#"{"a":1"#), Err(ParseError::MissCommaOrCurlyBracket));
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod escape;
mod parser;
mod scratch;
mod serialize;
mod value;

#[cfg(test)]
mod tests;

pub use parser::{ParseError, parse};
pub use serialize::stringify;
pub use value::{Member, Value, ValueKind};
