//! JSON value types and the operations on them.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with [`Member`] (one key/value pair of an object) and
//! [`ValueKind`] (the tag of a value).

use alloc::{string::String, vec::Vec};

/// The tag of a [`Value`].
///
/// Returned by [`Value::kind`] for callers that dispatch on the variant
/// without borrowing its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// An IEEE-754 binary64 number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// Strings (and object keys) are always well-formed UTF-8 and may contain
/// embedded NUL bytes. Objects are sequences of [`Member`]s in parse (or
/// insertion) order; duplicate keys are kept, and equality is
/// order-sensitive. Numbers compare with `f64` semantics, so `NaN != NaN`
/// and `-0.0 == 0.0`.
///
/// # Examples
///
/// ```
/// use jsondom::{Member, Value};
///
/// // Creating a JSON object:
/// let v = Value::Object(vec![Member::new("key", "value")]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// An IEEE-754 binary64 number.
    Number(f64),
    /// A string.
    String(String),
    /// An array of values.
    Array(Vec<Value>),
    /// An object: a sequence of members in insertion order.
    Object(Vec<Member>),
}

/// One `key: value` pair of a JSON object.
///
/// # Examples
///
/// ```
/// use jsondom::{Member, Value};
///
/// let member = Member::new("answer", 42.0);
/// assert_eq!(member.key, "answer");
/// assert_eq!(member.value, Value::Number(42.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// The member key. Compared byte-exact; may contain embedded NUL.
    pub key: String,
    /// The member value.
    pub value: Value,
}

impl Member {
    /// Creates a member from a key and anything convertible to a [`Value`].
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParseError;

    /// Parses a JSON text, equivalent to [`crate::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let v: Value = "[1,2]".parse().unwrap();
    /// assert_eq!(v, Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl Value {
    /// Returns the tag of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Boolean(true).kind(), ValueKind::Boolean);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Boolean(true).is_boolean());
    /// assert!(!Value::Null.is_boolean());
    /// ```
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Number(42.0).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::String("foo".into()).is_string());
    /// assert!(!Value::Null.is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Array(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Object(vec![]).is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the boolean payload, or `None` for any other variant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self { Some(*b) } else { None }
    }

    /// Borrows the number payload, or `None` for any other variant.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(n) = self { Some(*n) } else { None }
    }

    /// Borrows the string payload, or `None` for any other variant.
    ///
    /// The byte length of the string is `as_str().map(str::len)`; embedded
    /// NUL bytes count like any other byte.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// Borrows the array elements, or `None` for any other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let v: Value = "[null,true]".parse().unwrap();
    /// let items = v.as_array().unwrap();
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[1], Value::Boolean(true));
    /// ```
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Self::Array(items) = self { Some(items) } else { None }
    }

    /// Mutably borrows the array elements, or `None` for any other variant.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        if let Self::Array(items) = self { Some(items) } else { None }
    }

    /// Borrows the object members in insertion order, or `None` for any
    /// other variant.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        if let Self::Object(members) = self { Some(members) } else { None }
    }

    /// Mutably borrows the object members, or `None` for any other variant.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Vec<Member>> {
        if let Self::Object(members) = self { Some(members) } else { None }
    }

    /// Releases any payload and resets the value to [`Null`].
    ///
    /// Safe to call any number of times.
    ///
    /// [`Null`]: Value::Null
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Releases any payload and installs a boolean.
    pub fn set_boolean(&mut self, b: bool) {
        *self = Self::Boolean(b);
    }

    /// Releases any payload and installs a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Releases any payload and installs a copy of `content`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut v = Value::Boolean(true);
    /// v.set_string("Hello");
    /// assert_eq!(v.as_str(), Some("Hello"));
    /// ```
    pub fn set_string(&mut self, content: impl Into<String>) {
        *self = Self::String(content.into());
    }

    /// Moves the value out, leaving [`Null`] behind.
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut v = Value::Number(1.0);
    /// let moved = v.take();
    /// assert_eq!(moved, Value::Number(1.0));
    /// assert!(v.is_null());
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Exchanges the contents of two values in place.
    pub fn swap(&mut self, other: &mut Value) {
        core::mem::swap(self, other);
    }

    /// Returns the index of the first member with the given key, or `None`
    /// if there is no such member or the value is not an object.
    ///
    /// Keys compare byte-exact; a linear scan in insertion order, so
    /// duplicate keys resolve to the earliest occurrence.
    #[must_use]
    pub fn find_member(&self, key: &str) -> Option<usize> {
        match self {
            Self::Object(members) => members.iter().position(|m| m.key == key),
            _ => None,
        }
    }

    /// Borrows the value of the first member with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let v: Value = r#"{"a":1,"b":2}"#.parse().unwrap();
    /// assert_eq!(v.get("b"), Some(&Value::Number(2.0)));
    /// assert_eq!(v.get("c"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(members) => members.iter().find(|m| m.key == key).map(|m| &m.value),
            _ => None,
        }
    }

    /// Mutably borrows the value of the first member with the given key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Object(members) => members
                .iter_mut()
                .find(|m| m.key == key)
                .map(|m| &mut m.value),
            _ => None,
        }
    }
}
