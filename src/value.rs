//! Dynamic values carried by the functor wrappers.
//!
//! A [`Value`] is a closed enum over the scalar and container kinds the
//! toolkit knows how to classify and rebuild. Containers own their elements,
//! so every transformation produces a fresh value and never aliases another
//! wrapper's payload.
//!
//! Unique collections and mappings are ordered trees. Floats are wrapped in
//! [`OrderedFloat`], which makes `Value` usable as a set element or mapping key.
//!
//! # Examples
//!
//! ```rust
//! use phunctor::value::{Value, ValueKind};
//!
//! let nested = Value::list([Value::from(1), Value::list([2, 3])]);
//! assert_eq!(nested.kind(), ValueKind::List);
//! assert_eq!(nested.to_string(), "[1, [2, 3]]");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write};

use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::shape::Reconstruction;

/// Key-value mapping held by [`Value::Map`].
pub type Mapping = BTreeMap<Value, Value>;

/// A dynamically shaped value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absent value.
    None,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Float scalar. `NaN` equals itself and the two zeros are equal.
    Float(OrderedFloat<f64>),
    /// Character string. Scalar unless iteration is forced.
    Str(String),
    /// Ordered mutable sequence.
    List(Vec<Value>),
    /// Ordered immutable sequence.
    Tuple(Vec<Value>),
    /// Unordered mutable collection of unique hashable values.
    Set(BTreeSet<Value>),
    /// Unordered immutable collection of unique hashable values.
    FrozenSet(BTreeSet<Value>),
    /// Mutable byte sequence.
    Bytes(Vec<u8>),
    /// Associative mapping.
    Map(Mapping),
}

/// The concrete runtime kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// [`Value::None`]
    None,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Float`]
    Float,
    /// [`Value::Str`]
    Str,
    /// [`Value::List`]
    List,
    /// [`Value::Tuple`]
    Tuple,
    /// [`Value::Set`]
    Set,
    /// [`Value::FrozenSet`]
    FrozenSet,
    /// [`Value::Bytes`]
    Bytes,
    /// [`Value::Map`]
    Map,
}

impl ValueKind {
    /// Short lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::FrozenSet => "frozenset",
            Self::Bytes => "bytearray",
            Self::Map => "dict",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl Value {
    /// Builds a list from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a tuple from anything convertible into values.
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set, rejecting unhashable elements.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`](crate::error::ConstructionError) naming
    /// the first element that is a list, set, mapping or byte sequence.
    pub fn set<I, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Reconstruction::Set.rebuild(items.into_iter().map(Into::into).collect())
    }

    /// Builds a frozen set, rejecting unhashable elements.
    ///
    /// # Errors
    ///
    /// Same as [`Value::set`].
    pub fn frozen_set<I, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Reconstruction::FrozenSet.rebuild(items.into_iter().map(Into::into).collect())
    }

    /// Builds a byte sequence.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Builds a mapping from key-value pairs. Later duplicates win.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the concrete kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Set(_) => ValueKind::Set,
            Self::FrozenSet(_) => ValueKind::FrozenSet,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Whether the value may be stored in a set or frozen set.
    ///
    /// Mutable containers are never hashable; tuples and frozen sets are
    /// hashable when all of their elements are.
    pub fn is_hashable(&self) -> bool {
        match self {
            Self::List(_) | Self::Set(_) | Self::Map(_) | Self::Bytes(_) => false,
            Self::Tuple(items) => items.iter().all(Self::is_hashable),
            Self::FrozenSet(items) => items.iter().all(Self::is_hashable),
            Self::None | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => true,
        }
    }

    /// Returns the integer payload, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the mapping payload, if any.
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Whether this is [`Value::None`].
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<u8> for Value {
    fn from(byte: u8) -> Self {
        Self::Int(i64::from(byte))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(OrderedFloat(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Self::Map(entries)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Into::into)
    }
}

fn write_joined<'a, I>(formatter: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{item}")?;
    }
    Ok(())
}

/// Exponents carry a sign and at least two digits: `1e+20`, `1.5e-07`.
fn write_float(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        return formatter.write_str("nan");
    }
    let rendered = format!("{number:?}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            write!(formatter, "{mantissa}e{sign}{digits:0>2}")
        }
        None => formatter.write_str(&rendered),
    }
}

/// Single quotes unless the text holds a single quote and no double quote.
fn write_quoted<I>(formatter: &mut fmt::Formatter<'_>, characters: I, ascii_only: bool) -> fmt::Result
where
    I: Iterator<Item = char> + Clone,
{
    let has_single = characters.clone().any(|character| character == '\'');
    let has_double = characters.clone().any(|character| character == '"');
    let quote = if has_single && !has_double { '"' } else { '\'' };
    formatter.write_char(quote)?;
    for character in characters {
        match character {
            '\\' => formatter.write_str("\\\\")?,
            '\n' => formatter.write_str("\\n")?,
            '\r' => formatter.write_str("\\r")?,
            '\t' => formatter.write_str("\\t")?,
            _ if character == quote => write!(formatter, "\\{quote}")?,
            _ if character.is_ascii_control() || (ascii_only && !character.is_ascii()) => {
                write!(formatter, "\\x{:02x}", u32::from(character))?;
            }
            _ => formatter.write_char(character)?,
        }
    }
    formatter.write_char(quote)
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Bool(true) => formatter.write_str("True"),
            Self::Bool(false) => formatter.write_str("False"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(OrderedFloat(number)) => write_float(formatter, *number),
            Self::Str(text) => write_quoted(formatter, text.chars(), false),
            Self::List(items) => {
                formatter.write_str("[")?;
                write_joined(formatter, items)?;
                formatter.write_str("]")
            }
            Self::Tuple(items) => {
                formatter.write_str("(")?;
                write_joined(formatter, items)?;
                if items.len() == 1 {
                    formatter.write_str(",")?;
                }
                formatter.write_str(")")
            }
            Self::Set(items) if items.is_empty() => formatter.write_str("set()"),
            Self::Set(items) => {
                formatter.write_str("{")?;
                write_joined(formatter, items)?;
                formatter.write_str("}")
            }
            Self::FrozenSet(items) if items.is_empty() => formatter.write_str("frozenset()"),
            Self::FrozenSet(items) => {
                formatter.write_str("frozenset({")?;
                write_joined(formatter, items)?;
                formatter.write_str("})")
            }
            Self::Bytes(bytes) => {
                formatter.write_str("bytearray(b")?;
                write_quoted(formatter, bytes.iter().copied().map(char::from), true)?;
                formatter.write_str(")")
            }
            Self::Map(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::None, "None")]
    #[case(Value::from(true), "True")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from("it's"), "\"it's\"")]
    #[case(Value::from("a\"b'c"), "'a\"b\\'c'")]
    #[case(Value::from("tab\there"), "'tab\\there'")]
    #[case(Value::from(1e20), "1e+20")]
    #[case(Value::from(1.5e-7), "1.5e-07")]
    #[case(Value::from(f64::NAN), "nan")]
    #[case(Value::from(f64::NEG_INFINITY), "-inf")]
    #[case(Value::tuple([1]), "(1,)")]
    #[case(Value::Set(BTreeSet::new()), "set()")]
    #[case(Value::bytes(*b"ab\n"), "bytearray(b'ab\\n')")]
    #[case(Value::bytes(*b"it's"), "bytearray(b\"it's\")")]
    #[case(Value::bytes(vec![0, 200]), "bytearray(b'\\x00\\xc8')")]
    #[case(Value::map([("a", 1)]), "{'a': 1}")]
    fn display_uses_literal_notation(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn hashability_follows_mutability() {
        assert!(Value::tuple([Value::from(1), Value::tuple(["a"])]).is_hashable());
        assert!(!Value::tuple([Value::list([1])]).is_hashable());
        assert!(!Value::bytes(vec![1]).is_hashable());
        assert!(!Value::map([(1, 2)]).is_hashable());
    }

    #[rstest]
    fn nan_is_equal_to_itself() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        let unique = Value::set([Value::from(f64::NAN), Value::from(f64::NAN)]).unwrap();
        assert_eq!(unique, Value::set([f64::NAN]).unwrap());
    }

    #[rstest]
    fn set_constructor_rejects_lists() {
        let error = Value::set([Value::from(1), Value::list([2])]).unwrap_err();
        assert_eq!(error.index, 1);
    }
}
