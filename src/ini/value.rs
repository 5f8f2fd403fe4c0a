//! Typed values and key lookups
//!
//! A [`Value`] is the raw text found on the right side of a `key=value` line.
//! Looking a key up in a [`Section`](super::Section) yields a [`Lookup`],
//! which is either the stored value or an absent marker that still knows
//! which section and key were asked for.

use std::any::type_name;
use std::fmt;
use std::str::FromStr;

use super::error::{IniError, ParseFailure, Result};

/// A raw value read from an INI file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    section: String,
    key: String,
    raw: String,
}

impl Value {
    pub fn new(section: impl Into<String>, key: impl Into<String>, raw: impl Into<String>) -> Self {
        Value {
            section: section.into(),
            key: key.into(),
            raw: raw.into(),
        }
    }

    /// Name of the section the value belongs to
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value exactly as written, after comment stripping
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parse the value into any type implementing [`FromStr`]
    ///
    /// Surrounding whitespace is ignored for the conversion; the stored text is
    /// left untouched.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Into<ParseFailure>,
    {
        self.raw
            .trim()
            .parse::<T>()
            .map_err(|e| IniError::Conversion {
                section: self.section.clone(),
                key: self.key.clone(),
                raw: self.raw.clone(),
                target: type_name::<T>(),
                source: e.into(),
            })
    }

    pub fn to_int(&self) -> Result<i32> {
        self.parse()
    }

    pub fn to_float(&self) -> Result<f32> {
        self.parse()
    }

    pub fn to_double(&self) -> Result<f64> {
        self.parse()
    }

    /// Accepts `true` or `false`
    pub fn to_bool(&self) -> Result<bool> {
        self.parse()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Result of looking a key up in a section
///
/// Accessors without a default fail with [`IniError::KeyNotFound`] when the key
/// is absent. The `*_or` accessors return the supplied default instead, but
/// still report malformed text of a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Present(&'a Value),
    Absent { section: &'a str, key: &'a str },
}

impl<'a> Lookup<'a> {
    pub fn is_present(&self) -> bool {
        matches!(self, Lookup::Present(_))
    }

    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Lookup::Present(value) => Some(value),
            Lookup::Absent { .. } => None,
        }
    }

    pub fn section(&self) -> &'a str {
        match *self {
            Lookup::Present(value) => value.section(),
            Lookup::Absent { section, .. } => section,
        }
    }

    pub fn key(&self) -> &'a str {
        match *self {
            Lookup::Present(value) => value.key(),
            Lookup::Absent { key, .. } => key,
        }
    }

    fn require(&self) -> Result<&'a Value> {
        match *self {
            Lookup::Present(value) => Ok(value),
            Lookup::Absent { section, key } => Err(IniError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            }),
        }
    }

    fn or_default<T>(&self, default: T, convert: impl FnOnce(&Value) -> Result<T>) -> Result<T> {
        match *self {
            Lookup::Present(value) => convert(value),
            Lookup::Absent { .. } => Ok(default),
        }
    }

    pub fn to_int(&self) -> Result<i32> {
        self.require()?.to_int()
    }

    pub fn to_int_or(&self, default: i32) -> Result<i32> {
        self.or_default(default, Value::to_int)
    }

    pub fn to_float(&self) -> Result<f32> {
        self.require()?.to_float()
    }

    pub fn to_float_or(&self, default: f32) -> Result<f32> {
        self.or_default(default, Value::to_float)
    }

    pub fn to_double(&self) -> Result<f64> {
        self.require()?.to_double()
    }

    pub fn to_double_or(&self, default: f64) -> Result<f64> {
        self.or_default(default, Value::to_double)
    }

    pub fn to_bool(&self) -> Result<bool> {
        self.require()?.to_bool()
    }

    pub fn to_bool_or(&self, default: bool) -> Result<bool> {
        self.or_default(default, Value::to_bool)
    }

    /// The raw text of the value
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> Result<String> {
        Ok(self.require()?.as_str().to_string())
    }

    pub fn to_string_or(&self, default: &str) -> String {
        match self {
            Lookup::Present(value) => value.as_str().to_string(),
            Lookup::Absent { .. } => default.to_string(),
        }
    }
}
