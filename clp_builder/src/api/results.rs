use std::collections::HashMap;
use thiserror::Error;

use crate::model::{Entry, Value};
use crate::prelude::{enumeration_from, Enumeration, Typed};

/// Error raised when reading a [`ParseResults`] in a way that contradicts its declarations.
///
/// This is a programming error in the Cli program, never a Cli user error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No flag or argument was declared with this name.
    #[error("Access error: parameter '{0}' was not declared.")]
    Undeclared(String),

    /// A list was read as a single value.
    #[error("Access error: parameter '{0}' holds a list, not a single value.")]
    NotScalar(String),

    /// A single value was read as a list.
    #[error("Access error: parameter '{0}' holds a single value, not a list.")]
    NotList(String),

    /// The value was read as a different type than declared.
    #[error("Access error: parameter '{name}' does not hold a {expected}.")]
    TypeMismatch {
        /// The parameter name.
        name: String,
        /// The requested type.
        expected: &'static str,
    },
}

/// The result of a successful parse: one [`Entry`] per declared flag and argument.
///
/// Every declared name is present; parameters absent from the Cli hold their defaults.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::{CommandLineParser, Outcome, Parameter};
///
/// let parser = CommandLineParser::new("program")
///     .add(Parameter::<i64>::flag("number", Some('n')))
///     .build()
///     .unwrap();
///
/// match parser.try_parse_tokens(&["-n", "7"]).unwrap() {
///     Outcome::Parsed(results) => assert_eq!(results.get::<i64>("number").unwrap(), 7),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResults {
    entries: HashMap<String, Entry>,
}

impl ParseResults {
    pub(crate) fn seed(&mut self, name: impl Into<String>, entry: Entry) {
        self.entries.insert(name.into(), entry);
    }

    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.entries
            .insert(name.to_string(), Entry::Scalar(value));
    }

    pub(crate) fn push(&mut self, name: &str, value: Value) {
        match self.entries.get_mut(name) {
            Some(Entry::List(values)) => values.push(value),
            _ => unreachable!("internal error - list parameter '{name}' must be seeded as a list"),
        }
    }

    pub(crate) fn increment(&mut self, name: &str) {
        match self.entries.get_mut(name) {
            Some(Entry::Scalar(Value::Integer(count))) => *count += 1,
            _ => unreachable!("internal error - counting flag '{name}' must be seeded as a count"),
        }
    }

    /// The raw entry for `name`, if declared.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Iterate all `(name, entry)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Read a single valued parameter (maximum of 1, or a counting boolean flag via `i64`).
    pub fn get<T: Typed>(&self, name: &str) -> Result<T, AccessError> {
        let value = self.scalar(name)?;
        T::from_value(value).ok_or_else(|| type_mismatch::<T>(name))
    }

    /// Read a multi valued parameter (maximum above 1).
    pub fn list<T: Typed>(&self, name: &str) -> Result<Vec<T>, AccessError> {
        self.values(name)?
            .iter()
            .map(|value| T::from_value(value).ok_or_else(|| type_mismatch::<T>(name)))
            .collect()
    }

    /// Read a single valued enumeration parameter.
    pub fn choice<E: Enumeration>(&self, name: &str) -> Result<E, AccessError> {
        let value = self.scalar(name)?;
        enumeration_from(value).ok_or_else(|| type_mismatch::<E>(name))
    }

    /// Read a multi valued enumeration parameter.
    pub fn choices<E: Enumeration>(&self, name: &str) -> Result<Vec<E>, AccessError> {
        self.values(name)?
            .iter()
            .map(|value| enumeration_from(value).ok_or_else(|| type_mismatch::<E>(name)))
            .collect()
    }

    fn scalar(&self, name: &str) -> Result<&Value, AccessError> {
        match self.entries.get(name) {
            Some(Entry::Scalar(value)) => Ok(value),
            Some(Entry::List(_)) => Err(AccessError::NotScalar(name.to_string())),
            None => Err(AccessError::Undeclared(name.to_string())),
        }
    }

    fn values(&self, name: &str) -> Result<&Vec<Value>, AccessError> {
        match self.entries.get(name) {
            Some(Entry::List(values)) => Ok(values),
            Some(Entry::Scalar(_)) => Err(AccessError::NotList(name.to_string())),
            None => Err(AccessError::Undeclared(name.to_string())),
        }
    }
}

fn type_mismatch<T>(name: &str) -> AccessError {
    AccessError::TypeMismatch {
        name: name.to_string(),
        expected: std::any::type_name::<T>(),
    }
}
