//! Traits which, typically, may be imported without concern: `use clp::prelude::*`.
use crate::model::{Value, ValueType};

/// Behaviour for the scalar types a parameter may be declared with.
///
/// Implemented for `bool`, `i64`, `f64`, `String` and `char`.
pub trait Typed: Sized {
    /// The declared type matching `Self`.
    fn value_type() -> ValueType;

    /// Wrap into a [`Value`].
    fn into_value(self) -> Value;

    /// Unwrap from a [`Value`], if it holds `Self`.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Typed for bool {
    fn value_type() -> ValueType {
        ValueType::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl Typed for i64 {
    fn value_type() -> ValueType {
        ValueType::Integer
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl Typed for f64 {
    fn value_type() -> ValueType {
        ValueType::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl Typed for String {
    fn value_type() -> ValueType {
        ValueType::Text
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(inner) => Some(inner.clone()),
            _ => None,
        }
    }
}

impl Typed for char {
    fn value_type() -> ValueType {
        ValueType::Char
    }

    fn into_value(self) -> Value {
        Value::Char(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Char(inner) => Some(*inner),
            _ => None,
        }
    }
}

/// Behaviour for a closed set of named variants, usable as a parameter type.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::Enumeration;
///
/// #[derive(Debug, PartialEq)]
/// enum Status {
///     On,
///     Off,
/// }
///
/// impl Enumeration for Status {
///     fn variants() -> &'static [&'static str] {
///         &["On", "Off"]
///     }
///
///     fn ordinal(&self) -> usize {
///         match self {
///             Status::On => 0,
///             Status::Off => 1,
///         }
///     }
///
///     fn from_ordinal(ordinal: usize) -> Option<Self> {
///         match ordinal {
///             0 => Some(Status::On),
///             1 => Some(Status::Off),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Status::from_ordinal(Status::Off.ordinal()), Some(Status::Off));
/// ```
pub trait Enumeration: Sized {
    /// The variant names, in ordinal order.
    fn variants() -> &'static [&'static str];

    /// The position of this variant within `variants()`.
    fn ordinal(&self) -> usize;

    /// The variant at `ordinal`, if any.
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

pub(crate) fn enumeration_type<E: Enumeration>() -> ValueType {
    ValueType::Enumeration(E::variants().iter().map(|v| v.to_string()).collect())
}

pub(crate) fn enumeration_value<E: Enumeration>(variant: E) -> Value {
    let ordinal = variant.ordinal();
    Value::Choice {
        ordinal,
        name: E::variants()
            .get(ordinal)
            .map(|name| name.to_string())
            .unwrap_or_default(),
    }
}

pub(crate) fn enumeration_from<E: Enumeration>(value: &Value) -> Option<E> {
    match value {
        Value::Choice { ordinal, .. } => E::from_ordinal(*ordinal),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::test::Weekday;
    use super::*;

    #[test]
    fn typed_round_trip() {
        assert_eq!(bool::from_value(&true.into_value()), Some(true));
        assert_eq!(i64::from_value(&(-3i64).into_value()), Some(-3));
        assert_eq!(char::from_value(&'x'.into_value()), Some('x'));
        assert_eq!(
            String::from_value(&"abc".to_string().into_value()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn typed_mismatch() {
        assert_eq!(bool::from_value(&Value::Integer(1)), None);
        assert_eq!(i64::from_value(&Value::Float(1.0)), None);
        assert_eq!(f64::from_value(&Value::Integer(1)), None);
    }

    #[test]
    fn enumeration() {
        assert_eq!(
            enumeration_type::<Weekday>(),
            ValueType::Enumeration(vec![
                "Sunday".to_string(),
                "Monday".to_string(),
                "Tuesday".to_string()
            ])
        );
        assert_eq!(
            enumeration_value(Weekday::Tuesday),
            Value::Choice {
                ordinal: 2,
                name: "Tuesday".to_string(),
            }
        );
        assert_eq!(
            enumeration_from::<Weekday>(&enumeration_value(Weekday::Monday)),
            Some(Weekday::Monday)
        );
        assert_eq!(enumeration_from::<Weekday>(&Value::Integer(1)), None);
    }
}
