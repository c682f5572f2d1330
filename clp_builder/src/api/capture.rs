use thiserror::Error;

use crate::model::{Value, ValueType};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub(crate) struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) type_name: String,
}

/// Convert a raw Cli token into the declared type.
///
/// Numbers are always read in the invariant format (`1.5`, never `1,5`).
pub(crate) fn convert(value_type: &ValueType, token: &str) -> Result<Value, InvalidConversion> {
    let invalid = || InvalidConversion {
        token: token.to_string(),
        type_name: match value_type {
            ValueType::Enumeration(_) => value_type.metavar(),
            other => other.type_name().to_string(),
        },
    };

    match value_type {
        ValueType::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(invalid())
            }
        }
        ValueType::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid()),
        ValueType::Float => token
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| invalid()),
        ValueType::Text => Ok(Value::Text(token.to_string())),
        ValueType::Char => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(single), None) => Ok(Value::Char(single)),
                _ => Err(invalid()),
            }
        }
        ValueType::Enumeration(variants) => {
            // The symbolic name takes priority; the ordinal is only a fallback.
            if let Some(ordinal) = variants.iter().position(|v| v == token) {
                return Ok(Value::Choice {
                    ordinal,
                    name: token.to_string(),
                });
            }

            // Ordinals are unsigned digits only.
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }

            match token.parse::<usize>() {
                Ok(ordinal) if ordinal < variants.len() => Ok(Value::Choice {
                    ordinal,
                    name: variants[ordinal].clone(),
                }),
                _ => Err(invalid()),
            }
        }
    }
}
