/// The declared type of a flag or argument.
///
/// The type is fixed when the parameter is declared, and selects the conversion applied to every token it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// `true` / `false`; a flag of this type never takes a value on the Cli.
    Bool,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Any text.
    Text,
    /// Precisely one character.
    Char,
    /// One of the listed variant names (or their ordinal).
    Enumeration(Vec<String>),
}

impl ValueType {
    /// Whether this is the [`ValueType::Bool`] type.
    pub fn is_bool(&self) -> bool {
        matches!(self, ValueType::Bool)
    }

    /// The value used when a parameter of this type is declared without a default.
    pub fn default_value(&self) -> Value {
        match self {
            ValueType::Bool => Value::Bool(false),
            ValueType::Integer => Value::Integer(0),
            ValueType::Float => Value::Float(0.0),
            ValueType::Text => Value::Text(String::default()),
            ValueType::Char => Value::Char('\0'),
            ValueType::Enumeration(variants) => Value::Choice {
                ordinal: 0,
                name: variants.first().cloned().unwrap_or_default(),
            },
        }
    }

    /// The display placeholder used when no explicit meta is given.
    ///
    /// Enumerations list their variants: `{A,B,C}`.
    pub fn metavar(&self) -> String {
        match self {
            ValueType::Enumeration(variants) => format!("{{{}}}", variants.join(",")),
            other => format!("<{}>", other.type_name()),
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Integer => "int",
            ValueType::Float => "float",
            ValueType::Text => "string",
            ValueType::Char => "char",
            ValueType::Enumeration(_) => "enumeration",
        }
    }
}

/// A single typed value, produced from a Cli token or a declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// Text.
    Text(String),
    /// A character.
    Char(char),
    /// An enumeration variant, identified by both its position and its name.
    Choice {
        /// Position of the variant in its declaration.
        ordinal: usize,
        /// Symbolic name of the variant.
        name: String,
    },
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
            Value::Char(value) => write!(f, "{value}"),
            Value::Choice { name, .. } => write!(f, "{name}"),
        }
    }
}

/// The parse result of a single declared flag or argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A parameter with a maximum of 1 occurrence.
    /// Also used to hold the occurrence count of a boolean flag that may repeat.
    Scalar(Value),
    /// A parameter with a maximum above 1, in Cli order.
    List(Vec<Value>),
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Scalar(value) => write!(f, "{value}"),
            Entry::List(values) => write!(
                f,
                "[{}]",
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}
