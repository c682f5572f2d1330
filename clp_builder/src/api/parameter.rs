use crate::matcher::{ArgumentConfig, Bound, FlagConfig, ParameterConfig};
use crate::model::{Value, ValueType};
use crate::parser::{ArgumentParameter, FlagParameter};
use crate::prelude::{enumeration_type, enumeration_value, Enumeration, Typed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Flag,
    Arg,
}

pub(super) struct ParameterInner {
    class: ParameterClass,
    name: String,
    short: Option<char>,
    value_type: ValueType,
    default: Value,
    bound: Bound,
    help: Option<String>,
    meta: Option<String>,
    hidden: bool,
    default_to_list: bool,
}

impl ParameterInner {
    fn new(class: ParameterClass, name: String, short: Option<char>, value_type: ValueType) -> Self {
        let default = value_type.default_value();
        Self {
            class,
            name,
            short,
            value_type,
            default,
            bound: Bound::new(0, 1),
            help: None,
            meta: None,
            hidden: false,
            default_to_list: false,
        }
    }

    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }

    fn config(&self) -> ParameterConfig {
        ParameterConfig::new(
            self.name.clone(),
            self.value_type.clone(),
            self.default.clone(),
            self.bound,
            self.default_to_list,
        )
    }
}

impl std::fmt::Debug for ParameterInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (class, name) = match &self.class {
            ParameterClass::Flag => ("Flag", format!("--{n}", n = self.name)),
            ParameterClass::Arg => ("Arg", self.name.clone()),
        };
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let help = if let Some(d) = &self.help {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "{class}[{t}, [{min}, {max}], {name},{short} default={default}{help}]",
            t = self.value_type.metavar(),
            min = self.bound.min(),
            max = self.bound.max(),
            default = self.default,
        )
    }
}

impl From<&ParameterInner> for FlagConfig {
    fn from(value: &ParameterInner) -> Self {
        FlagConfig::new(value.short, value.config())
    }
}

impl From<&ParameterInner> for FlagParameter {
    fn from(value: &ParameterInner) -> Self {
        FlagParameter::new(
            value.name.clone(),
            value.short,
            value.value_type.is_bool(),
            value.bound,
            value.help.clone(),
            value
                .meta
                .clone()
                .unwrap_or_else(|| value.value_type.metavar()),
            value.hidden,
        )
    }
}

impl From<&ParameterInner> for ArgumentConfig {
    fn from(value: &ParameterInner) -> Self {
        ArgumentConfig::new(value.config())
    }
}

impl From<&ParameterInner> for ArgumentParameter {
    fn from(value: &ParameterInner) -> Self {
        ArgumentParameter::new(
            value.name.clone(),
            value.bound,
            value.help.clone(),
            value.meta.clone(),
            value.hidden,
        )
    }
}

/// A flag or argument for the command parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// The type `T` fixes how the parameter's tokens are converted, and is the type of its default.
pub struct Parameter<T> {
    inner: ParameterInner,
    into_value: fn(T) -> Value,
}

impl<T: Typed> Parameter<T> {
    /// Create a flag parameter, written on the Cli as `--name` or (optionally) `-s`.
    ///
    /// A `bool` flag never takes a value; every other type takes exactly one value per occurrence.
    /// The `name` is an ascii letter followed by ascii letters, digits, `-` or `_`.
    /// The `short` may be any alphabetic character.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::Parameter;
    ///
    /// Parameter::<bool>::flag("verbose", Some('v'));
    /// Parameter::<i64>::flag("count", None);
    /// ```
    pub fn flag(name: impl Into<String>, short: Option<char>) -> Self {
        Self::typed(ParameterClass::Flag, name.into(), short)
    }

    /// Create a positional argument parameter.
    ///
    /// The order arguments are added to the parser is the order they are matched in.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::Parameter;
    ///
    /// Parameter::<String>::argument("FILE");
    /// ```
    pub fn argument(name: impl Into<String>) -> Self {
        Self::typed(ParameterClass::Arg, name.into(), None)
    }

    fn typed(class: ParameterClass, name: String, short: Option<char>) -> Self {
        Self {
            inner: ParameterInner::new(class, name, short, T::value_type()),
            into_value: T::into_value,
        }
    }
}

impl<E: Enumeration> Parameter<E> {
    /// Create a flag parameter that takes one of the variants of `E`.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::{prelude::*, Parameter};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum Status {
    ///     On,
    ///     Off,
    /// }
    ///
    /// impl Enumeration for Status {
    ///     fn variants() -> &'static [&'static str] {
    ///         &["ON", "OFF"]
    ///     }
    ///
    ///     fn ordinal(&self) -> usize {
    ///         *self as usize
    ///     }
    ///
    ///     fn from_ordinal(ordinal: usize) -> Option<Self> {
    ///         [Status::On, Status::Off].get(ordinal).copied()
    ///     }
    /// }
    ///
    /// Parameter::<Status>::flag_choice("status", Some('s')).default(Status::Off);
    /// ```
    pub fn flag_choice(name: impl Into<String>, short: Option<char>) -> Self {
        Self::enumerated(ParameterClass::Flag, name.into(), short)
    }

    /// Create a positional argument parameter that takes one of the variants of `E`.
    pub fn argument_choice(name: impl Into<String>) -> Self {
        Self::enumerated(ParameterClass::Arg, name.into(), None)
    }

    fn enumerated(class: ParameterClass, name: String, short: Option<char>) -> Self {
        Self {
            inner: ParameterInner::new(class, name, short, enumeration_type::<E>()),
            into_value: enumeration_value::<E>,
        }
    }
}

impl<T> Parameter<T> {
    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// A help message describes the parameter in full sentence/paragraph format.
    /// We recommend allowing `clp` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::Parameter;
    ///
    /// Parameter::<bool>::flag("verbose", Some('v'))
    ///     .help("--this will get discarded--")
    ///     .help("Print more.  Description may include multiple sentences.");
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.inner.help.replace(description.into());
        self
    }

    /// Document the display placeholder for this parameter's value, in place of the type's (ex: `<int>`).
    /// If repeated, only the final meta will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::Parameter;
    ///
    /// Parameter::<i64>::flag("port", Some('p')).meta("<port>");
    /// ```
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.inner.meta.replace(meta.into());
        self
    }

    /// Set how many times this parameter may occur, inclusively.
    /// The default is `[0, 1]`: optional, and given at most once.
    ///
    /// A `max` above `1` collects a list, except on a `bool` flag where it collects a count.
    /// The bounds are validated by [`CommandLineParser::build`](./struct.CommandLineParser.html#method.build).
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::Parameter;
    ///
    /// // Requires 2 or 3 strings.
    /// Parameter::<String>::argument("STRING").bounds(2, 3);
    /// ```
    pub fn bounds(mut self, min: u32, max: u32) -> Self {
        self.inner.bound = Bound::new(min, max);
        self
    }

    /// Set the value held when the parameter does not occur.
    /// Without this, the type's default applies (ex: `0`, `false`, the first variant).
    pub fn default(mut self, value: T) -> Self {
        self.inner.default = (self.into_value)(value);
        self
    }

    /// Omit this parameter from the help message.
    /// The parameter is still matched as usual.
    pub fn hidden(mut self) -> Self {
        self.inner.hidden = true;
        self
    }

    /// When this list parameter does not occur at all, parse to a list holding just the default.
    /// Has no effect on a parameter whose `max` is `1`.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::{CommandLineParser, Outcome, Parameter};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::<i64>::flag("number", Some('n')).bounds(0, 5).default(7).default_to_list())
    ///     .build()
    ///     .unwrap();
    ///
    /// match parser.try_parse_tokens(empty::slice()).unwrap() {
    ///     Outcome::Parsed(results) => assert_eq!(results.list::<i64>("number").unwrap(), vec![7]),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn default_to_list(mut self) -> Self {
        self.inner.default_to_list = true;
        self
    }

    pub(super) fn consume(self) -> ParameterInner {
        self.inner
    }
}
