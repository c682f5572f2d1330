use std::collections::HashMap;

use crate::model::{Entry, Value, ValueType};
use crate::parser::ConfigError;

/// The inclusive `[min, max]` occurrence range of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Bound {
    min: u32,
    max: u32,
}

impl Bound {
    pub(crate) fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub(crate) fn min(&self) -> u32 {
        self.min
    }

    pub(crate) fn max(&self) -> u32 {
        self.max
    }

    pub(crate) fn is_list(&self) -> bool {
        self.max > 1
    }
}

/// Tracks how many times a parameter has been matched against its `Bound`.
/// The count only ever increases.
#[derive(Debug)]
pub(super) struct Occurrence {
    bound: Bound,
    count: u32,
}

impl Occurrence {
    pub(super) fn new(bound: Bound) -> Self {
        Self { bound, count: 0 }
    }

    pub(super) fn is_open(&self) -> bool {
        self.count < self.bound.max
    }

    /// Count one more occurrence, or refuse if the maximum is already reached.
    pub(super) fn record(&mut self) -> bool {
        if self.is_open() {
            self.count += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn can_close(&self) -> bool {
        self.count >= self.bound.min
    }

    pub(super) fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug)]
pub(crate) struct ParameterConfig {
    name: String,
    value_type: ValueType,
    default: Value,
    default_to_list: bool,
    pub(super) occurrence: Occurrence,
}

impl ParameterConfig {
    pub(crate) fn new(
        name: impl Into<String>,
        value_type: ValueType,
        default: Value,
        bound: Bound,
        default_to_list: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            default,
            default_to_list,
            occurrence: Occurrence::new(bound),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub(crate) fn bound(&self) -> Bound {
        self.occurrence.bound
    }

    pub(super) fn default(&self) -> &Value {
        &self.default
    }

    /// Whether the default is appended at close, because nothing was matched.
    pub(super) fn needs_default_in_list(&self) -> bool {
        self.default_to_list && self.bound().is_list() && self.occurrence.count() == 0
    }

    fn initial_entry(&self) -> Entry {
        if self.bound().is_list() {
            Entry::List(Vec::default())
        } else {
            Entry::Scalar(self.default.clone())
        }
    }
}

#[derive(Debug)]
pub(crate) struct FlagConfig {
    short: Option<char>,
    pub(super) parameter: ParameterConfig,
}

impl FlagConfig {
    pub(crate) fn new(short: Option<char>, parameter: ParameterConfig) -> Self {
        Self { short, parameter }
    }

    pub(crate) fn name(&self) -> &str {
        self.parameter.name()
    }

    pub(crate) fn short(&self) -> &Option<char> {
        &self.short
    }

    pub(crate) fn bound(&self) -> Bound {
        self.parameter.bound()
    }

    /// A repeatable boolean flag accumulates a count rather than a list of `true`s.
    pub(super) fn is_counter(&self) -> bool {
        self.parameter.value_type().is_bool() && self.parameter.bound().is_list()
    }

    pub(super) fn initial_entry(&self) -> Entry {
        if self.is_counter() {
            Entry::Scalar(Value::Integer(0))
        } else {
            self.parameter.initial_entry()
        }
    }

    /// How this flag is named in error messages.
    pub(super) fn display(&self) -> String {
        format!("--{}", self.name())
    }
}

#[derive(Debug)]
pub(crate) struct ArgumentConfig {
    pub(super) parameter: ParameterConfig,
}

impl ArgumentConfig {
    pub(crate) fn new(parameter: ParameterConfig) -> Self {
        Self { parameter }
    }

    pub(crate) fn name(&self) -> &str {
        self.parameter.name()
    }

    pub(crate) fn bound(&self) -> Bound {
        self.parameter.bound()
    }

    pub(super) fn initial_entry(&self) -> Entry {
        self.parameter.initial_entry()
    }
}

/// The ordered flag declarations, indexed by long name and by short letter.
#[derive(Debug)]
pub(crate) struct FlagTable {
    flags: Vec<FlagConfig>,
    names: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
}

impl FlagTable {
    pub(crate) fn new(flags: Vec<FlagConfig>) -> Result<Self, ConfigError> {
        let mut names = HashMap::default();
        let mut shorts = HashMap::default();

        for (index, flag) in flags.iter().enumerate() {
            if names.insert(flag.name().to_string(), index).is_some() {
                return Err(ConfigError::DuplicateName(flag.name().to_string()));
            }

            if let Some(short) = flag.short() {
                if shorts.insert(*short, index).is_some() {
                    return Err(ConfigError::DuplicateShort(*short));
                }
            }
        }

        Ok(Self {
            flags,
            names,
            shorts,
        })
    }

    pub(super) fn find(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub(super) fn find_short(&self, short: char) -> Option<usize> {
        self.shorts.get(&short).copied()
    }

    pub(super) fn get(&self, index: usize) -> &FlagConfig {
        &self.flags[index]
    }

    pub(super) fn get_mut(&mut self, index: usize) -> &mut FlagConfig {
        &mut self.flags[index]
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &FlagConfig> {
        self.flags.iter()
    }
}

/// The ordered positional declarations.
#[derive(Debug, Default)]
pub(crate) struct ArgumentTable {
    arguments: Vec<ArgumentConfig>,
}

impl ArgumentTable {
    pub(crate) fn new(arguments: Vec<ArgumentConfig>) -> Self {
        Self { arguments }
    }

    /// The first argument, in declaration order, that may still take a value.
    pub(super) fn next_open(&mut self) -> Option<&mut ArgumentConfig> {
        self.arguments
            .iter_mut()
            .find(|argument| argument.parameter.occurrence.is_open())
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &ArgumentConfig> {
        self.arguments.iter()
    }
}
