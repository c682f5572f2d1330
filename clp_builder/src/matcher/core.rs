use crate::api::{convert, ParseResults};
use crate::matcher::model::*;
use crate::model::Value;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The flag syntaxes, in the order they are tried.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Grammar<'t> {
    /// `-x`
    Short(char),
    /// `-x=value`
    ShortValue(char, &'t str),
    /// `-abc`
    Bundle(&'t str),
    /// `--name`
    Long(&'t str),
    /// `--name=value`
    LongValue(&'t str, &'t str),
}

/// Determine which flag syntax `token` is written in, if any.
/// A `None` means the token is not flag syntax at all, and belongs to the positional arguments.
pub(crate) fn classify(token: &str) -> Option<Grammar<'_>> {
    if let Some(rest) = token.strip_prefix("--") {
        return match rest.split_once('=') {
            Some((name, value)) if is_long_name(name) => Some(Grammar::LongValue(name, value)),
            None if is_long_name(rest) => Some(Grammar::Long(rest)),
            _ => None,
        };
    }

    let rest = token.strip_prefix('-')?;
    let mut chars = rest.chars();
    let letter = chars.next().filter(|c| c.is_alphabetic())?;
    let tail = chars.as_str();

    if tail.is_empty() {
        Some(Grammar::Short(letter))
    } else if let Some(value) = tail.strip_prefix('=') {
        Some(Grammar::ShortValue(letter, value))
    } else if tail.chars().all(char::is_alphabetic) {
        Some(Grammar::Bundle(rest))
    } else {
        None
    }
}

/// A long flag name: an ascii letter, followed by ascii letters, digits, `-` or `_`.
pub(crate) fn is_long_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FlagMatch {
    /// The token is not a flag.
    Unmatched,
    /// The token was a flag (with any value inlined).
    Matched,
    /// The token was a flag, and the next token was consumed as its value.
    MatchedWithNext,
}

enum FlagValue<'t> {
    Next(Option<&'t str>),
    Inline(&'t str),
}

#[derive(Debug)]
pub(crate) struct TokenMatcher {
    flags: FlagTable,
    arguments: ArgumentTable,
    results: ParseResults,
}

impl TokenMatcher {
    pub(crate) fn new(flags: FlagTable, arguments: ArgumentTable) -> Self {
        let mut results = ParseResults::default();

        for flag in flags.iter() {
            results.seed(flag.name(), flag.initial_entry());
        }

        for argument in arguments.iter() {
            results.seed(argument.name(), argument.initial_entry());
        }

        Self {
            flags,
            arguments,
            results,
        }
    }

    /// Try to match `token` as a flag, peeking at `next` for flags that take a value.
    pub(crate) fn match_flag(
        &mut self,
        token: &str,
        next: Option<&str>,
    ) -> Result<FlagMatch, ParseError> {
        let grammar = match classify(token) {
            Some(grammar) => grammar,
            None => return Ok(FlagMatch::Unmatched),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' classified as {grammar:?}.");
        }

        match grammar {
            Grammar::Short(letter) => {
                let index = self.short_index(letter)?;
                self.record_flag(index, FlagValue::Next(next))
            }
            Grammar::ShortValue(letter, value) => {
                let index = self.short_index(letter)?;
                self.record_flag(index, FlagValue::Inline(value))
            }
            Grammar::Bundle(letters) => self.record_bundle(letters),
            Grammar::Long(name) => {
                let index = self.long_index(name)?;
                self.record_flag(index, FlagValue::Next(next))
            }
            Grammar::LongValue(name, value) => {
                let index = self.long_index(name)?;
                self.record_flag(index, FlagValue::Inline(value))
            }
        }
    }

    fn short_index(&self, letter: char) -> Result<usize, ParseError> {
        self.flags
            .find_short(letter)
            .ok_or_else(|| ParseError::UnknownFlag(format!("-{letter}")))
    }

    fn long_index(&self, name: &str) -> Result<usize, ParseError> {
        self.flags
            .find(name)
            .ok_or_else(|| ParseError::UnknownFlag(format!("--{name}")))
    }

    fn record_bundle(&mut self, letters: &str) -> Result<FlagMatch, ParseError> {
        // Resolve every letter before recording any of them.
        let indices = letters
            .chars()
            .map(|letter| self.short_index(letter))
            .collect::<Result<Vec<usize>, ParseError>>()?;

        for index in &indices {
            let flag = self.flags.get(*index);

            if !flag.parameter.value_type().is_bool() {
                return Err(ParseError::FlagRequiresValue(flag.display()));
            }
        }

        for index in indices {
            self.record_flag(index, FlagValue::Next(None))?;
        }

        Ok(FlagMatch::Matched)
    }

    fn record_flag(&mut self, index: usize, value: FlagValue) -> Result<FlagMatch, ParseError> {
        let flag = self.flags.get_mut(index);
        let is_bool = flag.parameter.value_type().is_bool();

        if is_bool {
            if let FlagValue::Inline(_) = value {
                return Err(ParseError::FlagTakesNoArgument(flag.display()));
            }
        }

        if !flag.parameter.occurrence.record() {
            return Err(ParseError::ExcessOccurrence(flag.display()));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Flag '{name}' occurrence {count}.",
                name = flag.display(),
                count = flag.parameter.occurrence.count()
            );
        }

        if is_bool {
            if flag.is_counter() {
                self.results.increment(flag.name());
            } else {
                self.results.set(flag.name(), Value::Bool(true));
            }

            return Ok(FlagMatch::Matched);
        }

        let (token, flag_match) = match value {
            FlagValue::Next(Some(token)) if !token.is_empty() => (token, FlagMatch::MatchedWithNext),
            FlagValue::Inline(token) if !token.is_empty() => (token, FlagMatch::Matched),
            _ => return Err(ParseError::FlagRequiresValue(flag.display())),
        };

        let value = convert(flag.parameter.value_type(), token).map_err(|error| {
            ParseError::InvalidValueFormat {
                parameter: flag.display(),
                token: error.token,
                type_name: error.type_name,
            }
        })?;

        if flag.parameter.bound().is_list() {
            self.results.push(flag.name(), value);
        } else {
            self.results.set(flag.name(), value);
        }

        Ok(flag_match)
    }

    /// Match `token` to the first argument, in declaration order, with remaining capacity.
    pub(crate) fn match_argument(&mut self, token: &str) -> Result<(), ParseError> {
        let argument = self
            .arguments
            .next_open()
            .ok_or_else(|| ParseError::UnknownArgument(token.to_string()))?;
        let value = convert(argument.parameter.value_type(), token).map_err(|error| {
            ParseError::InvalidValueFormat {
                parameter: argument.name().to_string(),
                token: error.token,
                type_name: error.type_name,
            }
        })?;

        if !argument.parameter.occurrence.record() {
            unreachable!("internal error - an open argument must be able to record");
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Argument '{name}' matched '{token}'.",
                name = argument.name()
            );
        }

        if argument.parameter.bound().is_list() {
            self.results.push(argument.name(), value);
        } else {
            self.results.set(argument.name(), value);
        }

        Ok(())
    }

    /// Finish matching: check every minimum, and fill in list defaults.
    pub(crate) fn close(self) -> Result<ParseResults, ParseError> {
        let TokenMatcher {
            flags,
            arguments,
            mut results,
        } = self;

        for flag in flags.iter() {
            if !flag.parameter.occurrence.can_close() {
                return Err(ParseError::MissingRequired(flag.display()));
            }

            if flag.parameter.needs_default_in_list() && !flag.is_counter() {
                results.push(flag.name(), flag.parameter.default().clone());
            }
        }

        for argument in arguments.iter() {
            if !argument.parameter.occurrence.can_close() {
                return Err(ParseError::MissingRequired(argument.name().to_string()));
            }

            if argument.parameter.needs_default_in_list() {
                results.push(argument.name(), argument.parameter.default().clone());
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Closed with all minimums satisfied.");
        }

        Ok(results)
    }
}
