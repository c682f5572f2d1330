use std::collections::HashSet;
use thiserror::Error;

use crate::api::ParseResults;
use crate::constant::*;
use crate::matcher::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Error raised when the declared parameters are inconsistent.
///
/// This is a programming error in the Cli program, never a Cli user error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A name is empty, or not usable on the Cli.
    #[error("Config error: '{0}' is not a valid parameter name.")]
    InvalidName(String),

    /// A short flag that is not an ascii letter.
    #[error("Config error: '{0}' is not a valid short flag; it must be an ascii letter.")]
    InvalidShort(char),

    /// A maximum of zero, or a minimum above the maximum.
    #[error("Config error: parameter '{name}' cannot have bounds [{min}, {max}].")]
    InvalidBounds {
        /// The parameter name.
        name: String,
        /// The declared minimum.
        min: u32,
        /// The declared maximum.
        max: u32,
    },

    /// Two parameters (flags or arguments) with the same name.
    #[error("Config error: cannot duplicate the parameter '{0}'.")]
    DuplicateName(String),

    /// Two flags with the same short letter.
    #[error("Config error: cannot duplicate the short flag '-{0}'.")]
    DuplicateShort(char),

    /// A parameter named after an enabled help/version request.
    #[error("Config error: the name '{0}' is reserved.")]
    Reserved(String),
}

/// Error raised when the Cli tokens do not fit the declared parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token in flag syntax that names no declared flag.
    #[error("Flag '{0}' does not exist.")]
    UnknownFlag(String),

    /// A positional token with no argument left to take it.
    #[error("Argument '{0}' is unexpected; no argument remains to take it.")]
    UnknownArgument(String),

    /// A parameter matched more often than its maximum.
    #[error("Parameter '{0}' is given too many times.")]
    ExcessOccurrence(String),

    /// A parameter matched less often than its minimum.
    #[error("Parameter '{0}' is required.")]
    MissingRequired(String),

    /// A non-boolean flag without a value.
    #[error("Flag '{0}' requires a value.")]
    FlagRequiresValue(String),

    /// A boolean flag given an inline value.
    #[error("Flag '{0}' does not take a value.")]
    FlagTakesNoArgument(String),

    /// A value that does not convert to the declared type.
    #[error("Parameter '{parameter}' cannot convert '{token}' to {type_name}.")]
    InvalidValueFormat {
        /// The flag (`--name`) or argument (`name`).
        parameter: String,
        /// The offending token.
        token: String,
        /// The declared type.
        type_name: String,
    },
}

/// What a parse produced, when no error occurred.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The tokens were fully parsed.
    Parsed(ParseResults),
    /// `--help` was requested; nothing was parsed.
    HelpRequested,
    /// `--version` was requested; nothing was parsed.
    VersionRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) help_request: bool,
    pub(crate) version_request: bool,
    pub(crate) stop_at_double_dash: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            help_request: true,
            version_request: true,
            stop_at_double_dash: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Scanning,
    PositionalOnly,
}

#[derive(Debug)]
pub(crate) struct Parser {
    token_matcher: TokenMatcher,
    settings: Settings,
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default(), Settings::default()).unwrap()
    }

    pub(crate) fn new(
        flags: Vec<FlagConfig>,
        arguments: Vec<ArgumentConfig>,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();

        for flag in &flags {
            if !is_long_name(flag.name()) {
                return Err(ConfigError::InvalidName(flag.name().to_string()));
            }

            if let Some(short) = flag.short() {
                if !short.is_alphabetic() {
                    return Err(ConfigError::InvalidShort(*short));
                }
            }

            validate(flag.name(), flag.bound(), &settings, &mut names)?;
        }

        for argument in &arguments {
            // Arguments are never written on the Cli by name, but must still be printable.
            if argument.name().is_empty() || argument.name().contains(char::is_whitespace) {
                return Err(ConfigError::InvalidName(argument.name().to_string()));
            }

            validate(argument.name(), argument.bound(), &settings, &mut names)?;
        }

        let token_matcher = TokenMatcher::new(FlagTable::new(flags)?, ArgumentTable::new(arguments));

        Ok(Self {
            token_matcher,
            settings,
        })
    }

    pub(crate) fn consume(self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        let Parser {
            mut token_matcher,
            settings,
        } = self;

        // Requests are honoured anywhere, unless the very first token is the sentinel.
        let requestable: &[&str] = match tokens.first() {
            Some(first) if settings.stop_at_double_dash && *first == SENTINEL_TOKEN => &[],
            _ => tokens,
        };

        if settings.help_request && requestable.contains(&HELP_TOKEN) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested.");
            }

            return Ok(Outcome::HelpRequested);
        }

        if settings.version_request && requestable.contains(&VERSION_TOKEN) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Version requested.");
            }

            return Ok(Outcome::VersionRequested);
        }

        let mut mode = Mode::Scanning;
        let mut index = 0;

        while let Some(token) = tokens.get(index) {
            if mode == Mode::PositionalOnly {
                token_matcher.match_argument(token)?;
                index += 1;
                continue;
            }

            if *token == SENTINEL_TOKEN {
                if !settings.stop_at_double_dash {
                    return Err(ParseError::UnknownFlag(SENTINEL_TOKEN.to_string()));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Sentinel at token {index}; the remainder is positional.");
                }

                mode = Mode::PositionalOnly;
                index += 1;
                continue;
            }

            match token_matcher.match_flag(token, tokens.get(index + 1).copied())? {
                FlagMatch::Unmatched => {
                    token_matcher.match_argument(token)?;
                    index += 1;
                }
                FlagMatch::Matched => index += 1,
                FlagMatch::MatchedWithNext => index += 2,
            }
        }

        token_matcher.close().map(Outcome::Parsed)
    }
}

fn validate(
    name: &str,
    bound: Bound,
    settings: &Settings,
    names: &mut HashSet<String>,
) -> Result<(), ConfigError> {
    if (settings.help_request && name == HELP_NAME)
        || (settings.version_request && name == VERSION_NAME)
    {
        return Err(ConfigError::Reserved(name.to_string()));
    }

    if bound.max() == 0 || bound.min() > bound.max() {
        return Err(ConfigError::InvalidBounds {
            name: name.to_string(),
            min: bound.min(),
            max: bound.max(),
        });
    }

    if !names.insert(name.to_string()) {
        return Err(ConfigError::DuplicateName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::test::{argument, flag};
    use crate::model::ValueType;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn parser(settings: Settings) -> Parser {
        Parser::new(
            vec![
                flag("verbose", Some('v'), ValueType::Bool, Bound::new(0, 1)),
                flag("int", Some('i'), ValueType::Integer, Bound::new(0, 1)),
            ],
            vec![
                argument("value", ValueType::Text, Bound::new(0, 1)),
                argument("text", ValueType::Text, Bound::new(0, 2)),
            ],
            settings,
        )
        .unwrap()
    }

    fn parsed(outcome: Outcome) -> ParseResults {
        match outcome {
            Outcome::Parsed(results) => results,
            other => panic!("expected a parse, found {other:?}"),
        }
    }

    #[test]
    fn parser_empty() {
        // Setup
        let parser = Parser::empty();

        // Execute
        let outcome = parser.consume(empty::slice()).unwrap();

        // Verify
        assert_eq!(outcome, Outcome::Parsed(ParseResults::default()));
    }

    #[rstest]
    #[case(vec!["--int", "1"])]
    #[case(vec!["--int", "01"])]
    #[case(vec!["-i", "1"])]
    #[case(vec!["-i=1"])]
    #[case(vec!["--int=01"])]
    fn parser_flag(#[case] tokens: Vec<&str>) {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let results = parsed(parser.consume(tokens.as_slice()).unwrap());

        // Verify
        assert_eq!(results.get::<i64>("int").unwrap(), 1);
        assert_eq!(results.get::<bool>("verbose").unwrap(), false);
    }

    #[test]
    fn parser_positional() {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let results = parsed(parser.consume(&["A", "-v", "X", "Y"]).unwrap());

        // Verify
        assert_eq!(results.get::<String>("value").unwrap(), "A");
        assert_eq!(
            results.list::<String>("text").unwrap(),
            vec!["X".to_string(), "Y".to_string()]
        );
        assert_eq!(results.get::<bool>("verbose").unwrap(), true);
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["--help", "--version"])]
    #[case(vec!["--version", "--help"])]
    #[case(vec!["--bogus", "--help"])]
    #[case(vec!["-i", "abc", "--help"])]
    #[case(vec!["A", "B", "C", "D", "--help"])]
    #[case(vec!["-i", "--help"])]
    fn parser_help(#[case] tokens: Vec<&str>) {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let outcome = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(outcome, Outcome::HelpRequested);
    }

    #[rstest]
    #[case(vec!["--version"])]
    #[case(vec!["--bogus", "--version"])]
    #[case(vec!["--version", "-x"])]
    fn parser_version(#[case] tokens: Vec<&str>) {
        let parser = parser(Settings::default());
        assert_eq!(
            parser.consume(tokens.as_slice()).unwrap(),
            Outcome::VersionRequested
        );
    }

    #[test]
    fn parser_help_after_sentinel() {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let results = parsed(parser.consume(&["--", "--help"]).unwrap());

        // Verify
        assert_eq!(results.get::<String>("value").unwrap(), "--help");
    }

    #[rstest]
    #[case(vec!["x", "--", "--help"], Outcome::HelpRequested)]
    #[case(vec!["--int", "--", "--help"], Outcome::HelpRequested)]
    #[case(vec!["-v", "--", "A", "--version"], Outcome::VersionRequested)]
    #[case(vec!["--bogus", "--", "--version", "--help"], Outcome::HelpRequested)]
    fn parser_request_past_sentinel(#[case] tokens: Vec<&str>, #[case] expected: Outcome) {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let outcome = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(outcome, expected);
    }

    #[rstest]
    #[case(vec!["--help"], "--help")]
    #[case(vec!["--version"], "--version")]
    fn parser_requests_disabled(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let parser = parser(Settings {
            help_request: false,
            version_request: false,
            stop_at_double_dash: true,
        });

        // Execute
        let error = parser.consume(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error, ParseError::UnknownFlag(expected.to_string()));
    }

    #[test]
    fn parser_sentinel() {
        // Setup
        let parser = parser(Settings::default());

        // Execute
        let results = parsed(parser.consume(&["-v", "--", "-i", "--"]).unwrap());

        // Verify
        assert_eq!(results.get::<bool>("verbose").unwrap(), true);
        assert_eq!(results.get::<i64>("int").unwrap(), 0);
        assert_eq!(results.get::<String>("value").unwrap(), "-i");
        assert_eq!(results.list::<String>("text").unwrap(), vec!["--".to_string()]);
    }

    #[test]
    fn parser_sentinel_disabled() {
        // Setup
        let parser = parser(Settings {
            stop_at_double_dash: false,
            ..Settings::default()
        });

        // Execute
        let error = parser.consume(&["A", "--", "B"]).unwrap_err();

        // Verify
        assert_eq!(error, ParseError::UnknownFlag("--".to_string()));
    }

    #[test]
    fn parser_sentinel_disabled_help() {
        let parser = parser(Settings {
            stop_at_double_dash: false,
            ..Settings::default()
        });
        assert_eq!(
            parser.consume(&["--", "--help"]).unwrap(),
            Outcome::HelpRequested
        );
    }

    #[rstest]
    #[case(vec!["-i"], ParseError::FlagRequiresValue("--int".to_string()))]
    #[case(vec!["-v=true"], ParseError::FlagTakesNoArgument("--verbose".to_string()))]
    #[case(vec!["-v", "-v"], ParseError::ExcessOccurrence("--verbose".to_string()))]
    #[case(vec!["-x"], ParseError::UnknownFlag("-x".to_string()))]
    #[case(vec!["-é"], ParseError::UnknownFlag("-é".to_string()))]
    #[case(vec!["A", "B", "C", "D"], ParseError::UnknownArgument("D".to_string()))]
    #[case(vec!["-i", "x"], ParseError::InvalidValueFormat {
        parameter: "--int".to_string(),
        token: "x".to_string(),
        type_name: "int".to_string(),
    })]
    fn parser_errors(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
        let parser = parser(Settings::default());
        assert_eq!(parser.consume(tokens.as_slice()).unwrap_err(), expected);
    }

    #[test]
    fn parser_missing_required() {
        // Setup
        let parser = Parser::new(
            Vec::default(),
            vec![argument("STRING", ValueType::Text, Bound::new(2, 3))],
            Settings::default(),
        )
        .unwrap();

        // Execute
        let error = parser.consume(&["a"]).unwrap_err();

        // Verify
        assert_eq!(error, ParseError::MissingRequired("STRING".to_string()));
    }

    #[test]
    fn parser_duplicate_name() {
        let bound = Bound::new(0, thread_rng().gen_range(1..10));
        let result = Parser::new(
            vec![flag("name", None, ValueType::Text, bound)],
            vec![argument("name", ValueType::Text, bound)],
            Settings::default(),
        );
        assert_matches!(result, Err(ConfigError::DuplicateName(name)) if name == "name");
    }

    #[test]
    fn parser_duplicate_short() {
        let result = Parser::new(
            vec![
                flag("flagA", Some('f'), ValueType::Bool, Bound::new(0, 1)),
                flag("flagB", Some('f'), ValueType::Bool, Bound::new(0, 1)),
            ],
            Vec::default(),
            Settings::default(),
        );
        assert_matches!(result, Err(ConfigError::DuplicateShort('f')));
    }

    #[rstest]
    #[case("")]
    #[case("1abc")]
    #[case("-abc")]
    #[case("a b")]
    #[case("a=b")]
    fn parser_invalid_flag_name(#[case] name: &str) {
        let result = Parser::new(
            vec![flag(name, None, ValueType::Bool, Bound::new(0, 1))],
            Vec::default(),
            Settings::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigError::InvalidName(name.to_string()));
    }

    #[rstest]
    #[case("")]
    #[case("A B")]
    fn parser_invalid_argument_name(#[case] name: &str) {
        let result = Parser::new(
            Vec::default(),
            vec![argument(name, ValueType::Text, Bound::new(0, 1))],
            Settings::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigError::InvalidName(name.to_string()));
    }

    #[rstest]
    #[case('1')]
    #[case('-')]
    #[case('?')]
    fn parser_invalid_short(#[case] short: char) {
        let result = Parser::new(
            vec![flag("flag", Some(short), ValueType::Bool, Bound::new(0, 1))],
            Vec::default(),
            Settings::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigError::InvalidShort(short));
    }

    #[test]
    fn parser_unicode_short() {
        // Setup
        let parser = Parser::new(
            vec![flag("etre", Some('ê'), ValueType::Bool, Bound::new(0, 1))],
            Vec::default(),
            Settings::default(),
        )
        .unwrap();

        // Execute
        let results = parsed(parser.consume(&["-ê"]).unwrap());

        // Verify
        assert_eq!(results.get::<bool>("etre").unwrap(), true);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 1)]
    #[case(5, 0)]
    fn parser_invalid_bounds(#[case] min: u32, #[case] max: u32) {
        let result = Parser::new(
            Vec::default(),
            vec![argument("name", ValueType::Text, Bound::new(min, max))],
            Settings::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidBounds {
                name: "name".to_string(),
                min,
                max,
            }
        );
    }

    #[rstest]
    #[case("help")]
    #[case("version")]
    fn parser_reserved(#[case] name: &str) {
        let result = Parser::new(
            vec![flag(name, None, ValueType::Bool, Bound::new(0, 1))],
            Vec::default(),
            Settings::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigError::Reserved(name.to_string()));
    }

    #[test]
    fn parser_reserved_disabled() {
        // Setup
        let parser = Parser::new(
            vec![flag("help", Some('h'), ValueType::Bool, Bound::new(0, 1))],
            Vec::default(),
            Settings {
                help_request: false,
                ..Settings::default()
            },
        )
        .unwrap();

        // Execute
        let results = parsed(parser.consume(&["--help"]).unwrap());

        // Verify
        assert_eq!(results.get::<bool>("help").unwrap(), true);
    }
}
