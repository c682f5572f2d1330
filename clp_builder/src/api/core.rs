use std::env;
use std::path::Path;

use crate::api::{Parameter, ParameterClass};
use crate::constant::UNKNOWN_VERSION;
use crate::matcher::{ArgumentConfig, FlagConfig};
use crate::parser::{
    ArgumentParameter, ConfigError, ConsoleInterface, FlagParameter, GeneralParser, Parser,
    Printer, Sections, Settings, UserInterface,
};

/// The command line parser, in its declaration phase.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::{CommandLineParser, Outcome, Parameter};
///
/// let parser = CommandLineParser::new("program")
///     .version("1.0.0")
///     .about("Does awesome things.")
///     .add(Parameter::<bool>::flag("verbose", Some('v')))
///     .add(Parameter::<String>::argument("FILE").bounds(1, 1))
///     .build()
///     .unwrap();
///
/// match parser.try_parse_tokens(&["-v", "file.txt"]).unwrap() {
///     Outcome::Parsed(results) => {
///         assert!(results.get::<bool>("verbose").unwrap());
///         assert_eq!(results.get::<String>("FILE").unwrap(), "file.txt");
///     }
///     _ => unreachable!(),
/// }
/// ```
pub struct CommandLineParser {
    program: String,
    version: Option<String>,
    sections: Sections,
    settings: Settings,
    flag_parameters: Vec<FlagParameter>,
    argument_parameters: Vec<ArgumentParameter>,
    flag_configs: Vec<FlagConfig>,
    argument_configs: Vec<ArgumentConfig>,
}

impl CommandLineParser {
    /// Create a command line parser.
    ///
    /// The `--help` and `--version` requests are enabled, and `--` stops flag parsing.
    /// An empty `program` is replaced at `build` by the file stem of the running executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: None,
            sections: Sections::default(),
            settings: Settings::default(),
            flag_parameters: Vec::default(),
            argument_parameters: Vec::default(),
            flag_configs: Vec::default(),
            argument_configs: Vec::default(),
        }
    }

    /// Set the version reported by `--version`.
    /// If repeated, only the final version will apply.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version.replace(version.into());
        self
    }

    /// Add a line to the description section of the help message.
    /// Repeat to add more lines.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::CommandLineParser;
    ///
    /// CommandLineParser::new("program")
    ///     .about("My program that does awesome stuff.")
    ///     .about("Check it out!");
    /// ```
    pub fn about(mut self, line: impl Into<String>) -> Self {
        self.sections.about.push(line.into());
        self
    }

    /// Add an example to the help message: a `caption`, then the program invoked with `invocation`.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::CommandLineParser;
    ///
    /// CommandLineParser::new("program").example("Be verbose:", "-v file.txt");
    /// ```
    pub fn example(mut self, caption: impl Into<String>, invocation: impl Into<String>) -> Self {
        self.sections
            .examples
            .push((caption.into(), invocation.into()));
        self
    }

    /// Add a line to the copyright section of the help message.
    pub fn copyright(mut self, line: impl Into<String>) -> Self {
        self.sections.copyright.push(line.into());
        self
    }

    /// Enable or disable the `--help` request (enabled by default).
    ///
    /// A `--help` anywhere in the tokens wins over every parse error, unless the tokens begin with `--`.
    pub fn help_request(mut self, enabled: bool) -> Self {
        self.settings.help_request = enabled;
        self
    }

    /// Enable or disable the `--version` request (enabled by default).
    pub fn version_request(mut self, enabled: bool) -> Self {
        self.settings.version_request = enabled;
        self
    }

    /// Enable or disable `--` as the end of flags (enabled by default).
    ///
    /// When enabled, every token after the first `--` is positional, regardless of its shape.
    /// When disabled, a bare `--` is reported as an unknown flag.
    pub fn stop_at_double_dash(mut self, enabled: bool) -> Self {
        self.settings.stop_at_double_dash = enabled;
        self
    }

    /// Add a flag/argument to the command line parser.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of flag parameters does not affect the command parser semantics.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::{CommandLineParser, Outcome, Parameter};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::<i64>::argument("a"))
    ///     .add(Parameter::<i64>::argument("b"))
    ///     .build()
    ///     .unwrap();
    ///
    /// match parser.try_parse_tokens(&["1", "2"]).unwrap() {
    ///     Outcome::Parsed(results) => {
    ///         assert_eq!(results.get::<i64>("a").unwrap(), 1);
    ///         assert_eq!(results.get::<i64>("b").unwrap(), 2);
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn add<T>(mut self, parameter: Parameter<T>) -> Self {
        let inner = parameter.consume();

        match inner.class() {
            ParameterClass::Flag => {
                self.flag_parameters.push(FlagParameter::from(&inner));
                self.flag_configs.push(FlagConfig::from(&inner));
            }
            ParameterClass::Arg => {
                self.argument_parameters
                    .push(ArgumentParameter::from(&inner));
                self.argument_configs.push(ArgumentConfig::from(&inner));
            }
        }

        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let CommandLineParser {
            program,
            version,
            sections,
            settings,
            flag_parameters,
            argument_parameters,
            flag_configs,
            argument_configs,
        } = self;
        let program = if program.is_empty() {
            process_program()
        } else {
            program
        };
        let parser = Parser::new(flag_configs, argument_configs, settings)?;
        let printer = Printer::terminal(flag_parameters, argument_parameters, sections, settings);

        Ok(GeneralParser::new(
            program,
            version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            settings,
            parser,
            printer,
            user_interface,
        ))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }
}

fn process_program() -> String {
    let executable = env::args_os().next().unwrap_or_default();

    Path::new(&executable)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::{InMemoryInterface, SharedInterface};
    use crate::parser::{Outcome, ParseError};
    use rstest::rstest;

    #[rstest]
    #[case(CommandLineParser::new("program").version("1.2.3"), "program 1.2.3")]
    #[case(CommandLineParser::new("program"), "program n/a")]
    fn version_output(#[case] clp: CommandLineParser, #[case] expected: &str) {
        // Setup
        let (shared, interface) = SharedInterface::new();
        let parser = clp.build_with_interface(Box::new(shared)).unwrap();

        // Execute
        let exit_code = parser.parse_tokens(&["--version"]).unwrap_err();

        // Verify
        assert_eq!(exit_code, 0);
        assert_eq!(
            InMemoryInterface::unshare(interface),
            (Some(expected.to_string()), None, None)
        );
    }

    #[test]
    fn program_from_process() {
        // Setup
        let (shared, interface) = SharedInterface::new();
        let parser = CommandLineParser::new("")
            .build_with_interface(Box::new(shared))
            .unwrap();

        // Execute
        parser.parse_tokens(&["--bogus"]).unwrap_err();

        // Verify
        let program = process_program();
        assert!(!program.is_empty());
        let (_, _, hint) = InMemoryInterface::unshare(interface);
        assert_eq!(
            hint.unwrap(),
            format!("Try '{program} --help' for more information.")
        );
    }

    #[test]
    fn empty_build() {
        // Setup
        let clp = CommandLineParser::new("program");

        // Execute
        let parser = clp.build().unwrap();

        // Verify
        assert_matches!(
            parser.try_parse_tokens(empty::slice()).unwrap(),
            Outcome::Parsed(results) if results.iter().count() == 0
        );
    }

    #[test]
    fn add_flags_and_arguments() {
        // Setup
        let clp = CommandLineParser::new("program")
            .add(Parameter::<bool>::flag("verbose", Some('v')))
            .add(Parameter::<String>::argument("value"))
            .add(Parameter::<i64>::flag("number", Some('n')).default(5))
            .add(Parameter::<String>::argument("text").bounds(0, 2));

        // Execute
        let parser = clp.build().unwrap();

        // Verify
        let outcome = parser.try_parse_tokens(&["A", "-v", "X", "Y"]).unwrap();
        let results = match outcome {
            Outcome::Parsed(results) => results,
            other => panic!("expected a parse, found {other:?}"),
        };
        assert_eq!(results.get::<bool>("verbose").unwrap(), true);
        assert_eq!(results.get::<i64>("number").unwrap(), 5);
        assert_eq!(results.get::<String>("value").unwrap(), "A");
        assert_eq!(
            results.list::<String>("text").unwrap(),
            vec!["X".to_string(), "Y".to_string()]
        );
    }

    #[rstest]
    #[case(
        CommandLineParser::new("program")
            .add(Parameter::<bool>::flag("flag", None))
            .add(Parameter::<bool>::flag("flag", Some('f'))),
        ConfigError::DuplicateName("flag".to_string())
    )]
    #[case(
        CommandLineParser::new("program")
            .add(Parameter::<bool>::flag("flag", None))
            .add(Parameter::<bool>::argument("flag")),
        ConfigError::DuplicateName("flag".to_string())
    )]
    #[case(
        CommandLineParser::new("program")
            .add(Parameter::<bool>::flag("flagA", Some('f')))
            .add(Parameter::<bool>::flag("flagB", Some('f'))),
        ConfigError::DuplicateShort('f')
    )]
    #[case(
        CommandLineParser::new("program").add(Parameter::<bool>::flag("help", Some('h'))),
        ConfigError::Reserved("help".to_string())
    )]
    #[case(
        CommandLineParser::new("program").add(Parameter::<i64>::argument("number").bounds(3, 2)),
        ConfigError::InvalidBounds {
            name: "number".to_string(),
            min: 3,
            max: 2,
        }
    )]
    #[case(
        CommandLineParser::new("program").add(Parameter::<i64>::flag("", None)),
        ConfigError::InvalidName("".to_string())
    )]
    fn build_error(#[case] clp: CommandLineParser, #[case] expected: ConfigError) {
        assert_eq!(clp.build().unwrap_err(), expected);
    }

    #[test]
    fn reserved_disabled() {
        // Setup
        let clp = CommandLineParser::new("program")
            .help_request(false)
            .version_request(false)
            .add(Parameter::<bool>::flag("help", Some('h')))
            .add(Parameter::<String>::flag("version", None));

        // Execute
        let parser = clp.build().unwrap();

        // Verify
        assert_matches!(
            parser.try_parse_tokens(&["-h", "--version", "1.2"]).unwrap(),
            Outcome::Parsed(results)
                if results.get::<bool>("help").unwrap()
                    && results.get::<String>("version").unwrap() == "1.2"
        );
    }

    #[test]
    fn stop_at_double_dash_disabled() {
        let parser = CommandLineParser::new("program")
            .stop_at_double_dash(false)
            .add(Parameter::<String>::argument("value"))
            .build()
            .unwrap();
        assert_eq!(
            parser.try_parse_tokens(&["--"]).unwrap_err(),
            ParseError::UnknownFlag("--".to_string())
        );
    }
}
