use std::env;

use crate::api::ParseResults;
use crate::constant::HELP_TOKEN;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](./struct.CommandLineParser.html#method.build).
///
/// Each parser parses once: every parse method consumes it.
pub struct GeneralParser {
    program: String,
    version: String,
    settings: Settings,
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .field("version", &self.version)
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        program: impl Into<String>,
        version: impl Into<String>,
        settings: Settings,
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
            settings,
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens, without printing anything.
    ///
    /// Help and version requests are reported as an [`Outcome`]; it is up to the caller what to do with them.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::{CommandLineParser, Outcome, ParseError, Parameter};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::<i64>::flag("int", Some('i')))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     parser.try_parse_tokens(&["-i"]).unwrap_err(),
    ///     ParseError::FlagRequiresValue("--int".to_string())
    /// );
    /// ```
    pub fn try_parse_tokens(self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        self.parser.consume(tokens)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the parser encounters an error (ex: an unknown flag, a value that doesn't convert), it prints the error and returns `Err(1)`.
    ///
    /// If `--help` is requested, the parser prints the help message and returns `Err(0)`.
    /// If `--version` is requested, the parser prints `program version` and returns `Err(0)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<ParseResults, i32> {
        let GeneralParser {
            program,
            version,
            settings,
            parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Outcome::Parsed(results)) => Ok(results),
            Ok(Outcome::HelpRequested) => {
                printer.print_help(&program, &*user_interface);
                Err(0)
            }
            Ok(Outcome::VersionRequested) => {
                user_interface.print(format!("{program} {version}"));
                Err(0)
            }
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse failed: {error:?}.");
                }

                user_interface.print_error(error);

                if settings.help_request {
                    user_interface.print_error_hint(format!(
                        "Try '{program} {HELP_TOKEN}' for more information."
                    ));
                }

                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except the process exits (via [`std::process::exit`]) where that returns `Err`.
    pub fn parse(self) -> ParseResults {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(results) => results,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
