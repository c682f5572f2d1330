//! `clp` is a typed command line parser for Rust, with getopt and argparse style flag syntaxes.
//!
//! `clp` attempts to prioritize the following design concerns:
//! * *Typed parsing*:
//! Every parameter is declared with its type, and the user never calls any `&str -> T` conversion directly.
//! The supported types are `bool`, `i64`, `f64`, `String`, `char`, and any enumeration (see [`prelude::Enumeration`]).
//! * *Flag vs. argument paradigm*:
//! Flags are written via `--name` or `-n` syntax, and are matched by name.
//! Arguments are the remaining tokens, matched by position.
//! * *Cardinality*:
//! Every parameter may occur between its `min` and `max` times (inclusive), checked by the parser.
//! * *Parsing without side effects*:
//! The parser returns its results (or a help/version request, or an error) as values.
//! Printing and exiting the process are opt-in.
//!
//! # Usage
//! More examples are outlined in [the source](https://github.com/clp-rs/clp/tree/main/demos).
//! ```no_run
#![doc = include_str!("../demos/echo.rs")]
//! ```
//!
//! ```console
//! $ echo --help
//!  USAGE
//!    echo [-ne] [--help] [--version] [STRING]...
//!
//!  DESCRIPTION
//!    Write arguments to the standard output.
//!
//!  ARGUMENTS
//!     STRING           The strings to display on the standard output.
//!
//!  FLAGS
//!     -n|--no-newline  Do not output a trailing newline.
//!     -e|--escape      Enable interpretation of backslash escape sequences.
//!     --help           Display this help and exit
//!     --version        Display version information and exit
//! <truncated>
//!
//! $ echo -e 'Column 1\tColumn 2'
//! Column 1        Column 2
//!
//! $ echo -x
//! Error: Flag '-x' does not exist.
//! Try 'echo --help' for more information.
//! ```
//!
//! # Builder Api
//! Configure `clp` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are two classes of parameters: flags ([`Parameter::flag`], [`Parameter::flag_choice`]) and arguments ([`Parameter::argument`], [`Parameter::argument_choice`]).
//!
//! Each parameter may be refined with:
//! * [`Parameter::bounds`]: the inclusive `[min, max]` number of occurrences (default `[0, 1]`).
//! A `max` above `1` collects a list of values, or a count for a `bool` flag.
//! * [`Parameter::default`]: the value held when the parameter does not occur.
//! * [`Parameter::default_to_list`]: a list parameter that does not occur holds `[default]`.
//! * [`Parameter::help`], [`Parameter::meta`], [`Parameter::hidden`]: how the parameter is shown in the help message.
//!
//! ### Flag syntax
//! Flags are matched in the following order:
//! 1. `-x`: a single short flag, taking its value (if any) from the next token.
//! 2. `-x=value`: a single short flag with an inline value.
//! 3. `-abc`: a bundle of `bool` short flags.
//! 4. `--name`: a long flag, taking its value (if any) from the next token.
//! 5. `--name=value`: a long flag with an inline value.
//!
//! Any other token (ex: `-`, `-1`, `value`) is matched against the arguments, in the order they were added.
//! After the first `--`, every token is matched against the arguments.
//!
//! ### Results
//! Parsing produces [`ParseResults`], holding an [`Entry`] for every declared parameter.
//! Read them with [`ParseResults::get`], [`ParseResults::list`], [`ParseResults::choice`] and [`ParseResults::choices`].
//! ```
//! use clp::{CommandLineParser, Outcome, Parameter};
//!
//! let parser = CommandLineParser::new("program")
//!     .add(Parameter::<bool>::flag("optimize", Some('o')).bounds(0, 3))
//!     .add(Parameter::<f64>::flag("ratio", Some('r')).default(0.5))
//!     .add(Parameter::<String>::argument("FILE").bounds(1, 2))
//!     .build()
//!     .unwrap();
//!
//! match parser.try_parse_tokens(&["-oo", "a.txt", "--", "-b.txt"]).unwrap() {
//!     Outcome::Parsed(results) => {
//!         assert_eq!(results.get::<i64>("optimize").unwrap(), 2);
//!         assert_eq!(results.get::<f64>("ratio").unwrap(), 0.5);
//!         assert_eq!(
//!             results.list::<String>("FILE").unwrap(),
//!             vec!["a.txt".to_string(), "-b.txt".to_string()]
//!         );
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ### Parsing
//! * [`GeneralParser::try_parse_tokens`]: returns an [`Outcome`] or a [`ParseError`], and prints nothing.
//! * [`GeneralParser::parse_tokens`]: prints the help message, version or error, returning `Err(exit_code)` for each.
//! * [`GeneralParser::parse`]: parses the program's arguments, exiting the process as `parse_tokens` would return `Err`.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the parser.
pub use clp_builder::*;
