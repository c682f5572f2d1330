mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, Outcome, ParseError};
pub(crate) use base::{Parser, Settings};
pub(crate) use interface::*;
pub use middleware::GeneralParser;
pub(crate) use printer::*;
