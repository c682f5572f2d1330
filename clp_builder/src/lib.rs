//! Builder module for `clp`.
//! See [documentation root](https://docs.rs/clp/latest/clp/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser, Outcome, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
