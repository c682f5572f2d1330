mod capture;
mod core;
mod parameter;
mod results;

pub(crate) use capture::*;
pub use self::core::*;
pub use parameter::*;
pub use results::*;
