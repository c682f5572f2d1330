pub(crate) const HELP_NAME: &str = "help";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const HELP_TOKEN: &str = "--help";
pub(crate) const VERSION_TOKEN: &str = "--version";
pub(crate) const SENTINEL_TOKEN: &str = "--";
pub(crate) const UNKNOWN_VERSION: &str = "n/a";
