//! Run configuration
//!
//! There is no configuration file. Settings come from command-line options and
//! the `CLANG_FORMAT` environment variable, resolved once per run.

use crate::args::Cli;
use crate::exclusions::ExclusionRules;
use std::ffi::OsString;

/// Default formatter executable, looked up on `PATH`
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Settings shared by selection and dispatch
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Formatter executable
    pub formatter: OsString,
    /// Sort selected files instead of keeping enumeration order
    pub sort: bool,
    pub rules: ExclusionRules,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            formatter: OsString::from(DEFAULT_FORMATTER),
            sort: false,
            rules: ExclusionRules::default(),
        }
    }
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            formatter: OsString::from(&cli.formatter),
            sort: cli.sort,
            ..Self::default()
        }
    }
}

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
/// Calling this more than once is harmless.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
