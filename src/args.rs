//! Command-line interpretation
//!
//! The tool keeps the DOS-style `<filemask> [/s] [/f]` surface. Clap handles the
//! ambient options (`--formatter`, `--sort`, `--verbose`) and captures the rest of
//! the command line raw, which [`interpret`] then validates.

use clap::Parser;
use std::path::{MAIN_SEPARATOR, Path};

/// Prefix that marks a switch token such as `/s`
pub const FLAG_PREFIX: char = '/';

/// Raw command line as parsed by clap
#[derive(Parser, Debug)]
#[command(
    name = "apply-clang-format",
    version,
    about = "List C/C++ sources matching a file mask, or format them in place with clang-format"
)]
pub struct Cli {
    /// Formatter executable invoked as `<formatter> -i <file>`
    #[arg(long, env = "CLANG_FORMAT", default_value = "clang-format")]
    pub formatter: String,

    /// Sort selected files before listing or formatting
    #[arg(long)]
    pub sort: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// `<filemask> [/s] [/f]`
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

/// What to do with the selected files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the selected paths
    List,
    /// Rewrite each selected file with the external formatter
    Format,
}

/// A validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mask: String,
    pub recursive: bool,
    pub mode: Mode,
}

/// Validates the positional tokens (program name excluded).
///
/// Returns `None` when the usage text should be shown instead: no tokens, more
/// than three, or a first token that looks like a switch. Unknown switches are
/// ignored.
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> Option<Invocation> {
    if tokens.is_empty() || tokens.len() > 3 {
        return None;
    }

    let mask = tokens[0].as_ref();
    if mask.starts_with(FLAG_PREFIX) {
        return None;
    }

    let switches = &tokens[1..];
    let mode = if has_switch(switches, 'f') {
        Mode::Format
    } else {
        Mode::List
    };

    Some(Invocation {
        mask: mask.to_string(),
        recursive: has_switch(switches, 's'),
        mode,
    })
}

fn has_switch<S: AsRef<str>>(tokens: &[S], letter: char) -> bool {
    tokens.iter().any(|token| {
        let mut chars = token.as_ref().trim().chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(FLAG_PREFIX), Some(c), None) if c.eq_ignore_ascii_case(&letter)
        )
    })
}

/// Base name of `argv[0]`, used in the usage text
pub fn program_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "apply-clang-format".to_string())
}

pub fn usage(program: &str) -> String {
    let sep = MAIN_SEPARATOR;
    format!(
        "Usage: {program} <filemask> [/s] [/f]\n\
         \x20 note: gen{sep} and gen64{sep} directories are ignored\n\
         \x20 /s = recursively process files in subdirectories\n\
         \x20 /f = actually format the selected files instead of just listing them\n\
         \n\
         \x20 example:\n\
         \x20   {program} src{sep}*.* /s /f\n"
    )
}
