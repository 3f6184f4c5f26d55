//! Apply clang-format to a set of C/C++ source files
//!
//! This library selects C/C++ sources by file mask, optionally descending into
//! subdirectories while skipping generated-output folders, and either lists
//! them or rewrites each one in place with an external formatter.

pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exclusions;
pub mod select;

pub use args::{Cli, Invocation, Mode};
pub use config::RunConfig;
pub use dispatch::{ClangFormat, Formatter};
pub use error::SelectError;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::fs;
use std::io::Write;

/// Parses `argv` and runs the tool, writing all user-facing text to `out`.
///
/// Invalid usage prints the usage text and returns `Ok`.
pub fn run<I, T>(argv: I, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = args::program_name(argv.first().and_then(|a| a.to_str()));

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            return Ok(());
        }
        Err(e) => {
            log::debug!("Command line rejected: {}", e);
            write!(out, "{}", args::usage(&program))?;
            return Ok(());
        }
    };

    config::setup_logging(cli.verbose);

    let Some(invocation) = args::interpret(&cli.tokens) else {
        write!(out, "{}", args::usage(&program))?;
        return Ok(());
    };

    let config = RunConfig::from_cli(&cli);
    let mut formatter = ClangFormat::new(config.formatter.clone());
    execute(&invocation, &config, out, &mut formatter)
}

/// Selects the files for `invocation` and lists or formats them
pub fn execute(
    invocation: &Invocation,
    config: &RunConfig,
    out: &mut dyn Write,
    formatter: &mut dyn Formatter,
) -> Result<()> {
    let mask = select::absolute_mask(&invocation.mask)?;
    let mut files = select::select_files(&mask, invocation.recursive, &config.rules)
        .with_context(|| format!("Failed to select files for {}", mask.display()))?;
    if config.sort {
        files.sort();
    }
    log::debug!(
        "Selected {} file(s) for {} (recursive: {})",
        files.len(),
        mask.display(),
        invocation.recursive
    );

    match invocation.mode {
        Mode::List => {
            dispatch::list_files(out, &mask, invocation.recursive, &files)
                .context("Failed to write file list")?;
        }
        Mode::Format => {
            let formatted = dispatch::format_files(out, &files, formatter)
                .context("Failed to write progress")?;
            log::info!("Formatted {} of {} file(s)", formatted, files.len());
        }
    }
    Ok(())
}

/// Builds a small C/C++ tree for tests and benchmarks:
///
/// ```text
/// src/main.cpp  src/util.h  src/Legacy.CPP  src/README.txt
/// src/sub/helper.hpp  src/sub/NOTES.md
/// src/gen/generated.cpp
/// src/gen64/ignored.cc  src/gen64/nested/deep.h
/// ```
pub fn create_test_structure() -> anyhow::Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    let src = temp_dir.path().join("src");

    fs::create_dir_all(src.join("sub"))?;
    fs::create_dir_all(src.join("gen"))?;
    fs::create_dir_all(src.join("gen64").join("nested"))?;

    fs::write(src.join("main.cpp"), "int main() { return 0; }\n")?;
    fs::write(src.join("util.h"), "#pragma once\nint util();\n")?;
    fs::write(src.join("Legacy.CPP"), "void legacy() {}\n")?;
    fs::write(src.join("README.txt"), "not a source file\n")?;
    fs::write(src.join("sub").join("helper.hpp"), "inline int helper() { return 1; }\n")?;
    fs::write(src.join("sub").join("NOTES.md"), "# Notes\n")?;
    fs::write(src.join("gen").join("generated.cpp"), "// generated\n")?;
    fs::write(src.join("gen64").join("ignored.cc"), "// generated\n")?;
    fs::write(src.join("gen64").join("nested").join("deep.h"), "// generated\n")?;

    Ok(temp_dir)
}
