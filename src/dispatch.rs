//! Listing and formatting of selected files

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that rewrites a single file in place
pub trait Formatter {
    fn format_in_place(&mut self, path: &Path) -> io::Result<()>;
}

/// Runs `<program> -i <file>` for each file
///
/// The child's output goes straight to the terminal and its exit status is
/// only logged.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: OsString,
}

impl ClangFormat {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Formatter for ClangFormat {
    fn format_in_place(&mut self, path: &Path) -> io::Result<()> {
        let status = Command::new(&self.program).arg("-i").arg(path).status()?;
        if !status.success() {
            log::debug!("{:?} exited with {} for {}", self.program, status, path.display());
        }
        Ok(())
    }
}

/// Prints the header followed by one path per line
pub fn list_files(
    out: &mut dyn Write,
    mask: &Path,
    recursive: bool,
    files: &[PathBuf],
) -> io::Result<()> {
    writeln!(out, "List: {}, recursive: {}", mask.display(), recursive)?;
    for file in files {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}

/// Formats each file in order, one formatter call per file.
///
/// A file the formatter cannot be started for is logged and skipped; the
/// remaining files are still processed. Returns the number of files handed
/// to the formatter successfully.
pub fn format_files(
    out: &mut dyn Write,
    files: &[PathBuf],
    formatter: &mut dyn Formatter,
) -> io::Result<usize> {
    let mut formatted = 0;
    for file in files {
        writeln!(out, "clang-format: {}", file.display())?;
        out.flush()?;
        match formatter.format_in_place(file) {
            Ok(()) => formatted += 1,
            Err(e) => log::warn!("Failed to run formatter on {}: {}", file.display(), e),
        }
    }
    Ok(formatted)
}
