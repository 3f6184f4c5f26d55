//! # apply-clang-format (binary crate)
//!
//! Thin wrapper around the `apply_clang_format` library. Every outcome, including
//! usage errors and internal faults, ends with exit status 0; faults are reported
//! on stdout.

use std::backtrace::Backtrace;
use std::io;
use std::panic;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = ctrlc::set_handler(|| std::process::exit(0)) {
        eprintln!("Warning: failed to install Ctrl-C handler: {}", e);
    }

    panic::set_hook(Box::new(|info| {
        println!("{}\n{}", info, Backtrace::force_capture());
    }));

    let outcome = panic::catch_unwind(|| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        apply_clang_format::run(std::env::args_os(), &mut out)
    });

    if let Ok(Err(e)) = outcome {
        println!("Error: {:?}", e);
    }
    ExitCode::SUCCESS
}
