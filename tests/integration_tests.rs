use apply_clang_format::create_test_structure;
use std::path::Path;
use std::process::{Command, Output};

fn run_tool_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apply-clang-format"))
        .args(args)
        .current_dir(dir)
        .env_remove("CLANG_FORMAT")
        .output()
        .expect("Failed to execute apply-clang-format")
}

fn run_tool(args: &[&str]) -> Output {
    run_tool_in(Path::new(env!("CARGO_MANIFEST_DIR")), args)
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_tool(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage: apply-clang-format <filemask> [/s] [/f]"));
    assert!(stdout.contains("example:"));
}

#[test]
fn test_flag_in_mask_position_prints_usage() {
    let output = run_tool(&["/s"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("Usage:"));
    assert!(!stdout.contains("List:"));
}

#[test]
fn test_too_many_tokens_prints_usage() {
    let output = run_tool(&["src/*.*", "/s", "/f", "/x"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn test_list_flat() {
    let temp_dir = create_test_structure().unwrap();

    let output = run_tool_in(temp_dir.path(), &["src/*.*"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    println!("stdout: {}", stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("List: "));
    assert!(stdout.contains("recursive: false"));
    assert!(stdout.contains("main.cpp"));
    assert!(stdout.contains("util.h"));
    assert!(stdout.contains("Legacy.CPP"));
    assert!(!stdout.contains("README.txt"));
    assert!(!stdout.contains("helper.hpp"));
    assert!(!stdout.contains("generated.cpp"));
}

#[test]
fn test_list_recursive_skips_generated_dirs() {
    let temp_dir = create_test_structure().unwrap();

    let output = run_tool_in(temp_dir.path(), &["--sort", "src/*.*", "/s"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("recursive: true"));
    assert!(stdout.contains("helper.hpp"));
    assert!(!stdout.contains("generated.cpp"));
    assert!(!stdout.contains("ignored.cc"));
    assert!(!stdout.contains("deep.h"));
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_recursive_from_generated_dir_lists_nothing() {
    let temp_dir = create_test_structure().unwrap();

    let output = run_tool_in(temp_dir.path(), &["src/gen/*.*", "/s"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 1);
    assert!(!stdout.contains("generated.cpp"));
}

#[test]
fn test_parent_components_are_folded() {
    let temp_dir = create_test_structure().unwrap();

    let output = run_tool_in(&temp_dir.path().join("src").join("sub"), &["../*.*"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("main.cpp"));
    assert!(!stdout.contains(".."));
}

#[test]
fn test_absolute_mask_is_taken_for_a_flag() {
    let output = run_tool(&["/usr/include/*.h"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn test_missing_directory_lists_nothing() {
    let temp_dir = create_test_structure().unwrap();
    let output = run_tool_in(temp_dir.path(), &["missing/*.*", "/s"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("List: "));
}

#[cfg(unix)]
#[test]
fn test_format_invokes_formatter_per_file() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = create_test_structure().unwrap();
    let log_path = temp_dir.path().join("calls.log");
    let script = temp_dir.path().join("fake-clang-format");
    fs::write(
        &script,
        format!("#!/bin/sh\necho \"$1 $2\" >> '{}'\n", log_path.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_apply-clang-format"))
        .args(["src/*.*", "/f", "/s"])
        .current_dir(temp_dir.path())
        .env("CLANG_FORMAT", &script)
        .output()
        .expect("Failed to execute apply-clang-format");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let progress: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("clang-format: "))
        .collect();
    assert_eq!(progress.len(), 4);

    let calls = fs::read_to_string(&log_path).unwrap();
    let called: Vec<&str> = calls
        .lines()
        .map(|line| line.strip_prefix("-i ").unwrap())
        .collect();
    assert_eq!(called, progress);
    assert!(called.iter().all(|p| p.starts_with('/')));
    assert!(!calls.contains("ignored.cc"));
}

#[test]
fn test_missing_formatter_still_exits_zero() {
    let temp_dir = create_test_structure().unwrap();

    let output = run_tool_in(
        temp_dir.path(),
        &["--formatter", "apply-clang-format-test-no-such-binary", "src/*.*", "/f"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().filter(|l| l.starts_with("clang-format: ")).count(), 3);
}
