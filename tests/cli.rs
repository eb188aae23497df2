//! Tests for the `lexeme` binary: exit codes, the listing format, the
//! file name prompt, and the command-line flags.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn cli_path() -> Option<PathBuf> {
    std::env::var_os("CARGO_BIN_EXE_lexeme").map(Into::into)
}

fn run(cli_path: &Path, args: &[&str], file: &Path) -> Output {
    Command::new(cli_path)
        .args(args)
        .arg(file)
        .env_remove("RUST_LOG")
        .output()
        .expect("invoke lexeme")
}

#[test]
fn missing_file_exits_with_input_unavailable() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping missing file test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let missing = dir.path().join("missing.js");

    let output = run(&cli_path, &[], &missing);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: InputUnavailable (Failed to open file '"),
        "unexpected stderr:\n{}",
        stderr
    );
    assert!(stderr.contains("missing.js"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Tokens and their types:"));
}

#[test]
fn lists_tokens_under_header() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping listing test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("main.js");
    fs::write(&source_path, "return x @;\n").expect("write source file");

    let output = run(&cli_path, &[], &source_path);

    assert!(output.status.success(), "unknown characters must not fail a default run");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "\nTokens and their types:\n\
         <return, Reserved Word>\n\
         <x, Identifier>\n\
         <@, Unknown>\n\
         <;, Punctuation>\n"
    );
}

#[test]
fn prompts_for_file_name_without_argument() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping prompt test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("prompted.js");
    fs::write(&source_path, "let a;").expect("write source file");

    let mut child = Command::new(cli_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lexeme");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(format!("{}\n", source_path.display()).as_bytes())
        .expect("write file name");
    let output = child.wait_with_output().expect("wait for lexeme");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Enter the JavaScript source file name: "));
    assert!(stdout.contains("<let, Reserved Word>\n<a, Identifier>\n<;, Punctuation>\n"));
}

#[test]
fn deny_unknown_reports_first_unknown_with_caret() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping deny-unknown test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("strict.js");
    fs::write(&source_path, "let a = 1;\nlet b = a @ 2;\n").expect("write source file");

    let output = run(&cli_path, &["--deny-unknown"], &source_path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: UnrecognisedCharacter (Unrecognised character `@`)"),
        "unexpected stderr:\n{}",
        stderr
    );
    assert!(stderr.contains("2 | let b = a @ 2;"));
    assert!(stderr.contains("  | ----------^"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Tokens and their types:"));
}

#[test]
fn deny_unknown_passes_clean_input() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping deny-unknown test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("clean.js");
    fs::write(&source_path, "let a = 1;").expect("write source file");

    let output = run(&cli_path, &["--deny-unknown"], &source_path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<1, Number>"));
}

#[test]
fn no_trivia_hides_comments_and_directives() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping no-trivia test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("trivia.js");
    fs::write(&source_path, "#!/usr/bin/env node\n// note\nlet a; /* done */\n")
        .expect("write source file");

    let output = run(&cli_path, &["--no-trivia"], &source_path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "\nTokens and their types:\n\
         <let, Reserved Word>\n\
         <a, Identifier>\n\
         <;, Punctuation>\n"
    );
}

#[test]
fn summary_counts_every_category() {
    let Some(cli_path) = cli_path() else {
        eprintln!("Skipping summary test: CLI binary unavailable");
        return;
    };

    let dir = tempdir().expect("create temp dir");
    let source_path = dir.path().join("summary.js");
    fs::write(&source_path, "// c\nlet a = b + 1;").expect("write source file");

    let output = run(&cli_path, &["--summary", "--no-trivia"], &source_path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("<// c, Comment>"));

    let summary = stdout.split("\nSummary:\n").nth(1).expect("summary section");
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{:<24}{}", "Number", 1),
            format!("{:<24}{}", "Comment", 1),
            format!("{:<24}{}", "Reserved Word", 1),
            format!("{:<24}{}", "Operator", 2),
            format!("{:<24}{}", "Punctuation", 1),
            format!("{:<24}{}", "Identifier", 2),
        ]
    );
}
