//! Integration tests for lsr


use assert_cmd::Command;
use harness::{TestTree, run_lsr, run_lsr_with_input};
use predicates::prelude::*;

fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("README.md", "# hi");
    tree.add_file("src/main.rs", "fn main() {}");
    tree.add_file("src/lib/mod.rs", "");
    tree
}

/// The path column of each output line.
fn listed_paths(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter_map(|line| line.split('\t').nth(3))
        .collect()
}

#[test]
fn test_basic_listing() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &[]);
    assert!(success, "lsr should succeed");
    assert_eq!(
        listed_paths(&stdout),
        ["README.md", "src", "src/lib", "src/main.rs", "src/lib/mod.rs"]
    );
}

#[test]
fn test_line_format() {
    let tree = TestTree::new();
    tree.add_file("hello.txt", "hello");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &[]);
    assert!(success);

    let line = stdout.lines().next().expect("one line");
    let fields: Vec<&str> = line.split('\t').collect();
    assert_eq!(fields.len(), 4, "line: {:?}", line);
    assert_eq!(fields[0], "F");
    assert_eq!(fields[1].len(), 10);
    assert_eq!(fields[2], "5");
    assert_eq!(fields[3], "hello.txt");
}

#[test]
fn test_directory_option() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-d", "src"]);
    assert!(success);
    assert_eq!(
        listed_paths(&stdout),
        ["src/lib", "src/main.rs", "src/lib/mod.rs"]
    );

    let (stdout, _stderr, _) = run_lsr(tree.path(), &["--directory", "./src"]);
    assert_eq!(
        listed_paths(&stdout),
        ["src/lib", "src/main.rs", "src/lib/mod.rs"]
    );
}

#[test]
fn test_gitignore_names_excluded() {
    let tree = sample_tree();
    tree.add_file(".gitignore", "target\nnotes.txt\n");
    tree.add_file("target/debug/app", "");
    tree.add_file("notes.txt", "");
    tree.add_file(".git/HEAD", "");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &[]);
    assert!(success);
    let paths = listed_paths(&stdout);
    assert!(paths.contains(&".gitignore"));
    assert!(!paths.iter().any(|p| p.starts_with("target")), "{}", stdout);
    assert!(!paths.contains(&"notes.txt"));
    assert!(!paths.iter().any(|p| p.starts_with(".git/")), "{}", stdout);
    assert!(!paths.contains(&".git"));
}

#[test]
fn test_no_ignore_file() {
    let tree = TestTree::new();
    tree.add_file(".gitignore", "notes.txt\n");
    tree.add_file("notes.txt", "");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--no-ignore-file"]);
    assert!(success);
    assert!(listed_paths(&stdout).contains(&"notes.txt"));
}

#[test]
fn test_negation_flag() {
    let tree = TestTree::new();
    tree.add_file(".gitignore", "keep.txt\n!keep.txt\n");
    tree.add_file("keep.txt", "");

    let (stdout, _stderr, _) = run_lsr(tree.path(), &[]);
    assert!(!listed_paths(&stdout).contains(&"keep.txt"));

    let (stdout, _stderr, _) = run_lsr(tree.path(), &["--honor-negation"]);
    assert!(listed_paths(&stdout).contains(&"keep.txt"));
}

#[test]
fn test_extra_ignore_names() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-I", "lib", "-I", "README.md"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), ["src", "src/main.rs"]);
}

#[test]
fn test_type_dir() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-t", "dir"]);
    assert!(success);
    assert!(stdout.lines().all(|l| l.starts_with("D\t")), "{}", stdout);
    assert_eq!(listed_paths(&stdout), ["src", "src/lib"]);
}

#[test]
fn test_type_file_recurses() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--type", "file"]);
    assert!(success);
    assert!(stdout.lines().all(|l| l.starts_with("F\t")), "{}", stdout);
    assert_eq!(
        listed_paths(&stdout),
        ["README.md", "src/main.rs", "src/lib/mod.rs"]
    );
}

#[test]
fn test_level_limit() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-L", "1"]);
    assert!(success);
    assert_eq!(
        listed_paths(&stdout),
        ["README.md", "src", "src/lib", "src/main.rs"]
    );
}

#[test]
fn test_unexpected_argument() {
    let tree = sample_tree();

    Command::cargo_bin("lsr")
        .unwrap()
        .current_dir(tree.path())
        .arg("stray")
        .assert()
        .success()
        .stdout("Unexpected argument.\n");
}

#[test]
fn test_unknown_flag_is_unexpected_argument() {
    let tree = sample_tree();

    for flag in ["-x", "--bogus"] {
        Command::cargo_bin("lsr")
            .unwrap()
            .current_dir(tree.path())
            .arg(flag)
            .assert()
            .success()
            .stdout("Unexpected argument.\n");
    }
}

#[test]
fn test_directory_flag_without_value() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-d"]);
    assert!(success);
    assert_eq!(
        listed_paths(&stdout),
        ["README.md", "src", "src/lib", "src/main.rs", "src/lib/mod.rs"]
    );
}

#[test]
fn test_json_output() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["path"], "README.md");
    assert_eq!(items[0]["kind"], "file");
    assert_eq!(items[1]["kind"], "dir");
}

#[test]
fn test_no_color_when_piped() {
    let tree = sample_tree();

    let (stdout, _stderr, _) = run_lsr(tree.path(), &[]);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_color_always() {
    let tree = sample_tree();

    Command::cargo_bin("lsr")
        .unwrap()
        .current_dir(tree.path())
        .args(["--color", "always"])
        .env_remove("NO_COLOR")
        .env("TERM", "xterm")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

// ============================================================================
// Threshold confirmation
// ============================================================================

#[test]
fn test_small_tree_never_prompts() {
    let tree = sample_tree();

    let (_stdout, stderr, success) = run_lsr_with_input(tree.path(), &[], "n\n");
    assert!(success);
    assert!(!stderr.contains("[Yn]"), "{}", stderr);
}

#[test]
fn test_threshold_accept() {
    let tree = TestTree::new();
    tree.add_files("many", 150);
    tree.add_files("later", 30);

    let (stdout, stderr, success) = run_lsr_with_input(tree.path(), &[], "\n");
    assert!(success);
    assert_eq!(stderr.matches("[Yn]").count(), 1, "{}", stderr);
    assert_eq!(stdout.lines().count(), 182);
}

#[test]
fn test_threshold_decline() {
    let tree = TestTree::new();
    tree.add_files("a_many", 150);
    tree.add_files("b_later", 30);

    let (stdout, stderr, success) = run_lsr_with_input(tree.path(), &[], "n\n");
    assert!(success);
    assert_eq!(stderr.matches("[Yn]").count(), 1, "{}", stderr);
    assert!(stderr.contains("Stopped listing. Showing 152 files."), "{}", stderr);
    assert_eq!(listed_paths(&stdout), ["a_many", "b_later"]);
}

#[test]
fn test_threshold_flat_directory_decline() {
    let tree = TestTree::new();
    tree.add_files("flat", 150);

    let (stdout, _stderr, success) = run_lsr_with_input(tree.path(), &["-d", "flat"], "n\n");
    assert!(success);
    assert!(stdout.is_empty(), "{}", stdout);
}

#[test]
fn test_closed_stdin_continues() {
    let tree = TestTree::new();
    tree.add_files("flat", 150);

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-d", "flat"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 150);
}

#[test]
fn test_yes_never_prompts() {
    let tree = TestTree::new();
    tree.add_files("flat", 150);

    let (stdout, stderr, success) = run_lsr_with_input(tree.path(), &["-y"], "n\n");
    assert!(success);
    assert!(!stderr.contains("[Yn]"));
    assert_eq!(stdout.lines().count(), 151);
}

#[test]
fn test_stop_at_limit() {
    let tree = TestTree::new();
    tree.add_files("flat", 150);

    let (stdout, stderr, success) = run_lsr(tree.path(), &["--stop-at-limit"]);
    assert!(success);
    assert!(!stderr.contains("[Yn]"));
    assert!(stderr.contains("Stopped listing. Showing 151 files."), "{}", stderr);
    assert_eq!(listed_paths(&stdout), ["flat"]);
}

#[test]
fn test_custom_limit_and_per_directory() {
    let tree = TestTree::new();
    tree.add_files("a", 8);
    tree.add_files("b", 8);

    // 2 + 8 + 8 observed in total, but no single directory holds more than 8.
    let (stdout, stderr, _) = run_lsr(tree.path(), &["--limit", "10", "--per-directory"]);
    assert!(!stderr.contains("[Yn]"));
    assert_eq!(stdout.lines().count(), 18);

    // The running total reaches exactly 10 after `a`, so only `b` trips it.
    let (stdout, stderr, _) = run_lsr_with_input(tree.path(), &["--limit", "10"], "n\n");
    assert!(stderr.contains("[Yn]"));
    assert_eq!(stdout.lines().count(), 10);
}
