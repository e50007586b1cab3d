//! Integration tests running the card-forge binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(out_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_card-forge"))
        .arg("-o")
        .arg(out_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn written(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

const LISTING: &str = "Available templates:
  - basic_unit
  - ranged_unit
  - heavy_unit
  - support_unit
  - structure
";

#[test]
fn test_no_command_prints_help() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Card Generator for Janet-based Game\n"));
    assert!(out.contains("generate <name> <template> [cost] [attack] [defense]"));
    assert!(out.ends_with(LISTING));
}

#[test]
fn test_unknown_command_prints_help() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["frobnicate", "3"]);

    assert!(output.status.success());
    assert!(stdout(&output).ends_with(LISTING));
    assert_eq!(written(dir.path()), 0);
}

#[test]
fn test_generate_missing_arguments() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["generate", "Lonely Name"]);

    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(
        "Usage: card-forge generate <name> <template> [cost] [attack] [defense]\n"
    ));
    assert!(out.contains("Example: card-forge generate 'Fire Mage' ranged_unit 3 2 1\n"));
    assert!(out.ends_with(LISTING));
    assert_eq!(written(dir.path()), 0);
}

#[test]
fn test_generate_unknown_template() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["generate", "Test", "bogus_template"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "Error: Template 'bogus_template' not found\n");
    assert_eq!(written(dir.path()), 0);
}

#[test]
fn test_generate_writes_card() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["gen", "Fire Mage", "ranged_unit", "3", "2", "1"]);

    assert!(output.status.success());
    let path = dir.path().join("fire_mage.janet");
    assert_eq!(stdout(&output), format!("Generated: {}\n", path.display()));

    let source = fs::read_to_string(path).unwrap();
    assert!(source.starts_with("(def cost 3)\n"));
    assert!(source.contains("(def attack-strength 2)\n(def defense 1)\n"));
}

#[test]
fn test_batch_announces_and_reports_each_card() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--seed", "3", "batch", "2"]);

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Generating 2 random cards...");
    assert!(lines[1..].iter().all(|l| l.starts_with("Generated: ")));
    assert!(written(dir.path()) >= 1);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = run(first.path(), &["--seed", "17", "random", "3"]);
    let b = run(second.path(), &["--seed", "17", "random", "3"]);

    assert!(a.status.success());
    let names = |out: &Output, dir: &Path| {
        stdout(out).replace(&dir.display().to_string(), "<dir>")
    };
    assert_eq!(names(&a, first.path()), names(&b, second.path()));
    assert_eq!(stdout(&a).lines().count(), 3);
}

#[test]
fn test_templates_listing() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["list"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), LISTING);
}
