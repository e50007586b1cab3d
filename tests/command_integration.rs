//! Integration tests for command interpretation and the interactive flow

use std::fs;
use std::io::Cursor;

use card_forge::interactive::{run_custom, InteractiveError};
use card_forge::{Command, Generator, GeneratorConfig, TemplateRegistry};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn generator_in(dir: &TempDir) -> Generator {
    Generator::new(
        TemplateRegistry::builtin(),
        GeneratorConfig::new().with_output_dir(dir.path()),
    )
}

#[test]
fn test_generate_command_end_to_end() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);

    let args: Vec<String> = ["generate", "Fire Warrior", "heavy_unit", "4", "3", "2"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let command = Command::from_args(&args);
    let Command::Generate { name, template, .. } = &command else {
        panic!("expected a generate command, got {:?}", command);
    };

    let path = generator
        .generate(name, template, &command.overrides())
        .unwrap();
    let source = fs::read_to_string(path).unwrap();

    assert!(source.starts_with("(def cost 4)\n"));
    assert!(source.contains("(def attack-strength 3)\n(def defense 2)\n"));
    assert!(source.contains("(def movement-points 1)\n"));
}

#[test]
fn test_custom_session_uses_template_defaults() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    let mut input = Cursor::new("Iron Knight\nbasic_unit\n\n5\n\n");
    let mut output = Vec::new();

    let path = run_custom(&generator, &mut input, &mut output).unwrap();

    assert_eq!(path, dir.path().join("iron_knight.janet"));
    let source = fs::read_to_string(path).unwrap();
    assert!(source.starts_with("(def cost 2)\n"));
    assert!(source.contains("(def attack-strength 5)\n(def defense 2)\n"));
}

#[test]
fn test_custom_session_unknown_template() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    let mut input = Cursor::new("Shadow Beast\nwizard\n1\n1\n1\n");
    let mut output = Vec::new();

    let err = run_custom(&generator, &mut input, &mut output).unwrap_err();

    assert!(matches!(err, InteractiveError::Generate(ref e) if e.is_template_not_found()));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
