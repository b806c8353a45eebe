//! End-to-end tests for the `gamma-table` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use gamma_lut::serializer::literal::{parse_literal, serialize};
use gamma_lut::{generate, Preset};

fn gamma_table(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gamma-table"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gamma-table-{}-{name}", std::process::id()))
}

#[test]
fn default_is_the_1025_entry_literal() {
    let output = gamma_table(&["--gamma", "2.2"]);
    assert!(output.status.success());

    let config = Preset::Entries1025.configuration();
    let expected = serialize(&generate(2.2, &config), "u16", 1025);
    assert_eq!(stdout(&output), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn presets_select_size_and_type() {
    let output = gamma_table(&["--gamma", "1.0", "--entries", "256"]);
    assert!(output.status.success());
    let parsed = parse_literal(&stdout(&output)).unwrap();
    assert_eq!(parsed.type_label, "u8");
    assert_eq!(parsed.values, (0..256).collect::<Vec<i64>>());

    let output = gamma_table(&["--gamma", "1.7", "--entries", "257"]);
    let parsed = parse_literal(&stdout(&output)).unwrap();
    assert_eq!(parsed.type_label, "u16");
    assert_eq!(parsed.declared_len, 257);
    assert_eq!(parsed.values[256], 256);
}

#[test]
fn negative_gamma_is_accepted() {
    let output = gamma_table(&["--gamma", "-1", "--entries", "256"]);
    assert!(output.status.success());
    let parsed = parse_literal(&stdout(&output)).unwrap();
    assert_eq!(parsed.values[0], i64::MAX);
    assert_eq!(parsed.values[255], 255);
}

#[test]
fn missing_gamma_is_a_usage_error() {
    let output = gamma_table(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--gamma"));
}

#[test]
fn unparseable_gamma_is_a_usage_error() {
    let output = gamma_table(&["--gamma", "bright"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid gamma value"));
}

#[test]
fn too_few_entries_is_a_usage_error() {
    let output = gamma_table(&["--gamma", "2.2", "--entries", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn oversized_entries_is_a_usage_error() {
    for entries in ["18446744073709551615", "100000000000000", "16777217"] {
        let output = gamma_table(&["--gamma", "2.2", "--entries", entries]);
        assert_eq!(output.status.code(), Some(2), "--entries {entries}");
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("at most 16777216 entries"));
    }
}

#[test]
fn name_requires_module_format() {
    let output = gamma_table(&["--gamma", "2.2", "--name", "LUT"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn module_format_to_file() {
    let path = scratch("module").join("gamma_tables.rs");
    let output = gamma_table(&[
        "--gamma",
        "2.2",
        "--entries",
        "257",
        "--format",
        "module",
        "--out",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("pub const GAMMA_22: [u16; 257] = ["));
    let parsed = parse_literal(&text).unwrap();
    assert_eq!(parsed.values, generate(2.2, &Preset::Entries257.configuration()));

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn json_format() {
    let output = gamma_table(&["--gamma", "0.45", "--format", "json"]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["gamma"], 0.45);
    assert_eq!(doc["configuration"]["entry_count"], 1025);
    assert_eq!(doc["configuration"]["output_width"], 16);
    assert_eq!(doc["table"][1024], 1024);
}

#[test]
fn check_accepts_matching_and_rejects_stale_files() {
    let path = scratch("check.rs");
    let config = Preset::Entries256.configuration();
    fs::write(&path, serialize(&generate(2.0, &config), "u8", 256)).unwrap();
    let path_arg = path.to_str().unwrap();

    let output = gamma_table(&["--gamma", "2.0", "--entries", "256", "--check", path_arg]);
    assert!(output.status.success());

    let output = gamma_table(&["--gamma", "2.2", "--entries", "256", "--check", path_arg]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("first difference at index"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn verbose_reports_on_stderr() {
    let output = gamma_table(&["--gamma", "-0.5", "--entries", "256", "--verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("256 entries of u8"));
    assert!(stderr.contains("outside the u8 range"));
    assert!(stdout(&output).starts_with("const gamma : [u8; 256] = ["));
}
