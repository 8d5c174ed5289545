use std::fs;

use clap::Parser;
use tailfold::cli::{run, Cli};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("tailfold").chain(args.iter().copied()))?;
    run(&cli)
}

fn write_config(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_merge_with_project_config() {
    let out = run_args(&["merge", "px-2 py-1", "p-3", "container", "container"]).unwrap();
    assert_eq!(out, "p-3 container");
}

#[test]
fn test_explain_json() {
    let out = run_args(&["explain", "--json", "hover:-mx-2"]).unwrap();
    let info: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(info["group"], "mx");
    assert_eq!(info["plugin"], "margin");
    assert_eq!(info["negative"], true);
    assert_eq!(info["variants"][0], "hover");
    assert_eq!(info["conflicts"], serde_json::json!(["mr", "ml"]));
}

#[test]
fn test_explain_text() {
    let out = run_args(&["explain", "text-lg/7"]).unwrap();
    assert!(out.contains("font-size"));
    assert!(out.contains("leading"));
    assert!(out.contains("postfix"));
}

#[test]
fn test_resolve_formats() {
    let json = run_args(&["resolve"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["separator"], ":");

    let yaml = run_args(&["resolve", "--format", "yaml"]).unwrap();
    assert!(yaml.contains("separator"));
}

#[test]
fn test_custom_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "styles.yaml",
        "prefix: tw-\ntheme:\n  extend:\n    colors:\n      brand: '#ff5500'\n",
    );

    let out = run_args(&["--config", &path, "merge", "tw-text-red-500 tw-text-brand p-2"]).unwrap();
    assert_eq!(out, "tw-text-brand p-2");

    let out = run_args(&["check", "--config", &path]).unwrap();
    assert!(out.contains("ok"));
}

#[test]
fn test_check_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "broken.json", r#"{"separator": " "}"#);
    let err = run_args(&["check", "--config", &path]).unwrap_err();
    assert!(format!("{err:#}").contains("separator"));
}

#[test]
fn test_unsupported_config_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "styles.toml", "prefix = 'tw-'");
    let err = run_args(&["check", "--config", &path]).unwrap_err();
    assert!(format!("{err:#}").contains("styles.toml"));
}

#[test]
fn test_no_defaults_drops_default_scales() {
    let out = run_args(&["--no-defaults", "merge", "text-red-500 text-blue-500"]).unwrap();
    assert_eq!(out, "text-red-500 text-blue-500");
}
