#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::Command;

use bser_testkit::{fixture_path, read_json_fixture};

#[test]
fn decode_json_output_matches_the_json_twin() {
	let output = run(&["decode", &fixture_path("sample.bser").display().to_string(), "--json"]);
	let decoded: serde_json::Value = serde_json::from_slice(&output).expect("stdout should be valid json");
	assert_eq!(decoded, read_json_fixture("sample.json"));

	let rows = decoded.as_array().expect("fixture is an array");
	assert!(rows[2].get("size").is_none(), "skipped key stays absent");
}

#[test]
fn encode_then_decode_roundtrips_through_files() {
	let out_path = temp_file("roundtrip");
	let output = run(&[
		"encode",
		&fixture_path("sample.json").display().to_string(),
		&out_path.display().to_string(),
		"--template",
	]);
	assert!(String::from_utf8_lossy(&output).contains("wrote"), "expected write summary");

	let decoded_output = run(&["decode", &out_path.display().to_string(), "--json"]);
	let decoded: serde_json::Value = serde_json::from_slice(&decoded_output).expect("stdout should be valid json");
	assert_eq!(decoded, read_json_fixture("sample.json"));

	let _ = std::fs::remove_file(out_path);
}

#[test]
fn info_reports_framing_without_decoding() {
	let output = run(&["info", &fixture_path("sample.bser").display().to_string()]);
	let stdout = String::from_utf8_lossy(&output);
	assert!(stdout.contains("buffer: 84 bytes"), "stdout: {stdout}");
	assert!(stdout.contains("body: 80 bytes starting at offset 4"), "stdout: {stdout}");
	assert!(stdout.contains("trailing: 0 bytes"), "stdout: {stdout}");
}

#[test]
fn strict_decode_accepts_the_fixture() {
	let output = run(&[
		"decode",
		&fixture_path("sample.bser").display().to_string(),
		"--strict",
		"--validate-utf8",
		"--json",
	]);
	assert!(serde_json::from_slice::<serde_json::Value>(&output).is_ok(), "strict decode should succeed");
}

fn run(args: &[&str]) -> Vec<u8> {
	let output = Command::new(env!("CARGO_BIN_EXE_bser")).args(args).output().expect("command executes");
	assert!(
		output.status.success(),
		"command {args:?} failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	output.stdout
}

fn temp_file(label: &str) -> PathBuf {
	std::env::temp_dir().join(format!("bser_cli_{label}_{}.bser", std::process::id()))
}
