//! Shared test helpers for workspace crates.
//!
//! The byte builders here state reference encodings directly, so tests
//! can compare codec output against bytes produced independently of the
//! code under test.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a JSON fixture.
pub fn read_json_fixture(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("parse {}: {err}", path.display()))
}

/// Frame a body as a full document: magic, minimal-width length, body.
pub fn document(body: &[u8]) -> Vec<u8> {
	let mut out = vec![0x00, 0x01];
	out.extend_from_slice(&int_bytes(body.len() as i64));
	out.extend_from_slice(body);
	out
}

/// Encode an integer with the narrowest adequate width.
pub fn int_bytes(value: i64) -> Vec<u8> {
	if let Ok(v) = i8::try_from(value) {
		let mut out = vec![0x03];
		out.extend_from_slice(&v.to_le_bytes());
		out
	} else if let Ok(v) = i16::try_from(value) {
		let mut out = vec![0x04];
		out.extend_from_slice(&v.to_le_bytes());
		out
	} else if let Ok(v) = i32::try_from(value) {
		let mut out = vec![0x05];
		out.extend_from_slice(&v.to_le_bytes());
		out
	} else {
		let mut out = vec![0x06];
		out.extend_from_slice(&value.to_le_bytes());
		out
	}
}

/// Encode a string value: tag, minimal-width length, raw payload.
pub fn string_bytes(payload: &[u8]) -> Vec<u8> {
	let mut out = vec![0x02];
	out.extend_from_slice(&int_bytes(payload.len() as i64));
	out.extend_from_slice(payload);
	out
}
