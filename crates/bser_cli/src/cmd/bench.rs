use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use bser::Value;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::json;

/// Timing report for one benchmark run.
#[derive(Debug, Serialize)]
pub struct BenchReport {
	/// Number of timed iterations per codec.
	pub times: u32,
	/// Average wall-clock milliseconds per JSON parse.
	pub json_ms: f64,
	/// Average wall-clock milliseconds per BSER decode.
	pub bser_ms: f64,
	/// JSON fixture size in bytes.
	pub json_bytes: usize,
	/// BSER fixture size in bytes.
	pub bser_bytes: usize,
}

/// Time repeated decodes of both fixtures, then assert value equality.
pub fn run(json_path: PathBuf, bser_path: PathBuf, times: u32, json_output: bool) -> Result<()> {
	let json_text = fs::read_to_string(&json_path)?;
	let bser_bytes = fs::read(&bser_path)?;

	// decode once up front so the timing loops run over known-good input
	let parsed: serde_json::Value = serde_json::from_str(&json_text)?;
	let decoded = bser::decode(&bser_bytes)?;

	let expected = json::to_value(&parsed);
	if expected != decoded {
		return Err(CliError::ValueMismatch {
			detail: describe_mismatch(&expected, &decoded),
		});
	}

	let report = BenchReport {
		times,
		json_ms: measure(times, || {
			let _ = serde_json::from_str::<serde_json::Value>(&json_text);
		}),
		bser_ms: measure(times, || {
			let _ = bser::decode(&bser_bytes);
		}),
		json_bytes: json_text.len(),
		bser_bytes: bser_bytes.len(),
	};

	if json_output {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("fixtures: {} / {}", json_path.display(), bser_path.display());
		println!("json: {:.3} ms avg over {} runs ({} bytes)", report.json_ms, report.times, report.json_bytes);
		println!("bser: {:.3} ms avg over {} runs ({} bytes)", report.bser_ms, report.times, report.bser_bytes);
		println!("decoded values match");
	}
	Ok(())
}

fn measure(times: u32, mut callback: impl FnMut()) -> f64 {
	let times = times.max(1);
	let start = Instant::now();
	for _ in 0..times {
		callback();
	}
	start.elapsed().as_secs_f64() * 1000.0 / f64::from(times)
}

/// Report the first diverging path so harness failures stay readable.
fn describe_mismatch(expected: &Value, actual: &Value) -> String {
	fn walk(expected: &Value, actual: &Value, path: &mut Vec<String>) -> Option<String> {
		match (expected, actual) {
			(Value::Array(a), Value::Array(b)) if a.len() == b.len() => {
				for (index, (x, y)) in a.iter().zip(b).enumerate() {
					path.push(format!("[{index}]"));
					if let Some(found) = walk(x, y, path) {
						return Some(found);
					}
					path.pop();
				}
				None
			}
			(Value::Object(a), Value::Object(b)) => {
				for (key, x) in a.iter() {
					let label = String::from_utf8_lossy(key).into_owned();
					let Some(y) = b.get(key) else {
						return Some(format!("{}: missing key {label}", path.concat()));
					};
					path.push(format!(".{label}"));
					if let Some(found) = walk(x, y, path) {
						return Some(found);
					}
					path.pop();
				}
				if a.len() == b.len() {
					None
				} else {
					Some(format!("{}: extra keys present", path.concat()))
				}
			}
			_ if expected == actual => None,
			_ => Some(format!("{}: expected {expected}, got {actual}", path.concat())),
		}
	}

	let mut path = vec!["$".to_owned()];
	walk(expected, actual, &mut path).unwrap_or_else(|| "values differ".to_owned())
}

#[cfg(test)]
mod tests {
	use bser::Value;

	use super::describe_mismatch;

	#[test]
	fn mismatch_reports_the_diverging_path() {
		let expected = Value::Array(vec![Value::Int(1), Value::Int(2)]);
		let actual = Value::Array(vec![Value::Int(1), Value::Int(3)]);
		assert_eq!(describe_mismatch(&expected, &actual), "$[1]: expected 2, got 3");
	}

	#[test]
	fn mismatch_reports_missing_object_keys() {
		let expected = Value::Object([(b"k".to_vec(), Value::Int(1))].into_iter().collect());
		let actual = Value::Object(bser::Object::new());
		assert_eq!(describe_mismatch(&expected, &actual), "$: missing key k");
	}
}
