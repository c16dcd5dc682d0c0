use std::fs;
use std::path::PathBuf;

use bser::{DecodeOptions, Value, decode_with_options};

use crate::error::Result;
use crate::json;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of pairs printed for a single object.
	pub max_object_pairs: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_object_pairs: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Decode a BSER file and print its value.
pub fn run(path: PathBuf, strict: bool, validate_utf8: bool, json_output: bool) -> Result<()> {
	let bytes = fs::read(&path)?;
	let options = DecodeOptions {
		validate_utf8,
		strict_body: strict,
		..DecodeOptions::default()
	};
	let value = decode_with_options(&bytes, &options)?;

	if json_output {
		println!("{}", serde_json::to_string_pretty(&json::from_value(&value))?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("bytes: {}", bytes.len());
	println!("decoded:");
	print_value(&value, 0, 0, PrintOptions::default());
	Ok(())
}

fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => println!("{pad}null"),
		Value::Bool(v) => println!("{pad}{v}"),
		Value::Int(v) => println!("{pad}{v}"),
		Value::Double(v) => println!("{pad}{v}"),
		Value::Bytes(v) => println!("{pad}\"{}\"", truncate(&String::from_utf8_lossy(v), options.max_string_len)),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_array_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				println!("{pad}  ... {} more", items.len() - options.max_array_items);
			}
			println!("{pad}]");
		}
		Value::Object(object) => {
			if depth >= options.max_print_depth {
				println!("{pad}{{ ... {} pairs }}", object.len());
				return;
			}
			println!("{pad}{{");
			for (key, value) in object.iter().take(options.max_object_pairs) {
				print!("{pad}  {} = ", String::from_utf8_lossy(key));
				if matches!(value, Value::Object(_) | Value::Array(_)) {
					println!();
					print_value(value, indent + 4, depth + 1, options);
				} else {
					print_value(value, 0, depth + 1, options);
				}
			}
			if object.len() > options.max_object_pairs {
				println!("{pad}  ... {} more pairs", object.len() - options.max_object_pairs);
			}
			println!("{pad}}}");
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
