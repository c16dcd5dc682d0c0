use std::fs;
use std::path::PathBuf;

use bser::{EncodeOptions, encode_with_options};

use crate::error::Result;
use crate::json;

/// Encode a JSON document into a BSER file.
pub fn run(json_path: PathBuf, out_path: PathBuf, template: bool) -> Result<()> {
	let text = fs::read_to_string(&json_path)?;
	let parsed: serde_json::Value = serde_json::from_str(&text)?;
	let value = json::to_value(&parsed);

	let options = EncodeOptions {
		template_arrays: template,
	};
	let encoded = encode_with_options(&value, &options);
	fs::write(&out_path, &encoded)?;

	println!("wrote {} bytes to {}", encoded.len(), out_path.display());
	Ok(())
}
