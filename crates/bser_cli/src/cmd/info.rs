use std::fs;
use std::path::PathBuf;

use bser::DocumentHeader;

use crate::error::Result;

/// Report document framing without a full decode.
pub fn run(path: PathBuf) -> Result<()> {
	let bytes = fs::read(&path)?;
	let header = DocumentHeader::parse(&bytes)?;

	println!("path: {}", path.display());
	println!("buffer: {} bytes", bytes.len());
	println!("body: {} bytes starting at offset {}", header.body_len, header.body_start);
	if bytes.len() < header.document_len() {
		println!("missing: {} bytes", header.document_len() - bytes.len());
	} else {
		println!("trailing: {} bytes", bytes.len() - header.document_len());
	}
	Ok(())
}
