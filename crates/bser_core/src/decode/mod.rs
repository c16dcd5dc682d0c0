use crate::bytes::Cursor;
use crate::error::{BserError, Result};
use crate::header::DocumentHeader;
use crate::tag;
use crate::value::{Object, Value};
use crate::varint;

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive container nesting depth.
	pub max_depth: u32,
	/// Require string payloads (keys included) to be valid UTF-8.
	pub validate_utf8: bool,
	/// Error when the root value leaves undecoded bytes inside the
	/// declared body instead of ignoring them.
	pub strict_body: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			validate_utf8: false,
			strict_body: false,
		}
	}
}

/// Decode one document with default options.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	decode_with_options(bytes, &DecodeOptions::default())
}

/// Decode one document from the front of `bytes`.
///
/// The declared body length bounds every read; bytes past it are ignored,
/// so a document may sit at the front of a larger transport buffer. A
/// buffer shorter than the declared length fails with
/// [`BserError::Truncated`] before any value is produced.
pub fn decode_with_options(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let header = DocumentHeader::parse(bytes)?;
	let end = header.document_len();
	if end > bytes.len() {
		return Err(BserError::Truncated {
			at: header.body_start,
			need: header.body_len,
			rem: bytes.len() - header.body_start,
		});
	}

	let mut cursor = Cursor::new(&bytes[..end]);
	let _ = cursor.read_exact(header.body_start)?;

	let value = decode_value(&mut cursor, opt, 0)?;
	if opt.strict_body && cursor.remaining() > 0 {
		return Err(BserError::TrailingData {
			leftover: cursor.remaining(),
		});
	}
	Ok(value)
}

fn decode_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(BserError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.pos();
	match cursor.peek()? {
		tag::INT8 | tag::INT16 | tag::INT32 | tag::INT64 => varint::read_int(cursor).map(Value::Int),
		tag::STRING => decode_bytestring(cursor, opt).map(Value::Bytes),
		tag::REAL => {
			let _ = cursor.read_u8()?;
			cursor.read_f64_le().map(Value::Double)
		}
		tag::TRUE => {
			let _ = cursor.read_u8()?;
			Ok(Value::Bool(true))
		}
		tag::FALSE => {
			let _ = cursor.read_u8()?;
			Ok(Value::Bool(false))
		}
		tag::NULL => {
			let _ = cursor.read_u8()?;
			Ok(Value::Null)
		}
		tag::ARRAY => {
			let _ = cursor.read_u8()?;
			decode_array_items(cursor, opt, depth).map(Value::Array)
		}
		tag::OBJECT => {
			let _ = cursor.read_u8()?;
			decode_object(cursor, opt, depth)
		}
		tag::TEMPLATE => {
			let _ = cursor.read_u8()?;
			decode_template(cursor, opt, depth)
		}
		// The skip marker is only meaningful inside a template row.
		other => Err(BserError::UnknownTag { tag: other, at }),
	}
}

fn decode_array_items(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Vec<Value>> {
	let count = decode_count(cursor)?;
	// Each element occupies at least one byte, so the remaining bound
	// caps any preallocation a hostile count could request.
	let mut items = Vec::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		items.push(decode_value(cursor, opt, depth + 1)?);
	}
	Ok(items)
}

fn decode_object(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let count = decode_count(cursor)?;
	let mut object = Object::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		let key = decode_bytestring(cursor, opt)?;
		let value = decode_value(cursor, opt, depth + 1)?;
		object.insert(key, value);
	}
	Ok(Value::Object(object))
}

fn decode_template(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	let keys_tag = cursor.read_u8()?;
	if keys_tag != tag::ARRAY {
		return Err(BserError::UnexpectedTag {
			expected: "template key array",
			got: keys_tag,
			at,
		});
	}

	let key_count = decode_count(cursor)?;
	let mut keys = Vec::with_capacity(key_count.min(cursor.remaining()));
	for _ in 0..key_count {
		keys.push(decode_bytestring(cursor, opt)?);
	}

	let row_count = decode_count(cursor)?;
	let mut rows = Vec::with_capacity(row_count.min(cursor.remaining()));
	for _ in 0..row_count {
		let mut object = Object::with_capacity(keys.len());
		for key in &keys {
			if cursor.peek()? == tag::SKIP {
				let _ = cursor.read_u8()?;
				continue;
			}
			let value = decode_value(cursor, opt, depth + 1)?;
			object.insert(key.clone(), value);
		}
		rows.push(Value::Object(object));
	}
	Ok(Value::Array(rows))
}

fn decode_bytestring(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<u8>> {
	let at = cursor.pos();
	let tag = cursor.read_u8()?;
	if tag != tag::STRING {
		return Err(BserError::UnexpectedTag {
			expected: "string",
			got: tag,
			at,
		});
	}

	let len = decode_count(cursor)?;
	let raw = cursor.read_exact(len)?;
	if opt.validate_utf8 && std::str::from_utf8(raw).is_err() {
		return Err(BserError::InvalidUtf8 { at });
	}
	Ok(raw.to_vec())
}

fn decode_count(cursor: &mut Cursor<'_>) -> Result<usize> {
	let at = cursor.pos();
	let len = varint::read_int(cursor)?;
	usize::try_from(len).map_err(|_| BserError::InvalidLength { len, at })
}
