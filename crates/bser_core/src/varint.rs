//! Variable-width integer encoding shared by the decoder and encoder.
//!
//! An integer on the wire is one of the four `Int*` tags followed by that
//! many payload bytes, signed, little-endian. The decoder accepts any
//! width and sign-extends to `i64`; the encoder always emits the
//! narrowest width that exactly represents the value.

use crate::bytes::Cursor;
use crate::error::{BserError, Result};
use crate::tag;

/// Read a tag-dispatched integer and widen to `i64`.
pub(crate) fn read_int(cursor: &mut Cursor<'_>) -> Result<i64> {
	let at = cursor.pos();
	let tag = cursor.read_u8()?;
	match tag {
		tag::INT8 => Ok(i64::from(cursor.read_i8()?)),
		tag::INT16 => Ok(i64::from(cursor.read_i16_le()?)),
		tag::INT32 => Ok(i64::from(cursor.read_i32_le()?)),
		tag::INT64 => cursor.read_i64_le(),
		other => Err(BserError::UnexpectedTag {
			expected: "integer",
			got: other,
			at,
		}),
	}
}

/// Append an integer using the narrowest adequate width.
pub(crate) fn write_int(out: &mut Vec<u8>, value: i64) {
	if let Ok(v) = i8::try_from(value) {
		out.push(tag::INT8);
		out.extend_from_slice(&v.to_le_bytes());
	} else if let Ok(v) = i16::try_from(value) {
		out.push(tag::INT16);
		out.extend_from_slice(&v.to_le_bytes());
	} else if let Ok(v) = i32::try_from(value) {
		out.push(tag::INT32);
		out.extend_from_slice(&v.to_le_bytes());
	} else {
		out.push(tag::INT64);
		out.extend_from_slice(&value.to_le_bytes());
	}
}

#[cfg(test)]
mod tests {
	use super::{read_int, write_int};
	use crate::bytes::Cursor;
	use crate::error::BserError;
	use crate::tag;

	fn roundtrip(value: i64) -> Vec<u8> {
		let mut out = Vec::new();
		write_int(&mut out, value);
		let mut cursor = Cursor::new(&out);
		assert_eq!(read_int(&mut cursor).expect("readable"), value);
		assert_eq!(cursor.remaining(), 0);
		out
	}

	#[test]
	fn picks_minimal_width() {
		assert_eq!(roundtrip(0).len(), 2);
		assert_eq!(roundtrip(127).len(), 2);
		assert_eq!(roundtrip(-128).len(), 2);
		assert_eq!(roundtrip(128).len(), 3);
		assert_eq!(roundtrip(-129).len(), 3);
		assert_eq!(roundtrip(32_767).len(), 3);
		assert_eq!(roundtrip(32_768).len(), 5);
		assert_eq!(roundtrip(-2_147_483_648).len(), 5);
		assert_eq!(roundtrip(2_147_483_648).len(), 9);
		assert_eq!(roundtrip(i64::MIN).len(), 9);
		assert_eq!(roundtrip(i64::MAX).len(), 9);
	}

	#[test]
	fn wide_encodings_of_small_values_decode_identically() {
		// 5 in all four widths
		let encodings: [&[u8]; 4] = [
			&[tag::INT8, 5],
			&[tag::INT16, 5, 0],
			&[tag::INT32, 5, 0, 0, 0],
			&[tag::INT64, 5, 0, 0, 0, 0, 0, 0, 0],
		];
		for bytes in encodings {
			let mut cursor = Cursor::new(bytes);
			assert_eq!(read_int(&mut cursor).expect("readable"), 5);
		}
	}

	#[test]
	fn sign_extends_narrow_negatives() {
		let mut cursor = Cursor::new(&[tag::INT8, 0xff]);
		assert_eq!(read_int(&mut cursor).expect("readable"), -1);

		let mut cursor = Cursor::new(&[tag::INT16, 0x00, 0x80]);
		assert_eq!(read_int(&mut cursor).expect("readable"), -32_768);
	}

	#[test]
	fn rejects_non_integer_tag() {
		let mut cursor = Cursor::new(&[tag::STRING, 0x00]);
		let err = read_int(&mut cursor).expect_err("string tag is not an integer");
		assert!(matches!(
			err,
			BserError::UnexpectedTag {
				expected: "integer",
				got: tag::STRING,
				at: 0
			}
		));
	}

	#[test]
	fn truncated_payload_reports_shortfall() {
		let mut cursor = Cursor::new(&[tag::INT32, 1, 2]);
		let err = read_int(&mut cursor).expect_err("two of four payload bytes");
		assert!(matches!(err, BserError::Truncated { at: 1, need: 4, rem: 2 }));
	}
}
