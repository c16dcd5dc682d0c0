use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BserError>;

/// Errors produced while decoding BSER data.
///
/// Decoding is all-or-nothing: any failure inside a nested value
/// propagates unchanged to the top-level caller. Encoding is total and
/// produces no errors.
#[derive(Debug, Error)]
pub enum BserError {
	/// Leading document magic did not match.
	#[error("bad magic {magic:?} (expected [0x00, 0x01])")]
	BadMagic {
		/// First two bytes of the buffer.
		magic: [u8; 2],
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	Truncated {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte outside the recognized set.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// A recognized tag appeared where the grammar requires another.
	#[error("expected {expected} at offset {at}, got tag 0x{got:02x}")]
	UnexpectedTag {
		/// Grammar element that was required.
		expected: &'static str,
		/// Tag byte actually present.
		got: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Negative or unrepresentable length or count field.
	#[error("invalid length {len} at offset {at}")]
	InvalidLength {
		/// Parsed signed length.
		len: i64,
		/// Byte offset of the length field.
		at: usize,
	},
	/// String payload was not valid UTF-8 under strict validation.
	#[error("invalid utf-8 in string at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string value.
		at: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict mode detected undecoded bytes inside the declared body.
	#[error("trailing data inside declared body: leftover={leftover}")]
	TrailingData {
		/// Unconsumed bytes before the declared body end.
		leftover: usize,
	},
}
