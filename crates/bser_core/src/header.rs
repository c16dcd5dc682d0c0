use crate::bytes::Cursor;
use crate::error::{BserError, Result};
use crate::varint;

/// Fixed two-byte marker opening every BSER document.
pub const MAGIC: [u8; 2] = [0x00, 0x01];

/// Parsed BSER document framing fields.
///
/// The framing is the magic followed by a variable-width integer giving
/// the byte length of the body. Bytes past `body_start + body_len` do not
/// belong to the document and are ignored by the decoder, which lets a
/// document sit at the front of a larger transport buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
	/// Byte offset where the body begins.
	pub body_start: usize,
	/// Declared body length in bytes.
	pub body_len: usize,
}

impl DocumentHeader {
	/// Parse the framing from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);

		let magic = cursor.read_exact(MAGIC.len())?;
		if magic != MAGIC {
			return Err(BserError::BadMagic {
				magic: [magic[0], magic[1]],
			});
		}

		let at = cursor.pos();
		let declared = varint::read_int(&mut cursor)?;
		let body_len = usize::try_from(declared).map_err(|_| BserError::InvalidLength { len: declared, at })?;

		Ok(Self {
			body_start: cursor.pos(),
			body_len,
		})
	}

	/// Total document length in bytes, framing included.
	pub fn document_len(self) -> usize {
		self.body_start + self.body_len
	}
}
