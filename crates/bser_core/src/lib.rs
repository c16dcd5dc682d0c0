//! Codec for BSER, a compact binary serialization format for structured
//! JSON-like data, as used by file-watcher IPC streams.

mod bytes;
mod decode;
mod encode;
mod error;
mod header;
mod tag;
mod value;
mod varint;

/// Decoder entry points and options.
pub use decode::{DecodeOptions, decode, decode_with_options};
/// Encoder entry points and options.
pub use encode::{EncodeOptions, encode, encode_with_options};
/// Error and result aliases.
pub use error::{BserError, Result};
/// Document framing representation.
pub use header::{DocumentHeader, MAGIC};
/// In-memory value types.
pub use value::{Object, Value};
