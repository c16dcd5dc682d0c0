/// Decode-timing benchmark command.
pub mod bench;
/// BSER file decode command.
pub mod decode;
/// JSON to BSER encode command.
pub mod encode;
/// Document framing info command.
pub mod info;
