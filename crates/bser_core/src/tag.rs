//! One-byte wire tags.

pub(crate) const ARRAY: u8 = 0x00;
pub(crate) const OBJECT: u8 = 0x01;
pub(crate) const STRING: u8 = 0x02;
pub(crate) const INT8: u8 = 0x03;
pub(crate) const INT16: u8 = 0x04;
pub(crate) const INT32: u8 = 0x05;
pub(crate) const INT64: u8 = 0x06;
pub(crate) const REAL: u8 = 0x07;
pub(crate) const TRUE: u8 = 0x08;
pub(crate) const FALSE: u8 = 0x09;
pub(crate) const NULL: u8 = 0x0a;
pub(crate) const TEMPLATE: u8 = 0x0b;
pub(crate) const SKIP: u8 = 0x0c;
