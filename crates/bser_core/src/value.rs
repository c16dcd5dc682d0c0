use std::fmt;

/// Decoded BSER value tree.
///
/// Every decode call produces a fully owned tree; siblings never share
/// storage. Integers of all wire widths collapse into [`Value::Int`], and
/// string payloads stay raw bytes (UTF-8 by convention, not enforced).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed 64-bit integer, any wire width.
	Int(i64),
	/// IEEE-754 double.
	Double(f64),
	/// Raw string payload.
	Bytes(Vec<u8>),
	/// Ordered sequence of values.
	Array(Vec<Value>),
	/// Ordered key/value mapping.
	Object(Object),
}

impl Value {
	/// Integer payload, if this is an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// UTF-8 view of a `Bytes` payload, if valid.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Bytes(v) => std::str::from_utf8(v).ok(),
			_ => None,
		}
	}

	/// Array elements, if this is an `Array`.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(v) => Some(v),
			_ => None,
		}
	}

	/// Object mapping, if this is an `Object`.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Self::Object(v) => Some(v),
			_ => None,
		}
	}
}

/// Ordered mapping with unique byte-string keys.
///
/// Pair order is preserved across decode and re-encode. Equality ignores
/// pair order: two objects are equal iff they hold the same key set with
/// equal values per key.
#[derive(Debug, Clone, Default)]
pub struct Object {
	pairs: Vec<(Vec<u8>, Value)>,
}

impl Object {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty object with room for `capacity` pairs.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			pairs: Vec::with_capacity(capacity),
		}
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// True when no pairs are present.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Insert a pair, replacing the value in place if the key exists.
	pub fn insert(&mut self, key: Vec<u8>, value: Value) {
		if let Some(pair) = self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
			pair.1 = value;
			return;
		}
		self.pairs.push((key, value));
	}

	/// Look up a value by key.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		self.pairs.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Iterate pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Value)> {
		self.pairs.iter().map(|(key, value)| (key.as_slice(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
		self.pairs.iter().map(|(key, _)| key.as_slice())
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		if self.pairs.len() != other.pairs.len() {
			return false;
		}
		// Keys are unique per object, so matching lengths plus per-key
		// lookup compares the full key sets.
		self.pairs.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl FromIterator<(Vec<u8>, Value)> for Object {
	fn from_iter<I: IntoIterator<Item = (Vec<u8>, Value)>>(iter: I) -> Self {
		let mut object = Self::new();
		for (key, value) in iter {
			object.insert(key, value);
		}
		object
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::Bytes(v) => write!(f, "\"{}\"", escape(v)),
			Self::Array(items) => {
				f.write_str("[")?;
				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Object(object) => {
				f.write_str("{")?;
				for (index, (key, value)) in object.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					write!(f, "\"{}\": {value}", escape(key))?;
				}
				f.write_str("}")
			}
		}
	}
}

fn escape(bytes: &[u8]) -> String {
	let text = String::from_utf8_lossy(bytes);
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::{Object, Value};

	fn pair_object(pairs: &[(&str, Value)]) -> Object {
		pairs.iter().map(|(key, value)| (key.as_bytes().to_vec(), value.clone())).collect()
	}

	#[test]
	fn object_equality_ignores_pair_order() {
		let forward = pair_object(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
		let reversed = pair_object(&[("b", Value::Int(2)), ("a", Value::Int(1))]);
		assert_eq!(Value::Object(forward), Value::Object(reversed));
	}

	#[test]
	fn object_equality_requires_identical_key_sets() {
		let left = pair_object(&[("a", Value::Int(1))]);
		let right = pair_object(&[("b", Value::Int(1))]);
		assert_ne!(left, right);

		let wider = pair_object(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
		assert_ne!(left, wider);
	}

	#[test]
	fn insert_replaces_existing_key_in_place() {
		let mut object = pair_object(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
		object.insert(b"a".to_vec(), Value::Int(9));

		assert_eq!(object.len(), 2);
		assert_eq!(object.get(b"a"), Some(&Value::Int(9)));
		let keys: Vec<&[u8]> = object.keys().collect();
		assert_eq!(keys, [b"a".as_slice(), b"b".as_slice()], "insertion order kept");
	}

	#[test]
	fn display_renders_json_like_text() {
		let value = Value::Array(vec![
			Value::Null,
			Value::Bool(true),
			Value::Int(-5),
			Value::Bytes(b"hi \"there\"".to_vec()),
			Value::Object(pair_object(&[("k", Value::Double(1.5))])),
		]);
		assert_eq!(value.to_string(), r#"[null, true, -5, "hi \"there\"", {"k": 1.5}]"#);
	}
}
