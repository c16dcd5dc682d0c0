use crate::header::MAGIC;
use crate::tag;
use crate::value::Value;
use crate::varint;

/// Behavior switches for encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
	/// Emit arrays of objects sharing one identical ordered key list in
	/// template form instead of repeating keys per element. Purely a
	/// size optimization; decoding either form yields equal values.
	pub template_arrays: bool,
}

/// Encode a value as a full document with default options.
pub fn encode(value: &Value) -> Vec<u8> {
	encode_with_options(value, &EncodeOptions::default())
}

/// Encode a value as a full document: magic, body length, body.
///
/// Total function: any well-formed tree encodes. The tree's single-owner
/// shape rules out cycles, so recursion is bounded by the input.
pub fn encode_with_options(value: &Value, opt: &EncodeOptions) -> Vec<u8> {
	// Body goes into a scratch buffer first; the framing needs its
	// exact length before the first body byte is emitted.
	let mut body = Vec::new();
	encode_value(&mut body, value, opt);

	let mut out = Vec::with_capacity(MAGIC.len() + 9 + body.len());
	out.extend_from_slice(&MAGIC);
	varint::write_int(&mut out, body.len() as i64);
	out.extend_from_slice(&body);
	out
}

fn encode_value(out: &mut Vec<u8>, value: &Value, opt: &EncodeOptions) {
	match value {
		Value::Null => out.push(tag::NULL),
		Value::Bool(true) => out.push(tag::TRUE),
		Value::Bool(false) => out.push(tag::FALSE),
		Value::Int(v) => varint::write_int(out, *v),
		Value::Double(v) => {
			out.push(tag::REAL);
			out.extend_from_slice(&v.to_le_bytes());
		}
		Value::Bytes(v) => encode_bytestring(out, v),
		Value::Array(items) => {
			if opt.template_arrays
				&& let Some(keys) = template_keys(items)
			{
				encode_template(out, &keys, items, opt);
				return;
			}

			out.push(tag::ARRAY);
			varint::write_int(out, items.len() as i64);
			for item in items {
				encode_value(out, item, opt);
			}
		}
		Value::Object(object) => {
			out.push(tag::OBJECT);
			varint::write_int(out, object.len() as i64);
			for (key, value) in object.iter() {
				encode_bytestring(out, key);
				encode_value(out, value, opt);
			}
		}
	}
}

fn encode_bytestring(out: &mut Vec<u8>, payload: &[u8]) {
	out.push(tag::STRING);
	varint::write_int(out, payload.len() as i64);
	out.extend_from_slice(payload);
}

/// Layout chooser: the shared key list, when every element is an object
/// carrying exactly the same keys in the same order.
fn template_keys(items: &[Value]) -> Option<Vec<&[u8]>> {
	let mut iter = items.iter();
	let first = match iter.next()? {
		Value::Object(object) => object,
		_ => return None,
	};
	let keys: Vec<&[u8]> = first.keys().collect();

	for item in iter {
		let Value::Object(object) = item else {
			return None;
		};
		if object.len() != keys.len() || !object.keys().eq(keys.iter().copied()) {
			return None;
		}
	}
	Some(keys)
}

fn encode_template(out: &mut Vec<u8>, keys: &[&[u8]], items: &[Value], opt: &EncodeOptions) {
	out.push(tag::TEMPLATE);
	out.push(tag::ARRAY);
	varint::write_int(out, keys.len() as i64);
	for key in keys {
		encode_bytestring(out, key);
	}

	varint::write_int(out, items.len() as i64);
	for item in items {
		let Value::Object(object) = item else {
			// template_keys only selects all-object arrays
			continue;
		};
		// insertion order matches the shared key list
		for (_, value) in object.iter() {
			encode_value(out, value, opt);
		}
	}
}
