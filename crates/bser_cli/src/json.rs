//! Bridge between `serde_json::Value` and the codec value model.

use bser::{Object, Value};

/// Convert parsed JSON into the codec value model.
///
/// Numbers become [`Value::Int`] when they are exact integers in `i64`
/// range, [`Value::Double`] otherwise; strings keep their UTF-8 bytes.
pub fn to_value(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(v) => Value::Bool(*v),
		serde_json::Value::Number(v) => match v.as_i64() {
			Some(int) => Value::Int(int),
			None => Value::Double(v.as_f64().unwrap_or(f64::NAN)),
		},
		serde_json::Value::String(v) => Value::Bytes(v.clone().into_bytes()),
		serde_json::Value::Array(items) => Value::Array(items.iter().map(to_value).collect()),
		serde_json::Value::Object(map) => {
			let mut object = Object::with_capacity(map.len());
			for (key, value) in map {
				object.insert(key.clone().into_bytes(), to_value(value));
			}
			Value::Object(object)
		}
	}
}

/// Render a codec value as JSON for display and comparison.
///
/// Byte strings render lossily as UTF-8 text; a non-finite double maps
/// to `null`, the closest JSON can carry.
pub fn from_value(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::Int(v) => serde_json::Value::Number((*v).into()),
		Value::Double(v) => serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number),
		Value::Bytes(v) => serde_json::Value::String(String::from_utf8_lossy(v).into_owned()),
		Value::Array(items) => serde_json::Value::Array(items.iter().map(from_value).collect()),
		Value::Object(object) => {
			let mut map = serde_json::Map::new();
			for (key, value) in object.iter() {
				map.insert(String::from_utf8_lossy(key).into_owned(), from_value(value));
			}
			serde_json::Value::Object(map)
		}
	}
}
