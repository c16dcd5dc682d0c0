use std::hint::black_box;

use bser::{EncodeOptions, Object, Value, decode, encode, encode_with_options};
use criterion::{Criterion, criterion_group, criterion_main};

/// Watcher-style payload: one array of homogeneous file-event objects.
fn event_array(rows: usize) -> Value {
	let items = (0..rows)
		.map(|index| {
			let mut object = Object::with_capacity(4);
			object.insert(b"name".to_vec(), Value::Bytes(format!("src/module_{index}.rs").into_bytes()));
			object.insert(b"size".to_vec(), Value::Int(index as i64 * 37));
			object.insert(b"mtime".to_vec(), Value::Int(1_700_000_000 + index as i64));
			object.insert(b"exists".to_vec(), Value::Bool(index % 7 != 0));
			Value::Object(object)
		})
		.collect();
	Value::Array(items)
}

fn criterion_benchmark(c: &mut Criterion) {
	let value = event_array(1000);
	let plain = encode(&value);
	let templated = encode_with_options(&value, &EncodeOptions { template_arrays: true });

	c.bench_function("decode plain 1000 events", |b| b.iter(|| decode(black_box(&plain)).expect("decodes")));
	c.bench_function("decode template 1000 events", |b| b.iter(|| decode(black_box(&templated)).expect("decodes")));
	c.bench_function("encode plain 1000 events", |b| b.iter(|| encode(black_box(&value))));
	c.bench_function("encode template 1000 events", |b| {
		b.iter(|| encode_with_options(black_box(&value), &EncodeOptions { template_arrays: true }))
	});
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
