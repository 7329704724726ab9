use serde_json::{Map, Value};

/// A structured record as the store returns it. The query core never
/// interprets business fields; it only reasons about keys and predicates.
pub type Record = Map<String, Value>;

pub fn field_text<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
	record.get(field).and_then(Value::as_str)
}

pub fn field_number(record: &Record, field: &str) -> Option<f64> {
	record.get(field).and_then(Value::as_f64)
}
