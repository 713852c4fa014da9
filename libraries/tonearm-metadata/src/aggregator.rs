//! Typed aggregation of translated fields
//!
//! Every field the translator writes goes through [`add_field`], which files
//! the value into the record bucket matching its type.

use tonearm_core::{FieldValue, Scalar, TranslatedRecord};

/// Write `value` for `name` into the bucket(s) matching its type
///
/// Lists are partitioned by element type and each partition is appended to
/// the matching `*_list` bucket, so a mixed list lands in several buckets.
/// Single values overwrite whatever the scalar bucket held for `name`.
pub fn add_field(record: &mut TranslatedRecord, name: &str, value: FieldValue) {
    match value {
        FieldValue::Single(scalar) => add_single(record, name, scalar),
        FieldValue::List(items) => {
            for item in items {
                append_list_item(record, name, item);
            }
        }
    }
}

fn add_single(record: &mut TranslatedRecord, name: &str, scalar: Scalar) {
    let name = name.to_string();
    match scalar {
        Scalar::Str(s) => {
            record.strings.insert(name, s);
        }
        Scalar::Int(n) => {
            record.ints.insert(name, n);
        }
        Scalar::Float(f) => {
            record.floats.insert(name, f);
        }
        Scalar::Bytes(b) => {
            record.bytes.insert(name, b);
        }
    }
}

fn append_list_item(record: &mut TranslatedRecord, name: &str, item: Scalar) {
    match item {
        Scalar::Str(s) => record
            .string_lists
            .entry(name.to_string())
            .or_default()
            .push(s),
        Scalar::Int(n) => record.int_lists.entry(name.to_string()).or_default().push(n),
        Scalar::Float(f) => record
            .float_lists
            .entry(name.to_string())
            .or_default()
            .push(f),
        Scalar::Bytes(b) => record
            .bytes_lists
            .entry(name.to_string())
            .or_default()
            .push(b),
    }
}
