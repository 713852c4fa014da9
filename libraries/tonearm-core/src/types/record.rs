//! Translated per-file record, grouped into typed buckets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A translated value with its runtime type made explicit
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl Scalar {
    /// Bucket a lone value of this type is written to
    pub fn bucket(&self) -> Bucket {
        match self {
            Self::Str(_) => Bucket::Str,
            Self::Int(_) => Bucket::Int,
            Self::Float(_) => Bucket::Float,
            Self::Bytes(_) => Bucket::Bytes,
        }
    }

    /// Bucket list elements of this type are appended to
    pub fn list_bucket(&self) -> Bucket {
        match self {
            Self::Str(_) => Bucket::StrList,
            Self::Int(_) => Bucket::IntList,
            Self::Float(_) => Bucket::FloatList,
            Self::Bytes(_) => Bucket::BytesList,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// A field value as handed to the aggregator
///
/// Lists keep the distinction between no value, one value and many values
/// that the source tags had.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(Scalar),
    List(Vec<Scalar>),
}

impl FieldValue {
    /// List of strings
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|s| Scalar::Str(s.into())).collect())
    }
}

/// Name of a type bucket inside a [`TranslatedRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Str,
    Int,
    Float,
    Bytes,
    StrList,
    IntList,
    FloatList,
    BytesList,
}

impl Bucket {
    /// All buckets in serialization order
    pub const ALL: [Bucket; 8] = [
        Bucket::Str,
        Bucket::Int,
        Bucket::Float,
        Bucket::Bytes,
        Bucket::StrList,
        Bucket::IntList,
        Bucket::FloatList,
        Bucket::BytesList,
    ];

    /// Serialized bucket name
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bytes => "bytes",
            Self::StrList => "str_list",
            Self::IntList => "int_list",
            Self::FloatList => "float_list",
            Self::BytesList => "bytes_list",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-file output of the tag translator
///
/// One typed map per [`Bucket`]. A field is placed by the type of its
/// value(s) at write time, so a heterogeneous list shows up in more than one
/// bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatedRecord {
    #[serde(rename = "str", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub strings: BTreeMap<String, String>,

    #[serde(rename = "int", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ints: BTreeMap<String, i64>,

    #[serde(rename = "float", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub floats: BTreeMap<String, f64>,

    #[serde(rename = "bytes", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bytes: BTreeMap<String, Vec<u8>>,

    #[serde(rename = "str_list", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub string_lists: BTreeMap<String, Vec<String>>,

    #[serde(rename = "int_list", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub int_lists: BTreeMap<String, Vec<i64>>,

    #[serde(rename = "float_list", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub float_lists: BTreeMap<String, Vec<f64>>,

    #[serde(rename = "bytes_list", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bytes_lists: BTreeMap<String, Vec<Vec<u8>>>,
}

impl TranslatedRecord {
    /// Empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `name` in the `str` bucket
    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// Value of `name` in the `str_list` bucket
    pub fn string_list(&self, name: &str) -> Option<&[String]> {
        self.string_lists.get(name).map(Vec::as_slice)
    }

    /// Value of `name` in the `int` bucket
    pub fn int(&self, name: &str) -> Option<i64> {
        self.ints.get(name).copied()
    }

    /// Value of `name` in the `int_list` bucket
    pub fn int_list(&self, name: &str) -> Option<&[i64]> {
        self.int_lists.get(name).map(Vec::as_slice)
    }

    /// Value of `name` in the `float` bucket
    pub fn float(&self, name: &str) -> Option<f64> {
        self.floats.get(name).copied()
    }

    /// Value of `name` in the `float_list` bucket
    pub fn float_list(&self, name: &str) -> Option<&[f64]> {
        self.float_lists.get(name).map(Vec::as_slice)
    }

    /// Value of `name` in the `bytes` bucket
    pub fn bytes(&self, name: &str) -> Option<&[u8]> {
        self.bytes.get(name).map(Vec::as_slice)
    }

    /// Value of `name` in the `bytes_list` bucket
    pub fn bytes_list(&self, name: &str) -> Option<&[Vec<u8>]> {
        self.bytes_lists.get(name).map(Vec::as_slice)
    }

    /// Check whether `bucket` holds `name`
    pub fn contains(&self, bucket: Bucket, name: &str) -> bool {
        match bucket {
            Bucket::Str => self.strings.contains_key(name),
            Bucket::Int => self.ints.contains_key(name),
            Bucket::Float => self.floats.contains_key(name),
            Bucket::Bytes => self.bytes.contains_key(name),
            Bucket::StrList => self.string_lists.contains_key(name),
            Bucket::IntList => self.int_lists.contains_key(name),
            Bucket::FloatList => self.float_lists.contains_key(name),
            Bucket::BytesList => self.bytes_lists.contains_key(name),
        }
    }

    /// Every bucket that holds `name`
    pub fn buckets_of(&self, name: &str) -> Vec<Bucket> {
        Bucket::ALL
            .into_iter()
            .filter(|bucket| self.contains(*bucket, name))
            .collect()
    }

    /// Number of field entries in `bucket`
    pub fn bucket_len(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Str => self.strings.len(),
            Bucket::Int => self.ints.len(),
            Bucket::Float => self.floats.len(),
            Bucket::Bytes => self.bytes.len(),
            Bucket::StrList => self.string_lists.len(),
            Bucket::IntList => self.int_lists.len(),
            Bucket::FloatList => self.float_lists.len(),
            Bucket::BytesList => self.bytes_lists.len(),
        }
    }

    /// True when no bucket holds anything
    pub fn is_empty(&self) -> bool {
        Bucket::ALL.into_iter().all(|bucket| self.bucket_len(bucket) == 0)
    }
}
