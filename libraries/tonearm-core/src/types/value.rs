//! Native tag values as exposed by a tag container

use super::record::Scalar;

/// An embedded picture object wrapping raw image bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPicture {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// Declared MIME type, if the container recorded one
    pub mime_type: Option<String>,
    /// ID3/FLAC picture type code (3 = front cover)
    pub picture_type: u8,
    /// Free-form description
    pub description: Option<String>,
}

impl EmbeddedPicture {
    /// Front cover picture with no declared MIME type
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            mime_type: None,
            picture_type: 3,
            description: None,
        }
    }

    /// Set the declared MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// One raw value of a native tag
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text frame / comment value
    Text(String),
    /// Integer atom value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// MP4 `trkn`/`disk` style (number, total) pair; may be short
    Pair(Vec<u32>),
    /// Opaque binary value
    Bytes(Vec<u8>),
    /// Picture object (ID3 APIC and friends)
    Picture(EmbeddedPicture),
}

impl RawValue {
    /// Shorthand for a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Textual representation used when a value is stringified
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Pair(parts) => parts
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("/"),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Picture(picture) => format!(
                "{} ({} bytes)",
                picture.mime_type.as_deref().unwrap_or("picture"),
                picture.data.len()
            ),
        }
    }

    /// Convert without stringifying, keeping the value's own type
    pub fn to_scalar(&self) -> Scalar {
        match self {
            Self::Text(s) => Scalar::Str(s.clone()),
            Self::Integer(n) => Scalar::Int(*n),
            Self::Float(f) => Scalar::Float(*f),
            Self::Bytes(bytes) => Scalar::Bytes(bytes.clone()),
            Self::Picture(picture) => Scalar::Bytes(picture.data.clone()),
            Self::Pair(_) => Scalar::Str(self.to_text()),
        }
    }

    /// Picture payload if this value wraps one
    pub fn as_picture(&self) -> Option<&EmbeddedPicture> {
        match self {
            Self::Picture(picture) => Some(picture),
            _ => None,
        }
    }
}

/// Ordered native key to values map
///
/// Pushing to an existing key appends to its values, so repeated native
/// entries (two `ARTIST` comments, say) end up as one multi-valued tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeTags {
    entries: Vec<(String, Vec<RawValue>)>,
}

impl NativeTags {
    /// Empty tag block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value under `key`
    pub fn push(&mut self, key: impl Into<String>, value: RawValue) {
        self.extend(key, std::iter::once(value));
    }

    /// Append several values under `key`
    pub fn extend(&mut self, key: impl Into<String>, values: impl IntoIterator<Item = RawValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.extend(values),
            None => self.entries.push((key, values.into_iter().collect())),
        }
    }

    /// Builder form of [`NativeTags::push`]
    pub fn with(mut self, key: impl Into<String>, value: RawValue) -> Self {
        self.push(key, value);
        self
    }

    /// Values stored under exactly `key`
    pub fn get(&self, key: &str) -> Option<&[RawValue]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawValue])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the block carries no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_to_existing_key() {
        let mut tags = NativeTags::new();
        tags.push("ARTIST", RawValue::text("A"));
        tags.push("TITLE", RawValue::text("T"));
        tags.push("ARTIST", RawValue::text("B"));

        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags.get("ARTIST"),
            Some(&[RawValue::text("A"), RawValue::text("B")][..])
        );
        assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["ARTIST", "TITLE"]);
    }

    #[test]
    fn to_text_stringifies_each_kind() {
        assert_eq!(RawValue::Integer(7).to_text(), "7");
        assert_eq!(RawValue::Pair(vec![3, 12]).to_text(), "3/12");
        assert_eq!(RawValue::Bytes(b"abc".to_vec()).to_text(), "abc");
        let pic = EmbeddedPicture::new(vec![0; 4]).with_mime_type("image/png");
        assert_eq!(RawValue::Picture(pic).to_text(), "image/png (4 bytes)");
    }

    #[test]
    fn to_scalar_keeps_types() {
        assert_eq!(RawValue::Integer(120).to_scalar(), Scalar::Int(120));
        assert_eq!(RawValue::text("x").to_scalar(), Scalar::Str("x".into()));
        assert_eq!(RawValue::Float(0.5).to_scalar(), Scalar::Float(0.5));
        assert_eq!(
            RawValue::Picture(EmbeddedPicture::new(vec![9])).to_scalar(),
            Scalar::Bytes(vec![9])
        );
    }
}
