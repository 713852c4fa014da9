use crate::sniff;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Cover art extracted from an audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type detected from the image signature
    pub mime_type: String,
}

impl CoverArt {
    /// Wrap validated image bytes, detecting the MIME type
    ///
    /// Falls back to "image/jpeg" for payloads whose signature is not
    /// recognized (FLAC pictures are accepted without sniffing).
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let mime_type = sniff::image_type(&data)
            .map(|kind| kind.mime_type().to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());
        Self { data, mime_type }
    }

    /// File extension matching the detected MIME type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            "image/webp" => "webp",
            "image/tiff" => "tif",
            _ => "jpg",
        }
    }

    /// Get the data as a base64-encoded string
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}
