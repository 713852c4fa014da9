//! Image signature sniffing
//!
//! Only the leading magic bytes are inspected; nothing is decoded.

use infer::MatcherType;

/// Detected image type of `bytes`, if the signature is a known image format
pub fn image_type(bytes: &[u8]) -> Option<infer::Type> {
    infer::get(bytes).filter(|kind| kind.matcher_type() == MatcherType::Image)
}

/// Check whether `bytes` starts with a known image signature
pub fn is_image(bytes: &[u8]) -> bool {
    image_type(bytes).is_some()
}
