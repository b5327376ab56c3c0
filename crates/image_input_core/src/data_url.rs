//! Base64 data URLs, the same shape `FileReader.readAsDataURL` produces.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Encode bytes as `data:<mime>;base64,<payload>`.
///
/// An empty MIME type becomes `application/octet-stream`, as in browsers.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Whether a source string is a data URL.
pub fn is_data_url(src: &str) -> bool {
    src.starts_with("data:")
}

/// Shorten a source for display. Data URLs keep their header and a few payload characters.
pub fn abbreviate(src: &str, max_len: usize) -> String {
    if src.chars().count() <= max_len {
        return src.to_string();
    }
    let kept: String = src.chars().take(max_len).collect();
    format!("{}… ({} bytes)", kept, src.len())
}
