//! Candidate files offered to the widget by a picker or a drop.

/// A file the widget may accept. Only the declared MIME type is inspected.
pub trait CandidateFile {
    /// Declared MIME type, e.g. `image/jpeg`. May be empty.
    fn mime_type(&self) -> String;

    /// File name, used for logging only.
    fn name(&self) -> String {
        String::new()
    }
}

/// Whether a declared MIME type is a JPEG (`image/jpeg` or `image/jpg`, any case).
pub fn is_jpeg_mime(mime: &str) -> bool {
    let mime = mime.to_ascii_lowercase();
    mime == "image/jpeg" || mime == "image/jpg"
}

/// Guess a MIME type from a file name's extension.
///
/// Browsers do the same for dropped files; native hosts use this to fill in
/// the type they would otherwise not know. Unknown extensions give `""`.
pub fn mime_from_filename(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "txt" => "text/plain",
        _ => "",
    }
}

/// In-memory file with a declared type, used by native hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl CandidateFile for MemoryFile {
    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
