//! Multi-part payload accepted by the save mutation
//!
//! A payload is an ordered list of `(key, value)` entries. Keys may repeat
//! (every uploaded image is its own `images` entry), so lookups come in a
//! first-match and an all-matches flavor, like browser form data.

use std::path::Path;

// ============================================================================
// Attached File
// ============================================================================

/// MIME types the image picker accepts
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// A local file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    /// File name as picked, without directories
    pub name: String,
    /// MIME type
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl AttachedFile {
    /// Create a file with an explicit MIME type
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Create a file, inferring the MIME type from the file name
    pub fn from_name(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for_name(&name).unwrap_or("application/octet-stream");
        Self::new(name, mime, bytes)
    }

    /// File size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the file has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Extension from the file name, lowercased
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
    }

    /// Check if this file is an accepted image type
    pub fn is_accepted_image(&self) -> bool {
        ACCEPTED_IMAGE_TYPES.contains(&self.mime.as_str())
    }
}

/// Guess an image MIME type from a file name
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

// ============================================================================
// Payload
// ============================================================================

/// One payload value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Text(String),
    File(AttachedFile),
}

impl PayloadValue {
    /// Text content, if this is a text entry
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(text) => Some(text),
            PayloadValue::File(_) => None,
        }
    }

    /// File content, if this is a file entry
    pub fn as_file(&self) -> Option<&AttachedFile> {
        match self {
            PayloadValue::File(file) => Some(file),
            PayloadValue::Text(_) => None,
        }
    }
}

/// Ordered multi-part body for the save mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPayload {
    entries: Vec<(String, PayloadValue)>,
}

impl ProductPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text entry
    pub fn append_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((key.into(), PayloadValue::Text(value.into())));
    }

    /// Append a file entry
    pub fn append_file(&mut self, key: impl Into<String>, file: AttachedFile) {
        self.entries.push((key.into(), PayloadValue::File(file)));
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// First text value stored under `key`
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PayloadValue::as_text)
    }

    /// All values stored under `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&PayloadValue> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// All files stored under `key`, in insertion order
    pub fn files(&self, key: &str) -> Vec<&AttachedFile> {
        self.get_all(key)
            .into_iter()
            .filter_map(PayloadValue::as_file)
            .collect()
    }

    /// Check if any entry uses `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order, repeats included
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the payload has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_keep_order() {
        let mut payload = ProductPayload::new();
        payload.append_text("title", "Shirt");
        payload.append_file("images", AttachedFile::from_name("a.png", vec![1]));
        payload.append_file("images", AttachedFile::from_name("b.jpg", vec![2]));

        let names: Vec<&str> = payload
            .files("images")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
        assert_eq!(payload.len(), 3);
        assert_eq!(payload.text("title"), Some("Shirt"));
        assert_eq!(payload.text("images"), None);
    }

    #[test]
    fn test_missing_key() {
        let payload = ProductPayload::new();
        assert!(payload.is_empty());
        assert!(!payload.contains_key("id"));
        assert!(payload.get_all("images").is_empty());
    }

    #[test]
    fn test_mime_inference() {
        assert_eq!(mime_for_name("photo.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_name("photo.png"), Some("image/png"));
        assert_eq!(mime_for_name("notes.txt"), None);

        let file = AttachedFile::from_name("scan.tiff", vec![]);
        assert!(!file.is_accepted_image());
        assert!(file.is_empty());
        assert_eq!(file.extension().as_deref(), Some("tiff"));
    }
}
