//! Multipart form-data parts.
//!
//! Parts are accumulated on a [`RequestBuilder`](crate::RequestBuilder) and
//! encoded when the request is sent. Form parameters of the same request are
//! written first, as text parts, followed by the parts in insertion order.

use bytes::{BufMut, Bytes, BytesMut};

use crate::Parameter;

/// A single part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Part {
    /// Create a new part with the given name and data.
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: data.into(),
        }
    }

    /// Create a text part (`text/plain; charset=utf-8`).
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Bytes::from(value.into())).with_content_type("text/plain; charset=utf-8")
    }

    /// Create a file part; the content type is guessed from the extension.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let filename = filename.into();
        let content_type = guess_content_type(&filename);
        Self {
            name: name.into(),
            filename: Some(filename),
            content_type: Some(content_type.to_string()),
            data: data.into(),
        }
    }

    /// Set the filename for this part.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the content type for this part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Get the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the filename, if set.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Get the content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the part data.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    fn write_to(&self, boundary: &str, buf: &mut BytesMut) {
        buf.put_slice(b"--");
        buf.put_slice(boundary.as_bytes());
        buf.put_slice(b"\r\n");

        buf.put_slice(b"Content-Disposition: form-data; name=\"");
        buf.put_slice(self.name.as_bytes());
        buf.put_slice(b"\"");
        if let Some(filename) = &self.filename {
            buf.put_slice(b"; filename=\"");
            buf.put_slice(filename.as_bytes());
            buf.put_slice(b"\"");
        }
        buf.put_slice(b"\r\n");

        if let Some(content_type) = &self.content_type {
            buf.put_slice(b"Content-Type: ");
            buf.put_slice(content_type.as_bytes());
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"\r\n");
        buf.put_slice(&self.data);
        buf.put_slice(b"\r\n");
    }
}

/// Guess the content type of an uploaded file from its extension.
fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "json" => "application/json",
        "txt" => "text/plain",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// Encode form parameters and parts as a `multipart/form-data` body.
///
/// Returns the `Content-Type` header value and the body.
#[must_use]
pub fn encode_multipart(boundary: &str, form: &[Parameter], parts: &[Part]) -> (String, Bytes) {
    let mut buf = BytesMut::new();

    for parameter in form {
        Part::new(parameter.name(), parameter.value().to_string()).write_to(boundary, &mut buf);
    }
    for part in parts {
        part.write_to(boundary, &mut buf);
    }

    buf.put_slice(b"--");
    buf.put_slice(boundary.as_bytes());
    buf.put_slice(b"--\r\n");

    (
        format!("multipart/form-data; boundary={boundary}"),
        buf.freeze(),
    )
}

/// Generate a boundary unlikely to appear in part data.
#[must_use]
pub fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----SpotifyWebApiBoundary{timestamp:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_text() {
        let part = Part::text("field", "value");
        assert_eq!(part.name(), "field");
        assert_eq!(part.data().as_ref(), b"value");
        assert_eq!(part.content_type(), Some("text/plain; charset=utf-8"));
        assert!(part.filename().is_none());
    }

    #[test]
    fn part_file_guesses_content_type() {
        let part = Part::file("image", "Cover.JPG", vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(part.filename(), Some("Cover.JPG"));
        assert_eq!(part.content_type(), Some("image/jpeg"));

        let part = Part::file("blob", "data.xyz", vec![0]);
        assert_eq!(part.content_type(), Some("application/octet-stream"));
    }

    #[test]
    fn encode_writes_form_parameters_before_parts() {
        let form = [Parameter::new("name", "Road trip")];
        let parts = [Part::file("image", "cover.png", "png bytes")];

        let (content_type, body) = encode_multipart("b0undary", &form, &parts);
        assert_eq!(content_type, "multipart/form-data; boundary=b0undary");

        let body = String::from_utf8_lossy(&body);
        let name_at = body.find("name=\"name\"").expect("form parameter");
        let image_at = body.find("name=\"image\"; filename=\"cover.png\"").expect("part");
        assert!(name_at < image_at);
        assert!(body.contains("Content-Type: image/png\r\n"));
        assert!(body.contains("Road trip\r\n"));
        assert!(body.ends_with("--b0undary--\r\n"));
    }

    #[test]
    fn generated_boundary_has_prefix() {
        assert!(generate_boundary().starts_with("----SpotifyWebApiBoundary"));
    }
}
