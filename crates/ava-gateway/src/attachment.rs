//! Files uploaded as the binary part of multipart requests.

use std::fmt;

use ava_core::enums::TaskContentType;
use reqwest::multipart::Part;

use crate::error::GatewayError;

/// An in-memory file: name, optional MIME type, and contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            bytes,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Content category for the backend, inferred from MIME type and name.
    #[must_use]
    pub fn content_type(&self) -> TaskContentType {
        infer_content_type(&self.name, self.mime_type.as_deref())
    }

    pub(crate) fn to_part(&self) -> Result<Part, GatewayError> {
        let part = Part::bytes(self.bytes.clone()).file_name(self.name.clone());
        match self.mime_type.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(mime) => part
                .mime_str(mime)
                .map_err(|e| GatewayError::Encode(format!("invalid MIME type '{mime}': {e}"))),
            None => Ok(part),
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Map a file to a [`TaskContentType`].
///
/// Rules are checked in order against the lower-cased MIME type and file
/// name; the first match wins and anything unrecognised is treated as PDF.
#[must_use]
pub fn infer_content_type(file_name: &str, mime_type: Option<&str>) -> TaskContentType {
    let mime = mime_type.unwrap_or_default().to_ascii_lowercase();
    let name = file_name.to_ascii_lowercase();
    let ext = |exts: &[&str]| exts.iter().any(|e| name.ends_with(e));

    if mime.contains("pdf") || ext(&[".pdf"]) {
        TaskContentType::Pdf
    } else if mime.contains("video") || ext(&[".mp4", ".avi", ".mov"]) {
        TaskContentType::Video
    } else if mime.contains("image/jpeg") || ext(&[".jpg", ".jpeg"]) {
        TaskContentType::Jpg
    } else if mime.contains("image/png") || ext(&[".png"]) {
        TaskContentType::Png
    } else if mime.contains("audio") || ext(&[".mp3"]) {
        TaskContentType::Mp3
    } else if mime.contains("wordprocessingml") || ext(&[".docx", ".doc"]) {
        TaskContentType::Docx
    } else if mime.contains("text") || ext(&[".txt"]) {
        TaskContentType::Text
    } else {
        TaskContentType::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("relatorio.pdf", None, TaskContentType::Pdf)]
    #[case("REL.PDF", None, TaskContentType::Pdf)]
    #[case("aula.mov", None, TaskContentType::Video)]
    #[case("clip", Some("video/webm"), TaskContentType::Video)]
    #[case("foto.jpeg", None, TaskContentType::Jpg)]
    #[case("print.png", None, TaskContentType::Png)]
    #[case("scan", Some("image/png"), TaskContentType::Png)]
    #[case("audio.mp3", None, TaskContentType::Mp3)]
    #[case("voz", Some("audio/ogg"), TaskContentType::Mp3)]
    #[case("trabalho.doc", None, TaskContentType::Docx)]
    #[case(
        "trabalho",
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        TaskContentType::Docx
    )]
    #[case("notas.txt", None, TaskContentType::Text)]
    #[case("notas.md", Some("text/markdown"), TaskContentType::Text)]
    #[case("planilha.xlsx", None, TaskContentType::Pdf)]
    #[case("sem-extensao", None, TaskContentType::Pdf)]
    fn infers_content_type(
        #[case] name: &str,
        #[case] mime: Option<&str>,
        #[case] expected: TaskContentType,
    ) {
        assert_eq!(infer_content_type(name, mime), expected);
    }

    #[test]
    fn mime_rule_order_wins_over_extension() {
        // PDF is checked first, so a PDF MIME type beats a .png name.
        assert_eq!(
            infer_content_type("image.png", Some("application/pdf")),
            TaskContentType::Pdf
        );
    }

    #[test]
    fn gif_image_falls_back_to_pdf() {
        assert_eq!(
            infer_content_type("anim.gif", Some("image/gif")),
            TaskContentType::Pdf
        );
    }

    #[test]
    fn debug_omits_contents() {
        let file = Attachment::new("a.txt", b"secret".to_vec());
        let debug = format!("{file:?}");
        assert!(debug.contains("len: 6"));
        assert!(!debug.contains("secret"));
    }
}
