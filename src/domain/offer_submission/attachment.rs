//! Attachments bundled with a submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AttachmentId, ValidationError};

/// Opaque reference to a stored blob, issued by blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationRef(String);

impl LocationRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Last path component of an uploaded name, with control characters replaced.
fn clean_file_name(raw: &str) -> String {
    raw.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim()
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect()
}

/// Reduces an uploaded name to a bare file name.
///
/// Directory parts are dropped, so `../../quote.pdf` becomes `quote.pdf`.
///
/// # Errors
///
/// `InvalidFormat` on `file_name` when nothing usable is left: an empty
/// name, a trailing separator, or only dots.
pub fn sanitize_file_name(raw: &str) -> Result<String, ValidationError> {
    let cleaned = clean_file_name(raw);
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(ValidationError::invalid_format(
            "file_name",
            format!("unusable file name {:?}", raw),
        ));
    }
    Ok(cleaned)
}

/// A file uploaded alongside an offer, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    /// Size as declared by the uploader.
    pub size_bytes: u64,
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Creates an upload whose declared size is the content length.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }

    /// Checks the name before anything is written to blob storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("file_name"));
        }
        sanitize_file_name(&self.name).map(|_| ())
    }
}

/// Metadata for a stored attachment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    id: AttachmentId,
    name: String,
    mime_type: String,
    size_bytes: u64,
    location_ref: LocationRef,
}

impl Attachment {
    /// Builds the attachment for an uploaded file that has been stored.
    pub fn from_upload(file: &UploadedFile, location_ref: LocationRef) -> Self {
        Self {
            id: AttachmentId::generate(),
            name: clean_file_name(&file.name),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes,
            location_ref,
        }
    }

    pub fn id(&self) -> &AttachmentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn location_ref(&self) -> &LocationRef {
        &self.location_ref
    }
}
