//! Video source handles a slot can hold.

use serde::{Deserialize, Serialize};

/// Kind of source currently assigned to a slot's video element.
///
/// `None` covers both an empty slot and a live camera preview: a live,
/// unrecorded stream is not a comparable source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    None,
    Uploaded,
    Recorded,
}

/// Opaque handle to a user-supplied video file.
///
/// The content is never inspected: any browser-accepted file type is
/// passed through, and malformed media fails at playback time in the
/// host's player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original file name as reported by the host
    pub name: String,
    /// MIME type as reported by the host, if any
    pub mime: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: None,
        }
    }

    pub fn with_mime(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: Some(mime.into()),
        }
    }
}

/// A finalized recording assembled from recorder chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedClip {
    /// Container MIME type, "video/webm" for browser recorders
    pub mime: String,
    /// Concatenated chunk bytes
    pub data: Vec<u8>,
}

impl RecordedClip {
    /// Assemble a clip from an ordered sequence of recorder chunks.
    pub fn from_chunks(mime: impl Into<String>, chunks: impl IntoIterator<Item = Vec<u8>>) -> Self {
        let mut data = Vec::new();
        for chunk in chunks {
            data.extend_from_slice(&chunk);
        }
        Self {
            mime: mime.into(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
