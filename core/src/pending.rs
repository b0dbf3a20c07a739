//! In-memory model of an image awaiting submission.

/// One picked image, alive from file selection until the batch reaches a
/// terminal state or the operator removes it.
///
/// The pending set is owned exclusively by the upload page; nothing here is
/// shared or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    /// Original filename, kept unmodified for the wire payload.
    pub file_name: String,
    /// Base64 data URL of the encoded file content.
    pub data_url: String,
    /// Display duration in seconds. Zero until the operator sets one.
    pub duration_secs: u32,
}

impl PendingImage {
    /// New pending image with the default (unset) duration.
    pub fn new(file_name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            data_url: data_url.into(),
            duration_secs: 0,
        }
    }

    /// Filename shortened for list display.
    ///
    /// Display-side only: the payload always carries the full name.
    pub fn display_name(&self, max_chars: usize) -> String {
        if self.file_name.chars().count() > max_chars {
            let head: String = self.file_name.chars().take(max_chars).collect();
            format!("{head}...")
        } else {
            self.file_name.clone()
        }
    }
}
