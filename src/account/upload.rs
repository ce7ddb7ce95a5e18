use crate::api::ChatBackend;
use crate::auth::Session;
use crate::types::{Document, Result};
use tracing::{info, warn};

pub const NO_FILES: &str = "Please select files to upload";
pub const UPLOAD_FAILED: &str = "Failed to upload documents";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success(String),
    Error(String),
}

impl UploadStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            UploadStatus::Success(m) | UploadStatus::Error(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UploadStatus::Error(_))
    }
}

/// Files staged for indexing and the outcome of the last upload.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    files: Vec<Document>,
    status: UploadStatus,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_files(&mut self, files: Vec<Document>) {
        self.files = files;
    }

    pub fn files(&self) -> &[Document] {
        &self.files
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// "a.pdf, b.pdf" for the current selection.
    pub fn selected_names(&self) -> String {
        self.files
            .iter()
            .map(|d| d.file_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Start an upload. With nothing selected the error is recorded and no
    /// request should be made.
    pub fn begin(&mut self) -> Option<Vec<Document>> {
        if self.files.is_empty() {
            self.status = UploadStatus::Error(NO_FILES.to_string());
            return None;
        }
        self.status = UploadStatus::Uploading;
        Some(self.files.clone())
    }

    pub fn finish(&mut self, result: Result<Vec<String>>) -> bool {
        match result {
            Ok(processed) => {
                info!(count = processed.len(), "documents uploaded");
                self.status = UploadStatus::Success(format!(
                    "Documents uploaded successfully! Processed files: {}",
                    processed.join(", ")
                ));
                self.files.clear();
                true
            }
            Err(e) => {
                warn!(error = %e, "document upload failed");
                self.status = UploadStatus::Error(UPLOAD_FAILED.to_string());
                false
            }
        }
    }

    pub async fn submit<B: ChatBackend + ?Sized>(&mut self, backend: &B, session: &Session) -> bool {
        let Some(files) = self.begin() else {
            return false;
        };
        let result = match session.bearer() {
            Ok(token) => backend.upload_documents(&token, &files).await,
            Err(e) => Err(e),
        };
        self.finish(result)
    }
}
