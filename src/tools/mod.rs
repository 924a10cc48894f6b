// src/tools/mod.rs — Tool catalog and the processing backend seam

pub mod catalog;
pub mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use catalog::{find, Tool, TOOLS};

/// File types the upload area accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Txt,
    Docx,
    Png,
    Jpg,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "txt" => Some(FileKind::Txt),
            "docx" => Some(FileKind::Docx),
            "png" => Some(FileKind::Png),
            "jpg" | "jpeg" => Some(FileKind::Jpg),
            _ => None,
        }
    }
}

/// A file picked in the upload area. Only metadata: contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub name: String,
    pub size_bytes: u64,
}

impl InputFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(FileKind::from_extension)
    }

    /// Size as shown under the file name, e.g. "2.4 MB".
    pub fn display_size(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let bytes = self.size_bytes as f64;
        if bytes >= MB {
            format!("{:.1} MB", bytes / MB)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

/// What a finished tool run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultArtifact {
    pub tool_id: String,
    pub title: String,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Tool '{0}' not found")]
    UnknownTool(String),

    #[error("Unsupported file '{0}' (expected PDF, TXT, DOCX, PNG or JPG)")]
    UnsupportedFile(String),

    #[error("Processing backend error: {message}")]
    Backend { message: String, retriable: bool },
}

impl ProcessingError {
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ProcessingError::Backend {
                retriable: true,
                ..
            }
        )
    }
}

/// Backend that turns an input file into a result for one tool.
#[async_trait]
pub trait ToolProcessor: Send + Sync {
    fn id(&self) -> &str;

    async fn process(&self, tool: &Tool, file: &InputFile)
        -> Result<ResultArtifact, ProcessingError>;
}
