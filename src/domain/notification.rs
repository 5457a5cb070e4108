use std::path::Path;

use super::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A short user-facing message: title plus one line of detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn file_selected(name: &str) -> Self {
        Self::info(
            "File selected",
            format!("{} has been selected for conversion.", name),
        )
    }

    pub fn conversion_complete() -> Self {
        Self::info(
            "Conversion complete",
            "Your file has been converted successfully!",
        )
    }

    pub fn download_saved(path: &Path) -> Self {
        Self::info("Download saved", format!("Saved to {}", path.display()))
    }
}

impl From<&AppError> for Notification {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::InvalidFileType(_) => {
                Notification::error("Invalid file type", "Please select an audio file.")
            }
            AppError::NoFileSelected => Notification::error(
                "No file selected",
                "Please select an audio file to convert.",
            ),
            AppError::Io(message) => Notification::error("Download failed", message.clone()),
            AppError::Config(message) => {
                Notification::error("Configuration error", message.clone())
            }
        }
    }
}
