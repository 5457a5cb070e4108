pub mod conversion_panel;
pub mod download_trigger;
pub mod file_picker;
pub mod notifications;
pub mod ticker;

pub use conversion_panel::{ConversionPanel, RunId};
pub use download_trigger::{DownloadTrigger, PlaceholderArtifact};
pub use notifications::NotificationCenter;
