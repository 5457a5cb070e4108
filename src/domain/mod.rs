pub mod error;
pub mod media_type;
pub mod model;
pub mod notification;

pub use error::AppError;
pub use model::{
    AudioFormat, ConversionSettings, ConversionState, OutputOptions, Quality, SampleRate,
    SelectedFile,
};
pub use notification::{Notification, Severity};
