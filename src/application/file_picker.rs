use crate::domain::{media_type::audio_extensions, SelectedFile};

/// Opens the native file dialog. The "All files" filter stays available so a
/// non-audio pick reaches validation instead of being silently impossible.
pub async fn pick_audio_file() -> Option<SelectedFile> {
    let extensions = audio_extensions();

    rfd::AsyncFileDialog::new()
        .set_title("Select an audio file")
        .add_filter("Audio", &extensions[..])
        .add_filter("All files", &["*"])
        .pick_file()
        .await
        .map(|handle| SelectedFile::from_path(handle.path()))
}
