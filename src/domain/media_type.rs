use std::path::Path;

/// Fallback for extensions we have no mapping for.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Extension to media type table, mirroring what desktop browsers report
/// as `File.type` for the same names.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("m4a", "audio/x-m4a"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("aac", "audio/aac"),
    ("weba", "audio/webm"),
    ("wma", "audio/x-ms-wma"),
    ("aif", "audio/aiff"),
    ("aiff", "audio/aiff"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("txt", "text/plain"),
    ("pdf", "application/pdf"),
];

/// Media type declared for `path`, derived from its extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return UNKNOWN_MEDIA_TYPE;
    };
    let ext = ext.to_ascii_lowercase();

    MEDIA_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

pub fn is_audio(media_type: &str) -> bool {
    media_type.starts_with("audio/")
}

/// Extensions offered by the "Audio" filter of the file picker.
pub fn audio_extensions() -> Vec<&'static str> {
    MEDIA_TYPES
        .iter()
        .filter(|(_, media_type)| is_audio(media_type))
        .map(|(ext, _)| *ext)
        .collect()
}
