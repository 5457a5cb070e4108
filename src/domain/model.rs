use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::media_type::media_type_for;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    M4a,
    Flac,
    Ogg,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 5] = [
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::M4a,
        AudioFormat::Flac,
        AudioFormat::Ogg,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::M4a => "m4a",
            AudioFormat::Flac => "flac",
            AudioFormat::Ogg => "ogg",
        }
    }

    /// Media type stamped on converted output, `audio/<extension>`.
    pub fn media_type(self) -> String {
        format!("audio/{}", self.extension())
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

/// Target bitrate in kbps, always one of 64, 128, 192, 256 or 320.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "u16")]
pub struct Quality(u16);

impl Quality {
    pub const MIN: u16 = 64;
    pub const MAX: u16 = 320;
    pub const STEP: u16 = 64;

    /// Snaps `kbps` to the nearest allowed value.
    pub fn new(kbps: u16) -> Self {
        let clamped = kbps.clamp(Self::MIN, Self::MAX);
        let steps = (clamped - Self::MIN + Self::STEP / 2) / Self::STEP;
        Self(Self::MIN + steps * Self::STEP)
    }

    pub fn kbps(self) -> u16 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(192)
    }
}

impl From<u16> for Quality {
    fn from(kbps: u16) -> Self {
        Self::new(kbps)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleRate {
    #[default]
    Hz44100,
    Hz48000,
    Hz96000,
}

impl SampleRate {
    pub const ALL: [SampleRate; 3] = [SampleRate::Hz44100, SampleRate::Hz48000, SampleRate::Hz96000];

    pub fn hertz(self) -> u32 {
        match self {
            SampleRate::Hz44100 => 44_100,
            SampleRate::Hz48000 => 48_000,
            SampleRate::Hz96000 => 96_000,
        }
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.hertz() as f32 / 1000.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSettings {
    pub format: AudioFormat,
    pub quality: Quality,
}

/// Extra output toggles. They are shown and remembered but do not change
/// the produced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub variable_bitrate: bool,
    pub stereo: bool,
    pub fade_effects: bool,
    pub sample_rate: SampleRate,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            variable_bitrate: false,
            stereo: true,
            fade_effects: false,
            sample_rate: SampleRate::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub path: Option<PathBuf>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            path: None,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            media_type: media_type_for(path).to_string(),
            path: Some(path.to_path_buf()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionState {
    #[default]
    Idle,
    Running {
        progress: u8,
    },
    Completed,
}

impl ConversionState {
    pub fn progress(self) -> u8 {
        match self {
            ConversionState::Idle => 0,
            ConversionState::Running { progress } => progress,
            ConversionState::Completed => 100,
        }
    }

    pub fn is_running(self) -> bool {
        matches!(self, ConversionState::Running { .. })
    }
}
