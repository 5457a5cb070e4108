use crate::domain::{
    media_type::is_audio, AppError, AudioFormat, ConversionSettings, ConversionState,
    Notification, OutputOptions, Quality, SampleRate, SelectedFile,
};

/// Identifies one conversion run. Ticks carrying an older id are stale.
pub type RunId = u64;

pub const DEFAULT_PROGRESS_STEP: u8 = 10;

/// Owns the selected file, settings and lifecycle of the simulated conversion.
///
/// The panel itself never schedules anything. The caller drives progress by
/// feeding [`ConversionPanel::tick`] with the [`RunId`] returned from
/// [`ConversionPanel::start_conversion`].
#[derive(Debug, Clone)]
pub struct ConversionPanel {
    file: Option<SelectedFile>,
    settings: ConversionSettings,
    options: OutputOptions,
    state: ConversionState,
    run: RunId,
    progress_step: u8,
}

impl Default for ConversionPanel {
    fn default() -> Self {
        Self::new(ConversionSettings::default(), DEFAULT_PROGRESS_STEP)
    }
}

impl ConversionPanel {
    pub fn new(settings: ConversionSettings, progress_step: u8) -> Self {
        Self {
            file: None,
            settings,
            options: OutputOptions::default(),
            state: ConversionState::Idle,
            run: 0,
            progress_step: progress_step.clamp(1, 100),
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn settings(&self) -> ConversionSettings {
        self.settings
    }

    pub fn options(&self) -> OutputOptions {
        self.options
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.state.progress()
    }

    /// Number of ticks a run needs to go from 0 to 100.
    pub fn ticks_to_complete(&self) -> u32 {
        100u32.div_ceil(u32::from(self.progress_step))
    }

    /// Records `candidate` if it is an audio file. Any run in flight is
    /// abandoned and the state returns to idle.
    pub fn select_file(&mut self, candidate: SelectedFile) -> Result<Notification, AppError> {
        if !is_audio(&candidate.media_type) {
            tracing::warn!(
                "Rejected {} with media type {}",
                candidate.name,
                candidate.media_type
            );
            return Err(AppError::InvalidFileType(candidate.media_type));
        }

        if self.state.is_running() {
            tracing::info!("New file selected while converting, abandoning run {}", self.run);
        }

        let notification = Notification::file_selected(&candidate.name);
        tracing::info!(
            "Selected {} ({}) from {:?}",
            candidate.name,
            candidate.media_type,
            candidate.path
        );

        self.file = Some(candidate);
        self.state = ConversionState::Idle;
        self.run += 1;

        Ok(notification)
    }

    pub fn set_format(&mut self, format: AudioFormat) {
        self.settings.format = format;
    }

    pub fn set_quality(&mut self, kbps: u16) {
        self.settings.quality = Quality::new(kbps);
    }

    pub fn set_variable_bitrate(&mut self, enabled: bool) {
        self.options.variable_bitrate = enabled;
    }

    pub fn set_stereo(&mut self, enabled: bool) {
        self.options.stereo = enabled;
    }

    pub fn set_fade_effects(&mut self, enabled: bool) {
        self.options.fade_effects = enabled;
    }

    pub fn set_sample_rate(&mut self, sample_rate: SampleRate) {
        self.options.sample_rate = sample_rate;
    }

    /// Whether the convert control should be offered.
    pub fn can_convert(&self) -> bool {
        self.file.is_some() && self.state == ConversionState::Idle
    }

    /// Starts a new run at 0%. Fails if no file has been selected.
    pub fn start_conversion(&mut self) -> Result<RunId, AppError> {
        let Some(file) = &self.file else {
            return Err(AppError::NoFileSelected);
        };

        self.run += 1;
        self.state = ConversionState::Running { progress: 0 };
        tracing::info!(
            "Converting {} to {} at {} kbps (run {})",
            file.name,
            self.settings.format,
            self.settings.quality.kbps(),
            self.run
        );

        Ok(self.run)
    }

    /// Advances progress by one step. Returns the completion notification
    /// when this tick finishes the run; stale or late ticks are ignored.
    pub fn tick(&mut self, run: RunId) -> Option<Notification> {
        if run != self.run {
            tracing::debug!("Ignoring tick from stale run {}", run);
            return None;
        }

        let ConversionState::Running { progress } = self.state else {
            return None;
        };

        let progress = progress.saturating_add(self.progress_step).min(100);
        if progress < 100 {
            self.state = ConversionState::Running { progress };
            tracing::debug!("Conversion progress {}%", progress);
            return None;
        }

        self.state = ConversionState::Completed;
        tracing::info!("Conversion run {} complete", run);
        Some(Notification::conversion_complete())
    }

    pub fn download_available(&self) -> bool {
        self.file.is_some() && self.state == ConversionState::Completed
    }

    /// File name hint and format for the download trigger, once completed.
    pub fn download_request(&self) -> Option<(&str, AudioFormat)> {
        if !self.download_available() {
            return None;
        }
        self.file
            .as_ref()
            .map(|file| (file.name.as_str(), self.settings.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    fn song() -> SelectedFile {
        SelectedFile::new("song.mp3", "audio/mpeg")
    }

    fn run_to_completion(panel: &mut ConversionPanel, run: RunId) -> Vec<u8> {
        let mut seen = vec![panel.progress()];
        for _ in 0..panel.ticks_to_complete() {
            panel.tick(run);
            seen.push(panel.progress());
        }
        seen
    }

    #[test]
    fn test_select_audio_file() {
        let mut panel = ConversionPanel::default();
        let notification = panel.select_file(song()).unwrap();

        assert_eq!(notification.severity, Severity::Info);
        assert_eq!(panel.file().map(|f| f.name.as_str()), Some("song.mp3"));
        assert_eq!(panel.state(), ConversionState::Idle);
        assert_eq!(panel.progress(), 0);
    }

    #[test]
    fn test_reject_non_audio_file() {
        let mut panel = ConversionPanel::default();
        let err = panel
            .select_file(SelectedFile::new("image.png", "image/png"))
            .unwrap_err();

        assert_eq!(err, AppError::InvalidFileType("image/png".into()));
        assert!(panel.file().is_none());
        assert_eq!(panel.state(), ConversionState::Idle);
    }

    #[test]
    fn test_reject_keeps_previous_selection() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        let run = panel.start_conversion().unwrap();
        run_to_completion(&mut panel, run);

        for media_type in ["image/png", "video/mp4", "text/plain", ""] {
            assert!(panel
                .select_file(SelectedFile::new("other", media_type))
                .is_err());
            assert_eq!(panel.file().map(|f| f.name.as_str()), Some("song.mp3"));
            assert_eq!(panel.state(), ConversionState::Completed);
        }
    }

    #[test]
    fn test_start_without_file() {
        let mut panel = ConversionPanel::default();
        assert_eq!(panel.start_conversion(), Err(AppError::NoFileSelected));
        assert_eq!(panel.state(), ConversionState::Idle);
        assert!(!panel.can_convert());
    }

    #[test]
    fn test_progress_sequence() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        let run = panel.start_conversion().unwrap();

        assert_eq!(panel.ticks_to_complete(), 10);
        let seen = run_to_completion(&mut panel, run);
        assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(panel.state(), ConversionState::Completed);
    }

    #[test]
    fn test_completion_notifies_once_and_is_terminal() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        let run = panel.start_conversion().unwrap();

        let notifications: Vec<_> = (0..10).filter_map(|_| panel.tick(run)).collect();
        assert_eq!(notifications, vec![Notification::conversion_complete()]);

        assert_eq!(panel.tick(run), None);
        assert_eq!(panel.state(), ConversionState::Completed);
        assert_eq!(panel.progress(), 100);
    }

    #[test]
    fn test_convert_song_to_flac() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        panel.set_format(AudioFormat::Flac);
        panel.set_quality(256);
        let run = panel.start_conversion().unwrap();

        for _ in 0..5 {
            panel.tick(run);
        }
        assert_eq!(panel.state(), ConversionState::Running { progress: 50 });
        assert!(!panel.download_available());
        assert!(!panel.can_convert());

        for _ in 0..5 {
            panel.tick(run);
        }
        assert_eq!(panel.state(), ConversionState::Completed);
        assert_eq!(panel.download_request(), Some(("song.mp3", AudioFormat::Flac)));
        assert_eq!(panel.settings().quality.kbps(), 256);
    }

    #[test]
    fn test_reselect_while_running_discards_run() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        let first = panel.start_conversion().unwrap();
        panel.tick(first);
        panel.tick(first);

        panel
            .select_file(SelectedFile::new("other.wav", "audio/wav"))
            .unwrap();
        assert_eq!(panel.state(), ConversionState::Idle);

        assert_eq!(panel.tick(first), None);
        assert_eq!(panel.progress(), 0);

        let second = panel.start_conversion().unwrap();
        assert_ne!(first, second);
        panel.tick(first);
        assert_eq!(panel.progress(), 0);
        panel.tick(second);
        assert_eq!(panel.progress(), 10);
    }

    #[test]
    fn test_uneven_step_finishes_at_hundred() {
        let mut panel = ConversionPanel::new(ConversionSettings::default(), 30);
        panel.select_file(song()).unwrap();
        let run = panel.start_conversion().unwrap();

        assert_eq!(panel.ticks_to_complete(), 4);
        let seen = run_to_completion(&mut panel, run);
        assert_eq!(seen, vec![0, 30, 60, 90, 100]);
    }

    #[test]
    fn test_download_not_offered_before_completion() {
        let mut panel = ConversionPanel::default();
        assert!(!panel.download_available());
        assert_eq!(panel.download_request(), None);

        panel.select_file(song()).unwrap();
        assert_eq!(panel.state(), ConversionState::Idle);
        assert!(!panel.download_available());
        assert_eq!(panel.download_request(), None);

        let run = panel.start_conversion().unwrap();
        run_to_completion(&mut panel, run);
        assert!(panel.download_available());

        panel
            .select_file(SelectedFile::new("next.wav", "audio/wav"))
            .unwrap();
        assert!(!panel.download_available());
        assert_eq!(panel.download_request(), None);
    }

    #[test]
    fn test_convert_offered_again_only_after_new_file() {
        let mut panel = ConversionPanel::default();
        panel.select_file(song()).unwrap();
        assert!(panel.can_convert());

        let run = panel.start_conversion().unwrap();
        assert!(!panel.can_convert());
        run_to_completion(&mut panel, run);
        assert!(!panel.can_convert());

        panel
            .select_file(SelectedFile::new("next.wav", "audio/wav"))
            .unwrap();
        assert!(panel.can_convert());
    }

    #[test]
    fn test_output_options() {
        let mut panel = ConversionPanel::default();
        assert!(panel.options().stereo);

        panel.set_variable_bitrate(true);
        panel.set_stereo(false);
        panel.set_fade_effects(true);
        panel.set_sample_rate(SampleRate::Hz96000);

        let options = panel.options();
        assert!(options.variable_bitrate);
        assert!(!options.stereo);
        assert!(options.fade_effects);
        assert_eq!(options.sample_rate.hertz(), 96_000);
    }
}
