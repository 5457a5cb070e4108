use crate::application::{
    file_picker, ticker, ConversionPanel, DownloadTrigger, NotificationCenter, PlaceholderArtifact,
    RunId,
};
use crate::config::Config;
use crate::domain::{AppError, ConversionState, Notification, SelectedFile};
use crate::ui::{ConverterView, UiMessage};
use futures::StreamExt;
use iced::{event, task, window, Event, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TOAST_SWEEP_INTERVAL: Duration = Duration::from_millis(250);

pub struct ConverterApp {
    view: ConverterView,
    panel: ConversionPanel,
    notifications: NotificationCenter,
    downloads: DownloadTrigger,
    tick_interval: Duration,
    // Aborted on drop, so tearing down the app stops a running ticker
    ticker: Option<task::Handle>,
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ConverterApp {
    pub fn new(config: Config) -> Self {
        Self {
            view: ConverterView::new(config.dark_mode),
            panel: ConversionPanel::new(config.conversion_settings(), config.progress_step),
            notifications: NotificationCenter::new(config.toast_duration()),
            downloads: DownloadTrigger::new(config.output_prefix.clone()),
            tick_interval: config.tick_interval(),
            ticker: None,
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification, Instant::now());
    }

    fn fail(&mut self, error: &AppError) {
        tracing::warn!("{}", error);
        self.notify(Notification::from(error));
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }

    fn select_file(&mut self, file: SelectedFile) {
        match self.panel.select_file(file) {
            Ok(notification) => {
                self.cancel_ticker();
                self.notify(notification);
            }
            Err(e) => self.fail(&e),
        }
    }

    fn start_conversion(&mut self) -> Task<Message> {
        match self.panel.start_conversion() {
            Ok(run) => {
                self.cancel_ticker();

                let ticks = ticker::progress_ticks(
                    run,
                    self.tick_interval,
                    self.panel.ticks_to_complete(),
                );
                let (task, handle) = Task::stream(ticks.map(Message::Tick)).abortable();
                self.ticker = Some(handle.abort_on_drop());
                task
            }
            Err(e) => {
                self.fail(&e);
                Task::none()
            }
        }
    }

    fn start_download(&mut self) -> Task<Message> {
        let Some((hint, format)) = self.panel.download_request() else {
            return Task::none();
        };
        let artifact = self.downloads.prepare(hint, format);
        tracing::info!("Preparing download of {}", artifact.file_name);

        // Ask where to save, then write the placeholder
        Task::perform(
            async move {
                let path = DownloadTrigger::choose_save_path(artifact.file_name.clone()).await;
                (path, artifact)
            },
            |(path, artifact)| Message::SavePathSelected(path, artifact),
        )
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(UiMessage),
    /// Result of the open-file dialog or a file dropped on the window
    FileChosen(Option<SelectedFile>),
    FileDropped(PathBuf),
    Tick(RunId),
    SavePathSelected(Option<PathBuf>, PlaceholderArtifact),
    DownloadSaved(Result<PathBuf, AppError>),
    SweepToasts(Instant),
}

pub fn update(app: &mut ConverterApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(&ui_msg);

            match ui_msg {
                UiMessage::BrowsePressed => {
                    return Task::perform(file_picker::pick_audio_file(), Message::FileChosen);
                }
                UiMessage::FormatSelected(format) => app.panel.set_format(format),
                UiMessage::QualityChanged(kbps) => app.panel.set_quality(kbps),
                UiMessage::VariableBitrateToggled(enabled) => {
                    app.panel.set_variable_bitrate(enabled)
                }
                UiMessage::StereoToggled(enabled) => app.panel.set_stereo(enabled),
                UiMessage::FadeEffectsToggled(enabled) => app.panel.set_fade_effects(enabled),
                UiMessage::SampleRateSelected(rate) => app.panel.set_sample_rate(rate),
                UiMessage::ConvertPressed => {
                    // Only from Idle; without a file this reports the error
                    if app.panel.state() == ConversionState::Idle {
                        return app.start_conversion();
                    }
                }
                UiMessage::DownloadPressed => return app.start_download(),
                UiMessage::DismissToast(id) => app.notifications.dismiss(id),
                UiMessage::TabSelected(_) | UiMessage::ThemeToggled => {}
            }
        }
        Message::FileChosen(Some(file)) => app.select_file(file),
        Message::FileChosen(None) => {
            tracing::debug!("File dialog cancelled");
        }
        Message::FileDropped(path) => app.select_file(SelectedFile::from_path(&path)),
        Message::Tick(run) => {
            if let Some(notification) = app.panel.tick(run) {
                app.cancel_ticker();
                app.notify(notification);
            }
        }
        Message::SavePathSelected(Some(path), artifact) => {
            return Task::perform(DownloadTrigger::save(artifact, path), Message::DownloadSaved);
        }
        Message::SavePathSelected(None, artifact) => {
            tracing::info!("Save of {} cancelled", artifact.file_name);
        }
        Message::DownloadSaved(Ok(path)) => app.notify(Notification::download_saved(&path)),
        Message::DownloadSaved(Err(e)) => app.fail(&e),
        Message::SweepToasts(now) => {
            app.notifications.expire(now);
        }
    }
    Task::none()
}

pub fn view(app: &ConverterApp) -> iced::Element<'_, Message> {
    app.view
        .view(&app.panel, app.notifications.toasts())
        .map(Message::UiMessage)
}

pub fn theme(app: &ConverterApp) -> Theme {
    app.view.theme()
}

pub fn subscription(app: &ConverterApp) -> Subscription<Message> {
    let dropped_files = event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    });

    if app.notifications.is_empty() {
        dropped_files
    } else {
        Subscription::batch([
            dropped_files,
            iced::time::every(TOAST_SWEEP_INTERVAL).map(Message::SweepToasts),
        ])
    }
}
