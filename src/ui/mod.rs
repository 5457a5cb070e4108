mod help;
mod toast;

use iced::{
    widget::{
        button, column, container, pick_list, progress_bar, row, scrollable, slider, stack, text,
        toggler, Space,
    },
    Alignment, Element, Length, Theme,
};

use crate::application::{notifications::Toast, ConversionPanel};
use crate::domain::{AudioFormat, ConversionState, Quality, SampleRate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upload,
    Settings,
    Help,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Upload, Tab::Settings, Tab::Help];

    fn label(self) -> &'static str {
        match self {
            Tab::Upload => "Upload",
            Tab::Settings => "Settings",
            Tab::Help => "Help",
        }
    }
}

/// View-only state; everything about the conversion lives in the panel.
#[derive(Debug, Default)]
pub struct ConverterView {
    pub active_tab: Tab,
    pub dark_mode: bool,
}

#[derive(Debug, Clone)]
pub enum UiMessage {
    TabSelected(Tab),
    ThemeToggled,
    BrowsePressed,
    FormatSelected(AudioFormat),
    QualityChanged(u16),
    VariableBitrateToggled(bool),
    StereoToggled(bool),
    FadeEffectsToggled(bool),
    SampleRateSelected(SampleRate),
    ConvertPressed,
    DownloadPressed,
    DismissToast(u64),
}

impl ConverterView {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            active_tab: Tab::default(),
            dark_mode,
        }
    }

    pub fn update(&mut self, message: &UiMessage) {
        match message {
            UiMessage::TabSelected(tab) => {
                self.active_tab = *tab;
            }
            UiMessage::ThemeToggled => {
                self.dark_mode = !self.dark_mode;
            }
            _ => {
                // Will be handled by the app
            }
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn view<'a>(
        &'a self,
        panel: &'a ConversionPanel,
        toasts: &'a [Toast],
    ) -> Element<'a, UiMessage> {
        let theme_label = if self.dark_mode { "Light mode" } else { "Dark mode" };

        let header = column![
            row![
                Space::new().width(Length::Fill),
                button(text(theme_label).size(13))
                    .on_press(UiMessage::ThemeToggled)
                    .style(button::secondary),
            ],
            text("Audio Converter").size(36),
            text("Convert your audio files to any format with professional quality").size(14),
        ]
        .align_x(Alignment::Center)
        .spacing(8);

        let body = match self.active_tab {
            Tab::Upload => upload_view(panel),
            Tab::Settings => settings_view(panel),
            Tab::Help => help::view(),
        };

        let card = container(column![self.tab_bar(), body].spacing(24))
            .padding(24)
            .width(Length::Fill)
            .style(container::bordered_box);

        let page = scrollable(
            column![
                header,
                card,
                text("© 2024 Audio Converter. All rights reserved.").size(12),
            ]
            .align_x(Alignment::Center)
            .spacing(24)
            .padding(20)
            .max_width(900.0),
        )
        .width(Length::Fill);

        let overlay = container(toast::view(toasts))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(20);

        stack![page, overlay].into()
    }

    fn tab_bar(&self) -> Element<'_, UiMessage> {
        Tab::ALL
            .iter()
            .fold(row![].spacing(16), |bar, &tab| {
                let style: fn(&Theme, button::Status) -> button::Style = if tab == self.active_tab
                {
                    button::primary
                } else {
                    button::secondary
                };

                bar.push(
                    button(text(tab.label()).width(Length::Fill).center())
                        .on_press(UiMessage::TabSelected(tab))
                        .style(style)
                        .width(Length::Fill)
                        .padding([8, 16]),
                )
            })
            .into()
    }
}

fn upload_view(panel: &ConversionPanel) -> Element<'_, UiMessage> {
    let settings = panel.settings();

    let mut picker = column![
        text("Drop your audio file here").size(18),
        button("or click to browse")
            .on_press(UiMessage::BrowsePressed)
            .style(button::text),
    ]
    .align_x(Alignment::Center)
    .spacing(8);

    if let Some(file) = panel.file() {
        picker = picker.push(text(format!("Selected: {}", file.name)).size(13));
    }

    let format_picker = column![
        text("Output Format").size(14),
        pick_list(
            AudioFormat::ALL,
            Some(settings.format),
            UiMessage::FormatSelected
        )
        .placeholder("Select format")
        .width(Length::Fill),
    ]
    .spacing(8)
    .width(Length::Fill);

    let quality_slider = column![
        text(format!("Quality ({} kbps)", settings.quality.kbps())).size(14),
        slider(
            Quality::MIN..=Quality::MAX,
            settings.quality.kbps(),
            UiMessage::QualityChanged
        )
        .step(Quality::STEP),
    ]
    .spacing(8)
    .width(Length::Fill);

    let actions: Element<'_, UiMessage> = match panel.state() {
        ConversionState::Running { .. } => column![
            progress_bar(0.0..=100.0, f32::from(panel.progress())),
            text(format!("Converting... {}%", panel.progress())).size(13),
        ]
        .align_x(Alignment::Center)
        .spacing(8)
        .into(),
        ConversionState::Idle | ConversionState::Completed => {
            let mut actions = column![button(text("Convert Now").width(Length::Fill).center())
                .on_press_maybe(panel.can_convert().then_some(UiMessage::ConvertPressed))
                .width(Length::Fill)
                .padding([12, 20])]
            .spacing(16);

            if panel.download_available() {
                actions = actions.push(
                    button(text("Download Converted File").width(Length::Fill).center())
                        .on_press(UiMessage::DownloadPressed)
                        .style(button::success)
                        .width(Length::Fill)
                        .padding([12, 20]),
                );
            }
            actions.into()
        }
    };

    column![
        container(picker)
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(container::rounded_box),
        row![format_picker, quality_slider].spacing(24),
        actions,
    ]
    .spacing(24)
    .into()
}

fn settings_view(panel: &ConversionPanel) -> Element<'_, UiMessage> {
    let options = panel.options();

    column![
        toggler(options.variable_bitrate)
            .label("Variable Bitrate")
            .on_toggle(UiMessage::VariableBitrateToggled),
        toggler(options.stereo)
            .label("Stereo Output")
            .on_toggle(UiMessage::StereoToggled),
        toggler(options.fade_effects)
            .label("Fade Effects")
            .on_toggle(UiMessage::FadeEffectsToggled),
        column![
            text("Sample Rate").size(14),
            pick_list(
                SampleRate::ALL,
                Some(options.sample_rate),
                UiMessage::SampleRateSelected
            )
            .width(Length::Fill),
        ]
        .spacing(8),
    ]
    .spacing(24)
    .into()
}
