use iced::{
    widget::{column, text},
    Element,
};

use super::UiMessage;

const STEPS: [&str; 5] = [
    "Click the upload button or drag and drop your audio file",
    "Select your desired output format",
    "Adjust quality settings if needed",
    "Click \"Convert Now\" to start the conversion",
    "Download your converted file when ready",
];

pub fn view<'a>() -> Element<'a, UiMessage> {
    let steps = STEPS
        .iter()
        .enumerate()
        .fold(column![].spacing(6), |list, (i, step)| {
            list.push(text(format!("{}. {}", i + 1, step)).size(14))
        });

    column![
        text("How to Convert Audio Files").size(20),
        steps,
        text("Supported Formats").size(20),
        text(
            "We support conversion between MP3, WAV, M4A, FLAC, and OGG formats. \
             For best quality, we recommend using lossless formats like WAV or \
             FLAC for input files."
        )
        .size(14),
    ]
    .spacing(12)
    .into()
}
