use iced::{
    widget::{button, column, container, row, text, Space},
    Alignment, Element, Length,
};

use super::UiMessage;
use crate::application::notifications::Toast;
use crate::domain::Severity;

pub fn view(toasts: &[Toast]) -> Element<'_, UiMessage> {
    toasts
        .iter()
        .fold(column![].spacing(8).width(Length::Fixed(320.0)), |list, toast| {
            list.push(card(toast))
        })
        .into()
}

fn card(toast: &Toast) -> Element<'_, UiMessage> {
    let title = text(&toast.notification.title).size(15);
    let title = match toast.notification.severity {
        Severity::Info => title,
        Severity::Error => title.style(text::danger),
    };

    container(
        row![
            column![title, text(&toast.notification.description).size(13)].spacing(4),
            Space::new().width(Length::Fill),
            button(text("×"))
                .on_press(UiMessage::DismissToast(toast.id))
                .style(button::text),
        ]
        .align_y(Alignment::Start),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
