//! Detail view for the selected listing.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Background, Border, Element, Length, Theme};

use jobboard_core::models::JobRecord;

use crate::app::Message;
use crate::theme::{colors, font, spacing};

pub fn view(selected: Option<&JobRecord>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match selected {
        None => text("Select a job to see its details.")
            .size(font::NORMAL)
            .color(colors::TEXT_MUTED)
            .into(),
        Some(record) => {
            let mut details = column![
                row![
                    text("Details").size(font::LG),
                    Space::new().width(Length::Fill),
                    button(text("Close").size(font::SM))
                        .style(button::secondary)
                        .on_press(Message::CloseDetails),
                ],
                text(record.format_details()).size(font::NORMAL),
            ]
            .spacing(spacing::MD);

            if !record.estimated_time.is_empty() {
                details = details.push(
                    text(format!("Estimated Time: {}", record.estimated_time))
                        .size(font::NORMAL)
                        .color(colors::TEXT_SECONDARY),
                );
            }
            if !record.job_page_link.is_empty() {
                details = details.push(
                    text(record.job_page_link.as_str())
                        .size(font::SM)
                        .color(colors::LINK),
                );
            }
            details.into()
        }
    };

    container(body)
        .padding(spacing::LG)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::CARD)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}
