//! Clickable list of job titles.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Theme};

use jobboard_core::models::JobRecord;

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Shown when nothing is loaded or the filter matches nothing.
pub const EMPTY_TEXT: &str = "No jobs to display. Please upload a JSON file or adjust filters.";

pub fn view<'a>(records: &'a [JobRecord], selected: Option<usize>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if records.is_empty() {
        container(text(EMPTY_TEXT).size(font::NORMAL).color(colors::TEXT_MUTED))
            .padding(30)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    } else {
        let rows: Vec<Element<'a, Message>> = records
            .iter()
            .enumerate()
            .map(|(idx, record)| job_row(idx, record, selected == Some(idx)))
            .collect();

        scrollable(column(rows).spacing(2).padding([0.0, spacing::SM]))
            .height(Length::Fill)
            .into()
    };

    container(body)
        .padding(spacing::XS)
        .width(Length::FillPortion(3))
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

fn job_row(idx: usize, record: &JobRecord, is_selected: bool) -> Element<'_, Message> {
    let title = if record.title.is_empty() {
        "(untitled)"
    } else {
        record.title.as_str()
    };

    let content = row![
        text(title).size(font::NORMAL),
        Space::new().width(Length::Fill),
        text(record.posted_raw.as_str())
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM);

    button(content)
        .width(Length::Fill)
        .style(if is_selected {
            button::primary
        } else {
            button::text
        })
        .on_press(Message::JobSelected(idx))
        .into()
}
