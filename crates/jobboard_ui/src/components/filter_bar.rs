//! Filter and sort controls.

use std::fmt;

use iced::widget::{button, pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

use jobboard_core::listing::Criterion;
use jobboard_core::models::{Dimension, SortKey};

use crate::app::{App, Message};
use crate::theme::{font, spacing};

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterChoice {
    #[default]
    All,
    Value(String),
}

impl FilterChoice {
    /// "All" followed by each distinct value.
    pub fn options(values: &[String]) -> Vec<FilterChoice> {
        std::iter::once(FilterChoice::All)
            .chain(values.iter().cloned().map(FilterChoice::Value))
            .collect()
    }

    pub fn to_criterion(&self) -> Criterion {
        match self {
            FilterChoice::All => Criterion::All,
            FilterChoice::Value(v) => Criterion::exact(v.clone()),
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::All => write!(f, "All"),
            FilterChoice::Value(v) if v.is_empty() => write!(f, "(blank)"),
            FilterChoice::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Level/Type/Skill dropdowns with Filter and Clear buttons.
pub fn filters(app: &App) -> Element<'_, Message> {
    let loaded = app.board.is_loaded();

    let mut controls = row![].spacing(spacing::SM).align_y(Alignment::Center);
    for dimension in Dimension::ALL {
        let options = FilterChoice::options(app.facets.get(dimension));
        let selected = app.pending_filter(dimension).clone();
        controls = controls
            .push(text(format!("{}:", dimension)).size(font::NORMAL))
            .push(
                pick_list(options, Some(selected), move |choice| {
                    Message::FilterChanged(dimension, choice)
                })
                .text_size(font::NORMAL)
                .width(Length::Fixed(160.0)),
            );
    }

    controls
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("Filter").size(font::NORMAL))
                .on_press_maybe(loaded.then_some(Message::ApplyFilter)),
        )
        .push(
            button(text("Clear").size(font::NORMAL))
                .style(button::secondary)
                .on_press_maybe(loaded.then_some(Message::ClearFilters)),
        )
        .into()
}

/// Sort order dropdown with Sort button.
pub fn sorting(app: &App) -> Element<'_, Message> {
    row![
        text("Sort by:").size(font::NORMAL),
        pick_list(SortKey::ALL, app.pending_sort, Message::SortChanged)
            .placeholder("File order")
            .text_size(font::NORMAL)
            .width(Length::Fixed(220.0)),
        button(text("Sort").size(font::NORMAL)).on_press_maybe(
            (app.board.is_loaded() && app.pending_sort.is_some()).then_some(Message::ApplySort)
        ),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}
