// SPDX-License-Identifier: MPL-2.0
use super::{Message, State};
use crate::app::config::{FILTER_AMOUNT_STEP, MAX_FILTER_AMOUNT, MIN_FILTER_AMOUNT};
use crate::filter::FilterKind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::empty_state::{self, Labels};
use crate::ui::styles;
use iced::widget::{button, image, pick_list, slider, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::fmt;

/// Pick list entry carrying a translated label.
#[derive(Debug, Clone)]
struct FilterChoice {
    kind: FilterKind,
    label: String,
}

impl PartialEq for FilterChoice {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn choice(i18n: &I18n, kind: FilterKind) -> FilterChoice {
    FilterChoice {
        kind,
        label: i18n.tr(&format!("filter-{}", kind.id())),
    }
}

impl State {
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let preview: Element<'a, Message> = match self.output.as_ref().or(self.input.as_ref()) {
            Some(shown) => Container::new(
                image(shown.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => empty_state::view(
                i18n,
                Labels {
                    title: "filter-empty-title",
                    subtitle: "filter-empty-subtitle",
                    button: "select-image-button",
                },
                (!self.coordinator.is_presented()).then_some(Message::SelectImage),
            ),
        };

        Row::new()
            .push(preview)
            .push(self.controls(i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn controls<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let choices: Vec<FilterChoice> = FilterKind::ALL
            .into_iter()
            .map(|kind| choice(i18n, kind))
            .collect();
        let selected = Some(choice(i18n, self.kind));
        let filter_picker = pick_list(choices, selected, |c: FilterChoice| {
            Message::FilterSelected(c.kind)
        })
        .width(Length::Fill);

        let amount = self.amount.value();
        let amount_label = Text::new(
            i18n.tr_with_args("filter-amount-label", &[("amount", &format!("{amount:.2}"))]),
        )
        .size(typography::BODY);
        let amount_slider = slider(MIN_FILTER_AMOUNT..=MAX_FILTER_AMOUNT, amount, Message::AmountChanged)
            .step(FILTER_AMOUNT_STEP)
            .on_release(Message::AmountReleased);

        let change_button = button(Text::new(i18n.tr("filter-change-image-button")))
            .width(Length::Fill)
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::secondary)
            .on_press_maybe((!self.coordinator.is_presented()).then_some(Message::SelectImage));

        let save_button = button(Text::new(i18n.tr("filter-save-button")))
            .width(Length::Fill)
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::primary)
            .on_press_maybe(self.output.is_some().then_some(Message::Save));

        let mut column = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(sizing::CONTROLS_WIDTH)
            .push(Text::new(i18n.tr("filter-section-title")).size(typography::TITLE_SM))
            .push(filter_picker)
            .push(amount_label)
            .push(amount_slider)
            .push(change_button)
            .push(save_button);

        if let Some(input) = &self.input {
            column = column.push(
                Text::new(i18n.tr_with_args(
                    "filter-image-size",
                    &[
                        ("width", &input.width.to_string()),
                        ("height", &input.height.to_string()),
                    ],
                ))
                .size(typography::CAPTION),
            );
        }

        if self.rendering {
            column = column.push(Text::new(i18n.tr("filter-rendering")).size(typography::CAPTION));
        }

        if let Some(path) = &self.saved_to {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            column = column.push(
                Text::new(i18n.tr_with_args("filter-saved", &[("name", &name)]))
                    .size(typography::CAPTION),
            );
        }

        Container::new(column)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Top)
            .style(styles::container::toolbar)
            .into()
    }
}
