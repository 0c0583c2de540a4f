// SPDX-License-Identifier: MPL-2.0
//! Picker screen: a single picture chosen through the native picker.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::picker::{self, Coordinator, PickerConfiguration, PickerResult, Session};
use crate::ui::design_tokens::spacing;
use crate::ui::empty_state::{self, Labels};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Task};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    SelectImage,
    PickerFinished {
        session: Session,
        results: Vec<PickerResult>,
    },
    ImageLoaded {
        session: Session,
        result: Result<ImageData>,
    },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    RememberDirectory(PathBuf),
}

#[derive(Debug, Default)]
pub struct State {
    image: Option<ImageData>,
    coordinator: Coordinator,
    last_directory: Option<PathBuf>,
}

impl State {
    #[must_use]
    pub fn new(last_directory: Option<PathBuf>) -> Self {
        Self {
            last_directory,
            ..Self::default()
        }
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn is_picker_presented(&self) -> bool {
        self.coordinator.is_presented()
    }

    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    pub fn current_session(&self) -> Session {
        self.coordinator.current_session()
    }

    pub fn set_last_directory(&mut self, directory: PathBuf) {
        self.last_directory = Some(directory);
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::SelectImage => {
                let config = PickerConfiguration::default()
                    .with_starting_directory(self.last_directory.clone());
                let task = self
                    .coordinator
                    .present(config, |session, results| Message::PickerFinished {
                        session,
                        results,
                    });
                (Effect::None, task)
            }
            Message::PickerFinished { session, results } => {
                let directory = results
                    .first()
                    .and_then(PickerResult::directory)
                    .map(PathBuf::from);
                let Some(path) = self.coordinator.did_finish_picking(session, results) else {
                    return (Effect::None, Task::none());
                };
                let task = Task::perform(picker::load_selection(path), move |result| {
                    Message::ImageLoaded { session, result }
                });
                let effect = match directory {
                    Some(dir) => {
                        self.last_directory = Some(dir.clone());
                        Effect::RememberDirectory(dir)
                    }
                    None => Effect::None,
                };
                (effect, task)
            }
            Message::ImageLoaded { session, result } => {
                if !self.coordinator.accepts(session) {
                    tracing::debug!(?session, "dropping image from superseded picker session");
                    return (Effect::None, Task::none());
                }
                match result {
                    Ok(image) => self.image = Some(image),
                    Err(err) => tracing::warn!(%err, "failed to load picked image"),
                }
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let on_select = (!self.coordinator.is_presented()).then_some(Message::SelectImage);

        let Some(picked) = &self.image else {
            return empty_state::view(
                i18n,
                Labels {
                    title: "picker-empty-title",
                    subtitle: "picker-empty-subtitle",
                    button: "select-image-button",
                },
                on_select,
            );
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                image(picked.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                button(Text::new(i18n.tr("select-image-button")))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary)
                    .on_press_maybe(on_select),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
