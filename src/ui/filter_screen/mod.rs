// SPDX-License-Identifier: MPL-2.0
//! Filter screen: shows an input picture run through the selected filter.
//!
//! Every change to the input, the filter or the amount bumps a render
//! generation and renders on the blocking pool. A finished render is only
//! displayed if its generation is still the newest one, so dragging the
//! slider quickly never leaves an outdated frame on screen.

mod view;

use crate::error::{Error, Result};
use crate::filter::{self, FilterAmount, FilterKind};
use crate::media::{self, extensions, ImageData, EXAMPLE_IMAGE};
use crate::picker::{self, Coordinator, PickerConfiguration, PickerResult, Session};
use iced::Task;
use std::path::{Path, PathBuf};

use crate::app::config::{MAX_FILTER_AMOUNT, MIN_FILTER_AMOUNT};

/// Where the initial input picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// The sample picture embedded in the binary.
    #[default]
    Bundled,
    File(PathBuf),
}

impl InputSource {
    fn display_name(&self) -> String {
        match self {
            InputSource::Bundled => file_stem(Path::new(EXAMPLE_IMAGE)),
            InputSource::File(path) => file_stem(path),
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Initial input finished decoding.
    Loaded(Result<ImageData>),
    FilterSelected(FilterKind),
    AmountChanged(f32),
    AmountReleased,
    Rendered {
        generation: u64,
        image: Option<ImageData>,
    },
    /// Open the picker to replace the input picture.
    SelectImage,
    PickerFinished {
        session: Session,
        results: Vec<PickerResult>,
    },
    ImageLoaded {
        session: Session,
        name: String,
        result: Result<ImageData>,
    },
    Save,
    SaveDialogClosed(Option<PathBuf>),
    Saved(Result<PathBuf>),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Filter or amount settled; store them in the config file.
    PersistPreferences,
    /// Remember this directory for the next file dialog.
    RememberDirectory(PathBuf),
}

#[derive(Debug)]
pub struct State {
    input: Option<ImageData>,
    input_name: String,
    output: Option<ImageData>,
    kind: FilterKind,
    amount: FilterAmount,
    generation: u64,
    rendering: bool,
    coordinator: Coordinator,
    last_directory: Option<PathBuf>,
    saved_to: Option<PathBuf>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(FilterKind::default(), FilterAmount::default(), None)
    }
}

impl State {
    #[must_use]
    pub fn new(kind: FilterKind, amount: FilterAmount, last_directory: Option<PathBuf>) -> Self {
        Self {
            input: None,
            input_name: InputSource::Bundled.display_name(),
            output: None,
            kind,
            amount: clamp_amount(amount.value()),
            generation: 0,
            rendering: false,
            coordinator: Coordinator::new(),
            last_directory,
            saved_to: None,
        }
    }

    /// Starts decoding the initial input picture.
    pub fn load(&mut self, source: InputSource) -> Task<Message> {
        self.input_name = source.display_name();
        Task::perform(load_source(source), Message::Loaded)
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn amount(&self) -> FilterAmount {
        self.amount
    }

    pub fn input(&self) -> Option<&ImageData> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&ImageData> {
        self.output.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn is_picker_presented(&self) -> bool {
        self.coordinator.is_presented()
    }

    pub fn saved_to(&self) -> Option<&PathBuf> {
        self.saved_to.as_ref()
    }

    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    pub fn set_last_directory(&mut self, directory: PathBuf) {
        self.last_directory = Some(directory);
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded(result) => (Effect::None, self.replace_input(result)),
            Message::FilterSelected(kind) => {
                if kind == self.kind {
                    return (Effect::None, Task::none());
                }
                self.kind = kind;
                (Effect::PersistPreferences, self.rerender())
            }
            Message::AmountChanged(value) => {
                let amount = clamp_amount(value);
                if amount == self.amount {
                    return (Effect::None, Task::none());
                }
                self.amount = amount;
                (Effect::None, self.rerender())
            }
            Message::AmountReleased => (Effect::PersistPreferences, Task::none()),
            Message::Rendered { generation, image } => {
                if generation != self.generation {
                    tracing::debug!(generation, newest = self.generation, "dropping stale render");
                    return (Effect::None, Task::none());
                }
                self.rendering = false;
                match image {
                    Some(image) => self.output = Some(image),
                    None => tracing::debug!(generation, "filter produced no output"),
                }
                (Effect::None, Task::none())
            }
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
                let name = file_stem(&path);
                let task = Task::perform(picker::load_selection(path), move |result| {
                    Message::ImageLoaded {
                        session,
                        name,
                        result,
                    }
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
            Message::ImageLoaded {
                session,
                name,
                result,
            } => {
                if !self.coordinator.accepts(session) {
                    tracing::debug!(?session, "dropping image from superseded picker session");
                    return (Effect::None, Task::none());
                }
                if result.is_ok() {
                    self.input_name = name;
                }
                (Effect::None, self.replace_input(result))
            }
            Message::Save => {
                if self.output.is_none() {
                    return (Effect::None, Task::none());
                }
                let file_name = format!("{}-{}.png", self.input_name, self.kind.id());
                (
                    Effect::None,
                    Task::perform(
                        pick_save_path(self.last_directory.clone(), file_name),
                        Message::SaveDialogClosed,
                    ),
                )
            }
            Message::SaveDialogClosed(None) => (Effect::None, Task::none()),
            Message::SaveDialogClosed(Some(path)) => match self.output.clone() {
                Some(image) => (
                    Effect::None,
                    Task::perform(save_off_thread(image, path), Message::Saved),
                ),
                None => (Effect::None, Task::none()),
            },
            Message::Saved(Ok(path)) => {
                tracing::debug!(path = %path.display(), "saved filtered image");
                let effect = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    Some(dir) => {
                        self.last_directory = Some(dir.to_path_buf());
                        Effect::RememberDirectory(dir.to_path_buf())
                    }
                    None => Effect::None,
                };
                self.saved_to = Some(path);
                (effect, Task::none())
            }
            Message::Saved(Err(err)) => {
                tracing::warn!(%err, "failed to save filtered image");
                (Effect::None, Task::none())
            }
        }
    }

    fn replace_input(&mut self, result: Result<ImageData>) -> Task<Message> {
        match result {
            Ok(image) => {
                tracing::debug!(width = image.width, height = image.height, "input image loaded");
                self.input = Some(image);
                self.output = None;
                self.saved_to = None;
                self.rerender()
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load input image");
                Task::none()
            }
        }
    }

    fn rerender(&mut self) -> Task<Message> {
        let Some(input) = self.input.clone() else {
            return Task::none();
        };
        self.generation += 1;
        self.rendering = true;
        let generation = self.generation;
        Task::perform(
            render_off_thread(self.kind, self.amount, input),
            move |image| Message::Rendered { generation, image },
        )
    }
}

fn clamp_amount(value: f32) -> FilterAmount {
    FilterAmount::new(value.clamp(MIN_FILTER_AMOUNT, MAX_FILTER_AMOUNT))
}

async fn load_source(source: InputSource) -> Result<ImageData> {
    match source {
        InputSource::Bundled => tokio::task::spawn_blocking(|| media::load_bundled(EXAMPLE_IMAGE))
            .await
            .map_err(|e| Error::Io(e.to_string()))?,
        InputSource::File(path) => picker::load_selection(path).await,
    }
}

async fn render_off_thread(
    kind: FilterKind,
    amount: FilterAmount,
    input: ImageData,
) -> Option<ImageData> {
    match tokio::task::spawn_blocking(move || filter::render(kind, amount, &input)).await {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(%err, "render task failed");
            None
        }
    }
}

async fn save_off_thread(image: ImageData, path: PathBuf) -> Result<PathBuf> {
    tokio::task::spawn_blocking(move || media::save_image(&image, &path).map(|()| path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

async fn pick_save_path(directory: Option<PathBuf>, file_name: String) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_file_name(file_name);
    for (name, exts) in extensions::IMAGE_SAVE_FILTERS {
        dialog = dialog.add_filter(*name, *exts);
    }
    if let Some(dir) = directory.filter(|d| d.exists()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file().await.map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn sample(value: u8) -> ImageData {
        ImageData::from_rgba(4, 4, vec![value; 4 * 4 * 4])
    }

    fn loaded_state() -> State {
        let mut state = State::default();
        let _ = state.handle_message(Message::Loaded(Ok(sample(10))));
        state
    }

    #[test]
    fn new_state_clamps_amount_to_slider_range() {
        let state = State::new(FilterKind::SepiaTone, FilterAmount::new(4.0), None);
        assert_eq!(state.amount().value(), MAX_FILTER_AMOUNT);
        assert_eq!(state.kind(), FilterKind::SepiaTone);
    }

    #[test]
    fn loading_input_starts_a_render() {
        let state = loaded_state();
        assert_eq!(state.input(), Some(&sample(10)));
        assert_eq!(state.generation(), 1);
        assert!(state.is_rendering());
        assert!(state.output().is_none());
    }

    #[test]
    fn failed_load_silently_keeps_state() {
        let mut state = State::default();
        let (effect, _) =
            state.handle_message(Message::Loaded(Err(Error::MissingAsset("x.png".into()))));
        assert_eq!(effect, Effect::None);
        assert!(state.input().is_none());
        assert_eq!(state.generation(), 0);
        assert!(!state.is_rendering());
    }

    #[test]
    fn failed_replacement_keeps_current_input() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::SelectImage);
        let session = state.coordinator.current_session();

        let _ = state.handle_message(Message::ImageLoaded {
            session,
            name: "broken".into(),
            result: Err(Error::Decode("truncated".into())),
        });
        assert_eq!(state.input(), Some(&sample(10)));
        assert_eq!(state.generation(), 1);
        assert_eq!(state.input_name, "example");
    }

    #[test]
    fn newest_render_is_displayed() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::Rendered {
            generation: 1,
            image: Some(sample(99)),
        });
        assert_eq!(state.output(), Some(&sample(99)));
        assert!(!state.is_rendering());
    }

    #[test]
    fn stale_render_is_dropped() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::AmountChanged(0.3));
        assert_eq!(state.generation(), 2);

        let _ = state.handle_message(Message::Rendered {
            generation: 1,
            image: Some(sample(1)),
        });
        assert!(state.output().is_none());
        assert!(state.is_rendering());
    }

    #[test]
    fn empty_render_keeps_previous_output() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::Rendered {
            generation: 1,
            image: Some(sample(50)),
        });
        let _ = state.handle_message(Message::AmountChanged(0.5));
        let _ = state.handle_message(Message::Rendered {
            generation: 2,
            image: None,
        });
        assert_eq!(state.output(), Some(&sample(50)));
    }

    #[test]
    fn amount_is_clamped_and_persisted_on_release() {
        let mut state = loaded_state();
        let (effect, _) = state.handle_message(Message::AmountChanged(-2.0));
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(state.amount().value(), 0.0, epsilon = F32_EPSILON);

        let (effect, _) = state.handle_message(Message::AmountChanged(1.7));
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(state.amount().value(), 1.0, epsilon = F32_EPSILON);

        let (effect, _) = state.handle_message(Message::AmountReleased);
        assert_eq!(effect, Effect::PersistPreferences);
    }

    #[test]
    fn unchanged_amount_does_not_rerender() {
        let mut state = loaded_state();
        let amount = state.amount().value();
        let _ = state.handle_message(Message::AmountChanged(amount));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn selecting_a_filter_rerenders_and_persists() {
        let mut state = loaded_state();
        let (effect, _) = state.handle_message(Message::FilterSelected(FilterKind::Vignette));
        assert_eq!(effect, Effect::PersistPreferences);
        assert_eq!(state.kind(), FilterKind::Vignette);
        assert_eq!(state.generation(), 2);

        let (effect, _) = state.handle_message(Message::FilterSelected(FilterKind::Vignette));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn filter_change_without_input_does_not_render() {
        let mut state = State::default();
        let _ = state.handle_message(Message::FilterSelected(FilterKind::Pixellate));
        assert_eq!(state.generation(), 0);
        assert!(!state.is_rendering());
    }

    #[test]
    fn cancelled_picker_leaves_input_unchanged() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::SelectImage);
        assert!(state.is_picker_presented());
        let session = state.coordinator.current_session();

        let (effect, _) = state.handle_message(Message::PickerFinished {
            session,
            results: Vec::new(),
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_picker_presented());
        assert_eq!(state.input(), Some(&sample(10)));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn picked_image_replaces_input() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::SelectImage);
        let session = state.coordinator.current_session();

        let (effect, _) = state.handle_message(Message::PickerFinished {
            session,
            results: vec![PickerResult::new("/photos/cat.png")],
        });
        assert_eq!(effect, Effect::RememberDirectory(PathBuf::from("/photos")));
        assert_eq!(state.last_directory(), Some(Path::new("/photos")));

        let _ = state.handle_message(Message::ImageLoaded {
            session,
            name: "cat".into(),
            result: Ok(sample(200)),
        });
        assert_eq!(state.input(), Some(&sample(200)));
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn image_from_superseded_session_is_ignored() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::SelectImage);
        let old = state.coordinator.current_session();
        let _ = state.handle_message(Message::SelectImage);

        let _ = state.handle_message(Message::ImageLoaded {
            session: old,
            name: "old".into(),
            result: Ok(sample(1)),
        });
        assert_eq!(state.input(), Some(&sample(10)));
    }

    #[test]
    fn save_without_output_is_ignored() {
        let mut state = loaded_state();
        let (effect, _) = state.handle_message(Message::Save);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn successful_save_remembers_directory() {
        let mut state = loaded_state();
        let path = PathBuf::from("/exports/out.png");
        let (effect, _) = state.handle_message(Message::Saved(Ok(path.clone())));
        assert_eq!(effect, Effect::RememberDirectory(PathBuf::from("/exports")));
        assert_eq!(state.saved_to(), Some(&path));
    }

    #[test]
    fn failed_save_changes_nothing() {
        let mut state = loaded_state();
        let (effect, _) =
            state.handle_message(Message::Saved(Err(Error::Encode("unsupported".into()))));
        assert_eq!(effect, Effect::None);
        assert!(state.saved_to().is_none());
        assert!(state.last_directory().is_none());
    }

    #[test]
    fn input_source_names_default_file() {
        assert_eq!(InputSource::Bundled.display_name(), "example");
        assert_eq!(
            InputSource::File(PathBuf::from("/a/holiday.jpeg")).display_name(),
            "holiday"
        );
    }
}
