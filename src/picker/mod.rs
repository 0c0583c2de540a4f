// SPDX-License-Identifier: MPL-2.0
//! Native image picker bridged into the update loop.
//!
//! The picker itself is the platform file dialog (`rfd`). The
//! [`Coordinator`] plays the delegate: it opens a *session* each time the
//! dialog is presented, receives the dialog's results when it closes, and
//! decides whether they describe exactly one image worth loading. The decode
//! runs off the UI thread and comes back as a message tagged with its
//! session, so a slow load from an older session can never overwrite a newer
//! selection.
//!
//! ```ignore
//! let task = coordinator.present(config, |session, results| {
//!     Message::PickerFinished { session, results }
//! });
//! // later, in update:
//! if let Some(path) = coordinator.did_finish_picking(session, results) {
//!     return Task::perform(picker::load_selection(path), move |result| {
//!         Message::ImageLoaded { session, result }
//!     });
//! }
//! ```

use crate::error::{Error, Result};
use crate::media::{self, extensions, ImageData};
use iced::Task;
use std::path::{Path, PathBuf};

/// How the picker is presented. The dialog only offers image files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfiguration {
    /// Maximum number of files the user may pick; `0` means unlimited.
    pub selection_limit: usize,
    /// Directory the dialog opens in, when it still exists.
    pub starting_directory: Option<PathBuf>,
}

impl Default for PickerConfiguration {
    fn default() -> Self {
        Self {
            selection_limit: 1,
            starting_directory: None,
        }
    }
}

impl PickerConfiguration {
    #[must_use]
    pub fn with_starting_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.starting_directory = directory;
        self
    }

    fn dialog(&self) -> rfd::AsyncFileDialog {
        let mut dialog =
            rfd::AsyncFileDialog::new().add_filter("Images", extensions::IMAGE_EXTENSIONS);
        if let Some(dir) = &self.starting_directory {
            if dir.exists() {
                dialog = dialog.set_directory(dir);
            }
        }
        dialog
    }
}

/// One item chosen in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerResult {
    pub path: PathBuf,
}

impl PickerResult {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the item is image-typed, judged by its extension.
    #[must_use]
    pub fn is_image(&self) -> bool {
        media::is_image_path(&self.path)
    }

    /// Directory containing the item, remembered for the next presentation.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

/// Identifies one presentation of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Session(u64);

/// Delegate between the native dialog and the view state.
#[derive(Debug, Default)]
pub struct Coordinator {
    presented: bool,
    current: Session,
}

impl Coordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Session of the latest presentation.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.current
    }

    /// Opens a new session, superseding any earlier one.
    pub fn begin(&mut self) -> Session {
        self.current = Session(self.current.0 + 1);
        self.presented = true;
        self.current
    }

    /// Presents the native dialog and maps its results through `on_finish`.
    pub fn present<M>(
        &mut self,
        config: PickerConfiguration,
        on_finish: impl Fn(Session, Vec<PickerResult>) -> M + Send + 'static,
    ) -> Task<M>
    where
        M: Send + 'static,
    {
        let session = self.begin();
        tracing::debug!(?session, ?config, "presenting image picker");
        Task::perform(run_dialog(config), move |results| on_finish(session, results))
    }

    /// Dismisses the picker and returns the path to load, if any.
    ///
    /// A path is returned only when `session` is the current one and exactly
    /// one image-typed item was chosen. Results of a superseded session leave
    /// the current presentation untouched.
    pub fn did_finish_picking(
        &mut self,
        session: Session,
        results: Vec<PickerResult>,
    ) -> Option<PathBuf> {
        if session != self.current {
            tracing::debug!(?session, current = ?self.current, "ignoring stale picker session");
            return None;
        }
        self.presented = false;

        match <[PickerResult; 1]>::try_from(results) {
            Ok([single]) if single.is_image() => Some(single.path),
            Ok([single]) => {
                tracing::debug!(path = %single.path.display(), "picked item is not an image");
                None
            }
            Err(results) => {
                tracing::debug!(count = results.len(), "picker closed without a single selection");
                None
            }
        }
    }

    /// Whether an image loaded for `session` may still be displayed.
    #[must_use]
    pub fn accepts(&self, session: Session) -> bool {
        session == self.current
    }
}

async fn run_dialog(config: PickerConfiguration) -> Vec<PickerResult> {
    let dialog = config.dialog();
    let handles = if config.selection_limit == 1 {
        dialog.pick_file().await.into_iter().collect()
    } else {
        dialog.pick_files().await.unwrap_or_default()
    };

    let mut results: Vec<PickerResult> = handles
        .into_iter()
        .map(|handle| PickerResult::new(handle.path()))
        .collect();
    if config.selection_limit > 0 {
        results.truncate(config.selection_limit);
    }
    results
}

/// Decodes the picked file on the blocking pool.
///
/// # Errors
///
/// Returns the decode error, or [`Error::Io`] if the blocking task itself
/// could not complete.
pub async fn load_selection(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || media::load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}
