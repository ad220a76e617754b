// SPDX-License-Identifier: MPL-2.0
//! What the application does first, decided from the launch argument.

use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notice::Notice;
use std::path::PathBuf;

/// The single action taken at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Decode this image in the background.
    Load(PathBuf),
    /// Nothing to show; tell the user how to open an image.
    Notify(Notice),
}

/// Chooses between loading the argument and explaining why nothing is shown.
#[must_use]
pub fn plan(file_arg: Option<&str>, i18n: &I18n) -> Startup {
    match media::resolve_startup_path(file_arg) {
        Some(path) => Startup::Load(path),
        None => Startup::Notify(Notice::no_image(i18n)),
    }
}
