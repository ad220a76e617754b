// SPDX-License-Identifier: MPL-2.0
//! Modal notices for the user.
//!
//! The application decides *what* to tell the user as a [`Notice`]; showing
//! it is left to the system message dialog provided by `rfd`.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use iced::Task;

/// How serious a notice is; picks the dialog icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message to show in a blocking dialog with a single OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// No usable path was given on the command line.
    #[must_use]
    pub fn no_image(i18n: &I18n) -> Self {
        Self {
            severity: Severity::Info,
            title: i18n.tr("notice-no-image-title"),
            message: i18n.tr("notice-no-image-message"),
        }
    }

    /// Decoding or reading the image failed.
    #[must_use]
    pub fn load_failed(i18n: &I18n, error: &Error) -> Self {
        let detail = error.to_string();
        Self {
            severity: Severity::Error,
            title: i18n.tr("notice-load-error-title"),
            message: i18n.tr_with_args("notice-load-error-message", &[("error", &detail)]),
        }
    }
}

impl From<Severity> for rfd::MessageLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => rfd::MessageLevel::Info,
            Severity::Error => rfd::MessageLevel::Error,
        }
    }
}

/// Shows `notice` in a system message dialog and emits `on_close` once the
/// user dismisses it.
pub fn show<Message>(notice: Notice, on_close: Message) -> Task<Message>
where
    Message: Send + 'static,
{
    log::info!("showing notice: {}", notice.message);

    // Build the dialog inside the task so nothing touches the windowing
    // system until the runtime polls it.
    let dialog = async move {
        rfd::AsyncMessageDialog::new()
            .set_level(notice.severity.into())
            .set_title(notice.title)
            .set_description(notice.message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await
    };

    Task::perform(dialog, move |_| on_close)
}
