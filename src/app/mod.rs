// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the viewer to localization and configuration and
//! turns messages into side effects: decoding the startup image in the
//! background and showing notice dialogs.

pub mod paths;
pub mod startup;

mod message;

pub use message::{Flags, Message};
pub use startup::Startup;

use crate::config::{self, Config, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notice::{self, Notice};
use crate::ui::viewer::component;
use iced::{window, Element, Task};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    /// Path of the image currently shown, once it decoded successfully.
    current_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.current_path)
            .field("viewer_has_image", &self.viewer.has_image())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads preferences, then either starts decoding the startup image or
    /// shows a notice explaining that there is nothing to display.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, _warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let app = Self::with_config(flags.lang, &config);

        let task = match startup::plan(flags.file_path.as_deref(), &app.i18n) {
            Startup::Load(path) => load_image_task(path),
            Startup::Notify(notice) => show_notice(notice),
        };

        (app, task)
    }

    fn with_config(lang: Option<String>, config: &Config) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            viewer: component::State::new(config.viewer.zoom_limits()),
            current_path: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                self.viewer.update(viewer_message);
                Task::none()
            }
            Message::ImageLoaded { path, result } => match result {
                Ok(image) => {
                    self.viewer.set_image(image);
                    self.current_path = Some(path);
                    Task::none()
                }
                Err(error) => {
                    log::error!("failed to load {}: {error}", path.display());
                    show_notice(Notice::load_failed(&self.i18n, &error))
                }
            },
            Message::NoticeClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.viewer
            .view(component::ViewEnv { i18n: &self.i18n })
            .map(Message::Viewer)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.current_path {
            Some(path) => format!("{app_name} - {}", media::display_name(path)),
            None => app_name,
        }
    }
}

fn load_image_task(path: PathBuf) -> Task<Message> {
    log::info!("loading {}", path.display());
    let load_path = path.clone();
    Task::perform(async move { media::load_image(&load_path) }, move |result| {
        Message::ImageLoaded { path, result }
    })
}

fn show_notice(notice: Notice) -> Task<Message> {
    notice::show(notice, Message::NoticeClosed)
}
