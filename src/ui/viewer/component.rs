// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.

use super::canvas::ImageCanvas;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::state::{ViewportTransformController, WheelDirection, ZoomLimits};
use iced::widget::{Canvas, Container, Text};
use iced::{alignment, Element, Length, Point};

/// Messages emitted by the viewer canvas, one per pointer gesture.
#[derive(Debug, Clone)]
pub enum Message {
    Wheel {
        position: Point,
        direction: WheelDirection,
    },
    LeftButtonDown(Point),
    CursorMoved(Point),
    LeftButtonUp,
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
#[derive(Debug, Default)]
pub struct State {
    image: Option<ImageData>,
    controller: ViewportTransformController,
}

impl State {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            image: None,
            controller: ViewportTransformController::new(limits),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn controller(&self) -> &ViewportTransformController {
        &self.controller
    }

    /// Shows a freshly loaded image at its natural scale.
    pub fn set_image(&mut self, image: ImageData) {
        self.controller = ViewportTransformController::new(self.controller.limits());
        self.image = Some(image);
    }

    pub fn update(&mut self, message: Message) {
        // Nothing to zoom or pan until an image is shown.
        if self.image.is_none() {
            return;
        }

        match message {
            Message::Wheel {
                position,
                direction,
            } => {
                self.controller.on_wheel(position, direction);
            }
            Message::LeftButtonDown(position) => {
                self.controller.on_left_button_down(position);
            }
            Message::CursorMoved(position) => {
                self.controller.on_mouse_move(position);
            }
            Message::LeftButtonUp => self.controller.on_left_button_up(),
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let Some(image) = &self.image else {
            return Container::new(Text::new(env.i18n.tr("viewer-empty")))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into();
        };

        Canvas::new(ImageCanvas {
            handle: &image.handle,
            image_size: image.size(),
            transform: self.controller.transform(),
            captured: self.controller.has_pointer_capture(),
            can_pan: self.controller.can_pan(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
