// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the image through the viewport transform and
//! turns raw mouse events into viewer messages.

use super::component::Message;
use crate::ui::state::transform::contain_rect;
use crate::ui::state::{ViewportTransform, WheelDirection};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::{image, Action};
use iced::{advanced, border, mouse, Event, Radians, Rectangle, Renderer, Size, Theme};

/// Snapshot of what the canvas needs for one frame.
pub struct ImageCanvas<'a> {
    pub handle: &'a image::Handle,
    pub image_size: Size,
    pub transform: ViewportTransform,
    /// Mirrors the controller's pointer capture.
    pub captured: bool,
    pub can_pan: bool,
}

impl canvas::Program<Message> for ImageCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let Event::Mouse(mouse_event) = event else {
            return None;
        };

        // While captured, positions outside the canvas still count.
        let position = if self.captured {
            cursor.position_from(bounds.position())
        } else {
            cursor.position_in(bounds)
        };

        match mouse_event {
            mouse::Event::WheelScrolled { delta } => {
                let position = cursor.position_in(bounds)?;
                let direction = WheelDirection::from_delta(*delta)?;
                Some(Action::publish(Message::Wheel { position, direction }).and_capture())
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = position?;
                Some(Action::publish(Message::LeftButtonDown(position)).and_capture())
            }
            mouse::Event::CursorMoved { .. } if self.captured => {
                let position = position?;
                Some(Action::publish(Message::CursorMoved(position)).and_capture())
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let action = Action::publish(Message::LeftButtonUp);
                Some(if self.captured {
                    action.and_capture()
                } else {
                    action
                })
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let fitted = contain_rect(self.image_size, bounds.size());
        let target = self.transform.map_rect(fitted);
        if target.width > 0.0 && target.height > 0.0 {
            let image = advanced::image::Image {
                handle: self.handle.clone(),
                filter_method: advanced::image::FilterMethod::Linear,
                rotation: Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: border::Radius::default(),
            };
            frame.draw_image(target, image);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.captured {
            mouse::Interaction::Grabbing
        } else if self.can_pan && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
