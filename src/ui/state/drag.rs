// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a magnified image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor position at the previous drag step
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Advances the drag to `position` and returns how far the cursor moved
    /// since the previous step.
    ///
    /// Returns `None` when no drag is active.
    pub fn advance(&mut self, position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let last = self.last_position.replace(position)?;
        Some(position - last)
    }
}
