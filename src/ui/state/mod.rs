// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state behind the viewer, kept free of widget code so it can be unit
//! tested without a window.

pub mod controller;
pub mod drag;
pub mod transform;

// Re-export commonly used types for convenience
pub use controller::{ViewportTransformController, WheelDirection};
pub use drag::DragState;
pub use transform::{Scale, ViewportTransform, ZoomLimits};
