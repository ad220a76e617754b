// SPDX-License-Identifier: MPL-2.0
//! Viewport transform value types
//!
//! The displayed image is drawn through a single affine transform: a uniform
//! scale about the canvas origin followed by a translation. These types keep
//! the scale inside its configured limits so the controller never has to
//! re-check them.

use crate::config::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE, DEFAULT_ZOOM_FACTOR};
use iced::{Point, Rectangle, Size, Vector};

/// Bounds and step of wheel zooming.
///
/// Guaranteed to satisfy `0 < min <= 1 <= max` and `factor > 1`, so the
/// natural size is always reachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
    factor: f32,
}

impl ZoomLimits {
    /// Creates limits, returning `None` if the combination is unusable.
    #[must_use]
    pub fn new(min: f32, max: f32, factor: f32) -> Option<Self> {
        let finite = min.is_finite() && max.is_finite() && factor.is_finite();
        if finite && min > 0.0 && min <= DEFAULT_SCALE && max >= DEFAULT_SCALE && factor > 1.0 {
            Some(Self { min, max, factor })
        } else {
            None
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Multiplier applied for one wheel notch towards the user.
    #[must_use]
    pub fn factor(self) -> f32 {
        self.factor
    }

    /// Clamps a raw scale into these limits.
    #[must_use]
    pub fn clamp(self, value: f32) -> Scale {
        Scale(value.clamp(self.min, self.max))
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
            factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

/// Uniform magnification, always within the [`ZoomLimits`] it was clamped by.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// The natural (fitted) size.
    pub const NATURAL: Scale = Scale(DEFAULT_SCALE);

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is drawn larger than its natural size.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > DEFAULT_SCALE
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// Scale about the origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: Scale,
    pub offset: Vector,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: Scale::NATURAL,
            offset: Vector::new(0.0, 0.0),
        }
    }
}

impl ViewportTransform {
    /// Maps a point from untransformed canvas space to screen space.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let s = self.scale.value();
        Point::new(point.x * s, point.y * s) + self.offset
    }

    /// Maps an axis-aligned rectangle through the transform.
    #[must_use]
    pub fn map_rect(&self, rect: Rectangle) -> Rectangle {
        let s = self.scale.value();
        Rectangle::new(
            self.apply(rect.position()),
            Size::new(rect.width * s, rect.height * s),
        )
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == Scale::NATURAL && self.offset == Vector::new(0.0, 0.0)
    }
}

/// Largest rectangle with the image's aspect ratio that fits `bounds`,
/// centered inside it. Coordinates are relative to `bounds`' origin.
#[must_use]
pub fn contain_rect(image_size: Size, bounds: Size) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::new(0.0, 0.0));
    }

    let ratio = (bounds.width / image_size.width).min(bounds.height / image_size.height);
    let fitted = Size::new(image_size.width * ratio, image_size.height * ratio);

    Rectangle::new(
        Point::new(
            (bounds.width - fitted.width) / 2.0,
            (bounds.height - fitted.height) / 2.0,
        ),
        fitted,
    )
}
