// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale applied when an image is first shown (1.0 = fitted size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Smallest scale the wheel can reach.
pub const DEFAULT_MIN_SCALE: f32 = 0.5;

/// Largest scale the wheel can reach.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Multiplicative step applied per wheel notch.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.1;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MIN_SCALE > 0.0);
    assert!(DEFAULT_MIN_SCALE <= DEFAULT_SCALE);
    assert!(DEFAULT_MAX_SCALE >= DEFAULT_SCALE);
    assert!(DEFAULT_ZOOM_FACTOR > 1.0);
    assert!(WINDOW_DEFAULT_WIDTH > 0.0);
    assert!(WINDOW_DEFAULT_HEIGHT > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert_eq!(DEFAULT_MIN_SCALE, 0.5);
        assert_eq!(DEFAULT_MAX_SCALE, 5.0);
        assert!(DEFAULT_MIN_SCALE < DEFAULT_SCALE);
        assert!(DEFAULT_MAX_SCALE > DEFAULT_SCALE);
    }

    #[test]
    fn zoom_factor_default_is_ten_percent() {
        assert!((DEFAULT_ZOOM_FACTOR - 1.1).abs() < f32::EPSILON);
    }
}
