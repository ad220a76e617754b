// SPDX-License-Identifier: MPL-2.0
//! `yf_image_deck` is a minimal single-image viewer built with the Iced GUI
//! framework.
//!
//! It opens the image given on the command line, zooms with the mouse wheel
//! around the cursor and pans by dragging once the image is magnified. The
//! zoom/pan model lives in [`ui::state`] and has no window dependency.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
