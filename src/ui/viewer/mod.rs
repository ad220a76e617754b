// SPDX-License-Identifier: MPL-2.0
//! Image viewer: the zoomable, pannable canvas and its component state.

pub mod canvas;
pub mod component;
