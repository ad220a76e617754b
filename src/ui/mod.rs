// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod notice;
pub mod state;
pub mod viewer;
