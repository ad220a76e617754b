// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Fluent bundles for every `.ftl` file under `assets/i18n/` are embedded in
//! the binary. The active locale comes from the CLI, then the config file,
//! then the system settings, and finally `en-US`.

pub mod fluent;
