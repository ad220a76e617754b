// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` or a test directory
//! 2. **Environment variable** - `YF_IMAGE_DECK_CONFIG_DIR`
//! 3. **Platform default** - via the `dirs` crate
//!    - Linux: `~/.config/YFImageDeck/`
//!    - macOS: `~/Library/Application Support/YFImageDeck/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\YFImageDeck\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "YFImageDeck";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "YF_IMAGE_DECK_CONFIG_DIR";

/// Returns the application config directory, honouring the override chain.
///
/// Returns `None` only when no override is given and the platform has no
/// config directory.
#[must_use]
pub fn get_app_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Some(dir) = env_dir(ENV_CONFIG_DIR) {
        return Some(dir);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Reads a directory from the environment, ignoring empty values.
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
