// SPDX-License-Identifier: MPL-2.0
//! Loading the single image the viewer is launched with.

pub mod image;

use std::path::{Path, PathBuf};

pub use image::{load_image, ImageData};

/// Turns the launch argument into a path worth loading.
///
/// Returns `None` when no argument was given or the path is not a regular
/// file.
#[must_use]
pub fn resolve_startup_path(arg: Option<&str>) -> Option<PathBuf> {
    let raw = arg.filter(|s| !s.trim().is_empty())?;
    let path = Path::new(raw);

    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        log::warn!("startup path is not a file: {}", path.display());
        None
    }
}

/// File name shown in the window title.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_argument_resolves_to_none() {
        assert_eq!(resolve_startup_path(None), None);
        assert_eq!(resolve_startup_path(Some("   ")), None);
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone.png");

        assert_eq!(resolve_startup_path(missing.to_str()), None);
    }

    #[test]
    fn directory_argument_resolves_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        assert_eq!(resolve_startup_path(temp_dir.path().to_str()), None);
    }

    #[test]
    fn existing_file_resolves_to_its_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = temp_dir.path().join("photo.png");
        std::fs::write(&file, b"whatever").expect("failed to write file");

        assert_eq!(resolve_startup_path(file.to_str()), Some(file));
    }

    #[test]
    fn display_name_uses_base_name() {
        assert_eq!(
            display_name(Path::new("/home/user/Pictures/cat.jpeg")),
            "cat.jpeg"
        );
    }
}
