//! I/O helpers for pictures and JSON.
//!
//! - `load_picture`: decode any supported file into a [`Picture`].
//! - `save_picture`: write any [`PictureView`] (transposed or not) as JPEG/PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{OutputFormat, Picture, PictureView};
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn load_picture(path: &Path) -> Result<Picture> {
    Picture::open(path)
}

/// Save a view to `path`, copying it into row-major order first.
///
/// The extension is validated before any pixels are copied.
pub fn save_picture<V: PictureView + Sync + ?Sized>(view: &V, path: &Path) -> Result<()> {
    OutputFormat::from_path(path)?;
    Picture::from_view(view)?.save(path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> std::result::Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Create the directory that will hold `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
