#![allow(dead_code)]

pub mod synthetic_image;

use std::path::PathBuf;

/// Unique path in the system temp directory for a test artifact.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("seamfinding-{}-{name}", std::process::id()))
}
