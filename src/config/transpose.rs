use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TransposeToolConfig {
    pub input: PathBuf,
    pub output: TransposeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TransposeOutputConfig {
    /// Destination for the transposed picture; must end in `.jpg` or `.png`.
    pub image: PathBuf,
    #[serde(default, rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TransposeToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
