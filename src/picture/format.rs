//! Output formats accepted by [`Picture::save`](super::Picture::save).
use crate::error::{PictureError, Result};
use image::ImageFormat;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Pick the format from the file name's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension.map(str::to_ascii_lowercase).as_deref() {
            Some("jpg") => Ok(Self::Jpeg),
            Some("png") => Ok(Self::Png),
            _ => Err(PictureError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.map(str::to_owned),
            }),
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        for (name, expected) in [
            ("a.jpg", OutputFormat::Jpeg),
            ("a.JPG", OutputFormat::Jpeg),
            ("dir.d/b.png", OutputFormat::Png),
            ("b.PnG", OutputFormat::Png),
        ] {
            assert_eq!(OutputFormat::from_path(Path::new(name)).unwrap(), expected);
        }
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["a.gif", "a.jpeg", "a", "png", "a.png.bak"] {
            let err = OutputFormat::from_path(Path::new(name)).unwrap_err();
            assert!(
                matches!(err, PictureError::UnsupportedFormat { .. }),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn dotfile_names_have_no_extension() {
        for name in [".png", "dir/.jpg", "png"] {
            match OutputFormat::from_path(Path::new(name)) {
                Err(PictureError::UnsupportedFormat { extension, .. }) => {
                    assert_eq!(extension, None, "{name}")
                }
                other => panic!("{name}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&OutputFormat::Png).unwrap(), "\"png\"");
        assert_eq!(serde_json::to_string(&OutputFormat::Jpeg).unwrap(), "\"jpeg\"");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }

    #[test]
    fn rejection_reports_the_extension() {
        match OutputFormat::from_path(Path::new("out.GIF")) {
            Err(PictureError::UnsupportedFormat { extension, .. }) => {
                assert_eq!(extension.as_deref(), Some("GIF"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
