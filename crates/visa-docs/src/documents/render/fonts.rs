use genpdf::fonts::{FontData, FontFamily};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::FontConfig;

#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("failed to read font file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: genpdf::error::Error,
    },
}

/// Regular and bold faces shared by every renderer. Both faces must cover Latin
/// Extended and Cyrillic.
#[derive(Debug, Clone)]
pub struct FontSet {
    regular: FontData,
    bold: FontData,
}

impl FontSet {
    pub fn load(config: &FontConfig) -> Result<Self, AssetLoadError> {
        let regular = read_face(&config.regular_path())?;
        let bold = read_face(&config.bold_path())?;
        info!(
            regular = %config.regular_path().display(),
            bold = %config.bold_path().display(),
            "loaded document fonts"
        );
        Ok(Self { regular, bold })
    }

    pub(crate) fn family(&self) -> FontFamily<FontData> {
        FontFamily {
            regular: self.regular.clone(),
            bold: self.bold.clone(),
            italic: self.regular.clone(),
            bold_italic: self.bold.clone(),
        }
    }
}

fn read_face(path: &Path) -> Result<FontData, AssetLoadError> {
    let bytes = std::fs::read(path).map_err(|source| AssetLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontData::new(bytes, None).map_err(|source| AssetLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_a_read_error() {
        let config = FontConfig {
            dir: PathBuf::from("/nonexistent/fonts"),
            regular: "Regular.ttf".to_string(),
            bold: "Bold.ttf".to_string(),
        };

        let err = FontSet::load(&config).expect_err("font directory does not exist");
        assert!(matches!(err, AssetLoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/fonts/Regular.ttf"));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let dir = std::env::temp_dir().join(format!("visa-docs-fonts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        std::fs::write(dir.join("broken.ttf"), b"not a font").expect("write temp font");
        let config = FontConfig {
            dir: dir.clone(),
            regular: "broken.ttf".to_string(),
            bold: "broken.ttf".to_string(),
        };

        let err = FontSet::load(&config).expect_err("bytes are not a font");
        assert!(matches!(err, AssetLoadError::Parse { .. }));
        let _ = std::fs::remove_dir_all(dir);
    }
}
