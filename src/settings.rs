//! Viewer settings and the static INI file they are saved to.
//!
//! The file always has the same shape:
//!
//! ```ini
//! [Settings]
//! Theme=Dark
//! FontSize=14
//! ```

use ini::Ini;
use log::info;
use std::path::Path;

use crate::error::{Error, Result};

const SECTION: &str = "Settings";
const THEME_KEY: &str = "Theme";
const FONT_SIZE_KEY: &str = "FontSize";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: String,
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            font_size: 14,
        }
    }
}

impl Settings {
    fn to_ini(&self) -> Ini {
        let mut conf = Ini::new();
        conf.with_section(Some(SECTION))
            .set(THEME_KEY, self.theme.as_str())
            .set(FONT_SIZE_KEY, self.font_size.to_string());
        conf
    }

    /// Write the settings file, replacing any existing one.
    pub fn write_ini(&self, path: &Path) -> Result<()> {
        self.to_ini()
            .write_to_file(path)
            .map_err(|source| Error::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Settings written to {}", path.display());
        Ok(())
    }

    /// Read settings back from an INI file.
    pub fn load_ini(path: &Path) -> Result<Self> {
        let read_err = |message: String| Error::ConfigRead {
            path: path.to_path_buf(),
            message,
        };

        let conf = Ini::load_from_file(path)
            .map_err(|e| read_err(e.to_string()))?;
        let section = conf
            .section(Some(SECTION))
            .ok_or_else(|| read_err(format!("missing [{}] section", SECTION)))?;

        let theme = section
            .get(THEME_KEY)
            .ok_or_else(|| read_err(format!("missing {}", THEME_KEY)))?
            .to_string();
        let font_size = section
            .get(FONT_SIZE_KEY)
            .ok_or_else(|| read_err(format!("missing {}", FONT_SIZE_KEY)))?
            .parse::<u32>()
            .map_err(|e| read_err(format!("invalid {}: {}", FONT_SIZE_KEY, e)))?;

        Ok(Self { theme, font_size })
    }
}
