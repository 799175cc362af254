use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use datepicker::locale::TableLocale;
use datepicker::PickerOptions;

use crate::theme::Theme;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub picker: PickerOptions,
    #[serde(default)]
    pub theme:  Theme,
    pub locale: Option<TableLocale>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = config_dir().join("config.toml");
        if path.exists() {
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&src).with_context(|| format!("parsing {}", path.display()))
        } else {
            Ok(AppConfig::default())
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("datepicker")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("datepicker")
}
