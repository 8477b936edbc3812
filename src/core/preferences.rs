//! Display preferences persisted between sessions. Only the font scale
//! exists; it is stored the way a browser keeps local-storage values, as a
//! decimal string under a fixed key.

use crate::domain::ports::Storage;
use crate::utils::error::{DirectoryError, Result};
use std::collections::BTreeMap;

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const FONT_SCALE_KEY: &str = "fontSizeScale";

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontScale(f64);

impl FontScale {
    pub const DEFAULT: FontScale = FontScale(1.0);
    pub const MAX: FontScale = FontScale(1.5);
    pub const STEP: f64 = 0.1;

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn increased(self) -> FontScale {
        FontScale((self.0 + Self::STEP).min(Self::MAX.0))
    }

    fn parse(raw: &str) -> Option<FontScale> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(FontScale)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub struct Preferences<S: Storage> {
    storage: S,
    entries: BTreeMap<String, String>,
    font_scale: FontScale,
}

impl<S: Storage> Preferences<S> {
    /// Reads the preferences file. A missing file or an unreadable value
    /// gives the default scale.
    pub async fn load(storage: S) -> Result<Self> {
        let entries = match storage.read_file(PREFERENCES_FILE).await {
            Ok(data) => serde_json::from_slice::<BTreeMap<String, String>>(&data)
                .unwrap_or_else(|e| {
                    tracing::warn!("Ignoring unreadable {}: {}", PREFERENCES_FILE, e);
                    BTreeMap::new()
                }),
            Err(DirectoryError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No {} yet, using defaults", PREFERENCES_FILE);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        let font_scale = entries
            .get(FONT_SCALE_KEY)
            .and_then(|raw| FontScale::parse(raw))
            .unwrap_or_default();

        Ok(Self {
            storage,
            entries,
            font_scale,
        })
    }

    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    pub async fn increase_font_scale(&mut self) -> Result<FontScale> {
        self.set_font_scale(self.font_scale.increased()).await
    }

    pub async fn reset_font_scale(&mut self) -> Result<FontScale> {
        self.set_font_scale(FontScale::DEFAULT).await
    }

    async fn set_font_scale(&mut self, scale: FontScale) -> Result<FontScale> {
        self.font_scale = scale;
        self.entries
            .insert(FONT_SCALE_KEY.to_string(), scale.value().to_string());

        let data = serde_json::to_vec_pretty(&self.entries)?;
        self.storage.write_file(PREFERENCES_FILE, &data).await?;
        tracing::debug!("Font scale saved: {}", scale.value());
        Ok(scale)
    }
}
