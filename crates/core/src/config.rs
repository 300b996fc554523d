use crate::error::StudioError;
use placard_render_core::PageSpec;
use placard_traits::CaptureOptions;
use serde::{Deserialize, Serialize};

/// Studio settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudioConfig {
    /// Render a `.debug-info` overlay naming the active template and layout.
    pub debug: bool,
    /// Allow premium templates and layouts to be selected.
    pub premium_enabled: bool,
    /// Exported files are named `<prefix>-YYYY-MM-DD.<ext>`.
    pub filename_prefix: String,
    /// Logo text shown when the form leaves it empty.
    pub default_logo_text: String,
    pub toast_duration_ms: u32,
    pub capture: CaptureOptions,
    pub page: PageSpec,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            debug: false,
            premium_enabled: true,
            filename_prefix: "announcement".to_string(),
            default_logo_text: "PA".to_string(),
            toast_duration_ms: 3000,
            capture: CaptureOptions::default(),
            page: PageSpec::default(),
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        let config: StudioConfig =
            serde_json::from_str(json).map_err(|e| StudioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StudioError> {
        if !(self.capture.scale > 0.0 && self.capture.scale.is_finite()) {
            return Err(StudioError::Config(format!(
                "capture.scale must be a positive number, got {}",
                self.capture.scale
            )));
        }
        if self.filename_prefix.trim().is_empty()
            || self.filename_prefix.contains(['/', '\\'])
        {
            return Err(StudioError::Config(format!(
                "filenamePrefix '{}' is not a usable file name",
                self.filename_prefix
            )));
        }
        Ok(())
    }
}
