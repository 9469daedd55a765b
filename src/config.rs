//! Reel configuration: fixed constants plus an optional JSON override.

use crate::error::ReelError;
use serde::Deserialize;

// DOM contract
pub const CONTAINER_ID: &str = "shuffle-container";
pub const REEL_SELECTOR: &str = ".reel";
pub const REEL_IMAGE_SELECTOR: &str = ".reel img";

// Stopping offset: base - u * span, u in [0, 1)
pub const OFFSET_BASE_PX: f64 = -8000.0;
pub const OFFSET_SPAN_PX: f64 = 140.0;

// Item geometry used to find the centered image
pub const ITEM_WIDTH_PX: f64 = 163.0;
pub const ITEM_MARGIN_PX: f64 = 13.0;

// Animation timing
pub const TRANSITION_MS: u32 = 1000;
pub const TRANSITION_EASING: &str = "ease-out";
pub const SETTLE_DELAY_MS: u32 = 1200;

// Report texts
pub const CENTER_LABEL_PREFIX: &str = "Center image alt:";
pub const CENTER_UNDETERMINED: &str = "Could not determine the center image.";

// Demo page
pub const DEMO_ITEM_COUNT: usize = 60;
pub const DEMO_IMAGE_DIR: &str = "img";

/// Runtime settings for one spin. `Default` mirrors the constants above;
/// any subset of fields can be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    pub container_id: String,
    pub reel_selector: String,
    pub image_selector: String,
    pub offset_base_px: f64,
    pub offset_span_px: f64,
    pub item_width_px: f64,
    pub item_margin_px: f64,
    pub transition_ms: u32,
    pub transition_easing: String,
    pub settle_delay_ms: u32,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            reel_selector: REEL_SELECTOR.to_string(),
            image_selector: REEL_IMAGE_SELECTOR.to_string(),
            offset_base_px: OFFSET_BASE_PX,
            offset_span_px: OFFSET_SPAN_PX,
            item_width_px: ITEM_WIDTH_PX,
            item_margin_px: ITEM_MARGIN_PX,
            transition_ms: TRANSITION_MS,
            transition_easing: TRANSITION_EASING.to_string(),
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl ReelConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ReelError> {
        let config: ReelConfig =
            serde_json::from_str(json).map_err(|e| ReelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `json` is `None` or blank, otherwise [`ReelConfig::from_json`].
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ReelError> {
        match json.map(str::trim) {
            Some(text) if !text.is_empty() => Self::from_json(text),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ReelError> {
        let numbers = [
            ("offset_base_px", self.offset_base_px),
            ("offset_span_px", self.offset_span_px),
            ("item_width_px", self.item_width_px),
            ("item_margin_px", self.item_margin_px),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ReelError::InvalidConfig(format!("{} must be finite", name)));
        }
        if self.offset_span_px < 0.0 {
            return Err(ReelError::InvalidConfig(
                "offset_span_px cannot be negative".to_string(),
            ));
        }
        if self.item_step_px() <= 0.0 {
            return Err(ReelError::InvalidConfig(
                "item_width_px + item_margin_px must be positive".to_string(),
            ));
        }
        let selectors = [
            ("container_id", &self.container_id),
            ("reel_selector", &self.reel_selector),
            ("image_selector", &self.image_selector),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(ReelError::InvalidConfig(format!("{} cannot be empty", name)));
        }
        Ok(())
    }

    /// Horizontal distance between the starts of two neighbouring items.
    #[inline]
    pub fn item_step_px(&self) -> f64 {
        self.item_width_px + self.item_margin_px
    }

    /// CSS `transition` value applied to the reel before it moves.
    pub fn transition(&self) -> String {
        format!("transform {}ms {}", self.transition_ms, self.transition_easing)
    }

    /// Lowest and highest offsets `pick_offset` can produce.
    pub fn offset_range(&self) -> (f64, f64) {
        (
            self.offset_base_px - self.offset_span_px,
            self.offset_base_px,
        )
    }
}
