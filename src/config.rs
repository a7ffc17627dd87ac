use log::{debug, warn, Level};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{js_sys, Window};

use crate::error::{Result, WidgetError};

/// Name of the optional global object a hosting page can set before the
/// bundle loads, e.g. `window.echoWidgets = { parallax: { maxOffset: 80 } }`.
pub const GLOBAL_CONFIG_KEY: &str = "echoWidgets";
/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "echo-widgets-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub roi: RoiConfig,
    pub parallax: ParallaxConfig,
}

/// Constants of the weekly/monthly savings estimate.
///
/// `baseline_hours - baseline_offset_hours` is added to every weekly estimate;
/// with the defaults that nets to one hour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoiConfig {
    pub days_per_week: f64,
    pub baseline_hours: f64,
    pub baseline_offset_hours: f64,
    pub weeks_per_month: f64,
    pub currency: String,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            days_per_week: 7.0,
            baseline_hours: 3.0,
            baseline_offset_hours: 2.0,
            weeks_per_month: 4.33,
            currency: "€".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub divisor: f64,
    pub max_offset: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            divisor: 6.0,
            max_offset: 120.0,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads the page-provided config, falling back to defaults when there is
    /// none or it can't be read.
    pub fn load(window: &Window) -> Self {
        match Self::from_window(window) {
            Ok(Some(config)) => {
                debug!("Using page-provided widget config: {:?}", config);
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Falling back to default widget config: {}", e);
                Self::default()
            }
        }
    }

    fn from_window(window: &Window) -> Result<Option<Self>> {
        let global = js_sys::Reflect::get(window, &JsValue::from_str(GLOBAL_CONFIG_KEY))?;
        if !global.is_undefined() && !global.is_null() {
            return Ok(Some(serde_wasm_bindgen::from_value(global)?));
        }

        let document = window.document().ok_or(WidgetError::NoDocument)?;
        match document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content())
        {
            Some(text) if !text.trim().is_empty() => Ok(Some(Self::from_json(&text)?)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_all_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn default_baseline_nets_one_hour() {
        let roi = RoiConfig::default();
        assert_eq!(roi.baseline_hours - roi.baseline_offset_hours, 1.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = WidgetConfig::from_json(
            r#"{ "roi": { "weeksPerMonth": 4.0, "currency": "$" }, "parallax": { "maxOffset": 80 } }"#,
        )
        .unwrap();

        assert_eq!(config.roi.weeks_per_month, 4.0);
        assert_eq!(config.roi.currency, "$");
        assert_eq!(config.roi.days_per_week, 7.0);
        assert_eq!(config.roi.baseline_hours, 3.0);
        assert_eq!(config.parallax.max_offset, 80.0);
        assert_eq!(config.parallax.divisor, 6.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = WidgetConfig::from_json("{ roi: ").unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }
}
