use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_ACKNOWLEDGEMENT: &str =
    "Form captured (demo). Next step: connect to email/API endpoint.";

/// Tunables for every controller. All fields have defaults, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Header height assumed when the page has no `.site-header`.
    pub header_fallback_px: f64,
    /// Extra space below the sticky header before a section counts as visible.
    pub header_buffer_px: f64,
    /// Percentage of the viewport height cut from the bottom of the window.
    pub bottom_cutoff_percent: f64,
    /// Intersection ratios at which the observer reports.
    pub thresholds: Vec<f64>,
    /// Distance from the document top/bottom treated as "at the edge".
    pub edge_tolerance_px: f64,
    /// Animation frames to wait after a resize before rebuilding.
    pub settle_frames: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            header_fallback_px: 74.0,
            header_buffer_px: 10.0,
            bottom_cutoff_percent: 55.0,
            thresholds: vec![0.0, 0.15, 0.35, 0.6],
            edge_tolerance_px: 5.0,
            settle_frames: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Gap between cards, added to the card width for one step.
    pub gap_px: f64,
    /// Step used when the track has no rendered card.
    pub fallback_step_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap_px: 16.0,
            fallback_step_px: 320.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub acknowledgement: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            acknowledgement: DEFAULT_ACKNOWLEDGEMENT.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tracker;
        if t.thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        if let Some(&bad) = t.thresholds.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            return Err(ConfigError::ThresholdOutOfRange(bad));
        }
        if !(0.0..100.0).contains(&t.bottom_cutoff_percent) {
            return Err(ConfigError::CutoffOutOfRange(t.bottom_cutoff_percent));
        }
        if t.settle_frames == 0 {
            return Err(ConfigError::ZeroSettleFrames);
        }

        let lengths = [
            ("tracker.header_fallback_px", t.header_fallback_px),
            ("tracker.header_buffer_px", t.header_buffer_px),
            ("tracker.edge_tolerance_px", t.edge_tolerance_px),
            ("carousel.gap_px", self.carousel.gap_px),
            ("carousel.fallback_step_px", self.carousel.fallback_step_px),
        ];
        for (field, value) in lengths {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeLength { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.tracker.thresholds, vec![0.0, 0.15, 0.35, 0.6]);
        assert_eq!(config.carousel.fallback_step_px, 320.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "tracker": { "header_buffer_px": 24 } }"#).unwrap();
        assert_eq!(config.tracker.header_buffer_px, 24.0);
        assert_eq!(config.tracker.header_fallback_px, 74.0);
        assert_eq!(config.tracker.settle_frames, 2);
    }

    #[test]
    fn rejects_threshold_above_one() {
        let err =
            SiteConfig::from_json(r#"{ "tracker": { "thresholds": [0, 1.5] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(r) if r == 1.5));
    }

    #[test]
    fn rejects_empty_thresholds() {
        let err = SiteConfig::from_json(r#"{ "tracker": { "thresholds": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyThresholds));
    }

    #[test]
    fn rejects_full_cutoff() {
        let err = SiteConfig::from_json(r#"{ "tracker": { "bottom_cutoff_percent": 100 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::CutoffOutOfRange(_)));
    }

    #[test]
    fn rejects_negative_gap() {
        let err = SiteConfig::from_json(r#"{ "carousel": { "gap_px": -1 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeLength {
                field: "carousel.gap_px",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_settle_frames() {
        let err =
            SiteConfig::from_json(r#"{ "tracker": { "settle_frames": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroSettleFrames));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SiteConfig::from_json("{ tracker").unwrap_err();
        assert!(err.to_string().starts_with("invalid config json"));
    }
}
