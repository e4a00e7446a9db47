//! Pattern configuration.
//!
//! [`PanelSettings`] is the raw object the settings panel hands over (percent
//! sliders, a free-text seed, a family tag). [`PatternConfig`] is the
//! validated form a session resets from.

use serde::{Deserialize, Serialize};

use crate::attractor::Family;
use crate::error::{PatternError, PatternResult};

/// Attractor steps run per host frame.
pub const BATCH_SIZE: u64 = 20_000;

/// Host frames per countdown second.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Seconds between the end of a default pattern and the next one.
pub const COUNTDOWN_SECONDS: u32 = 15;

pub const DEFAULT_SATURATION: f64 = 0.5;
pub const DEFAULT_BRIGHTNESS: f64 = 0.8;

/// Iteration budget scaled to the canvas: `round(width * 0.035)` frames
/// worth of batches.
pub fn default_iteration_budget(width: u32) -> u64 {
    let frames = (width as f64 * 0.035).round().max(1.0) as u64;
    frames * BATCH_SIZE
}

/// What happens once a pattern has used up its budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Count down and start a new random pattern.
    Default,
    /// Stay on the finished pattern until the host asks for another.
    Custom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub family: Family,
    /// `None` draws a fresh seed on every reset.
    pub seed: Option<u64>,
    pub iteration_budget: u64,
    pub saturation: f64,
    pub brightness: f64,
    pub mode: GenerationMode,
}

impl PatternConfig {
    /// Settings used for the automatic cycle on a canvas of `width` pixels.
    pub fn default_for_width(width: u32) -> Self {
        Self {
            family: Family::Fujii,
            seed: None,
            iteration_budget: default_iteration_budget(width),
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
            mode: GenerationMode::Default,
        }
    }

    pub fn validate(&self) -> PatternResult<()> {
        if self.iteration_budget == 0 {
            return Err(PatternError::InvalidIterationBudget(self.iteration_budget));
        }
        check_unit("saturation", self.saturation)?;
        check_unit("brightness", self.brightness)?;
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f64) -> PatternResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(PatternError::OutOfRange { field, value });
    }
    Ok(())
}

/// Raw values from the settings panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    pub family: String,
    /// Empty for a random seed.
    #[serde(default)]
    pub seed: String,
    /// Percent, 0 to 100
    pub saturation: f64,
    /// Percent, 0 to 100
    pub brightness: f64,
    pub iterations: u64,
}

impl PanelSettings {
    /// Values the panel shows after a reset.
    pub fn defaults_for_width(width: u32) -> Self {
        Self {
            family: Family::Fujii.as_str().to_string(),
            seed: String::new(),
            saturation: DEFAULT_SATURATION * 100.0,
            brightness: DEFAULT_BRIGHTNESS * 100.0,
            iterations: default_iteration_budget(width),
        }
    }

    /// Validated custom-mode configuration.
    pub fn into_config(self) -> PatternResult<PatternConfig> {
        let family = self.family.parse::<Family>()?;
        let seed = parse_seed(&self.seed)?;
        let config = PatternConfig {
            family,
            seed,
            iteration_budget: self.iterations,
            saturation: percent("saturation", self.saturation)?,
            brightness: percent("brightness", self.brightness)?,
            mode: GenerationMode::Custom,
        };
        config.validate()?;
        Ok(config)
    }
}

fn percent(field: &'static str, value: f64) -> PatternResult<f64> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(PatternError::OutOfRange { field, value });
    }
    Ok(value / 100.0)
}

/// Blank input means "pick one for me".
pub fn parse_seed(input: &str) -> PatternResult<Option<u64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| PatternError::InvalidSeed(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(family: &str, seed: &str) -> PanelSettings {
        PanelSettings {
            family: family.to_string(),
            seed: seed.to_string(),
            saturation: 50.0,
            brightness: 80.0,
            iterations: 1_000,
        }
    }

    #[test]
    fn budget_scales_with_width() {
        // round(1133 * 0.035) = 40 frames
        assert_eq!(default_iteration_budget(1133), 40 * BATCH_SIZE);
        assert_eq!(default_iteration_budget(130), 5 * BATCH_SIZE);
        assert_eq!(default_iteration_budget(0), BATCH_SIZE);
    }

    #[test]
    fn default_config_is_fujii_auto_cycle() {
        let config = PatternConfig::default_for_width(800);
        assert_eq!(config.family, Family::Fujii);
        assert_eq!(config.seed, None);
        assert_eq!(config.mode, GenerationMode::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn panel_settings_convert_percentages() {
        let config = panel("dejong", " 42 ").into_config().expect("valid panel");
        assert_eq!(config.family, Family::DeJong);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.saturation, 0.5);
        assert_eq!(config.brightness, 0.8);
        assert_eq!(config.iteration_budget, 1_000);
        assert_eq!(config.mode, GenerationMode::Custom);
    }

    #[test]
    fn blank_seed_means_auto() {
        let config = panel("clifford", "").into_config().expect("valid panel");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn bad_panel_values_are_rejected() {
        assert_eq!(
            panel("lorenz", "").into_config(),
            Err(PatternError::UnknownFamily("lorenz".into()))
        );
        assert_eq!(
            panel("fujii", "12ab").into_config(),
            Err(PatternError::InvalidSeed("12ab".into()))
        );
        assert_eq!(
            panel("fujii", "-3").into_config(),
            Err(PatternError::InvalidSeed("-3".into()))
        );

        let mut settings = panel("fujii", "");
        settings.saturation = 140.0;
        assert_eq!(
            settings.into_config(),
            Err(PatternError::OutOfRange {
                field: "saturation",
                value: 140.0
            })
        );

        let mut settings = panel("fujii", "");
        settings.iterations = 0;
        assert_eq!(
            settings.into_config(),
            Err(PatternError::InvalidIterationBudget(0))
        );
    }

    #[test]
    fn panel_settings_deserialize_from_json() {
        let settings: PanelSettings = serde_json::from_str(
            r#"{"family":"clifford","saturation":30,"brightness":90,"iterations":5000}"#,
        )
        .expect("valid json");
        assert_eq!(settings.seed, "");
        let config = settings.into_config().expect("valid panel");
        assert_eq!(config.family, Family::Clifford);
        assert!((config.saturation - 0.3).abs() < 1e-12);
    }
}
