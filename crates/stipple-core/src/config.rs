//! Run configuration: sampling granularity, page size and dot sizing.
//!
//! All lengths on the page side are in the page's native unit. The bundled
//! presets use tenths of a millimetre, so an A5 sheet is 1485 x 2100.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StippleError};
use crate::orientation::Orientation;

/// A5 width in tenths of a millimetre (148.5 mm).
pub const A5_WIDTH: f64 = 1485.0;
/// A5 height in tenths of a millimetre (210 mm).
pub const A5_HEIGHT: f64 = 2100.0;

/// Physical page the drawing is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub const A5: PageSize = PageSize {
        width: A5_WIDTH,
        height: A5_HEIGHT,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A5
    }
}

/// Named starting points for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Fine 10px regions, outline-friendly dots, source orientation kept.
    #[default]
    A5Outline,
    /// Coarse 30px regions with large dots, rotated to portrait.
    A5Zoom,
}

impl Preset {
    pub fn config(self) -> StippleConfig {
        match self {
            Preset::A5Outline => StippleConfig {
                region_size: 10,
                page: PageSize::A5,
                max_dot_diameter: 10.0,
                min_visible_diameter: 1.0,
                orientation: Orientation::AsIs,
            },
            Preset::A5Zoom => StippleConfig {
                region_size: 30,
                page: PageSize::A5,
                max_dot_diameter: 24.0,
                min_visible_diameter: 0.0,
                orientation: Orientation::Portrait,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::A5Outline => "a5-outline",
            Preset::A5Zoom => "a5-zoom",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = StippleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "a5-outline" => Ok(Preset::A5Outline),
            "a5-zoom" => Ok(Preset::A5Zoom),
            other => Err(StippleError::InvalidConfig(format!(
                "unknown preset '{}' (expected a5-outline or a5-zoom)",
                other
            ))),
        }
    }
}

/// Parameters for one stippling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StippleConfig {
    /// Edge length in source pixels of each square sampling region.
    pub region_size: usize,
    /// Target page.
    pub page: PageSize,
    /// Diameter of a pure-black dot, in source pixels.
    pub max_dot_diameter: f64,
    /// Dots with a smaller diameter (source pixels) are omitted.
    pub min_visible_diameter: f64,
    /// Orientation pre-pass applied before sampling.
    pub orientation: Orientation,
}

impl Default for StippleConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl StippleConfig {
    /// Check every field, failing on the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        if self.region_size == 0 {
            return Err(StippleError::InvalidConfig(
                "region_size must be positive".to_string(),
            ));
        }
        check_positive("page.width", self.page.width)?;
        check_positive("page.height", self.page.height)?;
        check_non_negative("max_dot_diameter", self.max_dot_diameter)?;
        check_non_negative("min_visible_diameter", self.min_visible_diameter)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StippleError::InvalidConfig(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(StippleError::InvalidConfig(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a5_outline() {
        let config = StippleConfig::default();
        assert_eq!(config, Preset::A5Outline.config());
        assert_eq!(config.region_size, 10);
        assert_eq!(config.page, PageSize::A5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zoom_preset_matches_integer_constants() {
        let config = Preset::A5Zoom.config();
        assert_eq!(config.region_size, 30);
        assert_eq!(config.max_dot_diameter, 24.0);
        assert_eq!(config.min_visible_diameter, 0.0);
        assert_eq!(config.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_rejects_zero_region_size() {
        let config = StippleConfig {
            region_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, StippleError::InvalidConfig(_)));
        assert!(err.to_string().contains("region_size"));
    }

    #[test]
    fn test_rejects_non_positive_page() {
        for page in [
            PageSize::new(0.0, 100.0),
            PageSize::new(100.0, -1.0),
            PageSize::new(f64::NAN, 100.0),
            PageSize::new(100.0, f64::INFINITY),
        ] {
            let config = StippleConfig {
                page,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(StippleError::InvalidConfig(_))),
                "page {:?} should be rejected",
                page
            );
        }
    }

    #[test]
    fn test_rejects_negative_diameters() {
        let config = StippleConfig {
            max_dot_diameter: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StippleConfig {
            min_visible_diameter: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("a5-zoom".parse::<Preset>().unwrap(), Preset::A5Zoom);
        assert_eq!("A5-Outline".parse::<Preset>().unwrap(), Preset::A5Outline);
        assert!("letter".parse::<Preset>().is_err());
        assert_eq!(Preset::A5Zoom.name(), "a5-zoom");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "region_size: 4\npage:\n  width: 100\norientation: portrait\n";
        let config: StippleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.region_size, 4);
        assert_eq!(config.page, PageSize::new(100.0, A5_HEIGHT));
        assert_eq!(config.max_dot_diameter, 10.0);
        assert_eq!(config.orientation, Orientation::Portrait);
    }
}
