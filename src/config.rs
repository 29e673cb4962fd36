//! Settings for cvkit operations
//!
//! Defaults are embedded from `defaults.toml`. A user file only needs to name
//! the keys it overrides; everything else keeps its default.

use std::fs;

use image::imageops::FilterType;
use image::Rgba;
use lazy_static::lazy_static;

use crate::errors::{CvKitError, CvKitResult};
use crate::ops::WarningPolicy;
use crate::region::Size;

lazy_static! {
    static ref DEFAULT_CONFIG: Config = {
        let content = include_str!("../defaults.toml");
        Config::builtin().merged_with_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            Config::builtin()
        })
    };
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Size used when a sample request names none
    pub sample_size: Size,
    /// Whether samples are framed on the source by default
    pub annotate: bool,
    /// Frame colour for annotation
    pub annotation_colour: Rgba<u8>,
    pub suppress_warnings: bool,
    /// Resampling filter for zoom
    pub zoom_filter: FilterType,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    fn builtin() -> Self {
        Config {
            sample_size: Size::new(16, 16),
            annotate: false,
            annotation_colour: Rgba([255, 255, 255, 255]),
            suppress_warnings: false,
            zoom_filter: FilterType::Triangle,
        }
    }

    /// Load a user config file on top of the defaults
    pub fn from_file(path: &str) -> CvKitResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::default().merged_with_str(&contents)
    }

    /// Parse TOML text and apply every key it sets
    pub fn merged_with_str(mut self, content: &str) -> CvKitResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| CvKitError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(sample) = toml_value.get("sample") {
            if let Some(w) = Self::get_u32(sample, "sample", "width")? {
                self.sample_size.width = w;
            }
            if let Some(h) = Self::get_u32(sample, "sample", "height")? {
                self.sample_size.height = h;
            }
            if let Some(a) = sample.get("annotate") {
                self.annotate = a.as_bool().ok_or_else(|| {
                    CvKitError::ConfigError("sample.annotate must be a boolean".to_string())
                })?;
            }
        }

        if let Some(colour) = toml_value.get("annotation").and_then(|t| t.get("colour")) {
            self.annotation_colour = Self::parse_colour(colour)?;
        }

        if let Some(s) = toml_value.get("warnings").and_then(|t| t.get("suppress")) {
            self.suppress_warnings = s.as_bool().ok_or_else(|| {
                CvKitError::ConfigError("warnings.suppress must be a boolean".to_string())
            })?;
        }

        if let Some(f) = toml_value.get("zoom").and_then(|t| t.get("filter")) {
            let name = f.as_str().ok_or_else(|| {
                CvKitError::ConfigError("zoom.filter must be a string".to_string())
            })?;
            self.zoom_filter = parse_filter(name)?;
        }

        if self.sample_size.width == 0 || self.sample_size.height == 0 {
            return Err(CvKitError::ConfigError(format!(
                "Sample size {}x{} must be non-zero",
                self.sample_size.width, self.sample_size.height
            )));
        }

        Ok(self)
    }

    pub fn warning_policy(&self) -> WarningPolicy {
        WarningPolicy::from_suppress_flag(self.suppress_warnings)
    }

    fn get_u32(table: &toml::Value, section: &str, key: &str) -> CvKitResult<Option<u32>> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };
        value
            .as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| {
                CvKitError::ConfigError(format!("{}.{} must be a non-negative integer", section, key))
            })
    }

    fn parse_colour(value: &toml::Value) -> CvKitResult<Rgba<u8>> {
        let invalid = || {
            CvKitError::ConfigError("annotation.colour must be [r, g, b] with values 0-255".to_string())
        };

        let items = value.as_array().ok_or_else(invalid)?;
        if items.len() != 3 {
            return Err(invalid());
        }

        let mut rgb = [0u8; 3];
        for (slot, item) in rgb.iter_mut().zip(items) {
            *slot = item
                .as_integer()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(invalid)?;
        }
        Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }
}

/// Map a filter name to an `image` resampling filter
pub fn parse_filter(name: &str) -> CvKitResult<FilterType> {
    match name.to_lowercase().as_str() {
        "nearest" => Ok(FilterType::Nearest),
        "triangle" | "linear" => Ok(FilterType::Triangle),
        "catmullrom" | "cubic" => Ok(FilterType::CatmullRom),
        "gaussian" => Ok(FilterType::Gaussian),
        "lanczos3" => Ok(FilterType::Lanczos3),
        other => Err(CvKitError::ConfigError(format!("Unknown zoom filter '{}'", other))),
    }
}
