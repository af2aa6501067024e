//! User-editable wheel settings.
//!
//! Settings are stored as camelCase JSON so a record saved by an older page
//! under the same key loads unchanged. Every field has a default, so a record
//! with missing fields still loads.
//!
//! [`WheelSettings::validated`] is the save boundary: out-of-range numbers are
//! clamped, malformed colors fall back to their defaults, and only a
//! non-positive deceleration is rejected outright.

use crate::config::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinDirection {
    Clockwise,
    #[default]
    Counterclockwise,
}

impl SpinDirection {
    /// Sign applied to the configured peak speed. Positive angles turn
    /// clockwise on a canvas, whose y axis points down.
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::Counterclockwise => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelSettings {
    pub sections: u32,
    pub max_speed: f64,
    pub min_spins: u32,
    pub max_spins: u32,
    pub deceleration: f64,
    pub darkness: u32,
    pub auto_spin: u32,
    pub randomize: bool,
    pub center_circle_width: f64,
    pub dot_width: f64,
    pub dot_offset: f64,
    pub center_circle_color: String,
    pub dot_color: String,
    pub border_color: String,
    pub border_thickness: f64,
    pub bg_color: String,
    pub number_color: String,
    pub number_style: NumberStyle,
    pub wheel_size: f64,
    pub wheel_font_size: f64,
    pub table_font_size: f64,
    pub spin_direction: SpinDirection,
    pub random_spin_direction: bool,
    pub flash_animation: bool,
    pub flash_speed: u32,
    pub flash_count: u32,
    pub flash_color: String,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            max_speed: DEFAULT_MAX_SPEED,
            min_spins: DEFAULT_MIN_SPINS,
            max_spins: DEFAULT_MAX_SPINS,
            deceleration: DEFAULT_DECELERATION,
            darkness: DEFAULT_DARKNESS,
            auto_spin: DEFAULT_AUTO_SPIN,
            randomize: false,
            center_circle_width: DEFAULT_CENTER_CIRCLE_WIDTH,
            dot_width: DEFAULT_DOT_WIDTH,
            dot_offset: DEFAULT_DOT_OFFSET,
            center_circle_color: DEFAULT_CENTER_CIRCLE_COLOR.to_string(),
            dot_color: DEFAULT_DOT_COLOR.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_thickness: DEFAULT_BORDER_THICKNESS,
            bg_color: DEFAULT_BG_COLOR.to_string(),
            number_color: DEFAULT_NUMBER_COLOR.to_string(),
            number_style: NumberStyle::Regular,
            wheel_size: DEFAULT_WHEEL_SIZE,
            wheel_font_size: DEFAULT_WHEEL_FONT_SIZE,
            table_font_size: DEFAULT_TABLE_FONT_SIZE,
            spin_direction: SpinDirection::Counterclockwise,
            random_spin_direction: false,
            flash_animation: true,
            flash_speed: DEFAULT_FLASH_SPEED_MS,
            flash_count: DEFAULT_FLASH_COUNT,
            flash_color: DEFAULT_FLASH_COLOR.to_string(),
        }
    }
}

/// Settings that cannot be clamped into a usable state.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A spin with zero or negative deceleration would never stop.
    NonPositiveDeceleration(f64),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NonPositiveDeceleration(value) => write!(
                f,
                "Deceleration must be greater than 0 (got {})",
                value
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

fn clamp_f64(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

fn color_or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if HEX_COLOR_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        default.to_string()
    }
}

/// Whether `value` is a `#rrggbb` color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

impl WheelSettings {
    /// Clamp every field into its documented range.
    ///
    /// # Errors
    /// Returns [`SettingsError::NonPositiveDeceleration`] when deceleration is
    /// not strictly positive.
    pub fn validated(&self) -> Result<WheelSettings, SettingsError> {
        // NaN fails the comparison too.
        if !(self.deceleration > 0.0) {
            return Err(SettingsError::NonPositiveDeceleration(self.deceleration));
        }

        let min_spins = self.min_spins.clamp(MIN_MIN_SPINS, MAX_MIN_SPINS);

        Ok(WheelSettings {
            sections: self.sections.clamp(MIN_SECTIONS, MAX_SECTIONS),
            max_speed: clamp_f64(self.max_speed, MIN_MAX_SPEED, MAX_MAX_SPEED, DEFAULT_MAX_SPEED),
            min_spins,
            max_spins: self.max_spins.clamp(min_spins, MAX_MAX_SPINS),
            deceleration: self.deceleration.clamp(MIN_DECELERATION, MAX_DECELERATION),
            darkness: self.darkness.clamp(MIN_DARKNESS, MAX_DARKNESS),
            auto_spin: self.auto_spin.min(MAX_AUTO_SPIN),
            randomize: self.randomize,
            center_circle_width: clamp_f64(
                self.center_circle_width,
                MIN_CENTER_CIRCLE_WIDTH,
                MAX_CENTER_CIRCLE_WIDTH,
                DEFAULT_CENTER_CIRCLE_WIDTH,
            ),
            dot_width: clamp_f64(self.dot_width, MIN_DOT_WIDTH, MAX_DOT_WIDTH, DEFAULT_DOT_WIDTH),
            dot_offset: clamp_f64(self.dot_offset, MIN_DOT_OFFSET, MAX_DOT_OFFSET, DEFAULT_DOT_OFFSET),
            center_circle_color: color_or_default(
                &self.center_circle_color,
                DEFAULT_CENTER_CIRCLE_COLOR,
            ),
            dot_color: color_or_default(&self.dot_color, DEFAULT_DOT_COLOR),
            border_color: color_or_default(&self.border_color, DEFAULT_BORDER_COLOR),
            border_thickness: clamp_f64(
                self.border_thickness,
                MIN_BORDER_THICKNESS,
                MAX_BORDER_THICKNESS,
                DEFAULT_BORDER_THICKNESS,
            ),
            bg_color: color_or_default(&self.bg_color, DEFAULT_BG_COLOR),
            number_color: color_or_default(&self.number_color, DEFAULT_NUMBER_COLOR),
            number_style: self.number_style,
            wheel_size: clamp_f64(self.wheel_size, MIN_WHEEL_SIZE, MAX_WHEEL_SIZE, DEFAULT_WHEEL_SIZE),
            wheel_font_size: clamp_f64(
                self.wheel_font_size,
                MIN_WHEEL_FONT_SIZE,
                MAX_WHEEL_FONT_SIZE,
                DEFAULT_WHEEL_FONT_SIZE,
            ),
            table_font_size: clamp_f64(
                self.table_font_size,
                MIN_TABLE_FONT_SIZE,
                MAX_TABLE_FONT_SIZE,
                DEFAULT_TABLE_FONT_SIZE,
            ),
            spin_direction: self.spin_direction,
            random_spin_direction: self.random_spin_direction,
            flash_animation: self.flash_animation,
            flash_speed: self.flash_speed.clamp(MIN_FLASH_SPEED_MS, MAX_FLASH_SPEED_MS),
            flash_count: self.flash_count.clamp(MIN_FLASH_COUNT, MAX_FLASH_COUNT),
            flash_color: color_or_default(&self.flash_color, DEFAULT_FLASH_COLOR),
        })
    }

    /// Parse a stored JSON record, falling back to defaults for anything
    /// unreadable or invalid.
    pub fn from_json_or_default(json: &str) -> WheelSettings {
        match serde_json::from_str::<WheelSettings>(json) {
            Ok(parsed) => match parsed.validated() {
                Ok(valid) => valid,
                Err(e) => {
                    log::warn!("Stored settings rejected ({}), using defaults", e);
                    WheelSettings::default()
                }
            },
            Err(e) => {
                log::warn!("Stored settings unreadable ({}), using defaults", e);
                WheelSettings::default()
            }
        }
    }
}
