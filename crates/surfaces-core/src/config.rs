//! Surface configuration: built-in defaults plus sparse overrides.
//!
//! A resolved [`SurfaceConfig`] is always produced by layering overrides on top
//! of [`SurfaceConfig::default`]: first the named preset, then whatever the page
//! passed to `init`. Later layers win field by field.

use crate::color::Rgb;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Point-cloud palette. One fabric layer is built per entry.
pub type Palette = SmallVec<[Rgb; 4]>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    pub colors: Palette,
    /// Points in the first fabric layer. Fractional values are floored per layer.
    pub density: f64,
    pub size: f32,
    /// Pulse spheres; a fractional count rounds up. See [`SurfaceConfig::pulse_count`].
    pub pulses: f64,
    pub pulse_color: Rgb,
    pub line_color: Rgb,
    /// Background depth. Carried for embedders; the layout does not read it.
    pub depth: f32,
    pub camera_base: f32,
    pub zoom_amount: f32,
    pub motion: f32,
    pub parallax: f32,
    pub lines: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            colors: smallvec![Rgb::new(0x60, 0xa5, 0xfa), Rgb::new(0x8b, 0x5c, 0xf6)],
            density: 160.0,
            size: 0.05,
            pulses: 2.0,
            pulse_color: Rgb::new(0x10, 0xb9, 0x81),
            line_color: Rgb::new(0x60, 0xa5, 0xfa),
            depth: 5.0,
            camera_base: 6.0,
            zoom_amount: 1.0,
            motion: 1.0,
            parallax: 0.45,
            lines: true,
            seed: None,
        }
    }
}

/// Sparse set of fields; `None` leaves the underlying value untouched.
///
/// Field names follow the JS option names (`pulseColor`, `cameraBase`, ...).
/// Unknown keys are ignored so pages can pass extra options through.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_base: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_amount: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallax: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SurfaceConfig {
    /// Copy every field that `overrides` sets.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        let o = overrides;
        if let Some(v) = &o.colors {
            self.colors = v.clone();
        }
        if let Some(v) = o.density {
            self.density = v;
        }
        if let Some(v) = o.size {
            self.size = v;
        }
        if let Some(v) = o.pulses {
            self.pulses = v;
        }
        if let Some(v) = o.pulse_color {
            self.pulse_color = v;
        }
        if let Some(v) = o.line_color {
            self.line_color = v;
        }
        if let Some(v) = o.depth {
            self.depth = v;
        }
        if let Some(v) = o.camera_base {
            self.camera_base = v;
        }
        if let Some(v) = o.zoom_amount {
            self.zoom_amount = v;
        }
        if let Some(v) = o.motion {
            self.motion = v;
        }
        if let Some(v) = o.parallax {
            self.parallax = v;
        }
        if let Some(v) = o.lines {
            self.lines = v;
        }
        if o.seed.is_some() {
            self.seed = o.seed;
        }
    }

    pub fn merged(mut self, overrides: &ConfigOverrides) -> Self {
        self.apply(overrides);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let floats = [
            ("density", self.density),
            ("size", self.size as f64),
            ("pulses", self.pulses),
            ("depth", self.depth as f64),
            ("cameraBase", self.camera_base as f64),
            ("zoomAmount", self.zoom_amount as f64),
            ("motion", self.motion as f64),
            ("parallax", self.parallax as f64),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// Number of pulse spheres, counting the way `for (i = 0; i < pulses; i++)` would.
    pub fn pulse_count(&self) -> usize {
        if self.pulses > 0.0 {
            self.pulses.ceil() as usize
        } else {
            0
        }
    }

    /// Color of the point light: the first palette entry.
    pub fn key_color(&self) -> Rgb {
        self.colors.first().copied().unwrap_or(self.line_color)
    }
}
