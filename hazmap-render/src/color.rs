//! Hazard percentage to fill color.
//!
//! The choropleth ramp runs from near-white at 0% to full red as the
//! percentage rises: the red channel is fixed at 255 while green and blue
//! fall linearly. Rows without a usable percentage get a neutral gray so
//! they stay visible on the map without claiming an exposure level.

use serde::{Deserialize, Serialize};

/// An RGBA color, each channel in [0, 255].
///
/// Serializes as a `[r, g, b, a]` array, the shape polygon-layer renderers
/// take directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Fill for rows whose percentage is absent or non-numeric.
pub const NEUTRAL_FILL: Rgba = Rgba(200, 200, 200, 80);

/// The white-to-red hazard ramp.
///
/// For a present percentage `p`, green and blue are
/// `clamp(255 − p·slope, 0, 255)` truncated to an integer; red and alpha
/// are fixed. Channel clamping covers out-of-domain percentages even
/// though the queries only emit 0–100.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardColorScale {
    /// Channel units removed per percentage point.
    pub slope: f64,
    /// Alpha of the ramp colors.
    pub alpha: u8,
    /// Fill used when the percentage is absent.
    pub fallback: Rgba,
}

impl Default for HazardColorScale {
    fn default() -> Self {
        Self {
            slope: 2.5,
            alpha: 120,
            fallback: NEUTRAL_FILL,
        }
    }
}

impl HazardColorScale {
    /// Map a percentage (or its absence) to a fill color.
    pub fn color_for(&self, pct: Option<f64>) -> Rgba {
        match pct {
            None => self.fallback,
            Some(p) => {
                let channel = (255.0 - p * self.slope).clamp(0.0, 255.0) as u8;
                Rgba(255, channel, channel, self.alpha)
            }
        }
    }
}
