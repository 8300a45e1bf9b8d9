//! Renderable feature assembly.

use serde::{Deserialize, Serialize};

use hazmap_bindings::{HazardRecord, UNKNOWN_NAME};
use hazmap_spatial::{Geometry, Ring};

use crate::color::Rgba;

/// One polygon-layer feature: reprojected rings, fill color, and the
/// metric fields a tooltip needs.
///
/// Ring coordinates are (longitude, latitude) pairs in the target CRS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableFeature {
    /// Display name of the territorial unit.
    pub name: String,
    /// Hazard percentage; `None` renders with the neutral fill.
    pub hazard_pct: Option<f64>,
    /// Exterior rings, one per member polygon.
    pub rings: Vec<Ring>,
    /// RGBA fill.
    pub fill_color: Rgba,
}

/// Assemble a feature from a record and its reprojected geometry.
///
/// Returns `None` for [`Geometry::Unsupported`]: such rows are dropped
/// from the rendered set rather than emitted with a null geometry. The
/// name falls back to `"Unknown"` here as well, in case an upstream
/// default was bypassed.
pub fn assemble(
    record: &HazardRecord,
    geometry: Geometry,
    fill_color: Rgba,
) -> Option<RenderableFeature> {
    let rings = match geometry {
        Geometry::Polygon(ring) => vec![ring],
        Geometry::MultiPolygon(rings) => rings,
        Geometry::Unsupported => return None,
    };

    let name = if record.name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        record.name.clone()
    };

    Some(RenderableFeature {
        name,
        hazard_pct: record.hazard_pct,
        rings,
        fill_color,
    })
}
