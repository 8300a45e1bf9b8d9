//! WKT parsing and exterior-ring extraction.
//!
//! Renderable geometry here is a set of exterior rings: a POLYGON
//! contributes one, a MULTIPOLYGON one per member. Interior rings (holes)
//! are dropped at parse time, a deliberate simplification for polygon-layer
//! rendering. Every other WKT geometry kind, and any text that fails to
//! parse, degrades to [`Geometry::Unsupported`] so a malformed row never
//! interrupts the batch.

use crate::error::{Result, SpatialError};

/// A coordinate pair, (x, y) in the geometry's CRS.
pub type Coord2 = (f64, f64);

/// An ordered, closed sequence of coordinate pairs.
pub type Ring = Vec<Coord2>;

/// A geometry reduced to its renderable exterior rings.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single polygon's exterior ring.
    Polygon(Ring),
    /// One exterior ring per member polygon.
    MultiPolygon(Vec<Ring>),
    /// Absent, malformed, or non-areal input.
    Unsupported,
}

impl Geometry {
    /// Parse WKT into renderable rings.
    ///
    /// `None`, unparsable text, and geometry kinds other than POLYGON /
    /// MULTIPOLYGON all yield [`Geometry::Unsupported`]; this never errors.
    pub fn from_wkt(wkt: Option<&str>) -> Geometry {
        let Some(text) = wkt else {
            return Geometry::Unsupported;
        };
        match parse_wkt(text) {
            Ok(geom) => Geometry::from_geo(&geom),
            Err(e) => {
                tracing::debug!(error = %e, "failed to parse WKT");
                Geometry::Unsupported
            }
        }
    }

    /// Reduce a parsed geo-types geometry to exterior rings.
    pub fn from_geo(geom: &geo_types::Geometry<f64>) -> Geometry {
        match geom {
            geo_types::Geometry::Polygon(p) => Geometry::Polygon(exterior_ring(p)),
            geo_types::Geometry::MultiPolygon(mp) => {
                Geometry::MultiPolygon(mp.0.iter().map(exterior_ring).collect())
            }
            _ => Geometry::Unsupported,
        }
    }

    /// True for [`Geometry::Unsupported`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Geometry::Unsupported)
    }

    /// Number of rings (0 for unsupported).
    pub fn ring_count(&self) -> usize {
        match self {
            Geometry::Polygon(_) => 1,
            Geometry::MultiPolygon(rings) => rings.len(),
            Geometry::Unsupported => 0,
        }
    }

    /// Total number of coordinate pairs across all rings.
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::Polygon(ring) => ring.len(),
            Geometry::MultiPolygon(rings) => rings.iter().map(Vec::len).sum(),
            Geometry::Unsupported => 0,
        }
    }
}

fn exterior_ring(polygon: &geo_types::Polygon<f64>) -> Ring {
    polygon.exterior().coords().map(|c| (c.x, c.y)).collect()
}

/// Parse a WKT string to a geo-types Geometry.
pub fn parse_wkt(wkt: &str) -> Result<geo_types::Geometry<f64>> {
    use std::str::FromStr;
    wkt::Wkt::from_str(wkt)
        .map_err(|e| SpatialError::WktParse(format!("{:?}", e)))
        .and_then(|w| {
            w.try_into()
                .map_err(|e: wkt::conversion::Error| SpatialError::WktParse(format!("{:?}", e)))
        })
}
