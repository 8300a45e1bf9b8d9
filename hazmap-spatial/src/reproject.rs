//! Fixed-pair coordinate reprojection.
//!
//! A [`Reprojector`] compiles the configured proj definitions once and then
//! transforms geometries coordinate-wise. Ring structure is preserved
//! exactly: same ring count, same point count, no reordering. Output for a
//! geographic target is in (longitude, latitude) degree order. proj4rs
//! works in radians for geographic systems, and the conversion happens
//! here so callers only ever see degrees.

use proj4rs::proj::Proj;

use crate::config::CrsConfig;
use crate::error::{Result, SpatialError};
use crate::geometry::{Coord2, Geometry, Ring};

/// Coordinate transformer for one (source, target) CRS pair.
///
/// Construction validates both definitions; a definition that does not
/// compile is a pipeline-level misconfiguration, reported as an error
/// rather than degrading row by row.
pub struct Reprojector {
    source: Proj,
    target: Proj,
}

impl Reprojector {
    /// Compile the configured CRS pair.
    pub fn new(config: &CrsConfig) -> Result<Reprojector> {
        let source = Proj::from_proj_string(&config.source).map_err(|e| {
            SpatialError::Projection(format!("bad source CRS '{}': {e}", config.source))
        })?;
        let target = Proj::from_proj_string(&config.target).map_err(|e| {
            SpatialError::Projection(format!("bad target CRS '{}': {e}", config.target))
        })?;
        Ok(Reprojector { source, target })
    }

    /// Transform every coordinate of a geometry into the target CRS.
    ///
    /// [`Geometry::Unsupported`] passes through unchanged; ring and point
    /// counts are preserved exactly.
    pub fn reproject(&self, geometry: &Geometry) -> Result<Geometry> {
        match geometry {
            Geometry::Polygon(ring) => Ok(Geometry::Polygon(self.project_ring(ring)?)),
            Geometry::MultiPolygon(rings) => Ok(Geometry::MultiPolygon(
                rings
                    .iter()
                    .map(|r| self.project_ring(r))
                    .collect::<Result<Vec<Ring>>>()?,
            )),
            Geometry::Unsupported => Ok(Geometry::Unsupported),
        }
    }

    /// Transform a single source-CRS point into the target CRS.
    pub fn forward(&self, point: Coord2) -> Result<Coord2> {
        transform_between(&self.source, &self.target, point)
    }

    /// Transform a single target-CRS point back into the source CRS.
    ///
    /// The inverse of [`Reprojector::forward`]; exposed so callers can
    /// verify round-trip fidelity.
    pub fn inverse(&self, point: Coord2) -> Result<Coord2> {
        transform_between(&self.target, &self.source, point)
    }

    fn project_ring(&self, ring: &Ring) -> Result<Ring> {
        ring.iter().map(|&p| self.forward(p)).collect()
    }
}

/// Coordinate-wise transform with degree/radian adaptation at the
/// geographic ends.
fn transform_between(from: &Proj, to: &Proj, (x, y): Coord2) -> Result<Coord2> {
    let mut point = (x, y, 0.0);
    if from.is_latlong() {
        point.0 = point.0.to_radians();
        point.1 = point.1.to_radians();
    }
    proj4rs::transform::transform(from, to, &mut point)
        .map_err(|e| SpatialError::Projection(e.to_string()))?;
    if to.is_latlong() {
        point.0 = point.0.to_degrees();
        point.1 = point.1.to_degrees();
    }
    Ok((point.0, point.1))
}
