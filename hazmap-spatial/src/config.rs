//! CRS pair configuration.
//!
//! The pipeline transforms between two fixed reference systems: the
//! projected system of the domain's spatial dataset and the geographic
//! system web map layers expect. Both are carried as proj definition
//! strings in an explicit config value threaded into the reprojector, so
//! concurrent renders with different configurations stay independent.

/// EPSG:32632, UTM zone 32N on WGS84, the CRS of the municipality shapes.
pub const EPSG_32632: &str = "+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs";

/// EPSG:4326, geographic longitude/latitude on WGS84.
pub const EPSG_4326: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Source and target CRS for a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrsConfig {
    /// Proj definition of the source (projected) system.
    pub source: String,
    /// Proj definition of the target (geographic) system.
    pub target: String,
}

impl Default for CrsConfig {
    fn default() -> Self {
        Self {
            source: EPSG_32632.into(),
            target: EPSG_4326.into(),
        }
    }
}
