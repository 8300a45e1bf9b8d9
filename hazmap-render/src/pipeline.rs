//! The render pass.
//!
//! One [`RenderPipeline`] value holds everything a pass needs: the compiled
//! CRS pair, the column spec, and the color scale. Construction validates
//! the CRS configuration; rendering itself only fails on structural
//! problems (no input rows, undeclared columns). Per-row failures drop the
//! row and move on, counted by cause in [`RenderStats`].

use serde::Serialize;

use hazmap_bindings::{
    extract_records, BindingsError, ColumnSpec, HazardRecord, ResultSet, RowSet,
};
use hazmap_spatial::{CrsConfig, Geometry, GeometryTable, Reprojector};

use crate::color::HazardColorScale;
use crate::error::{RenderError, Result};
use crate::feature::{assemble, RenderableFeature};
use crate::join::resolve_geometry;

/// Pipeline-level configuration: the fixed CRS pair, the columns the
/// queries project, and the color scale constants.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub crs: CrsConfig,
    pub columns: ColumnSpec,
    pub scale: HazardColorScale,
}

/// Per-pass counters.
///
/// Dropped rows are observable here rather than hidden: every processed
/// row lands in exactly one of rendered / missing / invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Rows that entered the pass.
    pub rows_processed: u64,
    /// Rows that produced a feature.
    pub features_rendered: u64,
    /// Rows with no geometry at all (absent WKT cell, no join match).
    pub skipped_missing_geometry: u64,
    /// Rows whose geometry was malformed, of an unsupported kind, or
    /// failed to transform.
    pub skipped_invalid_geometry: u64,
}

/// The outcome of one render pass.
#[derive(Debug, Clone)]
pub struct RenderPass {
    /// Renderable features, in input row order.
    pub features: Vec<RenderableFeature>,
    /// Counters for the pass.
    pub stats: RenderStats,
}

/// A configured, re-entrant render pipeline.
///
/// Holds no mutable state; concurrent passes over different inputs are
/// independent by construction.
pub struct RenderPipeline {
    columns: ColumnSpec,
    reprojector: Reprojector,
    scale: HazardColorScale,
}

impl RenderPipeline {
    /// Build a pipeline, compiling the CRS pair.
    pub fn new(config: PipelineConfig) -> Result<RenderPipeline> {
        let reprojector = Reprojector::new(&config.crs)?;
        Ok(RenderPipeline {
            columns: config.columns,
            reprojector,
            scale: config.scale,
        })
    }

    /// Render the direct path: geometry comes from the WKT column of the
    /// result set itself.
    pub fn render_direct(&self, results: &ResultSet) -> Result<RenderPass> {
        if results.is_empty() {
            return Err(RenderError::EmptyResults);
        }
        let rows = RowSet::from_results(results);
        let records = extract_records(&rows, &self.columns)?;
        let wkt_ix = rows
            .index_of(&self.columns.wkt)
            .ok_or_else(|| BindingsError::MissingColumn(self.columns.wkt.clone()))?;

        let pairs = records
            .into_iter()
            .zip(rows.rows().iter())
            .map(|(record, row)| (record, row.cell(wkt_ix)));
        Ok(self.render_rows(pairs))
    }

    /// Render the join path: geometry is resolved from the external table
    /// by display name.
    pub fn render_joined(
        &self,
        results: &ResultSet,
        table: &GeometryTable,
    ) -> Result<RenderPass> {
        if results.is_empty() {
            return Err(RenderError::EmptyResults);
        }
        let rows = RowSet::from_results(results);
        let records = extract_records(&rows, &self.columns)?;
        Ok(self.render_rows(resolve_geometry(&records, table)))
    }

    fn render_rows<'a>(
        &self,
        pairs: impl IntoIterator<Item = (HazardRecord, Option<&'a str>)>,
    ) -> RenderPass {
        let mut stats = RenderStats::default();
        let mut features = Vec::new();

        for (record, raw_wkt) in pairs {
            stats.rows_processed += 1;

            let Some(wkt) = raw_wkt else {
                stats.skipped_missing_geometry += 1;
                tracing::debug!(name = %record.name, "row has no geometry; dropped");
                continue;
            };

            let geometry = Geometry::from_wkt(Some(wkt));
            if geometry.is_unsupported() {
                stats.skipped_invalid_geometry += 1;
                tracing::debug!(name = %record.name, "unrenderable geometry; dropped");
                continue;
            }

            let reprojected = match self.reprojector.reproject(&geometry) {
                Ok(g) => g,
                Err(e) => {
                    stats.skipped_invalid_geometry += 1;
                    tracing::warn!(name = %record.name, error = %e, "reprojection failed; row dropped");
                    continue;
                }
            };

            let fill = self.scale.color_for(record.hazard_pct);
            match assemble(&record, reprojected, fill) {
                Some(feature) => {
                    stats.features_rendered += 1;
                    features.push(feature);
                }
                None => stats.skipped_invalid_geometry += 1,
            }
        }

        RenderPass { features, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> RenderPipeline {
        RenderPipeline::new(PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_results_is_terminal() {
        let results = ResultSet::from_json(
            r#"{"head":{"vars":["municipality","name_it","hazardPct","wkt"]},"results":{"bindings":[]}}"#,
        )
        .unwrap();
        assert!(matches!(
            pipeline().render_direct(&results),
            Err(RenderError::EmptyResults)
        ));
    }

    #[test]
    fn test_undeclared_wkt_column_is_terminal() {
        let results = ResultSet::from_json(
            r#"{"head":{"vars":["municipality","name_it","hazardPct"]},"results":{"bindings":[
                {"municipality":{"type":"uri","value":"http://x/1"}}
            ]}}"#,
        )
        .unwrap();
        assert!(matches!(
            pipeline().render_direct(&results),
            Err(RenderError::Bindings(BindingsError::MissingColumn(c))) if c == "wkt"
        ));
    }
}
