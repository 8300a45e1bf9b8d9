//! Rendering pipeline for the hazard-exposure choropleth.
//!
//! Ties the lower layers together into one synchronous render pass:
//! normalized metric rows acquire a geometry (either directly from a WKT
//! column or joined in from an external table by name), the geometry is
//! reprojected to geographic coordinates, the hazard percentage is mapped
//! to a fill color, and each row with a resolvable geometry becomes one
//! [`RenderableFeature`].
//!
//! Rows are never failed individually: a row that cannot be rendered is
//! dropped, counted in [`RenderStats`], and logged at debug level. Only
//! structural problems (missing declared columns, empty input, a CRS pair
//! that does not compile) abort the pass, as a single [`RenderError`].
//!
//! Each [`RenderPipeline`] value is self-contained and re-entrant:
//! concurrent passes share no mutable state.

pub mod color;
pub mod error;
pub mod feature;
pub mod join;
pub mod pipeline;

pub use color::{HazardColorScale, Rgba, NEUTRAL_FILL};
pub use error::{RenderError, Result};
pub use feature::RenderableFeature;
pub use join::resolve_geometry;
pub use pipeline::{PipelineConfig, RenderPass, RenderPipeline, RenderStats};
