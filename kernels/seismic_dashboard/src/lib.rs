// kernels/seismic_dashboard/src/lib.rs

// Earthquake Risk Dashboard Core
//
// This library builds a static multi-panel dashboard (choropleth map, scatter,
// grouped bars, magnitude distribution) from a fixed 14-country seismic table.
// The pipeline is a single forward pass:
//
//   dataset (tables -> records) -> aggregate (top-N, buckets) -> render (figure)
//
// with `layout` supplying the fixed 3x2 panel grid the renderer fills in. All
// stages are pure functions over immutable data; the only side effect lives in
// the `generate` binary, which writes the composed figure to disk as HTML.

pub mod aggregate;
pub mod dataset;
pub mod html;
pub mod layout;
pub mod render;
pub mod style;

pub use aggregate::{bucket_by_magnitude, top_n, MagnitudeBucket};
pub use dataset::{build_records, CountryRecord, SeismicTables};
pub use html::to_html;
pub use layout::{dashboard_panels, Domain, GridSpec, Panel, PanelKind};
pub use render::{render_dashboard, Figure};
