// Fixed panel grid and paper-coordinate domains

// ============================================================================
// PANEL DECLARATIONS
// ============================================================================

// Chart type a panel carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    // World map colored by impact, keyed by ISO-3 code
    ChoroplethMap,
    // Magnitude vs vulnerability, markers sized/colored by impact
    Scatter,
    // Two grouped bars (magnitude, vulnerability) per country
    GroupedBar,
    // Bucket counts with member countries in the hover text
    DistributionBar,
}

// One cell of the dashboard grid
//
// Rows and columns are 1-based, matching how the grid is usually discussed.
// Only row spans occur in this layout; columns never span.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub kind: PanelKind,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
}

// The five trace-bearing panels, in row-major order
//
// Cell (2,1) is deliberately empty: the map at (1,1) spans down into it. Six
// subplot titles are declared on the grid but only these five cells exist to
// receive one, a quirk carried over from the source dashboard.
pub fn dashboard_panels() -> Vec<Panel> {
    vec![
        Panel { kind: PanelKind::ChoroplethMap, row: 1, col: 1, row_span: 2 },
        Panel { kind: PanelKind::Scatter, row: 1, col: 2, row_span: 1 },
        Panel { kind: PanelKind::GroupedBar, row: 2, col: 2, row_span: 1 },
        Panel { kind: PanelKind::DistributionBar, row: 3, col: 1, row_span: 1 },
        Panel { kind: PanelKind::GroupedBar, row: 3, col: 2, row_span: 1 },
    ]
}

// ============================================================================
// GRID GEOMETRY
// ============================================================================

// A panel's share of the figure in paper coordinates
//
// Both ranges live in [0, 1]; y runs bottom-up, so row 1 (the top row) has the
// highest y values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

// Static grid configuration for the dashboard
//
// 3 rows x 2 columns with the first row taller to fit the map. The values are
// declarative; `cell_domain` turns them into paper coordinates the way a
// subplot engine would.
#[derive(Debug, Clone)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,

    // Relative heights, top row first; must sum to 1 and match `rows`
    pub row_heights: Vec<f64>,

    // Paper-coordinate gaps between adjacent rows / columns
    pub vertical_spacing: f64,
    pub horizontal_spacing: f64,

    // Declared subplot titles, row-major. Six are declared but the grid holds
    // only five chart cells; the sixth never gets placed (source quirk, kept).
    pub titles: Vec<&'static str>,
}

impl GridSpec {
    pub fn dashboard() -> Self {
        let spec = Self {
            rows: 3,
            cols: 2,
            row_heights: vec![0.5, 0.25, 0.25],
            vertical_spacing: 0.12,
            horizontal_spacing: 0.1,
            titles: vec![
                "Estimated Impact Index by Country",
                "Magnitude vs Vulnerability vs Impact (Top 10)",
                "Top 10 Countries in Detail",
                "Country Distribution by Magnitude",
                "Metric Comparison (Top 5)",
                "Top 5 Impact Index Ranking",
            ],
        };
        assert_eq!(spec.row_heights.len(), spec.rows);
        assert!((spec.row_heights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        spec
    }

    // Height of one row in paper coordinates, after spacing is set aside
    fn row_height(&self, row: usize) -> f64 {
        let available = 1.0 - self.vertical_spacing * (self.rows - 1) as f64;
        self.row_heights[row - 1] * available
    }

    // Top edge (y) of a row; row 1 starts at 1.0
    fn row_top(&self, row: usize) -> f64 {
        let mut top = 1.0;
        for r in 1..row {
            top -= self.row_height(r) + self.vertical_spacing;
        }
        top
    }

    // Paper-coordinate domain of a cell, spanning `row_span` rows downward
    pub fn cell_domain(&self, row: usize, col: usize, row_span: usize) -> Domain {
        assert!(row >= 1 && row + row_span - 1 <= self.rows, "row span out of grid");
        assert!(col >= 1 && col <= self.cols, "column out of grid");

        let width = (1.0 - self.horizontal_spacing * (self.cols - 1) as f64) / self.cols as f64;
        let x0 = (col - 1) as f64 * (width + self.horizontal_spacing);

        let top = self.row_top(row);
        let last_row = row + row_span - 1;
        let bottom = self.row_top(last_row) - self.row_height(last_row);

        Domain {
            x: (x0, x0 + width),
            y: (bottom, top),
        }
    }

    // Domain of a declared panel
    pub fn panel_domain(&self, panel: &Panel) -> Domain {
        self.cell_domain(panel.row, panel.col, panel.row_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_five_chart_cells_six_titles() {
        let grid = GridSpec::dashboard();
        let panels = dashboard_panels();
        assert_eq!(panels.len(), 5);
        assert_eq!(grid.titles.len(), 6);
        // Exactly one panel spans rows, and it is the map
        let spanning: Vec<_> = panels.iter().filter(|p| p.row_span > 1).collect();
        assert_eq!(spanning.len(), 1);
        assert_eq!(spanning[0].kind, PanelKind::ChoroplethMap);
    }

    #[test]
    fn test_domains_stay_on_paper() {
        let grid = GridSpec::dashboard();
        for panel in dashboard_panels() {
            let d = grid.panel_domain(&panel);
            assert!(d.x.0 >= -EPS && d.x.1 <= 1.0 + EPS && d.x.0 < d.x.1);
            assert!(d.y.0 >= -EPS && d.y.1 <= 1.0 + EPS && d.y.0 < d.y.1);
        }
    }

    #[test]
    fn test_row_and_column_geometry() {
        let grid = GridSpec::dashboard();

        // Columns: 0.9 of the paper split in two, 0.1 gap between
        let left = grid.cell_domain(1, 1, 1);
        let right = grid.cell_domain(1, 2, 1);
        assert!((left.x.0 - 0.0).abs() < EPS);
        assert!((left.x.1 - 0.45).abs() < EPS);
        assert!((right.x.0 - 0.55).abs() < EPS);
        assert!((right.x.1 - 1.0).abs() < EPS);

        // Rows: heights 0.38 / 0.19 / 0.19 with 0.12 gaps
        assert!((left.y.1 - 1.0).abs() < EPS);
        assert!((left.y.0 - 0.62).abs() < EPS);
        let bottom = grid.cell_domain(3, 1, 1);
        assert!((bottom.y.1 - 0.19).abs() < EPS);
        assert!(bottom.y.0.abs() < EPS);
    }

    #[test]
    fn test_map_domain_spans_first_two_rows() {
        let grid = GridSpec::dashboard();
        let map = grid.cell_domain(1, 1, 2);
        let row2 = grid.cell_domain(2, 2, 1);
        assert!((map.y.1 - 1.0).abs() < EPS);
        // Map bottom lines up with the bottom of row 2
        assert!((map.y.0 - row2.y.0).abs() < EPS);
    }
}
