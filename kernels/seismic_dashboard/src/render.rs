// Figure composition: bind panel data and emit the Plotly-schema document

use serde::Serialize;
use serde_json::{json, Value};

use crate::aggregate::{bucket_by_magnitude, top_n, MagnitudeBucket};
use crate::dataset::CountryRecord;
use crate::layout::{dashboard_panels, Domain, GridSpec, PanelKind};
use crate::style;

// ============================================================================
// FIGURE DOCUMENT
// ============================================================================

// The composed dashboard as a Plotly figure document
//
// `data` holds one JSON object per trace, `layout` the grid geometry, axes,
// geo block and annotations. Serializing the whole struct yields exactly what
// `Plotly.newPlot` consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn to_json(&self) -> String {
        // Value trees never fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

// ============================================================================
// MAIN RENDER FUNCTION
// ============================================================================

// Compose the full 6-panel dashboard figure
//
// This is the main entry point that:
// 1. Derives the ranked subsets and magnitude buckets
// 2. Walks the fixed panel grid, binding each panel's data slice
// 3. Emits traces, per-panel axes and the geo block
// 4. Attaches the subplot titles, top-3 callout and footnote
//
// Total over any record set, the empty one included: panels simply carry
// empty arrays.
pub fn render_dashboard(records: &[CountryRecord], grid: &GridSpec) -> Figure {
    let top10 = top_n(records, 10);
    let top5 = top_n(records, 5);
    let top3 = top_n(records, 3);
    let buckets = bucket_by_magnitude(records);

    let mut data: Vec<Value> = Vec::new();
    let mut layout = base_layout();
    let mut annotations: Vec<Value> = Vec::new();

    // Cartesian panels get numbered axis pairs (x/y, x2/y2, ...) in the order
    // they appear; the map panel claims the geo block instead
    let mut cartesian_count = 0usize;

    for (index, panel) in dashboard_panels().iter().enumerate() {
        let domain = grid.panel_domain(panel);

        // One title per chart cell, row-major. The grid declares six titles
        // for five cells; the last declared title never finds a cell.
        if let Some(title) = grid.titles.get(index) {
            annotations.push(subplot_title(title, &domain));
        }

        match panel.kind {
            PanelKind::ChoroplethMap => {
                data.push(choropleth_trace(records));
                layout["geo"] = geo_block(&domain);
            }
            PanelKind::Scatter => {
                cartesian_count += 1;
                let axis = axis_suffix(cartesian_count);
                data.push(scatter_trace(&top10, &axis));
                set_axes(
                    &mut layout,
                    &axis,
                    &domain,
                    axis_options("Magnitude", true),
                    axis_options("Vulnerability", true),
                );
            }
            PanelKind::GroupedBar => {
                cartesian_count += 1;
                let axis = axis_suffix(cartesian_count);
                // Row 2 is the top-10 detail panel with hover templates; row 3
                // is the top-5 comparison panel without them
                let (ranked, with_hover) = if panel.row == 2 {
                    (&top10, true)
                } else {
                    (&top5, false)
                };
                data.push(metric_bar_trace(ranked, &axis, Metric::Magnitude, with_hover));
                data.push(metric_bar_trace(ranked, &axis, Metric::Vulnerability, with_hover));
                set_axes(
                    &mut layout,
                    &axis,
                    &domain,
                    axis_options("Country", false),
                    axis_options("Index", false),
                );
            }
            PanelKind::DistributionBar => {
                cartesian_count += 1;
                let axis = axis_suffix(cartesian_count);
                data.push(distribution_trace(&buckets, &axis));
                set_axes(
                    &mut layout,
                    &axis,
                    &domain,
                    axis_options("Magnitude Range", false),
                    axis_options("Number of Countries", false),
                );
            }
        }
    }

    annotations.push(top3_callout(&top3));
    annotations.push(footnote());
    layout["annotations"] = Value::Array(annotations);

    Figure { data, layout }
}

// ============================================================================
// TRACES
// ============================================================================

// World map colored by impact, keyed by ISO-3 code
//
// Records whose ISO lookup missed contribute a null location; Plotly drops
// them from the map without complaint.
fn choropleth_trace(records: &[CountryRecord]) -> Value {
    let locations: Vec<Value> = records.iter().map(|r| json!(r.iso)).collect();
    let impacts: Vec<f64> = records.iter().map(|r| r.impact).collect();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // Hover payload per record: [magnitude, vulnerability-or-null]
    let customdata: Vec<Value> = records
        .iter()
        .map(|r| json!([r.magnitude, r.vulnerability]))
        .collect();

    json!({
        "type": "choropleth",
        "geo": "geo",
        "locations": locations,
        "z": impacts,
        "colorscale": impact_colorscale(),
        "colorbar": {
            "title": { "text": "<b>Impact Index</b>" },
            "thickness": 15,
            "len": 0.5,
            "x": 0.48,
            "y": 0.65,
            "yanchor": "middle"
        },
        "marker": {
            "line": {
                "color": style::MAP_BORDER_COLOR,
                "width": style::MAP_BORDER_WIDTH
            }
        },
        "text": names,
        "customdata": customdata,
        "hovertemplate": "<b>%{text}</b><br>Magnitude: %{customdata[0]:.1f}<br>Vulnerability: %{customdata[1]:.2f}<br>Impact Index: %{z:.2f}<extra></extra>",
        "showscale": true
    })
}

// Magnitude vs vulnerability for the top-10, markers sized/colored by impact
fn scatter_trace(ranked: &[&CountryRecord], axis: &str) -> Value {
    let x: Vec<f64> = ranked.iter().map(|r| r.magnitude).collect();
    let y: Vec<Value> = ranked.iter().map(|r| json!(r.vulnerability)).collect();
    let sizes: Vec<f64> = ranked
        .iter()
        .map(|r| r.impact * style::SCATTER_MARKER_SCALE)
        .collect();
    let colors: Vec<f64> = ranked.iter().map(|r| r.impact).collect();
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();

    json!({
        "type": "scatter",
        "xaxis": format!("x{}", axis),
        "yaxis": format!("y{}", axis),
        "x": x,
        "y": y,
        "mode": "markers+text",
        "marker": {
            "size": sizes,
            "color": colors,
            "colorscale": "Reds",
            "showscale": false,
            "line": { "width": 1, "color": style::SCATTER_MARKER_LINE_COLOR },
            "opacity": style::SCATTER_MARKER_OPACITY
        },
        "text": names,
        "textposition": "top center",
        "hovertemplate": "<b>%{text}</b><br>Magnitude: %{x:.1f}<br>Vulnerability: %{y:.2f}<extra></extra>",
        "showlegend": false
    })
}

// The two bar series the grouped panels share
enum Metric {
    Magnitude,
    Vulnerability,
}

// One bar series (magnitude or vulnerability) over a ranked subset
fn metric_bar_trace(ranked: &[&CountryRecord], axis: &str, metric: Metric, with_hover: bool) -> Value {
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    let (label, color, values, hover) = match metric {
        Metric::Magnitude => (
            "Magnitude",
            style::MAGNITUDE_BAR_COLOR,
            ranked.iter().map(|r| json!(r.magnitude)).collect::<Vec<Value>>(),
            "<b>%{x}</b><br>Magnitude: %{y:.2f}<extra></extra>",
        ),
        Metric::Vulnerability => (
            "Vulnerability",
            style::VULNERABILITY_BAR_COLOR,
            // Missing vulnerability stays null; Plotly leaves a gap in the bars
            ranked.iter().map(|r| json!(r.vulnerability)).collect::<Vec<Value>>(),
            "<b>%{x}</b><br>Vulnerability: %{y:.2f}<extra></extra>",
        ),
    };

    let mut trace = json!({
        "type": "bar",
        "xaxis": format!("x{}", axis),
        "yaxis": format!("y{}", axis),
        "x": names,
        "y": values,
        "name": label,
        "marker": { "color": color }
    });
    if with_hover {
        trace["hovertemplate"] = json!(hover);
    }
    trace
}

// Bucket counts with member countries in the hover text
fn distribution_trace(buckets: &[MagnitudeBucket], axis: &str) -> Value {
    let labels: Vec<String> = buckets.iter().map(|b| b.label()).collect();
    let counts: Vec<usize> = buckets.iter().map(|b| b.countries.len()).collect();
    let hover: Vec<String> = buckets
        .iter()
        .map(|b| format!("Magnitude: {}<br>Countries: {}", b.label(), b.countries.join(", ")))
        .collect();

    json!({
        "type": "bar",
        "xaxis": format!("x{}", axis),
        "yaxis": format!("y{}", axis),
        "x": labels,
        "y": counts,
        "marker": {
            "color": style::DISTRIBUTION_BAR_COLOR,
            "line": { "color": style::DISTRIBUTION_BAR_LINE_COLOR, "width": 1 }
        },
        "hovertemplate": "%{customdata}<extra></extra>",
        "customdata": hover,
        "showlegend": false
    })
}

// ============================================================================
// LAYOUT BLOCKS
// ============================================================================

fn base_layout() -> Value {
    json!({
        "title": {
            "text": "<b>Earthquake Risk Analysis Dashboard</b>",
            "font": { "size": style::TITLE_FONT_SIZE },
            "x": 0.5,
            "xanchor": "center"
        },
        "width": style::FIGURE_WIDTH,
        "height": style::FIGURE_HEIGHT,
        "margin": { "l": 60, "r": 60, "t": 100, "b": 80 },
        "font": { "family": style::FONT_FAMILY, "size": style::BASE_FONT_SIZE },
        "barmode": "group",
        "hovermode": "closest",
        "showlegend": true,
        "legend": {
            "x": 0.5,
            "y": -0.02,
            "orientation": "h",
            "xanchor": "center",
            "yanchor": "top"
        }
    })
}

// Geography styling scoped to the map cell's domain
fn geo_block(domain: &Domain) -> Value {
    json!({
        "domain": { "x": [domain.x.0, domain.x.1], "y": [domain.y.0, domain.y.1] },
        "showland": true,
        "landcolor": style::LAND_COLOR,
        "coastlinecolor": style::COASTLINE_COLOR,
        "coastlinewidth": 1,
        "projection": { "type": "natural earth" },
        "showcoastlines": true,
        "showframe": false,
        "bgcolor": style::GEO_BG_COLOR
    })
}

// Axis-pair suffix: the first cartesian panel uses "x"/"y", later ones "x2"...
fn axis_suffix(cartesian_index: usize) -> String {
    if cartesian_index == 1 {
        String::new()
    } else {
        cartesian_index.to_string()
    }
}

struct AxisOptions {
    title: &'static str,
    show_grid: bool,
}

fn axis_options(title: &'static str, show_grid: bool) -> AxisOptions {
    AxisOptions { title, show_grid }
}

// Install a cartesian axis pair anchored to a panel's domain
fn set_axes(layout: &mut Value, axis: &str, domain: &Domain, x: AxisOptions, y: AxisOptions) {
    let mut xaxis = json!({
        "domain": [domain.x.0, domain.x.1],
        "anchor": format!("y{}", axis),
        "title": { "text": x.title }
    });
    let mut yaxis = json!({
        "domain": [domain.y.0, domain.y.1],
        "anchor": format!("x{}", axis),
        "title": { "text": y.title }
    });
    if x.show_grid {
        xaxis["showgrid"] = json!(true);
        xaxis["gridcolor"] = json!(style::GRID_LINE_COLOR);
    }
    if y.show_grid {
        yaxis["showgrid"] = json!(true);
        yaxis["gridcolor"] = json!(style::GRID_LINE_COLOR);
    }
    layout[format!("xaxis{}", axis)] = xaxis;
    layout[format!("yaxis{}", axis)] = yaxis;
}

fn impact_colorscale() -> Value {
    let stops: Vec<Value> = style::IMPACT_COLORSCALE
        .iter()
        .map(|&(position, color)| json!([position, color]))
        .collect();
    Value::Array(stops)
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

// Title centered over a panel's domain, sitting on its top edge
fn subplot_title(title: &str, domain: &Domain) -> Value {
    json!({
        "text": format!("<b>{}</b>", title),
        "x": (domain.x.0 + domain.x.1) / 2.0,
        "y": domain.y.1,
        "xref": "paper",
        "yref": "paper",
        "xanchor": "center",
        "yanchor": "bottom",
        "showarrow": false,
        "font": { "size": style::SUBPLOT_TITLE_FONT_SIZE }
    })
}

// Callout box listing rank, country and impact for the top three
fn top3_callout(top3: &[&CountryRecord]) -> Value {
    let lines: Vec<String> = top3
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} - {:.2}", i + 1, r.name, r.impact))
        .collect();

    json!({
        "x": 0.02,
        "y": 0.95,
        "xref": "paper",
        "yref": "paper",
        "text": format!("<b>\u{1F534} Top 3 by Impact</b><br>{}", lines.join("<br>")),
        "showarrow": false,
        "align": "left",
        "bgcolor": style::CALLOUT_BG_COLOR,
        "bordercolor": style::CALLOUT_BORDER_COLOR,
        "borderwidth": 2,
        "borderpad": 10,
        "font": { "size": 12 }
    })
}

// Provenance footnote; states the (deliberately simple) impact formula
fn footnote() -> Value {
    json!({
        "x": 0.02,
        "y": 0.02,
        "xref": "paper",
        "yref": "paper",
        "text": "<i>Impact index = magnitude | Data: seismological statistics</i>",
        "showarrow": false,
        "align": "left",
        "bgcolor": style::FOOTNOTE_BG_COLOR,
        "bordercolor": "gray",
        "borderwidth": 1,
        "borderpad": 8,
        "font": { "size": 10, "color": "gray" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{build_records, SeismicTables};

    fn builtin_figure() -> Figure {
        let records = build_records(&SeismicTables::builtin());
        render_dashboard(&records, &GridSpec::dashboard())
    }

    #[test]
    fn test_trace_count_and_kinds() {
        let figure = builtin_figure();
        let kinds: Vec<&str> = figure
            .data
            .iter()
            .map(|t| t["type"].as_str().unwrap())
            .collect();
        // choropleth, scatter, detail bars x2, distribution bar, comparison bars x2
        assert_eq!(kinds, vec!["choropleth", "scatter", "bar", "bar", "bar", "bar", "bar"]);
    }

    #[test]
    fn test_choropleth_carries_all_records() {
        let figure = builtin_figure();
        let map = &figure.data[0];
        assert_eq!(map["locations"].as_array().unwrap().len(), 14);
        assert_eq!(map["locations"][0], "JPN");
        assert_eq!(map["z"][0], 6.2);
        assert_eq!(map["colorscale"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_scatter_markers_scale_with_impact() {
        let figure = builtin_figure();
        let scatter = &figure.data[1];
        assert_eq!(scatter["marker"]["size"][0], 6.2 * 5.0);
        assert_eq!(scatter["text"][0], "Japan");
        assert_eq!(scatter["x"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_comparison_panel_holds_top5() {
        let figure = builtin_figure();
        // Last two traces are the comparison pair over the top 5
        let magnitude_bars = &figure.data[5];
        assert_eq!(magnitude_bars["x"].as_array().unwrap().len(), 5);
        assert_eq!(magnitude_bars["x"][0], "Japan");
        assert_eq!(magnitude_bars["name"], "Magnitude");
        // Detail bars carry hover templates, comparison bars do not
        assert!(figure.data[2].get("hovertemplate").is_some());
        assert!(figure.data[5].get("hovertemplate").is_none());
    }

    #[test]
    fn test_distribution_hover_lists_members() {
        let figure = builtin_figure();
        let distribution = &figure.data[4];
        let hover: Vec<&str> = distribution["customdata"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(hover
            .iter()
            .any(|h| h.contains("3.5") && h.contains("South Korea, Russia")));
    }

    #[test]
    fn test_annotations_titles_callout_footnote() {
        let figure = builtin_figure();
        let annotations = figure.layout["annotations"].as_array().unwrap();
        // 5 subplot titles (6 declared, 5 placed) + callout + footnote
        assert_eq!(annotations.len(), 7);
        let callout = annotations[5]["text"].as_str().unwrap();
        assert!(callout.contains("1. Japan - 6.20"));
        assert!(callout.contains("2. Indonesia - 6.00"));
        assert!(callout.contains("3. Philippines - 5.80"));
        let footnote = annotations[6]["text"].as_str().unwrap();
        assert!(footnote.contains("Impact index = magnitude"));
    }

    #[test]
    fn test_layout_has_geo_and_four_axis_pairs() {
        let figure = builtin_figure();
        assert!(figure.layout["geo"]["domain"]["x"].is_array());
        for axis in ["xaxis", "yaxis", "xaxis2", "yaxis2", "xaxis3", "yaxis3", "xaxis4", "yaxis4"] {
            assert!(figure.layout[axis].is_object(), "missing {}", axis);
        }
        assert_eq!(figure.layout["barmode"], "group");
    }

    #[test]
    fn test_missing_lookups_serialize_as_null() {
        let tables = SeismicTables {
            magnitudes: vec![("Atlantis", 7.0)],
            vulnerability: vec![],
            iso_codes: vec![],
        };
        let records = build_records(&tables);
        let figure = render_dashboard(&records, &GridSpec::dashboard());
        assert!(figure.data[0]["locations"][0].is_null());
        assert!(figure.data[0]["customdata"][0][1].is_null());
    }

    #[test]
    fn test_empty_dataset_renders() {
        let figure = render_dashboard(&[], &GridSpec::dashboard());
        assert_eq!(figure.data.len(), 7);
        for trace in &figure.data {
            let points = trace.get("locations").or_else(|| trace.get("x")).unwrap();
            assert!(points.as_array().unwrap().is_empty());
        }
        // Callout renders with only its header line
        let annotations = figure.layout["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 7);
    }
}
