// Standalone HTML export for the composed figure

use crate::render::Figure;

// plotly.js pinned to a known-good release; the page has no other assets
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// Wrap the figure in a self-contained HTML page
//
// The document embeds the figure JSON and issues a single Plotly.newPlot call.
// Opening the file in a browser is the "display" step of the pipeline.
pub fn to_html(figure: &Figure, page_title: &str) -> String {
    let document = figure.to_json();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="dashboard"></div>
<script>
const figure = {document};
Plotly.newPlot("dashboard", figure.data, figure.layout, {{ responsive: false }});
</script>
</body>
</html>
"#,
        title = page_title,
        cdn = PLOTLY_CDN,
        document = document,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{build_records, SeismicTables};
    use crate::layout::GridSpec;
    use crate::render::render_dashboard;

    #[test]
    fn test_html_envelope() {
        let records = build_records(&SeismicTables::builtin());
        let figure = render_dashboard(&records, &GridSpec::dashboard());
        let html = to_html(&figure, "Earthquake Risk Analysis");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("<title>Earthquake Risk Analysis</title>"));
        assert!(html.contains(r#"Plotly.newPlot("dashboard""#));
        // The embedded document is the figure itself
        assert!(html.contains(r#""type":"choropleth""#));
    }

    #[test]
    fn test_empty_figure_still_exports() {
        let figure = render_dashboard(&[], &GridSpec::dashboard());
        let html = to_html(&figure, "Empty");
        assert!(html.contains("Plotly.newPlot"));
    }
}
