// Seismic Dashboard Generator CLI
//
// This binary runs the dashboard pipeline once and writes the composed figure
// to disk as a standalone HTML page (and optionally the raw figure JSON).

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use seismic_dashboard::*;

/// CLI arguments for the dashboard generator
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate the earthquake risk analysis dashboard", long_about = None)]
struct Args {
    /// Output path for the dashboard HTML
    #[arg(short, long, default_value = "dashboard.html")]
    output: PathBuf,

    /// Also write the raw figure JSON next to the HTML (same stem, .json)
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Pretty-print the figure JSON (only applies with --json)
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Build the dataset from the embedded tables
    let tables = SeismicTables::builtin();
    let records = build_records(&tables);

    let grid = GridSpec::dashboard();
    let panels = dashboard_panels();

    // Print configuration
    println!("\nSeismic Dashboard Generator");
    println!("=======================================");
    println!("  Countries: {}", records.len());
    println!("  Grid: {} rows x {} cols, {} chart panels", grid.rows, grid.cols, panels.len());
    println!("  Output: {}", args.output.display());
    println!("=======================================\n");

    // Compose the figure
    let figure = render_dashboard(&records, &grid);

    // Write the HTML artifact
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let html = to_html(&figure, "Earthquake Risk Analysis Dashboard");
    fs::write(&args.output, &html)?;
    println!("  Wrote dashboard: {} ({:.1} KB)", args.output.display(), html.len() as f64 / 1_000.0);

    // Optionally write the raw figure document
    if args.json {
        let json_path = args.output.with_extension("json");
        let document = if args.pretty {
            figure.to_json_pretty()
        } else {
            figure.to_json()
        };
        fs::write(&json_path, &document)?;
        println!("  Wrote figure JSON: {} ({:.1} KB)", json_path.display(), document.len() as f64 / 1_000.0);
    }

    // Print the headline ranking
    println!("\nTop 3 by impact:");
    for (i, record) in top_n(&records, 3).iter().enumerate() {
        println!("  {}. {} - {:.2}", i + 1, record.name, record.impact);
    }

    println!("\nGeneration complete.\n");

    Ok(())
}
