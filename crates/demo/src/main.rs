// File: crates/demo/src/main.rs
// Summary: Demo loads the global deaths CSV (file or URL) and renders the chart SVG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trend_core::{parse_dataset, ChartConfig, ChartModel};
use trend_svg::Theme;

/// Upstream JHU CSSE global deaths time series.
const CSV_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_deaths_global.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept a source from CLI (local file or URL) or fall back to upstream.
    let source = std::env::args().nth(1).unwrap_or_else(|| CSV_URL.to_string());
    // Optional simulated hover position, in inner-plot pixels.
    let hover = parse_hover(std::env::args().nth(2), std::env::args().nth(3));

    let text = load_source(&source)?;
    info!(bytes = text.len(), "loaded deaths table");

    let dataset = parse_dataset(&text).context("parsing deaths CSV")?;
    info!(countries = dataset.len(), "parsed dataset");
    if dataset.is_empty() {
        anyhow::bail!("no countries parsed - check headers/delimiter.");
    }

    let mut model = ChartModel::new(dataset, ChartConfig::default());
    if let Some((x, y)) = hover {
        match model.hover_at(x, y) {
            Some(country) => info!(country, "hover highlight"),
            None => info!("hover position resolved no point"),
        }
    }

    let scene = model.scene();
    let svg = trend_svg::render_svg(&scene, &Theme::dark());

    let out = PathBuf::from("target/out/pandemic_trends.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Read a local file when the argument names one; otherwise GET it. Either
/// failure surfaces with context instead of leaving a silent loading state.
fn load_source(source: &str) -> Result<String> {
    let path = Path::new(source);
    if path.exists() {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let response = reqwest::blocking::get(source)
        .with_context(|| format!("fetching {source}"))?
        .error_for_status()
        .context("deaths CSV request failed")?;
    response.text().context("reading deaths CSV body")
}

fn parse_hover(x: Option<String>, y: Option<String>) -> Option<(f32, f32)> {
    Some((x?.trim().parse().ok()?, y?.trim().parse().ok()?))
}
