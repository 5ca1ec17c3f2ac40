// File: crates/trend-examples/src/bin/trends.rs
// Summary: Minimal example that composes a two-country chart and writes an SVG.

use chrono::NaiveDate;
use trend_core::{ChartConfig, ChartModel, CountrySeries, Dataset, Observation};
use trend_svg::Theme;

fn series(country: &str, counts: &[u64]) -> CountrySeries {
    let observations = counts
        .iter()
        .enumerate()
        .map(|(i, &death_total)| Observation {
            date: NaiveDate::from_ymd_opt(2020, 3, 1 + i as u32).expect("valid date"),
            death_total,
            country_name: country.to_string(),
        })
        .collect();
    CountrySeries::try_new(country, observations).expect("valid series")
}

fn main() {
    let dataset = Dataset::new(vec![
        series("Aurelia", &[1, 2, 5, 9, 14]),
        series("Borduria", &[0, 0, 1, 3, 4]),
    ]);

    let mut model = ChartModel::new(dataset, ChartConfig::new(800, 500));
    // Emphasize whichever line runs nearest the plot center.
    model.hover_at(330.0, 185.0);

    let scene = model.scene();
    let svg = trend_svg::render_svg(&scene, &Theme::dark());

    let out = std::path::PathBuf::from("target/out/example_trends.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, svg).expect("write svg");
    println!("Wrote {}", out.display());
}
