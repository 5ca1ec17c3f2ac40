// File: crates/trend-svg/tests/svg.rs
// Purpose: Validate SVG document structure for a composed scene.

use chrono::NaiveDate;
use trend_core::scene::{compose_scene, Derived, Scene};
use trend_core::{ChartConfig, CountrySeries, Dataset, HighlightState, Observation};
use trend_svg::{render_svg, Theme};

fn series(country: &str, counts: &[u64]) -> CountrySeries {
    let observations = counts
        .iter()
        .enumerate()
        .map(|(i, &death_total)| Observation {
            date: NaiveDate::from_ymd_opt(2020, 3, 1 + i as u32).unwrap(),
            death_total,
            country_name: country.to_string(),
        })
        .collect();
    CountrySeries::try_new(country, observations).expect("valid series")
}

fn scene(highlight: &HighlightState) -> Scene {
    let dataset = Dataset::new(vec![
        series("Aurelia", &[1, 2, 5]),
        series("K&N <Isles>", &[0, 1, 2]),
    ]);
    let config = ChartConfig::new(640, 480);
    let derived = Derived::compute(&dataset, &config);
    compose_scene(&dataset, &config, &derived, highlight)
}

#[test]
fn document_shape() {
    let svg = render_svg(&scene(&HighlightState::None), &Theme::dark());
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="640""#));
    assert!(svg.contains("Global Coronavirus Deaths Over Time by Country"));
    assert!(svg.contains("Cumulative Deaths"));
    assert!(svg.contains(">Time<"));
    assert_eq!(svg.matches(r#"pointer-events="all""#).count(), 1);
    assert_eq!(svg.matches("data-point=").count(), 6, "one hit shape per point");
}

#[test]
fn country_names_are_escaped() {
    let svg = render_svg(&scene(&HighlightState::None), &Theme::dark());
    assert!(svg.contains("K&amp;N &lt;Isles&gt;"));
    assert!(!svg.contains("K&N <Isles>"));
}

#[test]
fn one_path_per_country_line() {
    let svg = render_svg(&scene(&HighlightState::None), &Theme::dark());
    let needle = format!(r#"stroke="{}""#, Theme::dark().line);
    assert_eq!(svg.matches(&needle).count(), 2);
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    assert_eq!(trend_svg::theme::find("light").name, "light");
    assert_eq!(trend_svg::theme::find("LIGHT").name, "light");
    assert_eq!(trend_svg::theme::find("nope").name, "dark");
}

#[test]
fn highlight_path_renders_only_for_known_countries() {
    let active_stroke = format!(r#"stroke="{}""#, Theme::dark().line_active);

    let none = render_svg(&scene(&HighlightState::None), &Theme::dark());
    assert!(!none.contains(&active_stroke));

    let active = render_svg(
        &scene(&HighlightState::Highlighting("Aurelia".into())),
        &Theme::dark(),
    );
    assert_eq!(active.matches(&active_stroke).count(), 1);

    let ghost = render_svg(
        &scene(&HighlightState::Highlighting("Atlantis".into())),
        &Theme::dark(),
    );
    assert!(!ghost.contains(&active_stroke));
}
