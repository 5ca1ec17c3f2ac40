// File: crates/trend-core/tests/scene.rs
// Purpose: Validate scene composition: path shape, sticky hover, highlight
// rules, and derived-cache invalidation.

use chrono::NaiveDate;
use trend_core::scene::{compose_scene, handle_hover, Derived};
use trend_core::{
    ChartConfig, ChartModel, CountrySeries, Dataset, HighlightState, Insets, Observation,
};

fn obs(country: &str, day: u32, death_total: u64) -> Observation {
    Observation {
        date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
        death_total,
        country_name: country.to_string(),
    }
}

fn series(country: &str, counts: &[u64]) -> CountrySeries {
    let observations = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| obs(country, 1 + i as u32, c))
        .collect();
    CountrySeries::try_new(country, observations).expect("valid series")
}

fn dataset() -> Dataset {
    Dataset::new(vec![series("Aurelia", &[1, 2, 5]), series("Borduria", &[0, 0, 1])])
}

// Zero margins keep hover coordinates equal to plot coordinates.
fn config() -> ChartConfig {
    let mut config = ChartConfig::new(400, 300);
    config.margin = Insets::new(0, 0, 0, 0);
    config
}

#[test]
fn one_vertex_per_observation_in_order() {
    let dataset = dataset();
    let derived = Derived::compute(&dataset, &config());
    for (series, path) in dataset.series.iter().zip(&derived.paths) {
        assert_eq!(path.points.len(), series.len());
        assert!(
            path.points.windows(2).all(|p| p[0].0 < p[1].0),
            "x advances with time"
        );
    }
}

#[test]
fn degenerate_series_do_not_fail() {
    let dataset = Dataset::new(vec![
        CountrySeries::try_new("Solo", vec![obs("Solo", 1, 4)]).expect("valid"),
        series("Pair", &[1, 2]),
    ]);
    let mut model = ChartModel::new(dataset, config());
    let scene = model.scene();
    assert_eq!(scene.lines[0].points.len(), 1);
    assert_eq!(scene.hit_regions.len(), 3);
}

#[test]
fn hover_near_a_lines_last_point_highlights_and_sticks() {
    let mut model = ChartModel::new(dataset(), config());
    let last = *model.scene().lines[0].points.last().unwrap();
    assert_eq!(model.hover_at(last.0, last.1), Some("Aurelia"));

    // no further hover: the state stays put
    let scene = model.scene();
    assert_eq!(
        scene.highlight.as_ref().map(|h| h.country_name.as_str()),
        Some("Aurelia")
    );
    assert_eq!(model.highlight(), &HighlightState::Highlighting("Aurelia".into()));

    // the next hover replaces the highlight, never clears it
    let other = *model.scene().lines[1].points.last().unwrap();
    assert_eq!(model.hover_at(other.0, other.1), Some("Borduria"));
    assert_eq!(
        model.scene().highlight.map(|h| h.country_name),
        Some("Borduria".to_string())
    );
}

#[test]
fn highlight_requires_a_known_country() {
    let dataset = dataset();
    let derived = Derived::compute(&dataset, &config());

    let scene = compose_scene(&dataset, &config(), &derived, &HighlightState::None);
    assert!(scene.highlight.is_none());

    let ghost = HighlightState::Highlighting("Atlantis".into());
    let scene = compose_scene(&dataset, &config(), &derived, &ghost);
    assert!(scene.highlight.is_none(), "unknown names draw nothing");

    let known = HighlightState::Highlighting("Borduria".into());
    let scene = compose_scene(&dataset, &config(), &derived, &known);
    assert_eq!(scene.highlight.map(|h| h.country_name), Some("Borduria".to_string()));
}

#[test]
fn handle_hover_is_a_pure_transition() {
    let o = obs("Aurelia", 1, 1);
    assert_eq!(handle_hover(&o), HighlightState::Highlighting("Aurelia".into()));
    assert_eq!(handle_hover(&o), handle_hover(&o));
}

#[test]
fn hit_regions_cover_every_projected_point() {
    let dataset = dataset();
    let derived = Derived::compute(&dataset, &config());
    let scene = compose_scene(&dataset, &config(), &derived, &HighlightState::None);
    assert_eq!(scene.hit_regions.len(), 6);
    assert!(scene.hit_regions[..3].iter().all(|r| r.country_name == "Aurelia"));
    assert!(scene.hit_regions[3..].iter().all(|r| r.country_name == "Borduria"));
}

#[test]
fn dimension_changes_rebuild_derived_values() {
    let mut model = ChartModel::new(dataset(), config());
    let before = model.scene();
    model.set_dimensions(800, 600);
    let after = model.scene();
    assert_eq!(after.width, 800.0);
    assert!(after.inner_width > before.inner_width);
    let last_before = before.lines[0].points.last().unwrap().0;
    let last_after = after.lines[0].points.last().unwrap().0;
    assert!(last_after > last_before, "paths reproject onto the new range");
}
