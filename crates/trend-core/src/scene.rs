// File: crates/trend-core/src/scene.rs
// Summary: Scene composer: derived values, hover state, renderable scene.

use tracing::debug;

use crate::axis::{count_ticks, date_ticks, Tick};
use crate::geometry::RectF32;
use crate::path::series_polyline;
use crate::scale::Scales;
use crate::series::{Dataset, Observation};
use crate::types::ChartConfig;
use crate::voronoi::VoronoiIndex;

pub const TITLE: &str = "Global Coronavirus Deaths Over Time by Country";
pub const X_AXIS_LABEL: &str = "Time";
pub const Y_AXIS_LABEL: &str = "Cumulative Deaths";

const X_TICK_COUNT: usize = 10;

/// Which country's line is emphasized. Sticky: hovering moves it, nothing
/// clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    None,
    Highlighting(String),
}

impl HighlightState {
    pub fn country(&self) -> Option<&str> {
        match self {
            HighlightState::None => None,
            HighlightState::Highlighting(name) => Some(name),
        }
    }
}

/// Hover transition: any state plus a hovered point moves to highlighting
/// that point's country.
pub fn handle_hover(obs: &Observation) -> HighlightState {
    HighlightState::Highlighting(obs.country_name.clone())
}

/// One country's pixel-space polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub country_name: String,
    pub points: Vec<(f32, f32)>,
}

/// One projected observation: inner-space position plus its owning series.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub series: usize,
}

/// Everything recomputed when the dataset or dimensions change: scales,
/// per-country polylines, the flattened projected points, and the proximity
/// index over them.
#[derive(Clone, Debug)]
pub struct Derived {
    pub scales: Scales,
    pub paths: Vec<SeriesPath>,
    pub points: Vec<ProjectedPoint>,
    pub proximity: VoronoiIndex,
}

impl Derived {
    /// Pure function of (dataset, config): the same inputs always produce
    /// the same scales, paths, and regions.
    pub fn compute(dataset: &Dataset, config: &ChartConfig) -> Self {
        let inner_w = config.inner_width();
        let inner_h = config.inner_height();
        let flattened = dataset.flattened();
        let scales = Scales::from_points(&flattened, inner_w, inner_h, config.epsilon);

        let paths: Vec<SeriesPath> = dataset
            .series
            .iter()
            .map(|s| SeriesPath {
                country_name: s.country_name.clone(),
                points: series_polyline(s, &scales),
            })
            .collect();

        let mut points = Vec::with_capacity(flattened.len());
        for (series_idx, series) in dataset.series.iter().enumerate() {
            for obs in &series.observations {
                let (x, y) = scales.project(obs);
                points.push(ProjectedPoint { x, y, series: series_idx });
            }
        }

        let sites = points.iter().map(|p| (p.x, p.y)).collect();
        let proximity = VoronoiIndex::build(sites, RectF32::from_ltwh(0.0, 0.0, inner_w, inner_h));
        debug!(series = paths.len(), points = points.len(), "derived chart values");
        Self { scales, paths, points, proximity }
    }
}

/// Invisible hover hit shape for one projected point.
#[derive(Clone, Debug)]
pub struct HitRegion {
    pub polygon: Vec<(f32, f32)>,
    pub point: usize,
    pub country_name: String,
}

/// Renderable description of the whole chart. Pure data; styling belongs to
/// the renderer.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Inner-plot origin in outer coordinates (the margin translate).
    pub origin: (f32, f32),
    pub inner_width: f32,
    pub inner_height: f32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub lines: Vec<SeriesPath>,
    pub hit_regions: Vec<HitRegion>,
    pub highlight: Option<SeriesPath>,
}

/// Assemble the scene from the dataset and its derived values. The highlight
/// path appears only when the state names a country present in the dataset,
/// and it is listed last so it draws on top of the other lines.
pub fn compose_scene(
    dataset: &Dataset,
    config: &ChartConfig,
    derived: &Derived,
    highlight: &HighlightState,
) -> Scene {
    let hit_regions = derived
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| HitRegion {
            polygon: derived.proximity.region(i).to_vec(),
            point: i,
            country_name: dataset.series[p.series].country_name.clone(),
        })
        .collect();

    let highlight_path = highlight
        .country()
        .and_then(|name| derived.paths.iter().find(|p| p.country_name == name))
        .cloned();

    Scene {
        width: config.width as f32,
        height: config.height as f32,
        origin: (config.margin.left as f32, config.margin.top as f32),
        inner_width: config.inner_width(),
        inner_height: config.inner_height(),
        title: TITLE.to_string(),
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        x_ticks: date_ticks(&derived.scales.x, X_TICK_COUNT),
        y_ticks: count_ticks(&derived.scales.y),
        lines: derived.paths.clone(),
        hit_regions,
        highlight: highlight_path,
    }
}

/// Stateful orchestrator: owns the dataset, the hover highlight, and an
/// explicit cache of the derived values keyed on (dataset, dimensions).
///
/// The dataset is written once, at construction; the highlight has exactly
/// one writer, [`ChartModel::hover_at`]. Hovering never touches the cache:
/// the proximity index is the most expensive derived value, and only a
/// dimension change rebuilds it.
pub struct ChartModel {
    dataset: Dataset,
    config: ChartConfig,
    highlight: HighlightState,
    derived: Option<Derived>,
}

impl ChartModel {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Self {
        Self { dataset, config, highlight: HighlightState::None, derived: None }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn highlight(&self) -> &HighlightState { &self.highlight }

    /// Change the output dimensions, dropping the cached derived values.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.derived = None;
        }
    }

    /// Derived values for the current dataset and dimensions, computed on
    /// first use and reused until invalidated.
    pub fn derived(&mut self) -> &Derived {
        let dataset = &self.dataset;
        let config = &self.config;
        self.derived.get_or_insert_with(|| Derived::compute(dataset, config))
    }

    /// Hover at an inner-space cursor position: locate the nearest point and
    /// move the highlight to its country. Returns the highlighted country.
    /// Sticky: no event moves the state back to `None`.
    pub fn hover_at(&mut self, x: f32, y: f32) -> Option<&str> {
        let dataset = &self.dataset;
        let config = &self.config;
        let derived = self.derived.get_or_insert_with(|| Derived::compute(dataset, config));
        let point = derived.proximity.locate(x, y)?;
        let name = dataset.series[derived.points[point].series].country_name.clone();
        self.highlight = HighlightState::Highlighting(name);
        self.highlight.country()
    }

    /// Compose the scene for the current state.
    pub fn scene(&mut self) -> Scene {
        let dataset = &self.dataset;
        let config = &self.config;
        let derived = self.derived.get_or_insert_with(|| Derived::compute(dataset, config));
        compose_scene(dataset, config, derived, &self.highlight)
    }
}
