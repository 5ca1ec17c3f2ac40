// File: crates/trend-core/src/voronoi.rs
// Summary: Proximity index: bounded Voronoi cells over projected points.

use tracing::debug;

use crate::geometry::RectF32;

/// Nearest-point planar partition of the plot rectangle.
///
/// Every site owns the convex region of the rectangle closer to it than to
/// any other site. Regions back the chart's invisible hover hit shapes: the
/// region under the cursor decides which country's line lights up.
#[derive(Clone, Debug)]
pub struct VoronoiIndex {
    sites: Vec<(f32, f32)>,
    cells: Vec<Vec<(f32, f32)>>,
    bounds: RectF32,
}

impl VoronoiIndex {
    /// Build the partition. Deterministic for a given site order. Coincident
    /// sites do not fail: the earliest of a coincident group owns the cell
    /// and the rest get empty regions.
    pub fn build(sites: Vec<(f32, f32)>, bounds: RectF32) -> Self {
        let cells = sites
            .iter()
            .enumerate()
            .map(|(i, &site)| clip_cell(i, site, &sites, &bounds))
            .collect();
        debug!(sites = sites.len(), "built proximity index");
        Self { sites, cells, bounds }
    }

    pub fn len(&self) -> usize { self.sites.len() }
    pub fn is_empty(&self) -> bool { self.sites.is_empty() }
    pub fn bounds(&self) -> RectF32 { self.bounds }
    pub fn sites(&self) -> &[(f32, f32)] { &self.sites }

    /// Boundary polygon of cell `i`. Empty for a shadowed coincident site.
    pub fn region(&self, i: usize) -> &[(f32, f32)] {
        &self.cells[i]
    }

    /// Index of the site nearest to the cursor position; ties resolve to the
    /// lowest index. None only when the index holds no sites.
    pub fn locate(&self, x: f32, y: f32) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &site) in self.sites.iter().enumerate() {
            let d2 = dist2((x, y), site);
            match best {
                Some((_, best_d2)) if d2 >= best_d2 => {}
                _ => best = Some((i, d2)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Carve site `i`'s cell out of the bounds rectangle by clipping against the
/// perpendicular bisector of every competing site.
///
/// Competitors are visited in ring order around `i` (consecutive
/// observations project next to each other, so the cutting neighbors tend to
/// appear early), and a competitor farther than twice the cell's current
/// reach cannot cut it, so distant sites cost a single distance test.
fn clip_cell(i: usize, site: (f32, f32), sites: &[(f32, f32)], bounds: &RectF32) -> Vec<(f32, f32)> {
    let sx = site.0 as f64;
    let sy = site.1 as f64;
    let mut cell: Vec<(f64, f64)> = bounds
        .corners()
        .iter()
        .map(|&(x, y)| (x as f64, y as f64))
        .collect();
    let mut reach2 = max_dist2((sx, sy), &cell);

    let n = sites.len();
    'ring: for k in 1..n {
        let below = i.checked_sub(k);
        let above = if i + k < n { Some(i + k) } else { None };
        if below.is_none() && above.is_none() {
            break;
        }
        for j in [below, above].into_iter().flatten() {
            let dx = sites[j].0 as f64 - sx;
            let dy = sites[j].1 as f64 - sy;
            let d2 = dx * dx + dy * dy;
            if d2 == 0.0 {
                // coincident: the earliest site owns the cell
                if j < i {
                    cell.clear();
                    break 'ring;
                }
                continue;
            }
            if d2 > 4.0 * reach2 {
                continue;
            }
            halfplane_clip(&mut cell, (sx + dx * 0.5, sy + dy * 0.5), (dx, dy));
            if cell.is_empty() {
                break 'ring;
            }
            reach2 = max_dist2((sx, sy), &cell);
        }
    }

    cell.into_iter().map(|(x, y)| (x as f32, y as f32)).collect()
}

/// Sutherland-Hodgman clip of a convex polygon against the half-plane of
/// points no farther from the owning site than from the competitor: keep p
/// where dot(p - mid, normal) <= 0, with `normal` pointing at the competitor.
fn halfplane_clip(cell: &mut Vec<(f64, f64)>, mid: (f64, f64), normal: (f64, f64)) {
    if cell.is_empty() {
        return;
    }
    let side = |p: (f64, f64)| (p.0 - mid.0) * normal.0 + (p.1 - mid.1) * normal.1;
    let mut out = Vec::with_capacity(cell.len() + 1);
    for idx in 0..cell.len() {
        let a = cell[idx];
        let b = cell[(idx + 1) % cell.len()];
        let da = side(a);
        let db = side(b);
        if da <= 0.0 {
            out.push(a);
        }
        if (da < 0.0 && db > 0.0) || (da > 0.0 && db < 0.0) {
            let t = da / (da - db);
            out.push((a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t));
        }
    }
    *cell = out;
}

fn max_dist2(p: (f64, f64), poly: &[(f64, f64)]) -> f64 {
    poly.iter()
        .map(|&(x, y)| {
            let dx = x - p.0;
            let dy = y - p.1;
            dx * dx + dy * dy
        })
        .fold(0.0, f64::max)
}

#[inline]
fn dist2(p: (f32, f32), q: (f32, f32)) -> f64 {
    let dx = (p.0 - q.0) as f64;
    let dy = (p.1 - q.1) as f64;
    dx * dx + dy * dy
}
