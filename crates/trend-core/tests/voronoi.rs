// File: crates/trend-core/tests/voronoi.rs
// Purpose: Validate the proximity index: region count, self-containment,
// idempotent rebuilds, and coincident-site tolerance.

use trend_core::geometry::RectF32;
use trend_core::VoronoiIndex;

fn bounds() -> RectF32 {
    RectF32::from_ltwh(0.0, 0.0, 100.0, 80.0)
}

fn sample_grid() -> Vec<(f32, f32)> {
    let mut cursors = Vec::new();
    for ix in 0..=10 {
        for iy in 0..=8 {
            cursors.push((ix as f32 * 10.0, iy as f32 * 10.0));
        }
    }
    cursors
}

#[test]
fn every_site_gets_a_region() {
    let sites = vec![(10.0, 10.0), (50.0, 40.0), (90.0, 70.0), (20.0, 60.0)];
    let index = VoronoiIndex::build(sites.clone(), bounds());
    assert_eq!(index.len(), sites.len());
    assert_eq!(index.sites(), &sites[..]);
    assert_eq!(index.bounds(), bounds());
    for i in 0..sites.len() {
        assert!(index.region(i).len() >= 3, "distinct sites own a real polygon");
    }
}

#[test]
fn locate_is_self_contained() {
    let sites = vec![(10.0, 10.0), (50.0, 40.0), (90.0, 70.0), (20.0, 60.0), (70.0, 15.0)];
    let index = VoronoiIndex::build(sites.clone(), bounds());
    for (i, &(x, y)) in sites.iter().enumerate() {
        assert_eq!(index.locate(x, y), Some(i));
    }
}

#[test]
fn locate_matches_brute_force_nearest() {
    let sites = vec![(12.0, 34.0), (81.0, 22.0), (45.0, 66.0), (5.0, 70.0), (60.0, 60.0)];
    let index = VoronoiIndex::build(sites.clone(), bounds());
    for (cx, cy) in sample_grid() {
        let expect = sites
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.0 - cx).powi(2) + (a.1 - cy).powi(2);
                let db = (b.0 - cx).powi(2) + (b.1 - cy).powi(2);
                da.partial_cmp(&db).unwrap()
            })
            .map(|(i, _)| i);
        assert_eq!(index.locate(cx, cy), expect, "cursor ({cx},{cy})");
    }
}

#[test]
fn rebuild_is_pointwise_identical() {
    let sites = vec![(12.0, 34.0), (81.0, 22.0), (45.0, 66.0), (5.0, 70.0)];
    let a = VoronoiIndex::build(sites.clone(), bounds());
    let b = VoronoiIndex::build(sites, bounds());
    for i in 0..a.len() {
        assert_eq!(a.region(i), b.region(i));
    }
    for (cx, cy) in sample_grid() {
        assert_eq!(a.locate(cx, cy), b.locate(cx, cy));
    }
}

#[test]
fn coincident_sites_do_not_crash() {
    let sites = vec![(50.0, 40.0), (50.0, 40.0), (10.0, 10.0)];
    let index = VoronoiIndex::build(sites, bounds());
    assert_eq!(index.len(), 3);
    assert!(!index.region(0).is_empty(), "first of the pair owns the cell");
    assert!(index.region(1).is_empty(), "shadowed duplicate gets a degenerate region");
    assert_eq!(index.locate(50.0, 40.0), Some(0));
}

#[test]
fn single_site_owns_the_whole_rectangle() {
    let index = VoronoiIndex::build(vec![(30.0, 30.0)], bounds());
    assert_eq!(index.region(0), bounds().corners());
}

#[test]
fn empty_index_locates_nothing() {
    let index = VoronoiIndex::build(Vec::new(), bounds());
    assert!(index.is_empty());
    assert_eq!(index.locate(10.0, 10.0), None);
}
