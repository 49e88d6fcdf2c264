// File: crates/tidemark-core/tests/scales.rs
// Purpose: Scale derivation from dataset extents, nice y-domain and degenerate inputs.

mod common;

use chrono::TimeDelta;
use common::*;
use quickcheck_macros::quickcheck;
use tidemark_core::{build_scales, ChartError, Dataset, Insets, Point, Scale, Viewport};

#[test]
fn default_viewport_ranges() {
    let (x, y) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    assert_eq!(x.range(), (0.0, 720.0));
    assert_eq!(y.range(), (350.0, 0.0));
    assert_eq!(x.domain(), (ts(1, 0), ts(9, 23)));
    assert_eq!(y.domain(), (0.0, 100.0), "97.3 nices up to 100");
}

#[test]
fn y_scale_puts_larger_values_higher() {
    let (_, y) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    assert_eq!(y.map(0.0), 350.0);
    assert_eq!(y.map(100.0), 0.0);
    assert!(y.map(75.0) < y.map(25.0));
}

#[test]
fn nice_rounds_to_friendly_bounds() {
    let vp = Viewport::default();
    let cases = [(0.8, 0.8), (7.2, 8.0), (1234.0, 1300.0), (100.0, 100.0)];
    for (max, want) in cases {
        let d = hourly(3, |i| if i == 1 { max } else { 0.0 });
        let (_, y) = build_scales(&d, &vp).unwrap();
        assert_eq!(y.domain().1, want, "max {max}");
        assert!(y.domain().1 >= max);
    }
}

#[test]
fn all_zero_values_get_unit_span() {
    let (_, y) = build_scales(&hourly(4, |_| 0.0), &Viewport::default()).unwrap();
    assert_eq!(y.domain(), (0.0, 1.0));
}

#[test]
fn single_point_expands_time_domain() {
    let d = hourly(1, |_| 42.0);
    let (x, y) = build_scales(&d, &Viewport::default()).unwrap();
    let (d0, d1) = x.domain();
    assert_eq!(d1 - d0, TimeDelta::hours(1));
    assert_eq!(x.map(ts(1, 0)), 360.0, "lone point sits mid-axis");
    assert!(y.map(42.0).is_finite());
}

#[test]
fn empty_dataset_is_degenerate() {
    let err = build_scales(&Dataset::default(), &Viewport::default()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDataset));
}

#[test]
fn margins_larger_than_surface_are_rejected() {
    let vp = Viewport::new(60, 40, Insets::new(50, 30, 20, 30));
    let err = build_scales(&nine_days(), &vp).unwrap_err();
    assert!(matches!(err, ChartError::InvalidViewport { width: 60, height: 40 }));
}

#[test]
fn unordered_points_are_rejected() {
    let err = Dataset::new(vec![Point::new(ts(2, 0), 1.0), Point::new(ts(1, 0), 2.0)]).unwrap_err();
    assert!(matches!(err, ChartError::Unordered { index: 1 }));
    let err = Dataset::new(vec![Point::new(ts(1, 0), f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { index: 0 }));
    let sorted = Dataset::from_unsorted(vec![Point::new(ts(2, 0), 1.0), Point::new(ts(1, 0), 2.0)]).unwrap();
    assert_eq!(sorted.first().unwrap().timestamp, ts(1, 0));
}

#[test]
fn time_scale_invert_round_trips() {
    let (x, _) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    for t in [ts(1, 0), ts(3, 7), ts(9, 23)] {
        assert_eq!(x.invert(x.map(t)), t);
    }
}

#[quickcheck]
fn x_domain_matches_extent(offsets: Vec<u16>, width: u16) -> bool {
    if offsets.is_empty() {
        return true;
    }
    let mut minutes: Vec<i64> = offsets.iter().map(|&o| o as i64).collect();
    minutes.sort_unstable();
    minutes.dedup();
    if minutes.len() < 2 {
        return true;
    }
    let points = minutes.iter().map(|&m| Point::new(ts(1, 0) + TimeDelta::minutes(m), m as f64)).collect();
    let d = Dataset::new(points).unwrap();
    let vp = Viewport::new(100 + width as u32, 400, Insets::default());
    let (x, _) = build_scales(&d, &vp).unwrap();
    let (t0, t1) = d.time_extent().unwrap();
    x.domain() == (t0, t1) && x.range() == (0.0, vp.inner_width())
}
