// File: crates/tidemark-core/tests/axis.rs
// Purpose: Tick placement and labels for the time and value axes.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use tidemark_core::ticks::{format_number, format_time, nice, tick_step, ticks, time_interval, TimeInterval, TimeUnit};
use tidemark_core::{build_scales, render_x_axis, render_y_axis, rescale_x, AxisOrient, LinearScale, Scale, TimeScale, Viewport, ZoomTransform};

#[test]
fn x_axis_uses_daily_ticks_for_nine_days() {
    let (x, _) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    let axis = render_x_axis(&x);
    assert_eq!(axis.orient, AxisOrient::Bottom);
    assert_eq!(axis.range, (0.0, 720.0));
    let labels: Vec<&str> = axis.labels().collect();
    assert_eq!(
        labels,
        ["2022", "Jan 02", "Mon 03", "Tue 04", "Wed 05", "Thu 06", "Fri 07", "Sat 08", "Jan 09"]
    );
    assert_eq!(axis.ticks[0].offset, 0.0);
    assert!(axis.tick_offsets().all(|o| (0.0..=720.0).contains(&o)));
}

#[test]
fn y_axis_ticks_every_ten() {
    let (_, y) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    let axis = render_y_axis(&y);
    assert_eq!(axis.orient, AxisOrient::Left);
    let labels: Vec<&str> = axis.labels().collect();
    assert_eq!(labels, ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "100"]);
    assert_eq!(axis.ticks[0].offset, 350.0);
    assert_eq!(axis.ticks[10].offset, 0.0);
}

#[test]
fn axis_rendering_is_idempotent() {
    let (x, y) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    assert_eq!(render_x_axis(&x), render_x_axis(&x));
    assert_eq!(render_y_axis(&y), render_y_axis(&y));
    let zoomed = rescale_x(&x, &ZoomTransform { scale_factor: 3.0, translate_x: -500.0 });
    assert_eq!(render_x_axis(&zoomed), render_x_axis(&zoomed));
}

#[test]
fn zoomed_axis_switches_to_finer_interval() {
    let (x, _) = build_scales(&nine_days(), &Viewport::default()).unwrap();
    let zoomed = rescale_x(&x, &ZoomTransform { scale_factor: 10.0, translate_x: 0.0 });
    // 21.5 hours visible -> 3-hour ticks starting at midnight.
    let labels: Vec<String> = render_x_axis(&zoomed).labels().map(str::to_owned).collect();
    assert_eq!(labels[0], "2022");
    assert_eq!(labels[1], "03 AM");
    assert_eq!(labels[4], "12 PM");
    assert_eq!(labels.len(), 8);
}

#[test]
fn linear_ticks_match_ladder() {
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(0.0, 10.0, 10).len(), 11);
    assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    assert_eq!(tick_step(1.0, 0.0, 10), -0.1);
}

#[test]
fn nice_keeps_reversed_domains_reversed() {
    assert_eq!(nice(0.0, 97.3, 10), (0.0, 100.0));
    assert_eq!(nice(97.3, 0.0, 10), (100.0, 0.0));
    assert_eq!(nice(5.0, 5.0, 10), (5.0, 5.0));
}

#[test]
fn numeric_labels_group_thousands() {
    assert_eq!(format_number(1000.0, 100.0), "1,000");
    assert_eq!(format_number(1234567.0, 1.0), "1,234,567");
    assert_eq!(format_number(0.5, 0.1), "0.5");
    assert_eq!(format_number(-2.0, 1.0), "-2");
    assert_eq!(format_number(-0.0, 1.0), "0");
    let y = LinearScale::new((0.0, 1300.0), (350.0, 0.0));
    assert_eq!(y.format_tick(1100.0, 10), "1,100");
}

#[test]
fn time_labels_pick_coarsest_unit() {
    let at = |mo, d, h, mi, s| Utc.with_ymd_and_hms(2022, mo, d, h, mi, s).unwrap();
    assert_eq!(format_time(at(1, 1, 0, 0, 0)), "2022");
    assert_eq!(format_time(at(3, 1, 0, 0, 0)), "March");
    assert_eq!(format_time(at(1, 9, 0, 0, 0)), "Jan 09");
    assert_eq!(format_time(at(1, 4, 0, 0, 0)), "Tue 04");
    assert_eq!(format_time(at(1, 4, 15, 0, 0)), "03 PM");
    assert_eq!(format_time(at(1, 4, 15, 30, 0)), "03:30");
    assert_eq!(format_time(at(1, 4, 15, 30, 5)), ":05");
    let ms = at(1, 4, 15, 30, 5) + chrono::TimeDelta::milliseconds(250);
    assert_eq!(format_time(ms), ".250");
}

#[test]
fn interval_selection() {
    let hour = 3_600_000.0;
    assert_eq!(time_interval(0.0, 215.0 * hour, 10), TimeInterval::Every(TimeUnit::Day, 1));
    assert_eq!(time_interval(0.0, 21.5 * hour, 10), TimeInterval::Every(TimeUnit::Hour, 3));
    assert_eq!(time_interval(0.0, 500.0, 10), TimeInterval::Millis(50.0));
    let decades = 40.0 * 365.0 * 24.0 * hour;
    assert_eq!(time_interval(0.0, decades, 10), TimeInterval::Every(TimeUnit::Year, 5));
}

#[test]
fn month_ticks_land_on_first_of_month() {
    let start = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2022, 12, 15, 0, 0, 0).unwrap();
    let scale = TimeScale::new((start, end), (0.0, 720.0));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap()));
    assert!(ticks.iter().all(|t| t.format("%d %H").to_string() == "01 00"));
    assert_eq!(ticks.len(), 11);
}
