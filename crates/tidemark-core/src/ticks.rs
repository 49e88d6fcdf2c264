// File: crates/tidemark-core/src/ticks.rs
// Summary: Tick placement and label formatting for numeric and time domains.
// Notes:
// - Numeric ticks use the 1/2/5 x 10^n ladder with integer tick indices so
//   fractional steps do not accumulate float error.
// - Time ticks pick a calendar interval from a fixed table (1s .. 1y) and are
//   computed in UTC.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Upper bound on generated ticks; guards against runaway spans.
const MAX_TICKS: usize = 10_000;

/// Returns `(i1, i2, inc)`. A negative `inc` means the step is `1 / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced round values within `[start, stop]`, roughly `count` of them.
/// Order follows the input (descending when `stop < start`).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = ((i2 - i1) as usize + 1).min(MAX_TICKS);
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    let mut out: Vec<f64> = (0..n).map(|k| at(i1 + k as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Signed increment form of the tick step: negative `inc` means `1 / -inc`. 0 for an empty span.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if !(stop > start) || count == 0 {
        return 0.0;
    }
    tick_spec(start, stop, count as f64).2
}

/// Distance between adjacent ticks for `ticks(start, stop, count)`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Extend `[d0, d1]` outward to round bounds. Reversed domains stay reversed.
pub fn nice(d0: f64, d1: f64, count: usize) -> (f64, f64) {
    let reverse = d1 < d0;
    let (mut start, mut stop) = if reverse { (d1, d0) } else { (d0, d1) };
    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    if reverse { (stop, start) } else { (start, stop) }
}

/// Fixed-point label with thousands separators; precision derived from `step`.
pub fn format_number(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step != 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let body = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut grouped = String::with_capacity(body.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = body.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

// ---- time -------------------------------------------------------------------

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;
const WEEK_MS: f64 = 604_800_000.0;
const MONTH_MS: f64 = 2_592_000_000.0;
const YEAR_MS: f64 = 31_536_000_000.0;

/// Calendar unit used for tick generation and label selection (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn floor_millis(t: DateTime<Utc>, unit_ms: i64) -> DateTime<Utc> {
    let ms = t.timestamp_millis();
    DateTime::from_timestamp_millis(ms - ms.rem_euclid(unit_ms)).unwrap_or(t)
}

impl TimeUnit {
    /// Latest unit boundary at or before `t`.
    pub fn floor(self, t: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeUnit::Second => floor_millis(t, 1_000),
            TimeUnit::Minute => floor_millis(t, 60_000),
            TimeUnit::Hour => floor_millis(t, 3_600_000),
            TimeUnit::Day => start_of_day(t.date_naive()),
            TimeUnit::Week => {
                let back = t.weekday().num_days_from_sunday() as i64;
                start_of_day(t.date_naive()) - TimeDelta::days(back)
            }
            TimeUnit::Month => NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
                .map(start_of_day)
                .unwrap_or(t),
            TimeUnit::Year => NaiveDate::from_ymd_opt(t.year(), 1, 1)
                .map(start_of_day)
                .unwrap_or(t),
        }
    }

    /// Earliest unit boundary at or after `t`.
    pub fn ceil(self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let f = self.floor(t);
        if f == t { Some(f) } else { self.offset(f, 1) }
    }

    /// Advance by `n` units; `None` past the representable range.
    pub fn offset(self, t: DateTime<Utc>, n: u32) -> Option<DateTime<Utc>> {
        let n64 = n as i64;
        match self {
            TimeUnit::Second => t.checked_add_signed(TimeDelta::try_seconds(n64)?),
            TimeUnit::Minute => t.checked_add_signed(TimeDelta::try_minutes(n64)?),
            TimeUnit::Hour => t.checked_add_signed(TimeDelta::try_hours(n64)?),
            TimeUnit::Day => t.checked_add_signed(TimeDelta::try_days(n64)?),
            TimeUnit::Week => t.checked_add_signed(TimeDelta::try_weeks(n64)?),
            TimeUnit::Month => t.checked_add_months(Months::new(n)),
            TimeUnit::Year => t.checked_add_months(Months::new(n.checked_mul(12)?)),
        }
    }

    /// Calendar field used by `every(step)` filtering.
    fn field(self, t: DateTime<Utc>) -> i64 {
        match self {
            TimeUnit::Second => t.second() as i64,
            TimeUnit::Minute => t.minute() as i64,
            TimeUnit::Hour => t.hour() as i64,
            TimeUnit::Day => t.day0() as i64,
            TimeUnit::Week => 0,
            TimeUnit::Month => t.month0() as i64,
            TimeUnit::Year => t.year() as i64,
        }
    }
}

const TIME_INTERVALS: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, SECOND_MS),
    (TimeUnit::Second, 5, 5.0 * SECOND_MS),
    (TimeUnit::Second, 15, 15.0 * SECOND_MS),
    (TimeUnit::Second, 30, 30.0 * SECOND_MS),
    (TimeUnit::Minute, 1, MINUTE_MS),
    (TimeUnit::Minute, 5, 5.0 * MINUTE_MS),
    (TimeUnit::Minute, 15, 15.0 * MINUTE_MS),
    (TimeUnit::Minute, 30, 30.0 * MINUTE_MS),
    (TimeUnit::Hour, 1, HOUR_MS),
    (TimeUnit::Hour, 3, 3.0 * HOUR_MS),
    (TimeUnit::Hour, 6, 6.0 * HOUR_MS),
    (TimeUnit::Hour, 12, 12.0 * HOUR_MS),
    (TimeUnit::Day, 1, DAY_MS),
    (TimeUnit::Day, 2, 2.0 * DAY_MS),
    (TimeUnit::Week, 1, WEEK_MS),
    (TimeUnit::Month, 1, MONTH_MS),
    (TimeUnit::Month, 3, 3.0 * MONTH_MS),
    (TimeUnit::Year, 1, YEAR_MS),
];

/// Tick interval chosen for a time span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeInterval {
    /// Multiples of `n` epoch milliseconds.
    Millis(f64),
    /// Unit boundaries whose calendar field is divisible by `step`.
    Every(TimeUnit, u32),
}

/// Pick the interval whose duration is closest to `span / count`.
pub fn time_interval(start_ms: f64, stop_ms: f64, count: usize) -> TimeInterval {
    let target = (stop_ms - start_ms).abs() / count.max(1) as f64;
    let i = TIME_INTERVALS.partition_point(|&(_, _, d)| d <= target);
    if i == TIME_INTERVALS.len() {
        let step = tick_step(start_ms / YEAR_MS, stop_ms / YEAR_MS, count).abs().floor().max(1.0);
        return TimeInterval::Every(TimeUnit::Year, step as u32);
    }
    if i == 0 {
        return TimeInterval::Millis(tick_step(start_ms, stop_ms, count).abs().max(1.0));
    }
    let (lo, hi) = (TIME_INTERVALS[i - 1], TIME_INTERVALS[i]);
    let (unit, step, _) = if target / lo.2 < hi.2 / target { lo } else { hi };
    TimeInterval::Every(unit, step)
}

pub(crate) fn millis_to_datetime(ms: f64) -> DateTime<Utc> {
    let clamped = ms.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64;
    DateTime::from_timestamp_millis(clamped).unwrap_or(if ms < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Calendar-aligned ticks within `[start_ms, stop_ms]` (inclusive), ascending.
pub fn time_ticks(start_ms: f64, stop_ms: f64, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 || !start_ms.is_finite() || !stop_ms.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if stop_ms < start_ms { (stop_ms, start_ms) } else { (start_ms, stop_ms) };
    if lo == hi {
        return vec![millis_to_datetime(lo)];
    }
    match time_interval(lo, hi, count) {
        TimeInterval::Millis(step) => {
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last)
                .take(MAX_TICKS)
                .map(|i| millis_to_datetime(i as f64 * step))
                .collect()
        }
        TimeInterval::Every(unit, step) => {
            let upper = millis_to_datetime(hi.floor());
            let mut out = Vec::new();
            let mut cursor = unit.ceil(millis_to_datetime(lo.ceil()));
            let mut guard = 0usize;
            while let Some(t) = cursor {
                if t > upper || guard >= MAX_TICKS * 4 {
                    break;
                }
                if step <= 1 || unit.field(t).rem_euclid(step as i64) == 0 {
                    out.push(t);
                }
                cursor = unit.offset(t, 1);
                guard += 1;
            }
            out
        }
    }
}

/// Label a time tick by the coarsest unit it falls on.
pub fn format_time(t: DateTime<Utc>) -> String {
    let fmt = if TimeUnit::Second.floor(t) < t {
        return format!(".{:03}", t.timestamp_subsec_millis());
    } else if TimeUnit::Minute.floor(t) < t {
        ":%S"
    } else if TimeUnit::Hour.floor(t) < t {
        "%I:%M"
    } else if TimeUnit::Day.floor(t) < t {
        "%I %p"
    } else if TimeUnit::Month.floor(t) < t {
        if TimeUnit::Week.floor(t) < t { "%a %d" } else { "%b %d" }
    } else if TimeUnit::Year.floor(t) < t {
        "%B"
    } else {
        "%Y"
    };
    t.format(fmt).to_string()
}
