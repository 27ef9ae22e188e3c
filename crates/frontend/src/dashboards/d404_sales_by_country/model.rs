//! Ranking and color scale for the sales-by-country view.

use contracts::dashboards::d404_sales_by_country::GeoDatum;
use std::cmp::Ordering;

pub const RESOURCE: &str = "geo_chart_data";

/// Number of discrete color steps of the scale.
pub const COLOR_STEPS: u32 = 9;

/// Countries by descending value.
pub fn ranked(data: &[GeoDatum]) -> Vec<GeoDatum> {
    let mut rows = data.to_vec();
    rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    rows
}

/// Color scale domain `[0, max]`; `(0, 0)` when there is no data.
pub fn geo_domain(data: &[GeoDatum]) -> (f64, f64) {
    let max = data.iter().map(|d| d.value).fold(0.0, f64::max);
    (0.0, max)
}

/// Color step (0..COLOR_STEPS) of `value` within `domain`.
pub fn color_step(value: f64, domain: (f64, f64)) -> u32 {
    let (lo, hi) = domain;
    if hi <= lo {
        return 0;
    }
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    ((t * f64::from(COLOR_STEPS - 1)).round()) as u32
}
