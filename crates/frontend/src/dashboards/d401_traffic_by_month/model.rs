//! Year filter and month labelling for the traffic chart.

use crate::shared::components::bar_chart::BarGroup;
use contracts::dashboards::d401_traffic_by_month::TrafficPoint;
use contracts::shared::period::{year_prefix, PeriodError, YearMonth};
use std::collections::BTreeSet;

pub const RESOURCE: &str = "bar_chart_data";

/// Series drawn per month, in bar order.
pub const SERIES: [&str; 2] = ["unique_visitors", "inbound_traffic"];

/// A retained point with its month label; metric values are untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBar {
    pub period: YearMonth,
    pub month: &'static str,
    pub inbound_traffic: f64,
    pub unique_visitors: f64,
}

/// Years present in the data (the part of `year_month` before the hyphen).
pub fn distinct_years(points: &[TrafficPoint]) -> BTreeSet<String> {
    points
        .iter()
        .map(|p| year_prefix(&p.year_month).to_string())
        .collect()
}

/// Points of `year`. An empty year keeps everything; an unknown year yields nothing.
pub fn filter_by_year<'a>(points: &'a [TrafficPoint], year: &str) -> Vec<&'a TrafficPoint> {
    if year.is_empty() {
        return points.iter().collect();
    }
    let prefix = format!("{}-", year);
    points
        .iter()
        .filter(|p| p.year_month.starts_with(&prefix))
        .collect()
}

/// Labels each point with its month abbreviation.
///
/// Fails on the first period that is not a valid `YYYY-MM` instead of
/// guessing a label.
pub fn month_bars(points: &[&TrafficPoint]) -> Result<Vec<MonthBar>, PeriodError> {
    points
        .iter()
        .map(|p| {
            let period = YearMonth::parse(&p.year_month)?;
            Ok(MonthBar {
                period,
                month: period.month_abbreviation(),
                inbound_traffic: p.inbound_traffic,
                unique_visitors: p.unique_visitors,
            })
        })
        .collect()
}

/// Filter + label in one step, as the chart consumes it.
pub fn traffic_for_year(points: &[TrafficPoint], year: &str) -> Result<Vec<MonthBar>, PeriodError> {
    month_bars(&filter_by_year(points, year))
}

pub fn to_bar_groups(bars: &[MonthBar]) -> Vec<BarGroup> {
    bars.iter()
        .map(|b| BarGroup {
            label: b.month.to_string(),
            values: vec![b.unique_visitors, b.inbound_traffic],
        })
        .collect()
}
