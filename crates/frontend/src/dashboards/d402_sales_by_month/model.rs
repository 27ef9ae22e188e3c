//! Year filter and month ordering for the sales line chart.

use crate::shared::components::line_chart::LineSeries;
use contracts::dashboards::d402_sales_by_month::SalesSeries;
use contracts::shared::period::{month_number, PeriodError};
use std::collections::BTreeSet;

pub const RESOURCE: &str = "line_chart_data";

/// Years available in the selector; each series id is a year.
pub fn series_years(series: &[SalesSeries]) -> BTreeSet<String> {
    series.iter().map(|s| s.id.clone()).collect()
}

/// Series of `year`. An empty year keeps every series.
pub fn series_for_year<'a>(series: &'a [SalesSeries], year: &str) -> Vec<&'a SalesSeries> {
    series
        .iter()
        .filter(|s| year.is_empty() || s.id == year)
        .collect()
}

/// Converts to chart series with points in calendar order.
///
/// Point labels are month abbreviations; an unknown label is an error.
pub fn to_line_series(series: &[&SalesSeries]) -> Result<Vec<LineSeries>, PeriodError> {
    series
        .iter()
        .map(|s| {
            let mut points = s
                .data
                .iter()
                .map(|p| {
                    month_number(&p.x)
                        .map(|m| (m, p.x.clone(), p.y))
                        .ok_or_else(|| PeriodError::UnknownMonth(p.x.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            points.sort_by_key(|(m, _, _)| *m);

            Ok(LineSeries {
                name: s.id.clone(),
                points: points.into_iter().map(|(_, x, y)| (x, y)).collect(),
            })
        })
        .collect()
}

pub fn sales_for_year(series: &[SalesSeries], year: &str) -> Result<Vec<LineSeries>, PeriodError> {
    to_line_series(&series_for_year(series, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d402_sales_by_month::SalesPoint;

    fn series(id: &str, points: &[(&str, f64)]) -> SalesSeries {
        SalesSeries {
            id: id.to_string(),
            color: Some("#00ff00".to_string()),
            data: points
                .iter()
                .map(|(x, y)| SalesPoint {
                    x: x.to_string(),
                    y: *y,
                })
                .collect(),
        }
    }

    fn sample() -> Vec<SalesSeries> {
        vec![
            series("2023", &[("Nov", 1200.0), ("Dec", 900.0)]),
            series("2024", &[("Feb", 300.5), ("Jan", 250.0), ("Mar", 410.0)]),
        ]
    }

    #[test]
    fn test_years_come_from_series_ids() {
        let years: Vec<String> = series_years(&sample()).into_iter().collect();
        assert_eq!(years, vec!["2023", "2024"]);
    }

    #[test]
    fn test_filter_keeps_only_selected_year() {
        let data = sample();
        let kept = series_for_year(&data, "2024");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2024");
        assert_eq!(series_for_year(&data, "").len(), 2);
    }

    #[test]
    fn test_absent_year_yields_no_lines() {
        assert_eq!(sales_for_year(&sample(), "2019"), Ok(vec![]));
    }

    #[test]
    fn test_points_are_in_calendar_order() {
        let lines = sales_for_year(&sample(), "2024").unwrap();
        let labels: Vec<&str> = lines[0].points.iter().map(|(x, _)| x.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(lines[0].points[1].1, 300.5);
    }

    #[test]
    fn test_unknown_month_label_is_an_error() {
        let data = vec![series("2024", &[("Jan", 1.0), ("Foo", 2.0)])];
        assert_eq!(
            sales_for_year(&data, "2024"),
            Err(PeriodError::UnknownMonth("Foo".to_string()))
        );
    }
}
