//! Ordering and slice geometry for the category share chart.

use contracts::dashboards::d403_sales_by_category::CategoryShare;
use std::cmp::Ordering;
use std::f64::consts::TAU;

pub const RESOURCE: &str = "pie_chart_data";

/// One slice of the pie, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Shares by descending value; ties keep the server order.
pub fn sorted_shares(shares: &[CategoryShare]) -> Vec<CategoryShare> {
    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    sorted
}

pub fn total(shares: &[CategoryShare]) -> f64 {
    shares.iter().map(|s| s.value).sum()
}

pub fn share_label(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Slices proportional to each value; negative values count as zero.
pub fn pie_slices(shares: &[CategoryShare]) -> Vec<PieSlice> {
    let sum: f64 = shares.iter().map(|s| s.value.max(0.0)).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    shares
        .iter()
        .map(|s| {
            let sweep = s.value.max(0.0) / sum * TAU;
            let slice = PieSlice {
                label: s.label.clone(),
                value: s.value,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

fn point_on_circle(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path of a slice centred on the origin.
pub fn slice_path(slice: &PieSlice, radius: f64) -> String {
    let sweep = slice.end_angle - slice.start_angle;
    if sweep >= TAU - 1e-9 {
        // a single full slice cannot be drawn as one arc
        return format!(
            "M 0 {r:.1} A {r:.1} {r:.1} 0 1 1 0 {nr:.1} A {r:.1} {r:.1} 0 1 1 0 {r:.1} Z",
            r = radius,
            nr = -radius
        );
    }
    let (x0, y0) = point_on_circle(radius, slice.start_angle);
    let (x1, y1) = point_on_circle(radius, slice.end_angle);
    let large_arc = if sweep > TAU / 2.0 { 1 } else { 0 };
    format!(
        "M 0 0 L {:.1} {:.1} A {r:.1} {r:.1} 0 {} 1 {:.1} {:.1} Z",
        x0,
        y0,
        large_arc,
        x1,
        y1,
        r = radius
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(label: &str, value: f64) -> CategoryShare {
        CategoryShare {
            id: label.to_string(),
            label: label.to_string(),
            value,
        }
    }

    fn sample() -> Vec<CategoryShare> {
        vec![
            share("Tablets", 20.5),
            share("Laptops", 45.25),
            share("Phones", 34.25),
        ]
    }

    #[test]
    fn test_shares_sorted_descending() {
        let labels: Vec<String> = sorted_shares(&sample()).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Laptops", "Phones", "Tablets"]);
    }

    #[test]
    fn test_total_and_label() {
        assert_eq!(total(&sample()), 100.0);
        assert_eq!(share_label(45.25), "45.25%");
        assert_eq!(share_label(3.0), "3.00%");
    }

    #[test]
    fn test_slices_cover_the_circle() {
        let slices = pie_slices(&sample());
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[2].end_angle - TAU).abs() < 1e-9);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
    }

    #[test]
    fn test_no_slices_without_positive_values() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[share("Empty", 0.0)]).is_empty());
    }

    #[test]
    fn test_half_slice_path() {
        let slice = PieSlice {
            label: "Half".to_string(),
            value: 50.0,
            start_angle: 0.0,
            end_angle: TAU / 2.0,
        };
        assert_eq!(
            slice_path(&slice, 100.0),
            "M 0 0 L 0.0 -100.0 A 100.0 100.0 0 0 1 0.0 100.0 Z"
        );
    }
}
