//! Line chart drawn as inline SVG polylines, one per series.

use crate::shared::chart_layout::{axis_ticks, ChartLayout};
use crate::shared::number_format::format_magnitude;
use leptos::prelude::*;

const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    /// (x label, y value) in drawing order
    pub points: Vec<(String, f64)>,
}

fn max_value(series: &[LineSeries]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, y)| *y))
        .fold(0.0, f64::max)
}

fn longest(series: &[LineSeries]) -> usize {
    series.iter().map(|s| s.points.len()).max().unwrap_or(0)
}

/// SVG `points` attribute for one series; x is spread evenly over the inner width.
pub fn polyline_points(series: &LineSeries, slots: usize, max: f64, layout: &ChartLayout) -> String {
    if slots == 0 || max <= 0.0 {
        return String::new();
    }
    let step = if slots > 1 {
        layout.inner_width() / (slots - 1) as f64
    } else {
        0.0
    };
    let inner_height = layout.inner_height();

    series
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, y))| {
            let px = step * i as f64;
            let py = inner_height - (y.max(0.0) / max) * inner_height;
            format!("{:.1},{:.1}", px, py)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LineChart(
    #[prop(into)]
    series: Signal<Vec<LineSeries>>,
    layout: ChartLayout,
) -> impl IntoView {
    let width = layout.width_px;
    let height = layout.height_px;
    let margin = layout.margin;
    let inner_height = layout.inner_height();
    let inner_width = layout.inner_width();
    let line_layout = layout.clone();

    let lines = move || {
        let all = series.get();
        let max = max_value(&all);
        let slots = longest(&all);
        all.iter()
            .enumerate()
            .map(|(i, s)| {
                let class = format!("chart__line chart__line--{}", i % 4);
                let points = polyline_points(s, slots, max, &line_layout);
                view! { <polyline class=class fill="none" points=points /> }
            })
            .collect_view()
    };

    let y_ticks = move || {
        let max = max_value(&series.get());
        axis_ticks(max, TICK_COUNT)
            .into_iter()
            .map(|tick| {
                let y = if max > 0.0 {
                    inner_height - tick / max * inner_height
                } else {
                    inner_height
                };
                view! {
                    <text class="chart__tick" x="-8" y=format!("{:.1}", y) text-anchor="end">
                        {format_magnitude(tick)}
                    </text>
                }
            })
            .collect_view()
    };

    let x_labels = move || {
        let all = series.get();
        let slots = longest(&all);
        let step = if slots > 1 {
            inner_width / (slots - 1) as f64
        } else {
            0.0
        };
        all.iter()
            .max_by_key(|s| s.points.len())
            .map(|s| {
                s.points
                    .iter()
                    .enumerate()
                    .map(|(i, (label, _))| {
                        let x = step * i as f64;
                        view! {
                            <text class="chart__tick" x=format!("{:.1}", x) y=format!("{:.1}", inner_height + 18.0) text-anchor="middle">
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect_view()
            })
    };

    let show_legend = layout.show_legend;
    let legend = move || {
        show_legend.then(|| {
            series
                .get()
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    let class = format!("chart__legend-swatch chart__line--{}", i % 4);
                    view! {
                        <span class="chart__legend-item">
                            <span class=class></span>
                            {s.name}
                        </span>
                    }
                })
                .collect_view()
        })
    };

    let transform = format!("translate({},{})", margin.left, margin.top);
    let left_legend_x = format!("{:.1}", -(inner_height / 2.0));
    let bottom_legend_x = format!("{:.1}", inner_width / 2.0);
    let bottom_legend_y = format!("{:.1}", inner_height + 40.0);

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", width, height) width="100%">
                <g transform=transform>
                    {lines}
                    {y_ticks}
                    {x_labels}
                    {layout.axis_left_legend.map(|text| view! {
                        <text class="chart__axis-legend" transform="rotate(-90)" x=left_legend_x.clone() y="-60" text-anchor="middle">{text}</text>
                    })}
                    {layout.axis_bottom_legend.map(|text| view! {
                        <text class="chart__axis-legend" x=bottom_legend_x.clone() y=bottom_legend_y.clone() text-anchor="middle">{text}</text>
                    })}
                </g>
            </svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}
