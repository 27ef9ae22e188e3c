//! Grouped bar chart drawn as inline SVG.

use crate::shared::chart_layout::{axis_ticks, ChartLayout};
use crate::shared::number_format::format_magnitude;
use leptos::prelude::*;

const SERIES_CLASSES: [&str; 4] = [
    "chart__bar--a",
    "chart__bar--b",
    "chart__bar--c",
    "chart__bar--d",
];
const BAR_PADDING: f64 = 0.3;
const TICK_COUNT: usize = 5;

/// One category on the x axis with a value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

fn max_value(groups: &[BarGroup]) -> f64 {
    groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0, f64::max)
}

/// Bar rectangles in drawing coordinates (origin at the inner top-left corner).
pub fn bar_geometry(groups: &[BarGroup], layout: &ChartLayout) -> Vec<BarRect> {
    let max = max_value(groups);
    if groups.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let band = layout.inner_width() / groups.len() as f64;
    let inner_height = layout.inner_height();
    let mut rects = Vec::new();

    for (gi, group) in groups.iter().enumerate() {
        let series_count = group.values.len().max(1) as f64;
        let usable = band * (1.0 - BAR_PADDING);
        let width = usable / series_count;
        let start = band * gi as f64 + band * BAR_PADDING / 2.0;

        for (si, value) in group.values.iter().enumerate() {
            let height = (value.max(0.0) / max) * inner_height;
            rects.push(BarRect {
                series: si,
                x: start + width * si as f64,
                y: inner_height - height,
                width,
                height,
                value: *value,
            });
        }
    }
    rects
}

#[component]
pub fn BarChart(
    #[prop(into)]
    groups: Signal<Vec<BarGroup>>,
    /// Series names, in the same order as `BarGroup::values`
    series: Vec<&'static str>,
    layout: ChartLayout,
) -> impl IntoView {
    let width = layout.width_px;
    let height = layout.height_px;
    let margin = layout.margin;
    let inner_height = layout.inner_height();
    let inner_width = layout.inner_width();
    let geometry_layout = layout.clone();

    let bars = move || {
        bar_geometry(&groups.get(), &geometry_layout)
            .into_iter()
            .map(|r| {
                let class = SERIES_CLASSES[r.series % SERIES_CLASSES.len()];
                let title = format!("{}", r.value);
                view! {
                    <rect
                        class=class
                        x=format!("{:.1}", r.x)
                        y=format!("{:.1}", r.y)
                        width=format!("{:.1}", r.width)
                        height=format!("{:.1}", r.height)
                    >
                        <title>{title}</title>
                    </rect>
                }
            })
            .collect_view()
    };

    let y_ticks = move || {
        let max = max_value(&groups.get());
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
        let groups = groups.get();
        let band = if groups.is_empty() {
            0.0
        } else {
            inner_width / groups.len() as f64
        };
        groups
            .into_iter()
            .enumerate()
            .map(|(i, g)| {
                let x = band * i as f64 + band / 2.0;
                view! {
                    <text class="chart__tick" x=format!("{:.1}", x) y=format!("{:.1}", inner_height + 18.0) text-anchor="middle">
                        {g.label}
                    </text>
                }
            })
            .collect_view()
    };

    let legend = layout.show_legend.then(|| {
        series
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let class = format!(
                    "chart__legend-swatch {}",
                    SERIES_CLASSES[i % SERIES_CLASSES.len()]
                );
                view! {
                    <span class="chart__legend-item">
                        <span class=class></span>
                        {*name}
                    </span>
                }
            })
            .collect_view()
    });

    let transform = format!("translate({},{})", margin.left, margin.top);
    let left_legend_x = format!("{:.1}", -(inner_height / 2.0));
    let bottom_legend_x = format!("{:.1}", inner_width / 2.0);
    let bottom_legend_y = format!("{:.1}", inner_height + 40.0);

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", width, height) width="100%">
                <g transform=transform>
                    {bars}
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
