use crate::dashboards::d403_sales_by_category::api;
use crate::dashboards::d403_sales_by_category::model::{
    pie_slices, share_label, slice_path, sorted_shares, total, RESOURCE,
};
use crate::shared::chart_layout::{ChartContext, ChartLayout};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::config::DashboardConfig;
use crate::shared::remote::use_remote;
use leptos::prelude::*;

const SLICE_CLASSES: usize = 6;

#[component]
pub fn SalesByCategoryChart(context: ChartContext) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let layout = ChartLayout::for_context(context, "Category", "Share");

    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        api::fetch_category_shares(&base).await
    });

    let shares = Memo::new(move |_| remote.with(|s| sorted_shares(&s.data)));
    let loading = Signal::derive(move || remote.with(|s| s.loading));
    let error = Signal::derive(move || remote.with(|s| s.error.clone()));

    let radius = layout.inner_height().min(layout.inner_width()) / 2.0;
    let height_px = layout.height_px;
    let show_legend = layout.show_legend;
    let view_box = format!("{r} {r} {d} {d}", r = -radius, d = radius * 2.0);

    let slices = move || {
        pie_slices(&shares.get())
            .into_iter()
            .enumerate()
            .map(|(i, slice)| {
                let class = format!("chart__slice chart__slice--{}", i % SLICE_CLASSES);
                let title = format!("{}: {}", slice.label, share_label(slice.value));
                view! {
                    <path class=class d=slice_path(&slice, radius)>
                        <title>{title}</title>
                    </path>
                }
            })
            .collect_view()
    };

    let legend = move || {
        show_legend.then(|| {
            let rows = shares.get();
            let sum = total(&rows);
            view! {
                <table class="table chart__legend-table">
                    <tbody>
                        {rows
                            .into_iter()
                            .enumerate()
                            .map(|(i, s)| {
                                let class = format!("chart__legend-swatch chart__slice--{}", i % SLICE_CLASSES);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell"><span class=class></span>{s.label}</td>
                                        <td class="table__cell table__cell--number">{share_label(s.value)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        <tr class="table__row table__row--total">
                            <td class="table__cell">"Total"</td>
                            <td class="table__cell table__cell--number">{share_label(sum)}</td>
                        </tr>
                    </tbody>
                </table>
            }
        })
    };

    view! {
        <div class="chart-panel">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <LoadingIndicator height_px=height_px /> }
            >
                <ErrorBanner error=error />
                <div class="chart chart--pie">
                    <svg class="chart__svg" viewBox=view_box.clone() height=format!("{}", height_px)>
                        {slices}
                    </svg>
                    {legend}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn SalesByCategoryPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Sales by Category" subtitle="Share of this year's sales".to_string() />
            <SalesByCategoryChart context=ChartContext::FullPage />
        </div>
    }
}
