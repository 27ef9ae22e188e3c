use crate::dashboards::d402_sales_by_month::api;
use crate::dashboards::d402_sales_by_month::model::{sales_for_year, series_years, RESOURCE};
use crate::shared::chart_layout::{ChartContext, ChartLayout};
use crate::shared::components::line_chart::LineChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::components::year_selector::YearSelector;
use crate::shared::config::DashboardConfig;
use crate::shared::remote::use_remote;
use crate::shared::reporter::{use_reporter, DashboardEvent};
use leptos::prelude::*;

#[component]
pub fn SalesByMonthChart(context: ChartContext) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let reporter = use_reporter();
    let layout = ChartLayout::for_context(context, "Month", "Sales");

    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        api::fetch_sales_series(&base).await
    });

    let selected_year = RwSignal::new(config.view.default_year.clone());
    let years = Signal::derive(move || {
        remote.with(|s| series_years(&s.data).into_iter().collect::<Vec<_>>())
    });

    let shaped = Memo::new(move |_| {
        let year = selected_year.get();
        remote.with(|s| sales_for_year(&s.data, &year))
    });

    Effect::new(move |_| {
        if let Err(e) = shaped.get() {
            reporter.report(DashboardEvent::TransformFailed {
                resource: RESOURCE,
                error: e.to_string(),
            });
        }
    });

    let lines = Signal::derive(move || shaped.get().unwrap_or_default());
    let loading = Signal::derive(move || remote.with(|s| s.loading));
    let error = Signal::derive(move || remote.with(|s| s.error.clone()));
    let font_px = layout.selector_font_px;
    let height_px = layout.height_px;

    view! {
        <div class="chart-panel">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <LoadingIndicator height_px=height_px /> }
            >
                <ErrorBanner error=error />
                <YearSelector years=years selected=selected_year font_px=font_px />
                <LineChart series=lines layout=layout.clone() />
            </Show>
        </div>
    }
}

#[component]
pub fn SalesByMonthPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Sales by Month" subtitle="Total sales per month".to_string() />
            <SalesByMonthChart context=ChartContext::FullPage />
        </div>
    }
}
