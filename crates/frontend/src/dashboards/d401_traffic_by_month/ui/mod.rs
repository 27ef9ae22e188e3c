use crate::dashboards::d401_traffic_by_month::api;
use crate::dashboards::d401_traffic_by_month::model::{
    distinct_years, to_bar_groups, traffic_for_year, RESOURCE, SERIES,
};
use crate::shared::chart_layout::{ChartContext, ChartLayout};
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::components::year_selector::YearSelector;
use crate::shared::config::DashboardConfig;
use crate::shared::remote::use_remote;
use crate::shared::reporter::{use_reporter, DashboardEvent};
use leptos::prelude::*;

/// Unique visitors and inbound traffic per month of the selected year
#[component]
pub fn TrafficByMonthChart(context: ChartContext) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let reporter = use_reporter();
    let layout = ChartLayout::for_context(context, "Month", "Inbound Traffic");

    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        api::fetch_traffic(&base).await
    });

    let selected_year = RwSignal::new(config.view.default_year.clone());
    let years = Signal::derive(move || {
        remote.with(|s| distinct_years(&s.data).into_iter().collect::<Vec<_>>())
    });

    let shaped = Memo::new(move |_| {
        let year = selected_year.get();
        remote.with(|s| traffic_for_year(&s.data, &year))
    });

    Effect::new(move |_| {
        if let Err(e) = shaped.get() {
            reporter.report(DashboardEvent::TransformFailed {
                resource: RESOURCE,
                error: e.to_string(),
            });
        }
    });

    let groups = Signal::derive(move || {
        shaped
            .get()
            .map(|bars| to_bar_groups(&bars))
            .unwrap_or_default()
    });
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
                <BarChart groups=groups series=SERIES.to_vec() layout=layout.clone() />
            </Show>
        </div>
    }
}

#[component]
pub fn TrafficByMonthPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title="Traffic by Month"
                subtitle="Inbound traffic and unique visitors".to_string()
            />
            <TrafficByMonthChart context=ChartContext::FullPage />
        </div>
    }
}
