use crate::dashboards::d404_sales_by_country::api;
use crate::dashboards::d404_sales_by_country::model::{color_step, geo_domain, ranked, RESOURCE};
use crate::shared::chart_layout::{ChartContext, ChartLayout};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::config::DashboardConfig;
use crate::shared::number_format::format_money;
use crate::shared::remote::use_remote;
use leptos::prelude::*;

/// Dashboard tile lists only the leading countries.
const DASHBOARD_ROWS: usize = 6;

#[component]
pub fn SalesByCountryChart(context: ChartContext) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let layout = ChartLayout::for_context(context, "Country", "Sales");

    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        api::fetch_geo_data(&base).await
    });

    let rows = Memo::new(move |_| remote.with(|s| ranked(&s.data)));
    let domain = Memo::new(move |_| remote.with(|s| geo_domain(&s.data)));
    let loading = Signal::derive(move || remote.with(|s| s.loading));
    let error = Signal::derive(move || remote.with(|s| s.error.clone()));

    let limit = match context {
        ChartContext::Dashboard => DASHBOARD_ROWS,
        ChartContext::FullPage => usize::MAX,
    };
    let height_px = layout.height_px;
    let show_legend = layout.show_legend;

    let body = move || {
        let domain = domain.get();
        rows.get()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, d)| {
                let swatch = format!("geo__swatch geo__swatch--{}", color_step(d.value, domain));
                view! {
                    <tr class="table__row">
                        <td class="table__cell table__cell--number">{i + 1}</td>
                        <td class="table__cell"><span class=swatch></span>{d.id}</td>
                        <td class="table__cell table__cell--number">{format_money(d.value)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    let scale = move || {
        show_legend.then(|| {
            let (lo, hi) = domain.get();
            view! {
                <div class="geo__scale">
                    <span>{format_money(lo)}</span>
                    <span class="geo__scale-bar"></span>
                    <span>{format_money(hi)}</span>
                </div>
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
                {scale}
                <table class="table geo__table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Country"</th>
                            <th class="table__header-cell">"Sales"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
pub fn SalesByCountryPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Geography" subtitle="Sales by client country".to_string() />
            <SalesByCountryChart context=ChartContext::FullPage />
        </div>
    }
}
