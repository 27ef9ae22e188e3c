use crate::dashboards::d400_dashboard::api;
use crate::dashboards::d400_dashboard::model::{
    annual_balance, card_metrics, progress_fraction, recent_transactions, CARDS_RESOURCE,
};
use crate::dashboards::d401_traffic_by_month::ui::TrafficByMonthChart;
use crate::dashboards::d402_sales_by_month::ui::SalesByMonthChart;
use crate::dashboards::d404_sales_by_country::ui::SalesByCountryChart;
use crate::domain::a002_sale::api::{fetch_sales, RESOURCE as SALES_RESOURCE};
use crate::shared::chart_layout::ChartContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::format_sale_date;
use crate::shared::number_format::format_money;
use crate::shared::remote::use_remote;
use contracts::dashboards::d400_dashboard_summary::CardsSummary;
use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;
use std::f64::consts::TAU;

const RING_RADIUS: f64 = 52.0;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let decimals = config.view.percent_decimals;
    let recent_count = config.view.recent_transactions;

    let cards_remote = use_remote(CARDS_RESOURCE, None, {
        let base = config.api.base_url.clone();
        move || async move { api::fetch_cards(&base).await.map(Some) }
    });
    let sales_remote = use_remote(SALES_RESOURCE, Vec::new(), {
        let base = config.api.base_url.clone();
        move || async move { fetch_sales(&base).await }
    });

    let cards = Memo::new(move |_| {
        cards_remote.with(|s| s.data.as_ref().map(|c| card_metrics(c, decimals)))
    });
    let balance = Memo::new(move |_| {
        cards_remote.with(|s| s.data.as_ref().map(|c| annual_balance(c, decimals)))
    });
    let recent = Memo::new(move |_| {
        sales_remote.with(|s| recent_transactions(&s.data, recent_count))
    });

    let cards_error = Signal::derive(move || cards_remote.with(|s| s.error.clone()));
    let sales_error = Signal::derive(move || sales_remote.with(|s| s.error.clone()));
    let sales_loading = Signal::derive(move || sales_remote.with(|s| s.loading));

    // Labels, icons and formats do not depend on the data.
    let stat_cards = card_metrics(&CardsSummary::default(), decimals)
        .into_iter()
        .enumerate()
        .map(|(i, template)| {
            view! {
                <StatCard
                    label=template.label.to_string()
                    icon_name=template.icon.to_string()
                    value=Signal::derive(move || cards.with(|c| c.as_ref().map(|c| c[i].value)))
                    format=template.format
                    status=Signal::derive(move || {
                        cards.with(|c| c.as_ref().map(|c| c[i].status).unwrap_or(IndicatorStatus::Neutral))
                    })
                    change=Signal::derive(move || cards.with(|c| c.as_ref().map(|c| c[i].delta_text.clone())))
                />
            }
        })
        .collect_view();

    let circumference = TAU * RING_RADIUS;
    let ring_dash = move || {
        let fraction = cards_remote.with(|s| {
            progress_fraction(s.data.as_ref().and_then(|c| c.percentage_diff_income_year))
        });
        format!("{:.1} {:.1}", fraction * circumference, circumference)
    };
    let balance_text = move || match balance.get() {
        Some(b) => format!("{}  {}", format_money(b.value), b.delta_text),
        None => "loading...".to_string(),
    };

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard" subtitle="Welcome to your dashboard".to_string() />

            <ErrorBanner error=cards_error />
            <div class="dashboard__cards">{stat_cards}</div>

            <div class="dashboard__grid">
                <section class="dashboard__tile dashboard__tile--wide">
                    <h3 class="dashboard__tile-title">"Sales by Month"</h3>
                    <SalesByMonthChart context=ChartContext::Dashboard />
                </section>

                <section class="dashboard__tile dashboard__tile--scroll">
                    <h3 class="dashboard__tile-title">"Recent Transactions"</h3>
                    <ErrorBanner error=sales_error />
                    <Show when=move || !sales_loading.get() fallback=|| view! { <LoadingIndicator /> }>
                        {move || recent.get().into_iter().map(|t| view! {
                            <div class="transaction">
                                <div class="transaction__who">
                                    <div class="transaction__id">{t.sale_id}</div>
                                    <div class="transaction__client">{t.client_name}</div>
                                </div>
                                <div class="transaction__date">{format_sale_date(&t.sale_date)}</div>
                                <div class="transaction__amount">{format_money(t.final_price)}</div>
                            </div>
                        }).collect_view()}
                    </Show>
                </section>

                <section class="dashboard__tile">
                    <h3 class="dashboard__tile-title">"Annual Balance"</h3>
                    <div class="progress-ring">
                        <svg width="124" height="124" viewBox="0 0 124 124">
                            <circle class="progress-ring__track" cx="62" cy="62" r=format!("{}", RING_RADIUS) fill="none" />
                            <circle
                                class="progress-ring__value"
                                cx="62"
                                cy="62"
                                r=format!("{}", RING_RADIUS)
                                fill="none"
                                stroke-dasharray=ring_dash
                                transform="rotate(-90 62 62)"
                            />
                        </svg>
                        <div class="progress-ring__text">{balance_text}</div>
                        <div class="progress-ring__caption">
                            {move || balance.get().map(|b| b.label).unwrap_or("Total Revenue")}
                        </div>
                    </div>
                </section>

                <section class="dashboard__tile">
                    <h3 class="dashboard__tile-title">"Traffic by Month"</h3>
                    <TrafficByMonthChart context=ChartContext::Dashboard />
                </section>

                <section class="dashboard__tile">
                    <h3 class="dashboard__tile-title">"Sales by Country"</h3>
                    <SalesByCountryChart context=ChartContext::Dashboard />
                </section>
            </div>
        </div>
    }
}
