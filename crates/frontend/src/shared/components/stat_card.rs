use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } if currency == "€" => format_money(val),
        ValueFormat::Money { currency } => format!("{} {}", format_number(val, 2), currency),
        ValueFormat::Integer => format_number(val, 0),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    /// Visual status, derived from the delta sign
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Preformatted change relative to the previous period ("+12%")
    #[prop(into)]
    change: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "loading...".to_string(),
    };

    let change_view = move || {
        change.get().map(|text| {
            let cls = match status.get() {
                IndicatorStatus::Good => "stat-card__change stat-card__change--up",
                IndicatorStatus::Bad => "stat-card__change stat-card__change--down",
                IndicatorStatus::Neutral => "stat-card__change stat-card__change--flat",
            };
            view! { <span class=cls>{text}</span> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__label">{label}</div>
                {change_view}
            </div>
        </div>
    }
}
