//! Card metrics and recent transactions of the dashboard home.

use crate::shared::number_format::format_optional_delta;
use contracts::dashboards::d400_dashboard_summary::CardsSummary;
use contracts::domain::a002_sale::SalesRecord;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};

pub const CARDS_RESOURCE: &str = "cards_data";

/// One stat card: value, formatting and the signed delta text.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMetric {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub format: ValueFormat,
    pub delta_text: String,
    pub status: IndicatorStatus,
}

fn euro() -> ValueFormat {
    ValueFormat::Money {
        currency: "€".to_string(),
    }
}

fn metric(
    label: &'static str,
    icon: &'static str,
    value: f64,
    format: ValueFormat,
    delta: Option<f64>,
    decimals: u8,
) -> CardMetric {
    CardMetric {
        label,
        icon,
        value,
        format,
        delta_text: format_optional_delta(delta, decimals),
        status: IndicatorStatus::from_delta(delta),
    }
}

/// The four headline cards: orders, income, new clients, inbound traffic.
pub fn card_metrics(summary: &CardsSummary, decimals: u8) -> Vec<CardMetric> {
    vec![
        metric(
            "Orders this month",
            "orders",
            summary.november_orders as f64,
            ValueFormat::Integer,
            summary.percentage_diff_orders,
            decimals,
        ),
        metric(
            "Income value",
            "income",
            summary.november_income,
            euro(),
            summary.percentage_diff_income,
            decimals,
        ),
        metric(
            "New Clients",
            "clients",
            summary.november_new_clients as f64,
            ValueFormat::Integer,
            summary.percentage_diff_new_clients,
            decimals,
        ),
        metric(
            "Traffic Inbound",
            "traffic",
            summary.november_inbound_traffic,
            ValueFormat::Integer,
            summary.percentage_diff_inbound_traffic,
            decimals,
        ),
    ]
}

/// Year-to-date revenue with its change against the previous year.
pub fn annual_balance(summary: &CardsSummary, decimals: u8) -> CardMetric {
    metric(
        "Total Revenue in 2024",
        "income",
        summary.annual_income_2024,
        euro(),
        summary.percentage_diff_income_year,
        decimals,
    )
}

/// Progress ring fill in `[0, 1]` for a delta ratio; missing deltas show empty.
pub fn progress_fraction(delta: Option<f64>) -> f64 {
    delta.map(|d| d.abs().min(1.0)).unwrap_or(0.0)
}

/// The last `n` sales, newest first (the server lists oldest first).
pub fn recent_transactions(sales: &[SalesRecord], n: usize) -> Vec<SalesRecord> {
    let start = sales.len().saturating_sub(n);
    sales[start..].iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> CardsSummary {
        CardsSummary {
            november_orders: 182,
            november_income: 95231.4,
            november_new_clients: 37,
            annual_income_2024: 1024377.85,
            november_inbound_traffic: 48211.0,
            percentage_diff_orders: Some(0.12),
            percentage_diff_income: Some(-0.05),
            percentage_diff_new_clients: None,
            percentage_diff_inbound_traffic: Some(0.1),
            percentage_diff_income_year: Some(0.18),
            ..Default::default()
        }
    }

    fn sale(id: u64) -> SalesRecord {
        SalesRecord {
            sale_id: id,
            sale_date: "2024-11-05".to_string(),
            product_brand: "Apple".to_string(),
            product_model: "iPhone 15".to_string(),
            product_category: "Phones".to_string(),
            sale_quantity: 1,
            final_price: 899.0,
            register_id: "100".to_string(),
            client_name: "Anna Weber".to_string(),
            client_city: "Berlin".to_string(),
            client_country: "Germany".to_string(),
        }
    }

    #[test]
    fn test_card_deltas() {
        let cards = card_metrics(&summary(), 0);
        let deltas: Vec<&str> = cards.iter().map(|c| c.delta_text.as_str()).collect();
        assert_eq!(deltas, vec!["+12%", "-5%", "n/a", "+10%"]);
        assert_eq!(cards[0].status, IndicatorStatus::Good);
        assert_eq!(cards[1].status, IndicatorStatus::Bad);
        assert_eq!(cards[2].status, IndicatorStatus::Neutral);
    }

    #[test]
    fn test_card_values_and_formats() {
        let cards = card_metrics(&summary(), 0);
        assert_eq!(cards[0].value, 182.0);
        assert_eq!(cards[0].format, ValueFormat::Integer);
        assert_eq!(cards[1].format, euro());
        assert_eq!(cards[3].icon, "traffic");
    }

    #[test]
    fn test_annual_balance() {
        let balance = annual_balance(&summary(), 1);
        assert_eq!(balance.value, 1024377.85);
        assert_eq!(balance.delta_text, "+18.0%");
        assert_eq!(progress_fraction(Some(0.18)), 0.18);
        assert_eq!(progress_fraction(Some(-2.5)), 1.0);
        assert_eq!(progress_fraction(None), 0.0);
    }

    #[test]
    fn test_recent_transactions_are_newest_first() {
        let sales: Vec<SalesRecord> = (1..=5).map(sale).collect();
        let ids: Vec<u64> = recent_transactions(&sales, 3).iter().map(|s| s.sale_id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
        assert_eq!(recent_transactions(&sales, 50).len(), 5);
        assert!(recent_transactions(&[], 50).is_empty());
    }
}
