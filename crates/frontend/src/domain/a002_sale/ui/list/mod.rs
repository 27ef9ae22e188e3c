use crate::domain::a002_sale::api::{fetch_sales, RESOURCE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::format_sale_date;
use crate::shared::list_utils::{contains_ci, filter_list, sort_list, Searchable, SortState, Sortable};
use crate::shared::number_format::{format_money, format_number};
use crate::shared::remote::use_remote;
use contracts::domain::a002_sale::SalesRecord;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for SalesRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.client_name, filter)
            || contains_ci(&self.product_brand, filter)
            || contains_ci(&self.product_model, filter)
            || contains_ci(&self.product_category, filter)
            || contains_ci(&self.client_city, filter)
            || contains_ci(&self.client_country, filter)
            || self.register_id.contains(filter)
            || self.sale_id.to_string().contains(filter)
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Client ids arrive as digits; fall back to text for anything else.
fn cmp_register_id(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

impl Sortable for SalesRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // ISO dates order lexicographically
            "sale_date" => self.sale_date.cmp(&other.sale_date),
            "product_brand" => cmp_ci(&self.product_brand, &other.product_brand),
            "product_model" => cmp_ci(&self.product_model, &other.product_model),
            "product_category" => cmp_ci(&self.product_category, &other.product_category),
            "sale_quantity" => self.sale_quantity.cmp(&other.sale_quantity),
            "final_price" => self
                .final_price
                .partial_cmp(&other.final_price)
                .unwrap_or(Ordering::Equal),
            "register_id" => cmp_register_id(&self.register_id, &other.register_id),
            "client_name" => cmp_ci(&self.client_name, &other.client_name),
            "client_city" => cmp_ci(&self.client_city, &other.client_city),
            "client_country" => cmp_ci(&self.client_country, &other.client_country),
            _ => self.sale_id.cmp(&other.sale_id),
        }
    }
}

pub fn visible_sales(sales: &[SalesRecord], filter: &str, sort: &SortState) -> Vec<SalesRecord> {
    let mut rows = filter_list(sales, filter);
    sort_list(&mut rows, sort.field, sort.ascending);
    rows
}

const COLUMNS: [(&str, &str); 11] = [
    ("sale_id", "ID"),
    ("sale_date", "Date"),
    ("product_brand", "Brand"),
    ("product_model", "Model"),
    ("product_category", "Category"),
    ("sale_quantity", "Qty"),
    ("final_price", "Price"),
    ("register_id", "Client ID"),
    ("client_name", "Name"),
    ("client_city", "City"),
    ("client_country", "Country"),
];

#[component]
#[allow(non_snake_case)]
pub fn SalesList() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        fetch_sales(&base).await
    });

    let (filter, set_filter) = signal(String::new());
    let sort = RwSignal::new(SortState {
        field: "sale_id",
        ascending: false,
    });

    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let sort = sort.get();
        remote.with(|s| visible_sales(&s.data, &filter, &sort))
    });
    let total = move || rows.with(|r| r.iter().map(|s| s.final_price).sum::<f64>());
    let loading = Signal::derive(move || remote.with(|s| s.loading));
    let error = Signal::derive(move || remote.with(|s| s.error.clone()));

    let header = move || {
        COLUMNS
            .iter()
            .map(|&(field, title)| {
                view! {
                    <th
                        class="table__header-cell table__header-cell--sortable"
                        on:click=move |_| sort.update(|s| s.toggle(field))
                    >
                        {title}
                        {move || sort.with(|s| s.indicator(field))}
                    </th>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader title="Sales Data" subtitle="List of all sales made on the platform".to_string()>
                <input
                    type="search"
                    class="form__input"
                    placeholder="Search (3+ characters)"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator /> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>{header}</tr>
                        </thead>
                        <tbody>
                            {move || rows.get().into_iter().map(|s| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{s.sale_id}</td>
                                    <td class="table__cell">{format_sale_date(&s.sale_date)}</td>
                                    <td class="table__cell table__cell--accent">{s.product_brand}</td>
                                    <td class="table__cell">{s.product_model}</td>
                                    <td class="table__cell">{s.product_category}</td>
                                    <td class="table__cell table__cell--number">{s.sale_quantity}</td>
                                    <td class="table__cell table__cell--number">{format_money(s.final_price)}</td>
                                    <td class="table__cell">{s.register_id}</td>
                                    <td class="table__cell">{s.client_name}</td>
                                    <td class="table__cell">{s.client_city}</td>
                                    <td class="table__cell">{s.client_country}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                        <tfoot>
                            <tr class="table__row table__row--total">
                                <td class="table__cell" colspan="6">
                                    {move || format!("{} sales", format_number(rows.with(|r| r.len()) as f64, 0))}
                                </td>
                                <td class="table__cell table__cell--number">{move || format_money(total())}</td>
                                <td class="table__cell" colspan="4"></td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </Show>
        </div>
    }
}
