use crate::domain::a001_client::api::{fetch_clients, RESOURCE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::config::DashboardConfig;
use crate::shared::list_utils::{contains_ci, filter_list, sort_list, Searchable, SortState, Sortable};
use crate::shared::remote::use_remote;
use contracts::domain::a001_client::ClientRecord;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for ClientRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.email, filter)
            || contains_ci(&self.phone, filter)
            || contains_ci(&self.city, filter)
            || contains_ci(&self.country, filter)
            || self.register_id.contains(filter)
    }
}

impl Sortable for ClientRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "register_id" => self.register_id.cmp(&other.register_id),
            "age" => self.age.cmp(&other.age),
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "country" => self.country.to_lowercase().cmp(&other.country.to_lowercase()),
            "zip_code" => self.zip_code.cmp(&other.zip_code),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Filtered and sorted copy of the client rows.
pub fn visible_clients(clients: &[ClientRecord], filter: &str, sort: &SortState) -> Vec<ClientRecord> {
    let mut rows = filter_list(clients, filter);
    sort_list(&mut rows, sort.field, sort.ascending);
    rows
}

const COLUMNS: [(&str, &str); 9] = [
    ("register_id", "Register ID"),
    ("name", "Name"),
    ("age", "Age"),
    ("phone", "Phone Number"),
    ("email", "Email"),
    ("address", "Address"),
    ("city", "City"),
    ("zip_code", "Zip Code"),
    ("country", "Country"),
];

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), move || async move {
        fetch_clients(&base).await
    });

    let (filter, set_filter) = signal(String::new());
    let sort = RwSignal::new(SortState::new("name"));

    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let sort = sort.get();
        remote.with(|s| visible_clients(&s.data, &filter, &sort))
    });
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
            <PageHeader title="Contacts" subtitle="List of contacts for future reference".to_string()>
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
                            {move || rows.get().into_iter().map(|c| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{c.register_id}</td>
                                    <td class="table__cell">{c.name}</td>
                                    <td class="table__cell table__cell--number">{c.age}</td>
                                    <td class="table__cell">{c.phone}</td>
                                    <td class="table__cell">{c.email}</td>
                                    <td class="table__cell">{c.address}</td>
                                    <td class="table__cell">{c.city}</td>
                                    <td class="table__cell">{c.zip_code}</td>
                                    <td class="table__cell">{c.country}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, name: &str, age: u32, city: &str) -> ClientRecord {
        ClientRecord {
            register_id: id.to_string(),
            name: name.to_string(),
            age,
            phone: "+49 30 1234567".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            address: "Main Street 1".to_string(),
            city: city.to_string(),
            country: "Germany".to_string(),
            zip_code: "10115".to_string(),
        }
    }

    fn sample() -> Vec<ClientRecord> {
        vec![
            client("100", "Anna Weber", 34, "Berlin"),
            client("101", "jonas Braun", 51, "Hamburg"),
            client("102", "Lea Fischer", 27, "Munich"),
        ]
    }

    #[test]
    fn test_filter_by_city_case_insensitive() {
        let rows = visible_clients(&sample(), "HAMB", &SortState::new("name"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].register_id, "101");
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let rows = visible_clients(&sample(), "", &SortState::new("name"));
        let names: Vec<&str> = rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anna Weber", "jonas Braun", "Lea Fischer"]);
    }

    #[test]
    fn test_descending_age_sort() {
        let sort = SortState {
            field: "age",
            ascending: false,
        };
        let rows = visible_clients(&sample(), "", &sort);
        let ages: Vec<u32> = rows.iter().map(|c| c.age).collect();
        assert_eq!(ages, vec![51, 34, 27]);
    }
}
