use leptos::prelude::*;

/// Drop-down of the years present in a time series.
#[component]
pub fn YearSelector(
    #[prop(into)]
    years: Signal<Vec<String>>,
    selected: RwSignal<String>,
    #[prop(optional)]
    font_px: Option<u32>,
) -> impl IntoView {
    let style = format!("font-size: {}px;", font_px.unwrap_or(14));
    view! {
        <div class="year-selector">
            <select
                class="year-selector__select"
                style=style
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                {move || {
                    years
                        .get()
                        .into_iter()
                        .map(|year| {
                            let value = year.clone();
                            view! { <option value=value>{year}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
