use leptos::prelude::*;

/// Selection cell of a grid row.
///
/// Clicks do not bubble to the row, so selecting never triggers row actions.
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Select-all cell of a grid header; checked when every row is selected.
#[component]
pub fn TableHeaderCheckbox(
    all_selected: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_selected
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
