use crate::domain::a003_team_member::api::{fetch_team, HttpTeamMemberApi, RESOURCE};
use crate::domain::a003_team_member::selection::{delete_members, TeamSelection};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBanner, LoadingIndicator};
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::config::DashboardConfig;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::remote::use_remote;
use crate::shared::reporter::use_reporter;
use contracts::domain::a003_team_member::AccessLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn confirm_delete(count: usize) -> bool {
    confirm(&format!(
        "Are you sure you want to delete {} selected team member(s)?",
        count
    ))
}

fn access_class(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::Admin => "badge badge--admin",
        AccessLevel::Manager => "badge badge--manager",
        AccessLevel::User => "badge badge--user",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TeamList() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let reporter = use_reporter();

    let base = config.api.base_url.clone();
    let remote = use_remote(RESOURCE, Vec::new(), {
        let base = base.clone();
        move || async move { fetch_team(&base).await }
    });
    let api = StoredValue::new(HttpTeamMemberApi::new(base));

    let selection = RwSignal::new(TeamSelection::default());
    let (deleting, set_deleting) = signal(false);

    // Each completed fetch replaces the grid rows.
    Effect::new(move |_| {
        let rows = remote.with(|s| s.data.clone());
        selection.update(|s| s.set_rows(rows));
    });

    let delete_selected = move || {
        if deleting.get_untracked() {
            return;
        }
        let ids = selection.with_untracked(|s| s.selected_ids());
        let api = api.get_value();
        let reporter = reporter.clone();
        set_deleting.set(true);

        spawn_local(async move {
            let outcome = delete_members(&ids, &api, confirm_delete, &reporter).await;
            // the grid may have been closed while requests were in flight
            selection.try_update(|s| s.apply(&outcome));
            set_deleting.try_set(false);

            if let Some(failed) = outcome.failure() {
                alert(&format!(
                    "Deleting team member {} failed. {} of {} selected member(s) were deleted.",
                    failed.id,
                    outcome.deleted_ids().len(),
                    ids.len()
                ));
            }
        });
    };

    let loading = Signal::derive(move || remote.with(|s| s.loading));
    let error = Signal::derive(move || remote.with(|s| s.error.clone()));
    let selected_count = move || selection.with(|s| s.selected().len());

    view! {
        <div class="page">
            <PageHeader title="Team" subtitle="Managing the team members".to_string()>
                <button
                    class="button button--secondary"
                    on:click=move |_| delete_selected()
                    disabled=move || selected_count() == 0 || deleting.get()
                >
                    {icon("delete")}
                    {move || format!("Delete ({})", selected_count())}
                </button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator /> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <TableHeaderCheckbox
                                    all_selected=Signal::derive(move || selection.with(|s| s.all_selected()))
                                    on_change=Callback::new(move |checked| selection.update(|s| s.select_all(checked)))
                                />
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Phone Number"</th>
                                <th class="table__header-cell">"Email"</th>
                                <th class="table__header-cell">"Role"</th>
                                <th class="table__header-cell">"Access Level"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || selection.with(|s| s.rows().to_vec()).into_iter().map(|member| {
                                let id = member.id;
                                let is_selected = move || selection.with(|s| s.is_selected(id));
                                view! {
                                    <tr class="table__row" class:table__row--selected=is_selected>
                                        <TableCheckbox
                                            checked=Signal::derive(is_selected)
                                            on_change=Callback::new(move |checked| selection.update(|s| s.toggle(id, checked)))
                                        />
                                        <td class="table__cell">{member.id}</td>
                                        <td class="table__cell">{member.name}</td>
                                        <td class="table__cell">{member.phone}</td>
                                        <td class="table__cell">{member.email}</td>
                                        <td class="table__cell">{member.role}</td>
                                        <td class="table__cell">
                                            <span class=access_class(member.access)>{member.access.as_str()}</span>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
