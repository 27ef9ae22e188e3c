//! Navigation sidebar, grouped like the routes it links to

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Data",
            items: vec![
                ("/team", "Manage Team", "team"),
                ("/contacts", "Contacts Information", "contacts"),
                ("/invoices", "Invoices Balances", "invoices"),
            ],
        },
        MenuGroup {
            label: "Pages",
            items: vec![
                ("/form", "Profile Form", "form"),
                ("/faq", "FAQ Page", "faq"),
            ],
        },
        MenuGroup {
            label: "Charts",
            items: vec![
                ("/bar", "Bar Chart", "bar"),
                ("/pie", "Pie Chart", "pie"),
                ("/line", "Line Chart", "line"),
                ("/geography", "Geography Chart", "geography"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let is_open = move || ctx.left_open.get();

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__header">
                <Show when=is_open>
                    <span class="app-sidebar__title">"ADMIN"</span>
                </Show>
                <button
                    class="app-sidebar__toggle"
                    title=move || if is_open() { "Collapse" } else { "Expand" }
                    on:click=move |_| ctx.toggle_left()
                >
                    {move || if is_open() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
            </div>

            <A href="/" exact=true attr:class="app-sidebar__item">
                <span class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <Show when=is_open><span>"Dashboard"</span></Show>
                </span>
            </A>

            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <Show when=is_open>
                                <div class="app-sidebar__group-label">{group.label}</div>
                            </Show>
                            {group
                                .items
                                .into_iter()
                                .map(|(href, label, icon_name)| {
                                    view! {
                                        <A href=href attr:class="app-sidebar__item" attr:title=label>
                                            <span class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <Show when=is_open><span>{label}</span></Show>
                                            </span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
