//! Static help page: a list of collapsible questions.

use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::BTreeSet;

pub const FAQ_ENTRIES: [(&str, &str); 6] = [
    (
        "How do I get started?",
        "To get started, create an account and follow the onboarding tutorial.",
    ),
    (
        "What features are included?",
        "Our platform includes dashboard analytics, user management, and reporting tools.",
    ),
    (
        "Is there customer support?",
        "Yes, we offer 24/7 customer support via email, chat, and phone.",
    ),
    (
        "What is the pricing structure?",
        "We offer tiered pricing plans: Basic, Pro, and Enterprise, with monthly and annual billing options.",
    ),
    (
        "Can I integrate with other tools?",
        "We provide API access and integrations with popular productivity and CRM tools.",
    ),
    (
        "What security measures are in place?",
        "We use end-to-end encryption, two-factor authentication, and regular security audits.",
    ),
];

/// Sections expanded when the page opens.
pub fn initially_open() -> BTreeSet<usize> {
    BTreeSet::from([0])
}

/// Flips one section; the others keep their state.
pub fn toggle_section(open: &mut BTreeSet<usize>, index: usize) {
    if !open.remove(&index) {
        open.insert(index);
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let open = RwSignal::new(initially_open());

    view! {
        <div class="page">
            <PageHeader title="FAQ" subtitle="Frequently Asked Questions".to_string() />

            <div class="accordion">
                {FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, &(question, answer))| {
                        let is_open = move || open.with(|o| o.contains(&index));
                        view! {
                            <div class="accordion__item" class:accordion__item--open=is_open>
                                <button
                                    class="accordion__summary"
                                    on:click=move |_| open.update(|o| toggle_section(o, index))
                                >
                                    <span class="accordion__question">{question}</span>
                                    {icon("chevron-down")}
                                </button>
                                <Show when=is_open>
                                    <div class="accordion__details">{answer}</div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
