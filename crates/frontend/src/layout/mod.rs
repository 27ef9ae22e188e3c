pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |        routed content        |
/// |  (Left)   |                              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
