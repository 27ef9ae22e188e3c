use crate::dashboards::{
    DashboardPage, SalesByCategoryPage, SalesByCountryPage, SalesByMonthPage, TrafficByMonthPage,
};
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_sale::ui::list::SalesList;
use crate::domain::a003_team_member::ui::list::TeamList;
use crate::layout::Shell;
use crate::shared::components::page_header::PageHeader;
use crate::system::pages::faq::FaqPage;
use crate::system::users::ui::form::CreateUserForm;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Page not found" subtitle="The requested page does not exist".to_string() />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/team") view=TeamList />
                    <Route path=path!("/contacts") view=ClientList />
                    <Route path=path!("/invoices") view=SalesList />
                    <Route path=path!("/form") view=CreateUserForm />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/bar") view=TrafficByMonthPage />
                    <Route path=path!("/line") view=SalesByMonthPage />
                    <Route path=path!("/pie") view=SalesByCategoryPage />
                    <Route path=path!("/geography") view=SalesByCountryPage />
                </Routes>
            </Shell>
        </Router>
    }
}
