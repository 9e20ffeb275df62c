use crate::dashboards::OverviewDashboard;
use crate::domain::a001_product::ui::details::{AddProductPage, EditProductPage};
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_quotation::ui::details::LeadDetail;
use crate::domain::a002_quotation::ui::list::LeadList;
use crate::layout::Shell;
use crate::store::AppStore;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout(store: AppStore) -> impl IntoView {
    view! {
        <Shell store=store>
            <Routes fallback=|| view! { <div class="page"><h1 class="header__title">"Page not found"</h1></div> }>
                <Route path=path!("/") view=move || view! { <OverviewDashboard store=store /> } />
                <Route path=path!("/products") view=move || view! { <ProductList store=store /> } />
                <Route path=path!("/products/add") view=move || view! { <AddProductPage store=store /> } />
                <Route path=path!("/products/:id/edit") view=move || view! { <EditProductPage store=store /> } />
                <Route path=path!("/leads") view=move || view! { <LeadList store=store /> } />
                <Route path=path!("/leads/:id") view=move || view! { <LeadDetail store=store /> } />
            </Routes>
        </Shell>
    }
}

#[component]
pub fn AppRoutes(store: AppStore) -> impl IntoView {
    view! {
        <Router>
            <Show
                when=move || store.is_authenticated.get()
                fallback=move || view! { <LoginPage store=store /> }
            >
                <MainLayout store=store />
            </Show>
        </Router>
    }
}
