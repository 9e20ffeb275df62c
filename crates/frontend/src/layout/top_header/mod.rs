//! Application top bar: sidebar toggle, title, refresh and sign-out

use crate::shared::icons::icon;
use crate::store::AppStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader(store: AppStore, left_open: RwSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();

    let refresh = move |_| {
        spawn_local(async move {
            store.fetch_products().await;
            store.fetch_quotations().await;
        });
    };

    let logout = move |_| {
        store.logout();
        navigate("/", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| left_open.update(|open| *open = !*open)
                    title=move || if left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"Navkar Admin"</span>
            </div>

            <div class="top-header__actions">
                {move || store.loading.get().then(|| view! {
                    <span class="top-header__status">"Loading..."</span>
                })}
                <button
                    class="top-header__icon-btn"
                    on:click=refresh
                    disabled=move || store.loading.get()
                    title="Reload products and leads"
                >
                    {icon("refresh")}
                </button>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
