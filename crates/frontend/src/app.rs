use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use crate::store::backend::HttpBackend;
use crate::store::AppStore;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("API base URL: {}", config.base_url());
    let store = AppStore::new(Rc::new(HttpBackend::new(config)));

    view! {
        <ConfigProvider>
            <AppRoutes store=store />
        </ConfigProvider>
    }
}
