pub mod center;
pub mod left;
pub mod top_header;

use crate::store::AppStore;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(store: AppStore, children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader store=store left_open=left_open />
            <div class="app-body">
                <left::Left open=left_open>
                    <left::Sidebar />
                </left::Left>
                <div class="app-main">
                    <center::Center>
                        {children()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
