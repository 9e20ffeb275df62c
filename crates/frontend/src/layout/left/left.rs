use leptos::prelude::*;

#[component]
pub fn Left(open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div data-zone="left" class="left" class:hidden=move || !open.get()>
            {children()}
        </div>
    }
}
