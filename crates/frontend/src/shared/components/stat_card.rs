use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="stat-card__value">{move || value.get().to_string()}</div>
            {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
