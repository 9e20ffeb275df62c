use crate::dashboards::d400_overview::summary::{recent_leads, DashboardSummary, RecentLead, RECENT_LEADS};
use crate::domain::a002_quotation::ui::StatusBadge;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::store::AppStore;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard(store: AppStore) -> impl IntoView {
    let summary = Memo::new(move |_| {
        DashboardSummary::compute(&store.products.get(), &store.quotations.get())
    });
    let recent = Memo::new(move |_| {
        recent_leads(&store.quotations.get(), RECENT_LEADS)
            .into_iter()
            .map(RecentLead::from)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                    <p class="header__subtitle">"Welcome to Navkar Admin Panel"</p>
                </div>
            </div>

            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Total Products"
                    icon_name="products"
                    value=Signal::derive(move || summary.get().total_products)
                />
                <StatCard
                    label="Product Variants"
                    icon_name="layers"
                    value=Signal::derive(move || summary.get().total_variants)
                />
                <StatCard
                    label="Total Leads"
                    icon_name="leads"
                    value=Signal::derive(move || summary.get().total_leads)
                    subtitle="Latest 100 quotations"
                />
                <StatCard
                    label="Pending Leads"
                    icon_name="clock"
                    value=Signal::derive(move || summary.get().pending_leads)
                />
            </div>

            <div class="details-section">
                <div class="details-section__header">
                    <h3 class="details-section__title">"Recent Leads"</h3>
                    <A href="/leads">"View all"</A>
                </div>
                {move || {
                    let rows = recent.get();
                    if rows.is_empty() {
                        return view! { <p class="text-muted">"No leads yet"</p> }.into_any();
                    }
                    view! {
                        <ul class="recent-list">
                            {rows.into_iter().map(|line| {
                                let RecentLead { href, initials, name, created_at, total, status } = line;
                                view! {
                                    <li class="recent-list__item">
                                        <A href=href>
                                            <span class="avatar avatar--small">{initials}</span>
                                            <span class="recent-list__name">{name}</span>
                                        </A>
                                        <span class="text-muted">{created_at}</span>
                                        <span>{total}</span>
                                        <StatusBadge status=status />
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
