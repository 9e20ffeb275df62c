//! Sidebar with the three dashboard sections

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct MenuItem {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

const MENU: [MenuItem; 3] = [
    MenuItem {
        label: "Dashboard",
        icon: "dashboard",
        href: "/",
    },
    MenuItem {
        label: "Products",
        icon: "products",
        href: "/products",
    },
    MenuItem {
        label: "Leads",
        icon: "leads",
        href: "/leads",
    },
];

/// The dashboard matches only `/`; sections also match their sub-pages.
fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <h1 class="app-sidebar__title">"Navkar"</h1>
                <p class="app-sidebar__subtitle">"Admin Panel"</p>
            </div>
            <nav class="app-sidebar__nav">
                {MENU.iter().map(|item| {
                    let href = item.href;
                    let active = move || is_active(href, &location.pathname.get());
                    view! {
                        <A href=href>
                            <div class="app-sidebar__item" class:app-sidebar__item--active=active>
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                                {move || active().then(|| view! {
                                    <div class="app-sidebar__chevron">{icon("chevron-right")}</div>
                                })}
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <p>"© 2025 Navkar"</p>
                <p>{concat!("Admin Dashboard v", env!("CARGO_PKG_VERSION"))}</p>
            </div>
        </div>
    }
}
