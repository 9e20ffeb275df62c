//! Single lead: customer, requested items, pricing and notification resend

use super::StatusBadge;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::store::AppStore;
use contracts::domain::a002_quotation::{Quotation, QuotationId, QuotationItem, ResendWhatsAppOptions};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LeadDetail(store: AppStore) -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let quotation = RwSignal::new(None::<Quotation>);
    let load_error = RwSignal::new(None::<String>);

    let id = params.with_untracked(|p| p.get("id"));
    match id.as_deref().map(QuotationId::from_string) {
        Some(Ok(id)) => {
            let cached = store
                .quotations
                .with_untracked(|list| list.iter().find(|q| q.id == id).cloned());
            match cached {
                Some(q) => quotation.set(Some(q)),
                None => spawn_local(async move {
                    match store.get_quotation(&id).await {
                        Ok(q) => quotation.set(Some(q)),
                        Err(e) => {
                            log::error!("Failed to load quotation {}: {}", id, e);
                            load_error.set(Some(e.to_string()));
                        }
                    }
                }),
            }
        }
        _ => load_error.set(Some("Quotation not found".to_string())),
    }

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <button
                        class="button button--icon"
                        on:click=move |_| navigate("/leads", Default::default())
                    >
                        {icon("arrow-left")}
                    </button>
                    <div>
                        <h1 class="header__title">"Lead Details"</h1>
                        <p class="header__subtitle">"View complete lead information"</p>
                    </div>
                </div>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || match quotation.get() {
                Some(q) => view! { <LeadBody store=store quotation=q /> }.into_any(),
                None if load_error.get().is_none() => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn LeadBody(store: AppStore, quotation: Quotation) -> impl IntoView {
    let pdf_url = quotation
        .pdf_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| store.quotation_pdf_url(&quotation.id));
    let initials = quotation.initials();
    let created_at = format_datetime(quotation.created_at);
    let updated_at = format_datetime(quotation.updated_at);
    let Quotation {
        id,
        quotation_number,
        user_details: user,
        items,
        pricing,
        status,
        ..
    } = quotation;

    view! {
        <div class="details-section">
            <div class="lead-card__header">
                <div class="avatar">{initials}</div>
                <div>
                    <h2>{user.name}</h2>
                    <p class="text-muted">{quotation_number}</p>
                </div>
                <StatusBadge status=status />
            </div>
            <div class="lead-card__grid">
                <InfoItem label="Email" value=user.email />
                <InfoItem label="Phone" value=user.phone />
                <InfoItem label="Company" value=user.company_name />
                <InfoItem label="Created" value=created_at />
                <InfoItem label="Updated" value=updated_at />
            </div>
        </div>

        <div class="details-section">
            <h3 class="details-section__title">"Requested Items"</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=200.0>"Product"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Size"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Qty"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Unit Price"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {items.into_iter().map(|item| {
                        let unit_price = format_money(item.unit_price);
                        let total = format_money(item.total);
                        let QuotationItem { product_name, size_label, quantity, .. } = item;
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout truncate=true>{product_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{size_label}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{unit_price}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
            <div class="pricing">
                <div class="pricing__row"><span>"Subtotal"</span><span>{format_money(pricing.subtotal)}</span></div>
                <div class="pricing__row"><span>"Tax"</span><span>{format_money(pricing.tax_amount)}</span></div>
                <div class="pricing__row"><span>"Discount"</span><span>{format_money(pricing.discount)}</span></div>
                <div class="pricing__row pricing__row--total"><span>"Total"</span><span>{format_money(pricing.total)}</span></div>
            </div>
        </div>

        <div class="details-section">
            <h3 class="details-section__title">"Actions"</h3>
            <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                <a class="button button--secondary" href=pdf_url target="_blank" rel="noopener">
                    {icon("file")}
                    " Open PDF"
                </a>
                <ResendWhatsApp store=store id=id />
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn InfoItem(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "-".to_string() } else { value };
    view! {
        <div class="info-item">
            <p class="info-item__label">{label}</p>
            <p class="info-item__value">{value}</p>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ResendWhatsApp(store: AppStore, id: QuotationId) -> impl IntoView {
    let defaults = ResendWhatsAppOptions::default();
    let send_to_user = RwSignal::new(defaults.send_to_user);
    let send_to_company = RwSignal::new(defaults.send_to_company);
    let sending = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let id = StoredValue::new(id);

    let handle_resend = move |_| {
        let options = ResendWhatsAppOptions {
            send_to_user: send_to_user.get_untracked(),
            send_to_company: send_to_company.get_untracked(),
        };
        let id = id.get_value();
        sending.set(true);
        outcome.set(None);
        spawn_local(async move {
            let result = store
                .resend_quotation_whatsapp(id, options)
                .await
                .map(|r| r.message)
                .map_err(|e| e.to_string());
            outcome.set(Some(result));
            sending.set(false);
        });
    };

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center>
            <Checkbox checked=send_to_user label="Customer" />
            <Checkbox checked=send_to_company label="Company" />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_resend
                disabled=Signal::derive(move || {
                    sending.get() || !(send_to_user.get() || send_to_company.get())
                })
            >
                {icon("send")}
                {move || if sending.get() { " Sending..." } else { " Resend WhatsApp" }}
            </Button>
            {move || outcome.get().map(|r| match r {
                Ok(message) => view! { <span class="text-success">{message}</span> }.into_any(),
                Err(message) => view! { <span class="text-error">{message}</span> }.into_any(),
            })}
        </Flex>
    }
}
