pub mod export;
pub mod state;

use super::StatusBadge;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::store::AppStore;
use contracts::domain::a002_quotation::QuotationStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use state::{DateRange, LeadListState, ALL_STATUSES};
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LeadList(store: AppStore) -> impl IntoView {
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(ALL_STATUSES.to_string());
    let range = RwSignal::new(DateRange::All.code().to_string());
    let page = RwSignal::new(0usize);
    let export_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        search.track();
        status.track();
        range.track();
        page.set(0);
    });

    let current = Memo::new(move |_| {
        LeadListState {
            search: search.get(),
            status: status.get(),
            range: DateRange::from_code(&range.get()),
            page: page.get(),
            ..Default::default()
        }
        .apply(&store.quotations.get(), chrono::Utc::now())
    });

    let handle_export = move |_| {
        let quotations = store.quotations.get_untracked();
        match export_to_csv(&quotations, "quotations") {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::error!("Failed to export leads: {}", e);
                export_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Leads"</h1>
                    <p class="header__subtitle">"Quotation requests from customers"</p>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_export
                        disabled=Signal::derive(move || store.quotations.with(Vec::is_empty))
                    >
                        {icon("download")}
                        " Export Leads"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| spawn_local(async move { store.fetch_quotations().await })
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || store.error.get().or_else(|| export_error.get()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="min-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=search placeholder="Search by name, email, or phone..." />
                            </Flex>
                        </div>
                        <div style="min-width: 160px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <Select value=status>
                                    <option value=ALL_STATUSES>"All"</option>
                                    {QuotationStatus::FILTERABLE
                                        .into_iter()
                                        .map(|s| {
                                            let code = s.code().to_string();
                                            let label = s.label().to_string();
                                            view! { <option value=code>{label}</option> }
                                        })
                                        .collect_view()}
                                </Select>
                            </Flex>
                        </div>
                        <div style="min-width: 160px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Date Range"</Label>
                                <Select value=range>
                                    {DateRange::ALL
                                        .into_iter()
                                        .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </Flex>
                        </div>
                        <PaginationControls
                            current_page=Signal::derive(move || current.get().page)
                            total_pages=Signal::derive(move || current.get().pages)
                            total_count=Signal::derive(move || current.get().total)
                            on_page_change=Callback::new(move |p| page.set(p))
                        />
                    </Flex>
                </div>
            </div>

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=120.0>"Quotation #"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Customer"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Phone"</TableHeaderCell>
                            <TableHeaderCell min_width=60.0>"Items"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Created"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 72px;">"Action"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = current.get().rows;
                            if rows.is_empty() {
                                let message = if store.loading.get() { "Loading..." } else { "No leads found" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="9">
                                            <TableCellLayout>
                                                <span class="text-muted">{message}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            let navigate = navigate.clone();
                            rows.into_iter()
                                .map(|q| {
                                    let navigate = navigate.clone();
                                    let detail_path = format!("/leads/{}", q.id);
                                    let name = q.user_details.name;
                                    let email = q.user_details.email;
                                    let phone = q.user_details.phone;
                                    let number = q.quotation_number;
                                    let item_count = q.items.len();
                                    let total = format_money(q.pricing.total);
                                    let created_at = format_datetime(q.created_at);
                                    let status = q.status;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{phone}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{item_count}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell><StatusBadge status=status /></TableCell>
                                            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| navigate(&detail_path, Default::default())
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
