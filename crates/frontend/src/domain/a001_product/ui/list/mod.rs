pub mod state;

use crate::domain::a001_product::ui::bulk_upload::BulkUploadModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::store::AppStore;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use state::{material_options, ProductListState, ALL_MATERIALS};
use thaw::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList(store: AppStore) -> impl IntoView {
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());
    let material = RwSignal::new(ALL_MATERIALS.to_string());
    let page = RwSignal::new(0usize);
    let show_bulk = RwSignal::new(false);

    // Filters change the row set, so start from the first page again
    Effect::new(move |_| {
        search.track();
        material.track();
        page.set(0);
    });

    let current = Memo::new(move |_| {
        ProductListState {
            search: search.get(),
            material: material.get(),
            page: page.get(),
            ..Default::default()
        }
        .apply(&store.products.get())
    });

    let materials = Memo::new(move |_| material_options(&store.products.get()));

    let handle_delete = move |product: Product| {
        if !confirm(&format!("Delete \"{}\"? This cannot be undone.", product.name)) {
            return;
        }
        spawn_local(async move {
            // Failure is already shown through store.error
            let _ = store.delete_product(product.id).await;
        });
    };

    let add_navigate = navigate.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Products"</h1>
                    <p class="header__subtitle">"Manage the bottle catalog and its variants"</p>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| add_navigate("/products/add", Default::default())
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_bulk.set(true)>
                        {icon("upload")}
                        " Bulk Upload"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| spawn_local(async move { store.fetch_products().await })
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || store.error.get().map(|e| view! {
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
                                <Input value=search placeholder="Name, material or cap type..." />
                            </Flex>
                        </div>
                        <div style="min-width: 200px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Material"</Label>
                                <Select value=material>
                                    <option value=ALL_MATERIALS>"All materials"</option>
                                    <For
                                        each=move || materials.get()
                                        key=|m| m.clone()
                                        children=move |m| view! { <option value=m.clone()>{m.clone()}</option> }
                                    />
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
                            <TableHeaderCell attr:style="width: 72px;">"Image"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Material"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Cap Type"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Sizes"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 120px;">"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = current.get().rows;
                            if rows.is_empty() {
                                let message = if store.loading.get() { "Loading..." } else { "No products found" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="6">
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
                                .map(|product| {
                                    let navigate = navigate.clone();
                                    let edit_path = format!("/products/{}/edit", product.id);
                                    let sizes = product.size_labels();
                                    let image = product.image_url.clone().unwrap_or_default();
                                    let alt = product.name.clone();
                                    let name = product.name.clone();
                                    let material = product.material_of_construction.clone();
                                    let cap_type = product.cap_type.clone();
                                    let for_delete = product;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img class="product-thumb" src=image alt=alt />
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{material}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cap_type}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{sizes}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigate(&edit_path, Default::default())
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| handle_delete(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </Flex>
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

            <Show when=move || show_bulk.get()>
                <BulkUploadModal store=store on_close=Callback::new(move |_| show_bulk.set(false)) />
            </Show>
        </div>
    }
}
