use super::view_model::ProductFormViewModel;
use crate::shared::file_select::file_from_input;
use crate::shared::icons::icon;
use crate::store::AppStore;
use contracts::domain::a001_product::{ProductField, ProductId, VariantField};
use contracts::domain::common::AggregateId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AddProductPage(store: AppStore) -> impl IntoView {
    let vm = ProductFormViewModel::new();
    view! { <ProductForm store=store vm=vm editing=false /> }
}

/// Edit page for `/products/:id/edit`
#[component]
#[allow(non_snake_case)]
pub fn EditProductPage(store: AppStore) -> impl IntoView {
    let vm = ProductFormViewModel::new();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));
    match id.as_deref().map(ProductId::from_string) {
        Some(Ok(id)) => vm.load_if_needed(store, id),
        _ => vm.api_error.set(Some("Product not found".to_string())),
    }
    view! { <ProductForm store=store vm=vm editing=true /> }
}

#[component]
#[allow(non_snake_case)]
fn ProductForm(store: AppStore, vm: ProductFormViewModel, editing: bool) -> impl IntoView {
    let navigate = use_navigate();
    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/products", Default::default())
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        spawn_local(async move {
            if vm.submit(store).await.is_ok() {
                navigate("/products", Default::default());
            }
        });
    };

    let (title, subtitle) = if editing {
        ("Edit Product", "Update product information")
    } else {
        ("Add New Product", "Create a new product in your catalog")
    };
    let variant_count = Memo::new(move |_| vm.variant_count());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <button class="button button--icon" on:click=back.clone()>{icon("arrow-left")}</button>
                    <div>
                        <h1 class="header__title">{title}</h1>
                        <p class="header__subtitle">{subtitle}</p>
                    </div>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <div class="warning-box__text">
                        <strong>"Validation Error"</strong>
                        <p class="pre-line">{e.message}</p>
                    </div>
                </div>
            })}
            {move || vm.api_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || vm.loading.get().then(|| view! { <Spinner /> })}
            <form class="product-form" on:submit=on_submit>
                <div class="details-section">
                    <h2 class="details-section__title">"Basic Information"</h2>
                    <TextField vm=vm field=ProductField::Name label="Product Name" placeholder="e.g., PET Bottle" />
                    <div class="form__row">
                        <TextField
                            vm=vm
                            field=ProductField::MaterialOfConstruction
                            label="Material of Construction"
                            placeholder="e.g., PET, HDPE"
                        />
                        <TextField
                            vm=vm
                            field=ProductField::CapType
                            label="Cap Type"
                            placeholder="e.g., Screw Cap, Flip Top"
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Description"</label>
                        <textarea
                            class="form__input"
                            class:form__input--error=move || vm.field_error(ProductField::Description).is_some()
                            rows="4"
                            placeholder="Product description..."
                            prop:value=move || vm.text(ProductField::Description)
                            on:input=move |ev| vm.set_text(ProductField::Description, event_target_value(&ev))
                        />
                        <FieldError vm=vm field=ProductField::Description />
                    </div>
                    <ImageField vm=vm required=!editing />
                </div>

                <div class="details-section">
                    <div class="details-section__header">
                        <h2 class="details-section__title">"Product Variants"</h2>
                        <button
                            type="button"
                            class="button button--primary button--small"
                            on:click=move |_| vm.add_variant()
                            disabled=move || !vm.can_add_variant()
                        >
                            {icon("plus")}
                            " Add Variant"
                        </button>
                    </div>
                    <FieldError vm=vm field=ProductField::Variants />
                    {move || {
                        let count = variant_count.get();
                        (0..count)
                            .map(|index| view! { <VariantRow vm=vm index=index removable={count > 1} /> })
                            .collect_view()
                    }}
                </div>

                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <button type="button" class="button button--secondary" on:click=back>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {move || match (vm.saving.get(), editing) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Product",
                            (false, false) => "Add Product",
                        }}
                    </button>
                </Flex>
            </form>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn FieldError(vm: ProductFormViewModel, field: ProductField) -> impl IntoView {
    move || vm.field_error(field).map(|m| view! { <p class="form__error pre-line">{m}</p> })
}

#[component]
#[allow(non_snake_case)]
fn TextField(
    vm: ProductFormViewModel,
    field: ProductField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}<span class="form__required">" *"</span></label>
            <input
                type="text"
                class="form__input"
                class:form__input--error=move || vm.field_error(field).is_some()
                placeholder=placeholder
                prop:value=move || vm.text(field)
                on:input=move |ev| vm.set_text(field, event_target_value(&ev))
            />
            <FieldError vm=vm field=field />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ImageField(vm: ProductFormViewModel, required: bool) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                "Product Image"
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <label
                class="image-drop"
                class:image-drop--error=move || vm.field_error(ProductField::Image).is_some()
                for="product-image"
            >
                <input
                    type="file"
                    id="product-image"
                    accept="image/*"
                    class="hidden"
                    on:change=move |ev| {
                        if let Some(file) = file_from_input(&ev) {
                            vm.select_image(file);
                        }
                    }
                />
                {move || match vm.preview.get() {
                    Some(url) => view! { <img class="image-drop__preview" src=url alt="Preview" /> }.into_any(),
                    None => view! {
                        <div>
                            <p class="text-muted">"Click to upload image"</p>
                            <p class="text-muted text-small">"PNG, JPG, GIF, WEBP up to 10MB"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </label>
            <FieldError vm=vm field=ProductField::Image />
        </div>
    }
}

fn variant_placeholder(field: VariantField) -> &'static str {
    match field {
        VariantField::SizeLabel => "e.g., 500ml",
        VariantField::BrimfulCapacity => "e.g., 530ml",
        VariantField::NeckSize => "e.g., 28mm",
        VariantField::TotalHeight => "e.g., 205mm",
        VariantField::Diameter => "e.g., 65mm",
        VariantField::LabelHeight => "e.g., 120mm",
        VariantField::StandardWeight => "e.g., 22g",
    }
}

#[component]
#[allow(non_snake_case)]
fn VariantRow(vm: ProductFormViewModel, index: usize, removable: bool) -> impl IntoView {
    let row = ProductField::Variant(index);
    view! {
        <div class="variant-card" class:variant-card--error=move || vm.field_error(row).is_some()>
            <div class="variant-card__header">
                <h3>{format!("Variant {}", index + 1)}</h3>
                {removable.then(|| view! {
                    <button
                        type="button"
                        class="button button--icon button--danger"
                        on:click=move |_| vm.remove_variant(index)
                    >
                        {icon("delete")}
                    </button>
                })}
            </div>
            <FieldError vm=vm field=row />
            <div class="variant-card__grid">
                {VariantField::ALL.into_iter().map(|field| view! {
                    <div class="form__group">
                        <label class="form__label">{field.label()}<span class="form__required">" *"</span></label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder=variant_placeholder(field)
                            prop:value=move || vm.variant_value(index, field)
                            on:input=move |ev| vm.set_variant_value(index, field, event_target_value(&ev))
                        />
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
