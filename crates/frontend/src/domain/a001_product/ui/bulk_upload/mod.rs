//! Bulk product upload from a CSV or Excel sheet
//!
//! The file is only pre-checked here (type and size); rows are parsed and
//! validated by the backend, which returns a summary with per-row detail.

use crate::shared::file_select::{file_from_drop, file_from_input, SelectedFile};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::store::AppStore;
use contracts::shared::file_info::FileInfo;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_bulk_upload::{
    precheck_bulk_file, require_selected, BulkUpload, BulkUploadReport, ACCEPT_ATTRIBUTE,
};
use leptos::ev::DragEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Column layout hints shown above the drop zone
const INSTRUCTIONS: [&str; 4] = [
    "Columns: Name, Material, Cap Type, Description, Size Label, Brimful Capacity, Neck Size, Total Height, Diameter, Label Height, Standard Weight, Image URL",
    "Multiple variants for the same product should be on separate rows",
    "Existing products with the same name are updated",
    "Accepted formats: .csv, .xls, .xlsx (max 5MB)",
];

#[component]
#[allow(non_snake_case)]
pub fn BulkUploadModal(store: AppStore, on_close: Callback<()>) -> impl IntoView {
    let selected = RwSignal::new_local(None::<SelectedFile>);
    let selected_info = RwSignal::new(None::<FileInfo>);
    let error = RwSignal::new(None::<String>);
    let report = RwSignal::new(None::<BulkUploadReport>);
    let uploading = RwSignal::new(false);
    let dragging = RwSignal::new(false);

    // Same gate for the file input and drag-and-drop
    let accept_file = move |file: Option<SelectedFile>| {
        let Some(file) = file else {
            return;
        };
        report.set(None);
        match precheck_bulk_file(file.info()) {
            Ok(()) => {
                error.set(None);
                selected_info.set(Some(file.info().clone()));
                selected.set(Some(file));
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                selected_info.set(None);
                selected.set(None);
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        accept_file(file_from_drop(&ev));
    };

    let handle_upload = move |_| {
        let info = selected_info.get_untracked();
        if let Err(e) = require_selected(info.as_ref()) {
            error.set(Some(e.to_string()));
            return;
        }
        let Some(file) = selected.get_untracked() else {
            return;
        };

        uploading.set(true);
        error.set(None);
        spawn_local(async move {
            log::info!("{}: uploading {}", BulkUpload::full_name(), file.name());
            match store.bulk_upload(file).await {
                Ok(result) => {
                    report.set(Some(result.report()));
                    selected.set(None);
                    selected_info.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    view! {
        <Modal title=BulkUpload::display_name().to_string() on_close=on_close>
            <div class="bulk-upload">
                <div class="info-box">
                    <h4 class="info-box__title">"File format"</h4>
                    <ul class="info-box__list">
                        {INSTRUCTIONS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>

                <div
                    class="drop-zone"
                    class:drop-zone--active=move || dragging.get()
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        dragging.set(true);
                    }
                    on:dragleave=move |_| dragging.set(false)
                    on:drop=on_drop
                >
                    {icon("upload")}
                    <p>"Drop your file here or click to browse"</p>
                    <input
                        type="file"
                        accept=ACCEPT_ATTRIBUTE
                        on:change=move |ev| accept_file(file_from_input(&ev))
                    />
                    {move || selected_info.get().map(|info| view! {
                        <div class="drop-zone__file">
                            {icon("file")}
                            <span>{info.name.clone()}</span>
                            <span class="text-muted">{format!("({})", info.size_label())}</span>
                        </div>
                    })}
                </div>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                {move || report.get().map(|r| view! { <UploadReport report=r /> })}

                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_upload
                        disabled=Signal::derive(move || uploading.get() || selected_info.get().is_none())
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}

#[component]
#[allow(non_snake_case)]
fn UploadReport(report: BulkUploadReport) -> impl IntoView {
    let BulkUploadReport {
        headline,
        counts,
        failed_products,
        skipped_rows,
    } = report;

    view! {
        <div class="upload-report">
            <h4 class="upload-report__title">{headline}</h4>
            <div class="upload-report__counts">
                {counts.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            </div>
            {failed_products.map(|lines| view! {
                <div class="upload-report__block upload-report__block--error">
                    <h5>"Failed Products"</h5>
                    <ul>{lines.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}</ul>
                </div>
            })}
            {skipped_rows.map(|lines| view! {
                <div class="upload-report__block upload-report__block--warning">
                    <h5>"Skipped Rows"</h5>
                    <ul>{lines.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}</ul>
                </div>
            })}
        </div>
    }
}
