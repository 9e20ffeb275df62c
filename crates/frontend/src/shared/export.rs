/// CSV export of list data with browser download
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV export
pub trait CsvExportable {
    /// Column headers, in order
    fn headers() -> Vec<&'static str>;

    /// Cell values, same order as [`CsvExportable::headers`]
    fn to_csv_row(&self) -> Vec<String>;
}

/// Comma-separated, every cell quoted, rows joined by `\n`.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let header = T::headers()
        .into_iter()
        .map(quote_cell)
        .collect::<Vec<_>>()
        .join(",");

    std::iter::once(header)
        .chain(data.iter().map(|item| {
            item.to_csv_row()
                .iter()
                .map(|cell| quote_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// `<entity>-<YYYY-MM-DD>.csv`
pub fn export_file_name(entity: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", entity, date.format("%Y-%m-%d"))
}

/// Builds the CSV and starts a download named after today's date.
pub fn export_to_csv<T: CsvExportable>(data: &[T], entity: &str) -> Result<(), String> {
    let content = build_csv(data);
    let filename = export_file_name(entity, chrono::Utc::now().date_naive());
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts a browser download of `blob` through a temporary anchor.
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lead {
        name: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Lead {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_every_cell_is_quoted() {
        let rows = [
            Lead { name: "Rajesh Kumar", note: "bulk, corporate" },
            Lead { name: "Priya", note: "said \"call me\"" },
        ];
        assert_eq!(
            build_csv(&rows),
            "\"Name\",\"Note\"\n\
             \"Rajesh Kumar\",\"bulk, corporate\"\n\
             \"Priya\",\"said \"\"call me\"\"\""
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        assert_eq!(build_csv::<Lead>(&[]), "\"Name\",\"Note\"");
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(export_file_name("quotations", date), "quotations-2024-12-01.csv");
    }
}
