use wasm_bindgen::JsCast;

use crate::api::ApiError;

/// Filename used for the anchor's `download` attribute; blank names fall back
/// to `fallback` and a `.csv` suffix is added when missing.
pub fn csv_filename(filename: &str, fallback: &str) -> String {
    let name = match filename.trim() {
        "" => fallback.trim(),
        name => name,
    };
    if name.to_ascii_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), ApiError> {
    let fail = |what: &str| ApiError::unknown(format!("CSV download failed: {what}"));

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| fail("blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail("object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| fail("no document"))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| fail("anchor"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| fail("anchor cast"))?;
    anchor.set_href(&url);
    anchor.set_download(&csv_filename(filename, "export.csv"));
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| fail("no body"))?
        .append_child(&anchor)
        .map_err(|_| fail("append"))?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("Downloaded {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::csv_filename;

    #[test]
    fn csv_filename_falls_back_and_adds_extension() {
        assert_eq!(csv_filename("contacts.csv", "export.csv"), "contacts.csv");
        assert_eq!(csv_filename("contacts", "export.csv"), "contacts.csv");
        assert_eq!(csv_filename("  ", "export.csv"), "export.csv");
        assert_eq!(csv_filename("REPORT.CSV", "export.csv"), "REPORT.CSV");
    }
}
