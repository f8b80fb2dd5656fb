//! Browser file-download helper for server-generated reports.
//!
//! Allocates one object URL for the payload, dispatches an anchor click, and
//! revokes the URL once the click has been delivered so the allocation never
//! outlives the download.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Save `bytes` as a user-agent download named `file_name`.
///
/// # Errors
///
/// Returns the underlying DOM error when the document is unavailable or any
/// DOM call fails.
#[cfg(feature = "csr")]
pub fn save_blob(bytes: &[u8], mime_type: &str, file_name: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
