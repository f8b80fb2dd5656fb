//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a numeric cell with exactly two fractional digits.
#[must_use]
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Selected-file size shown in the upload panel.
#[must_use]
pub fn kilobytes(size_bytes: f64) -> String {
    format!("{:.2} KB", size_bytes / 1024.0)
}

/// Render a server timestamp in the user's locale. Falls back to the raw
/// string off-browser or when the value does not parse as a date.
#[must_use]
pub fn locale_timestamp(raw: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        raw.to_owned()
    }
}
