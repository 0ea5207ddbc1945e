//! Wall-clock access via the JS `Date` API.

/// Local hour of day in `0..24`. Outside the browser this is noon.
pub fn local_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

/// Human-readable local timestamp for order records, e.g. `16/10/2026, 18:42:05`.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string("en-GB", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
