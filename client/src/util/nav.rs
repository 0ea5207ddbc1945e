//! Full-page navigation.
//!
//! Pages share state only through storage, so moving between them reloads
//! the document and every page re-reads what it needs.

/// Navigate the window to `path`.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
