//! Dark mode preference handling.
//!
//! The preference lives in `localStorage`; presentation is a `.dark-mode`
//! class on the `<html>` element that the stylesheet keys off. Outside a
//! browser these helpers are inert and report light mode.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "portfolio_dark";

/// Stored preference, if the visitor ever toggled the theme.
#[cfg(feature = "csr")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(raw == "true")
}

/// Whether the page should start dark: an explicit stored preference wins,
/// otherwise the system `prefers-color-scheme` query decides.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        if let Some(stored) = stored_preference() {
            return stored;
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let class_list = root.class_list();
            let _ = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
