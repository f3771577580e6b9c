use log::warn;
use web_sys::window;

use crate::state::{Language, Preference, PreferenceChange, Theme};

/// Puts the theme class on `<html>` so the stylesheet's tokens switch over.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        root.set_class_name(theme.as_str());
    }
}

pub fn apply_language(language: Language) {
    if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        if let Err(err) = root.set_attribute("lang", language.as_str()) {
            warn!("Could not set lang on <html>: {:?}", err);
        }
    }
}

/// Preference subscriber keeping the document root in sync.
pub fn apply_change(change: PreferenceChange) {
    match change {
        PreferenceChange::Language(language) => apply_language(language),
        PreferenceChange::Theme(theme) => apply_theme(theme),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
