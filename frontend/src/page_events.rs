//! Listeners that belong to the page as a whole rather than to a component:
//! uncaught-error logging, the keyboard-navigation focus cue, and pausing
//! decorative animations while the tab is hidden.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, ErrorEvent, HtmlElement, KeyboardEvent, PromiseRejectionEvent, VisibilityState};

pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";
pub const PAUSABLE_SELECTORS: &str = ".animate-float, .animate-pulse-slow";

pub fn animation_play_state(hidden: bool) -> &'static str {
    if hidden {
        "paused"
    } else {
        "running"
    }
}

/// Only Tab switches focus styling on; any other key leaves it as is.
pub fn starts_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}

fn set_play_state(document: &Document, state: &str) {
    let Ok(elements) = document.query_selector_all(PAUSABLE_SELECTORS) else {
        return;
    };
    for i in 0..elements.length() {
        if let Some(element) = elements.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            let _ = element.style().set_property("animation-play-state", state);
        }
    }
}

fn error_listeners(window: &web_sys::Window) -> [EventListener; 2] {
    [
        EventListener::new(window, "error", |event| {
            if let Some(event) = event.dyn_ref::<ErrorEvent>() {
                gloo_console::error!("TalentPro site error:", event.message(), event.error());
            }
        }),
        EventListener::new(window, "unhandledrejection", |event| {
            if let Some(event) = event.dyn_ref::<PromiseRejectionEvent>() {
                gloo_console::error!("TalentPro unhandled promise rejection:", event.reason());
            }
        }),
    ]
}

fn keyboard_listeners(document: &Document) -> [EventListener; 2] {
    let keydown_doc = document.clone();
    let mousedown_doc = document.clone();
    [
        EventListener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
            if starts_keyboard_navigation(&event.key()) {
                if let Some(body) = keydown_doc.body() {
                    let _ = body.class_list().add_1(KEYBOARD_NAV_CLASS);
                }
            }
        }),
        EventListener::new(document, "mousedown", move |_| {
            if let Some(body) = mousedown_doc.body() {
                let _ = body.class_list().remove_1(KEYBOARD_NAV_CLASS);
            }
        }),
    ]
}

fn visibility_listener(document: &Document) -> EventListener {
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", move |_| {
        let hidden = doc.visibility_state() == VisibilityState::Hidden;
        set_play_state(&doc, animation_play_state(hidden));
    })
}

/// Registers the page-wide listeners. They stay for the page's lifetime.
pub fn install() {
    let Some(window) = window() else { return };
    let mut listeners = Vec::with_capacity(5);
    listeners.extend(error_listeners(&window));
    if let Some(document) = window.document() {
        listeners.extend(keyboard_listeners(&document));
        listeners.push(visibility_listener(&document));
    }
    for listener in listeners {
        listener.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pages_pause_animations() {
        assert_eq!(animation_play_state(true), "paused");
        assert_eq!(animation_play_state(false), "running");
    }

    #[test]
    fn only_tab_enables_focus_cue() {
        assert!(starts_keyboard_navigation("Tab"));
        assert!(!starts_keyboard_navigation("Enter"));
        assert!(!starts_keyboard_navigation("Escape"));
    }
}
