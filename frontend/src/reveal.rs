use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::HERO_REVEAL_DELAY_MS;
use crate::motion::MotionPreference;

pub const REVEAL_SELECTORS: &str = ".stat-item, .card-hover, .timeline-container > div";
pub const REVEALED_CLASS: &str = "animate-fade-in-up";

// Reveal once a tenth of the element is in view, 50px before the viewport's
// bottom edge.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const DECLARED_DURATION: &str = "0.6s";

pub fn hidden_style(motion: MotionPreference) -> [(&'static str, String); 3] {
    let duration = motion.transition_duration(DECLARED_DURATION);
    [
        ("opacity", "0".to_string()),
        ("transform", "translateY(30px)".to_string()),
        (
            "transition",
            format!("opacity {duration} ease-out, transform {duration} ease-out"),
        ),
    ]
}

pub const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

pub fn hero_class(revealed: bool) -> &'static str {
    if revealed {
        "hero-content transition-all duration-1000"
    } else {
        "hero-content opacity-0 translate-y-10"
    }
}

fn reveal(target: &Element) {
    let _ = target.class_list().add_1(REVEALED_CLASS);
    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        let style = element.style();
        for (property, value) in SHOWN_STYLE {
            let _ = style.set_property(property, value);
        }
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_targets(motion: MotionPreference) -> Result<RevealObserver, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    // Revealed elements stay revealed.
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let targets = document.query_selector_all(REVEAL_SELECTORS)?;
    let hidden = hidden_style(motion);
    for i in 0..targets.length() {
        let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = element.style();
        for (property, value) in &hidden {
            let _ = style.set_property(property, value);
        }
        observer.observe(&element);
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Hides every reveal target rendered by the calling page and fades each one
/// in the first time it scrolls into view. Observation stops on unmount.
#[hook]
pub fn use_scroll_reveal() {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    use_effect_with_deps(
        move |_| {
            let observer = match observe_targets(motion) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    warn!("Scroll reveal unavailable: {:?}", e);
                    None
                }
            };
            move || drop(observer)
        },
        (),
    );
}

/// The hero is already on screen at load, so it fades in on a timer instead
/// of waiting for visibility.
#[hook]
pub fn use_hero_reveal() -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_REVEAL_DELAY_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_starts_below_and_transparent() {
        let style = hidden_style(MotionPreference::default());
        assert_eq!(style[0], ("opacity", "0".to_string()));
        assert_eq!(style[1], ("transform", "translateY(30px)".to_string()));
        assert_eq!(style[2].1, "opacity 0.6s ease-out, transform 0.6s ease-out");
    }

    #[test]
    fn reduced_motion_collapses_reveal_transition() {
        let style = hidden_style(MotionPreference::new(true));
        assert_eq!(style[2].1, "opacity 0.01ms ease-out, transform 0.01ms ease-out");
    }

    #[test]
    fn hero_drops_offset_classes_once_revealed() {
        assert!(hero_class(false).contains("opacity-0"));
        let shown = hero_class(true);
        assert!(!shown.contains("opacity-0") && !shown.contains("translate-y-10"));
        assert!(shown.contains("duration-1000"));
    }

    #[test]
    fn shown_style_resets_offset() {
        assert_eq!(SHOWN_STYLE, [("opacity", "1"), ("transform", "translateY(0)")]);
    }
}
