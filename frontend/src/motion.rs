use log::info;
use web_sys::window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Duration every animation and transition collapses to under reduced motion.
pub const REDUCED_DURATION: &str = "0.01ms";

const REDUCED_MOTION_CSS: &str = r#"
    *,
    *::before,
    *::after {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
        scroll-behavior: auto !important;
    }

    .animate-float,
    .animate-bounce,
    .animate-pulse,
    .animate-spin {
        animation: none !important;
    }
"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    #[cfg(test)]
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    /// Reads the user's accessibility preference from the browser. Any
    /// failure to query it counts as "no preference".
    pub fn detect() -> Self {
        let reduced = window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        Self { reduced }
    }

    pub fn transition_duration<'a>(&self, declared: &'a str) -> &'a str {
        if self.reduced {
            REDUCED_DURATION
        } else {
            declared
        }
    }

    pub fn stylesheet(&self) -> Option<&'static str> {
        self.reduced.then_some(REDUCED_MOTION_CSS)
    }
}

/// Detects the preference and, when reduced motion is requested, appends the
/// override stylesheet to `<head>`.
pub fn install() -> MotionPreference {
    let preference = MotionPreference::detect();
    if let Some(css) = preference.stylesheet() {
        if let Some(document) = window().and_then(|w| w.document()) {
            if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
                style.set_text_content(Some(css));
                let _ = head.append_child(&style);
                info!("Reduced motion requested, animations disabled");
            }
        }
    }
    preference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_preference_forces_near_zero_durations() {
        let preference = MotionPreference::new(true);
        assert_eq!(preference.transition_duration("0.6s"), "0.01ms");
        assert_eq!(preference.transition_duration("1000ms"), "0.01ms");

        let css = preference.stylesheet().expect("stylesheet");
        assert!(css.contains("animation-duration: 0.01ms !important"));
        assert!(css.contains("transition-duration: 0.01ms !important"));
        assert!(css.contains(".animate-spin"));
    }

    #[test]
    fn default_preference_keeps_declared_durations() {
        let preference = MotionPreference::default();
        assert_eq!(preference.transition_duration("0.6s"), "0.6s");
        assert!(preference.stylesheet().is_none());
    }
}
