//! Navigation appearance state.
//!
//! The nav bar has two looks: transparent over the home page hero, and solid
//! once the page is scrolled or on any other page. Everything here is plain
//! data; `components::nav` feeds it scroll positions and renders the class
//! sets it hands back.

use crate::config::{ANCHOR_SCROLL_GAP, NAV_SCROLL_THRESHOLD};

const NAV_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Solid,
    Transparent,
}

impl NavVariant {
    pub fn nav_class(self) -> String {
        match self {
            NavVariant::Solid => format!("{} bg-background/95 backdrop-blur-md shadow-lg py-2", NAV_BASE),
            NavVariant::Transparent => format!("{} bg-transparent py-4", NAV_BASE),
        }
    }

    pub fn link_color(self, active: bool) -> &'static str {
        match (self, active) {
            (NavVariant::Solid, true) => "text-accent",
            (NavVariant::Solid, false) => "text-foreground",
            (NavVariant::Transparent, _) => "text-white",
        }
    }

    /// Logo text and the mobile menu button share one color.
    pub fn chrome_color(self) -> &'static str {
        match self {
            NavVariant::Solid => "text-foreground",
            NavVariant::Transparent => "text-white",
        }
    }
}

pub fn is_home_path(path: &str) -> bool {
    path == "/" || path.ends_with('/') || path.contains("index.html")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub is_scrolled: bool,
    pub is_home_page: bool,
}

impl NavigationState {
    pub fn variant(&self) -> NavVariant {
        if self.is_scrolled || !self.is_home_page {
            NavVariant::Solid
        } else {
            NavVariant::Transparent
        }
    }
}

/// Holds the last derived scroll flag so repeated scroll events with no
/// change never reach the renderer.
#[derive(Debug)]
pub struct NavController {
    state: NavigationState,
}

impl NavController {
    pub fn new(is_home_page: bool) -> Self {
        Self {
            state: NavigationState { is_scrolled: false, is_home_page },
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn variant(&self) -> NavVariant {
        self.state.variant()
    }

    /// Returns the variant to render when `scroll_y` flips the scrolled
    /// flag, and `None` when nothing changed.
    pub fn observe(&mut self, scroll_y: f64) -> Option<NavVariant> {
        let should_be_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
        if should_be_scrolled == self.state.is_scrolled {
            return None;
        }
        self.state.is_scrolled = should_be_scrolled;
        Some(self.state.variant())
    }

    /// Route changes keep the scroll flag but may leave or enter the home page.
    pub fn set_home_page(&mut self, is_home_page: bool) -> Option<NavVariant> {
        if self.state.is_home_page == is_home_page {
            return None;
        }
        let before = self.state.variant();
        self.state.is_home_page = is_home_page;
        let after = self.state.variant();
        (before != after).then_some(after)
    }
}

/// Coalesces bursts of scroll events into one callback per animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// True when the caller should request a frame. False while one is
    /// already pending.
    pub fn try_schedule(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn frame_done(&mut self) {
        self.ticking = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            "x"
        } else {
            "menu"
        }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open {
            "md:hidden bg-background border-t border-border"
        } else {
            "md:hidden bg-background border-t border-border hidden"
        }
    }
}

pub fn anchor_scroll_top(target_offset_top: f64, nav_height: f64) -> f64 {
    target_offset_top - nav_height - ANCHOR_SCROLL_GAP
}

/// `"#contact"` → `Some("contact")`; anything that is not an in-page
/// anchor yields `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_exactly_when_scrolled_or_off_home() {
        for &home in &[true, false] {
            for &y in &[0.0, 10.0, 50.0, 50.5, 51.0, 400.0, 10_000.0] {
                let mut controller = NavController::new(home);
                controller.observe(y);
                let expected_solid = y > 50.0 || !home;
                let variant = controller.variant();
                assert_eq!(variant == NavVariant::Solid, expected_solid, "y={} home={}", y, home);
                assert_eq!(variant == NavVariant::Transparent, !expected_solid);
            }
        }
    }

    #[test]
    fn threshold_is_strictly_greater_than_fifty() {
        let mut controller = NavController::new(true);
        assert_eq!(controller.observe(50.0), None);
        assert_eq!(controller.observe(50.1), Some(NavVariant::Solid));
    }

    #[test]
    fn unchanged_observation_is_a_no_op() {
        let mut controller = NavController::new(true);
        assert_eq!(controller.observe(120.0), Some(NavVariant::Solid));
        assert_eq!(controller.observe(120.0), None);
        assert_eq!(controller.observe(300.0), None);
        assert_eq!(controller.observe(0.0), Some(NavVariant::Transparent));
        assert_eq!(controller.observe(0.0), None);
    }

    #[test]
    fn off_home_pages_report_solid_on_every_flip() {
        let mut controller = NavController::new(false);
        assert_eq!(controller.variant(), NavVariant::Solid);
        assert_eq!(controller.observe(80.0), Some(NavVariant::Solid));
        assert_eq!(controller.observe(0.0), Some(NavVariant::Solid));
    }

    #[test]
    fn leaving_home_while_at_top_turns_solid() {
        let mut controller = NavController::new(true);
        assert_eq!(controller.set_home_page(false), Some(NavVariant::Solid));
        assert_eq!(controller.set_home_page(false), None);
        assert_eq!(controller.set_home_page(true), Some(NavVariant::Transparent));
    }

    #[test]
    fn leaving_home_while_scrolled_changes_nothing_visible() {
        let mut controller = NavController::new(true);
        controller.observe(200.0);
        assert_eq!(controller.set_home_page(false), None);
        assert!(!controller.state().is_home_page);
    }

    #[test]
    fn link_palette_distinguishes_active_only_when_solid() {
        assert_eq!(NavVariant::Solid.link_color(true), "text-accent");
        assert_eq!(NavVariant::Solid.link_color(false), "text-foreground");
        assert_eq!(NavVariant::Transparent.link_color(true), "text-white");
        assert_eq!(NavVariant::Transparent.link_color(false), "text-white");
        assert_eq!(NavVariant::Solid.chrome_color(), "text-foreground");
        assert_eq!(NavVariant::Transparent.chrome_color(), "text-white");
    }

    #[test]
    fn nav_classes_carry_variant_specific_tokens() {
        let solid = NavVariant::Solid.nav_class();
        assert!(solid.contains("backdrop-blur-md") && solid.contains("shadow-lg") && solid.ends_with("py-2"));
        let transparent = NavVariant::Transparent.nav_class();
        assert!(transparent.contains("bg-transparent") && transparent.ends_with("py-4"));
        assert!(!transparent.contains("shadow-lg"));
    }

    #[test]
    fn home_path_detection() {
        assert!(is_home_path("/"));
        assert!(is_home_path("/index.html"));
        assert!(is_home_path("/site/"));
        assert!(!is_home_path("/services"));
        assert!(!is_home_path("/contact"));
    }

    #[test]
    fn throttle_allows_one_frame_at_a_time() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.try_schedule());
        assert!(!throttle.try_schedule());
        assert!(!throttle.try_schedule());
        throttle.frame_done();
        assert!(throttle.try_schedule());
    }

    #[test]
    fn menu_toggle_swaps_icon() {
        let menu = MenuState::default();
        assert_eq!(menu.icon(), "menu");
        let open = menu.toggled();
        assert_eq!(open.icon(), "x");
        assert!(!open.menu_class().ends_with("hidden"));
        assert_eq!(open.toggled(), MenuState::closed());
    }

    #[test]
    fn anchor_offset_subtracts_nav_and_gap() {
        assert_eq!(anchor_scroll_top(900.0, 64.0), 816.0);
        assert_eq!(anchor_id("#services"), Some("services"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/contact"), None);
    }
}
