use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::NAV_RECHECK_DELAY_MS;
use crate::icons::{use_icon_refresh, Icon};
use crate::motion::MotionPreference;
use crate::nav::{anchor_id, anchor_scroll_top, is_home_path, FrameThrottle, MenuState, NavController, NavVariant};
use crate::Route;

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Contact, "Contact"),
];

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Scrolls so the element with `id` sits just below the fixed nav. Does
/// nothing when no such element exists.
pub fn scroll_to_anchor(id: &str, motion: MotionPreference) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let nav_height = document
        .get_element_by_id("navigation")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top() as f64, nav_height as f64));
    options.set_behavior(if motion.reduced {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// An in-page `#id` link that glides to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = anchor_id(&href) {
                e.prevent_default();
                scroll_to_anchor(id, motion);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let route = use_route::<Route>();
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_else(|| "/".to_string());
    let is_home = is_home_path(&path);

    let controller = use_mut_ref(|| NavController::new(is_home));
    let variant = use_state_eq(|| controller.borrow().variant());
    let menu = use_state_eq(MenuState::default);

    // Scroll tracking: one check at mount, a late recheck on the home page,
    // then at most one check per animation frame while scrolling.
    {
        let controller = controller.clone();
        let variant = variant.clone();
        use_effect_with_deps(
            move |_| {
                let check: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(next) = controller.borrow_mut().observe(current_scroll_y()) {
                        variant.set(next);
                    }
                });
                check();

                let recheck = is_home.then(|| {
                    let check = check.clone();
                    Timeout::new(NAV_RECHECK_DELAY_MS, move || check())
                });

                let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
                let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
                let listener = window().map(|w| {
                    EventListener::new(&w, "scroll", move |_| {
                        if !throttle.borrow_mut().try_schedule() {
                            return;
                        }
                        let throttle = throttle.clone();
                        let check = check.clone();
                        let frame = request_animation_frame(move |_| {
                            throttle.borrow_mut().frame_done();
                            check();
                        });
                        *pending.borrow_mut() = Some(frame);
                    })
                });

                move || {
                    drop(listener);
                    drop(recheck);
                }
            },
            (),
        );
    }

    // Moving between pages can flip the look without any scrolling.
    {
        let controller = controller.clone();
        let variant = variant.clone();
        use_effect_with_deps(
            move |is_home| {
                if let Some(next) = controller.borrow_mut().set_home_page(*is_home) {
                    variant.set(next);
                }
                || ()
            },
            is_home,
        );
    }

    use_icon_refresh(*menu);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(MenuState::closed()))
    };

    let variant = *variant;
    let link_class = |target: &Route, palette: NavVariant| {
        let active = route.as_ref() == Some(target);
        classes!(
            "nav-link",
            "font-medium",
            "transition-colors",
            "hover:text-accent",
            palette.link_color(active),
            active.then_some("active")
        )
    };

    html! {
        <nav id="navigation" class={variant.nav_class()}>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="flex items-center gap-2">
                        <span class={classes!("text-xl", "font-bold", variant.chrome_color())}>{"TalentPro"}</span>
                    </Link<Route>>

                    <div class="hidden md:flex items-center gap-8">
                        { for NAV_ITEMS.iter().map(|(target, label)| html! {
                            <Link<Route> to={target.clone()} classes={link_class(target, variant)}>
                                { *label }
                            </Link<Route>>
                        }) }
                    </div>

                    <button
                        id="mobile-menu-button"
                        class={classes!("md:hidden", "p-2", variant.chrome_color())}
                        aria-label="Toggle menu"
                        aria-expanded={menu.open.to_string()}
                        onclick={toggle_menu}
                    >
                        <Icon name={menu.icon()} class="w-6 h-6" />
                    </button>
                </div>
            </div>

            <div id="mobile-menu" class={menu.menu_class()}>
                <div class="container mx-auto px-4 py-4 flex flex-col gap-4">
                    { for NAV_ITEMS.iter().map(|(target, label)| html! {
                        // The open menu sits on the page background, so it always
                        // uses the solid palette.
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={target.clone()} classes={link_class(target, NavVariant::Solid)}>
                                { *label }
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}
