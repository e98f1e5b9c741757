use log::warn;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = lucide, js_name = createIcons)]
    fn create_icons() -> Result<(), JsValue>;
}

/// Turns every pending `<i data-lucide>` placeholder on the page into its
/// SVG. One call covers the whole document, so callers batch their DOM
/// changes and refresh once afterwards.
pub fn refresh() {
    if let Err(e) = create_icons() {
        warn!("Icon refresh skipped: {:?}", e);
    }
}

/// Refreshes icons after the first render and after every render where
/// `deps` changed.
#[hook]
pub fn use_icon_refresh<D>(deps: D)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            refresh();
            || ()
        },
        deps,
    );
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("w-6 h-6"))]
    pub class: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    // lucide swaps the <i> for an <svg> in place. The keyed inner span is
    // what yew replaces on a new glyph, never the detached <i>.
    html! {
        <span class="inline-flex">
            <span key={props.name.to_string()} class="inline-flex">
                <i data-lucide={props.name.clone()} class={props.class.to_string()}></i>
            </span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_class_defaults_to_nav_size() {
        let props = yew::props!(IconProps { name: "menu" });
        assert_eq!(props.class.as_str(), "w-6 h-6");
        assert_eq!(classes!(props.class.to_string()).to_string(), "w-6 h-6");
    }

    #[test]
    fn icon_class_is_overridable() {
        let props = yew::props!(IconProps { name: "send", class: "w-5 h-5" });
        assert_eq!(props.name.as_str(), "send");
        assert_eq!(classes!(props.class.to_string()).to_string(), "w-5 h-5");
    }
}
