use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::icons::{use_icon_refresh, Icon};

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

/// Shown after the contact form goes through. Mounted only while open, so
/// the Escape listener lives exactly as long as the modal does.
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }
    use_icon_refresh(());

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="success-modal" class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4" role="dialog" aria-modal="true">
            <div class="bg-card rounded-2xl shadow-2xl max-w-md w-full p-8 text-center">
                <div class="w-16 h-16 mx-auto mb-6 rounded-full bg-accent/10 flex items-center justify-center text-accent">
                    <Icon name="check-circle" class="w-8 h-8" />
                </div>
                <h3 class="text-2xl font-bold mb-4">{"Message Sent!"}</h3>
                <p class="text-muted-foreground mb-6">
                    {"Thank you for reaching out. Our team will get back to you within 24 hours."}
                </p>
                <button onclick={close} class="px-6 py-3 rounded-lg bg-accent text-accent-foreground font-medium">
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
