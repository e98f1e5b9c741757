use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::forms::submission::{use_submitter, Ack, NewsletterPayload, SubmitError, Submission};
use crate::forms::validation::{validate_newsletter, NewsletterError};

pub const THANK_YOU: &str = "Thank you for subscribing! You will receive our latest updates.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub submitting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsletterAttempt {
    Rejected(NewsletterError),
    Busy,
    Start(NewsletterPayload),
}

pub enum NewsletterAction {
    Input(String),
    Started,
    Finished(bool),
}

impl NewsletterState {
    pub fn attempt(&self) -> NewsletterAttempt {
        if self.submitting {
            return NewsletterAttempt::Busy;
        }
        match validate_newsletter(&self.email) {
            Ok(()) => NewsletterAttempt::Start(NewsletterPayload { email: self.email.clone() }),
            Err(e) => NewsletterAttempt::Rejected(e),
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }
}

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NewsletterAction::Input(email) => Rc::new(Self { email, ..(*self).clone() }),
            NewsletterAction::Started => Rc::new(Self { submitting: true, ..(*self).clone() }),
            NewsletterAction::Finished(true) => Rc::new(Self::default()),
            NewsletterAction::Finished(false) => Rc::new(Self { submitting: false, ..(*self).clone() }),
        }
    }
}

/// Synchronous in-flight flag. The reducer's `submitting` only shows up on
/// the next render, so two submits inside one frame both see it unset.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    pub fn try_acquire(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }
}

pub fn completion_alert(result: &Result<Ack, SubmitError>) -> String {
    match result {
        Ok(Ack) => THANK_YOU.to_string(),
        Err(e) => format!("We could not subscribe you right now. {}", e),
    }
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let state = use_reducer(NewsletterState::default);
    let submitter = use_submitter();
    let guard = use_mut_ref(SubmitGuard::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(NewsletterAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.attempt() {
                NewsletterAttempt::Rejected(error) => alert(error.alert_text()),
                NewsletterAttempt::Busy => {}
                NewsletterAttempt::Start(payload) => {
                    if !guard.borrow_mut().try_acquire() {
                        return;
                    }
                    state.dispatch(NewsletterAction::Started);
                    let state = state.clone();
                    let submitter = submitter.clone();
                    let guard = guard.clone();
                    spawn_local(async move {
                        let result = submitter.0.submit(&Submission::Newsletter(payload)).await;
                        info!("Newsletter signup finished, ok: {}", result.is_ok());
                        guard.borrow_mut().release();
                        alert(&completion_alert(&result));
                        state.dispatch(NewsletterAction::Finished(result.is_ok()));
                    });
                }
            }
        })
    };

    html! {
        <form id="newsletter-form" class="flex flex-col sm:flex-row gap-3" novalidate=true {onsubmit}>
            <input
                type="email"
                placeholder="Enter your email"
                class="flex-1 px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white placeholder-white/60 focus:outline-none focus:ring-2 focus:ring-accent"
                value={state.email.clone()}
                {oninput}
            />
            <button
                type="submit"
                class="px-6 py-3 rounded-lg bg-accent text-accent-foreground font-semibold disabled:opacity-60"
                disabled={state.submitting}
            >
                { state.button_label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str) -> Rc<NewsletterState> {
        Rc::new(NewsletterState::default()).reduce(NewsletterAction::Input(email.into()))
    }

    #[test]
    fn empty_email_takes_the_alert_path() {
        let state = typed("");
        assert_eq!(state.attempt(), NewsletterAttempt::Rejected(NewsletterError::Empty));
        assert!(!state.submitting);
    }

    #[test]
    fn malformed_email_takes_the_alert_path() {
        assert_eq!(typed("hello").attempt(), NewsletterAttempt::Rejected(NewsletterError::Invalid));
    }

    #[test]
    fn valid_email_runs_to_reset() {
        let state = typed("a@b.co");
        let payload = match state.attempt() {
            NewsletterAttempt::Start(payload) => payload,
            other => panic!("expected start, got {:?}", other),
        };
        assert_eq!(payload.email, "a@b.co");

        let state = state.reduce(NewsletterAction::Started);
        assert!(state.submitting);
        assert_eq!(state.button_label(), "Subscribing...");
        assert_eq!(state.attempt(), NewsletterAttempt::Busy);

        assert_eq!(completion_alert(&Ok(Ack)), THANK_YOU);
        let state = state.reduce(NewsletterAction::Finished(true));
        assert_eq!(state.email, "");
        assert!(!state.submitting);
        assert_eq!(state.button_label(), "Subscribe");
    }

    #[test]
    fn guard_refuses_a_second_submit_until_released() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_acquire());
        // Same render snapshot: the reducer still says not submitting.
        assert!(matches!(typed("a@b.co").attempt(), NewsletterAttempt::Start(_)));
        assert!(!guard.try_acquire());
        guard.release();
        assert!(guard.try_acquire());
    }

    #[test]
    fn failed_signup_keeps_the_address() {
        let state = typed("a@b.co")
            .reduce(NewsletterAction::Started)
            .reduce(NewsletterAction::Finished(false));
        assert_eq!(state.email, "a@b.co");
        assert!(!state.submitting);

        let text = completion_alert(&Err(SubmitError::Rejected { status: 503 }));
        assert!(text.contains("status 503"));
    }
}
