use std::collections::BTreeMap;

use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::success_modal::SuccessModal;
use crate::forms::submission::{Ack, ContactPayload, SubmitError, Submission, SubmitterHandle};
use crate::forms::validation::{validate_contact, ContactField, ContactFields};
use crate::icons::{self, Icon};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
    Success,
    Failed(SubmitError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitLabel {
    Send,
    Sending,
    TryAgain,
}

impl SubmitLabel {
    pub fn text(self) -> &'static str {
        match self {
            SubmitLabel::Send => "Send Message",
            SubmitLabel::Sending => "Sending...",
            SubmitLabel::TryAgain => "Try Again",
        }
    }
}

pub fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-3 rounded-lg border bg-background focus:outline-none focus:ring-2 focus:ring-accent border-destructive"
    } else {
        "w-full px-4 py-3 rounded-lg border bg-background focus:outline-none focus:ring-2 focus:ring-accent border-input"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    fields: ContactFields,
    errors: BTreeMap<ContactField, String>,
    phase: ContactPhase,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: BTreeMap::new(),
            phase: ContactPhase::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[cfg(test)]
    pub fn phase(&self) -> &ContactPhase {
        &self.phase
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Typing into a field drops that field's error right away.
    pub fn input(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    /// Validates and, when everything passes, moves to `Submitting` and
    /// hands back the payload to send. Returns `None` on validation failure
    /// or while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.phase == ContactPhase::Submitting {
            return None;
        }
        self.errors.clear();
        let failures = validate_contact(&self.fields);
        if !failures.is_empty() {
            for failure in failures {
                self.errors.insert(failure.field, failure.message);
            }
            self.phase = ContactPhase::Idle;
            return None;
        }
        self.phase = ContactPhase::Submitting;
        Some(ContactPayload {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            subject: self.fields.subject.clone(),
            message: self.fields.message.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<Ack, SubmitError>) {
        if self.phase != ContactPhase::Submitting {
            return;
        }
        match result {
            Ok(Ack) => {
                self.fields = ContactFields::default();
                self.errors.clear();
                self.phase = ContactPhase::Success;
            }
            // Fields stay filled so the visitor can resubmit as is.
            Err(e) => self.phase = ContactPhase::Failed(e),
        }
    }

    pub fn dismiss_success(&mut self) -> bool {
        if self.phase != ContactPhase::Success {
            return false;
        }
        self.phase = ContactPhase::Idle;
        true
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn submit_label(&self) -> SubmitLabel {
        match self.phase {
            ContactPhase::Submitting => SubmitLabel::Sending,
            ContactPhase::Failed(_) => SubmitLabel::TryAgain,
            ContactPhase::Idle | ContactPhase::Success => SubmitLabel::Send,
        }
    }

    pub fn modal_open(&self) -> bool {
        self.phase == ContactPhase::Success
    }

    pub fn failure(&self) -> Option<&SubmitError> {
        match &self.phase {
            ContactPhase::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submitter: SubmitterHandle,
}

pub enum ContactMsg {
    Input(ContactField, String),
    Submit,
    Finished(Result<Ack, SubmitError>),
    CloseModal,
}

pub struct ContactForm {
    state: ContactFormState,
    // The submit button's icon is re-created whenever its label swaps.
    icons_dirty: bool,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ContactFormState::new(),
            icons_dirty: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => {
                self.state.input(field, value);
                true
            }
            ContactMsg::Submit => {
                let Some(payload) = self.state.begin_submit() else {
                    info!("Contact form has {} invalid field(s)", self.state.errors().count());
                    return true;
                };
                let submitter = ctx.props().submitter.clone();
                ctx.link().send_future(async move {
                    let result = submitter.0.submit(&Submission::Contact(payload)).await;
                    ContactMsg::Finished(result)
                });
                self.icons_dirty = true;
                true
            }
            ContactMsg::Finished(result) => {
                self.state.finish_submit(result);
                self.icons_dirty = true;
                true
            }
            ContactMsg::CloseModal => self.state.dismiss_success(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.icons_dirty {
            self.icons_dirty = false;
            icons::refresh();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let close = ctx.link().callback(|_| ContactMsg::CloseModal);
        let label = self.state.submit_label();

        html! {
            <>
                <form id="contact-form" class="space-y-6" novalidate=true {onsubmit}>
                    if let Some(failure) = self.state.failure() {
                        <div class="submit-failure rounded-lg border border-destructive bg-destructive/10 px-4 py-3 text-sm text-destructive" role="alert">
                            { failure.to_string() }
                            if failure.is_transient() {
                                { " Please check your connection and try again." }
                            }
                        </div>
                    }
                    <div class="grid md:grid-cols-2 gap-6">
                        { self.text_input(ctx, ContactField::Name, "text", "Full Name *") }
                        { self.text_input(ctx, ContactField::Email, "email", "Email Address *") }
                    </div>
                    { self.text_input(ctx, ContactField::Subject, "text", "Subject") }
                    { self.message_input(ctx) }
                    <button
                        id="submit-btn"
                        type="submit"
                        class="w-full inline-flex items-center justify-center gap-2 px-8 py-4 rounded-lg bg-accent text-accent-foreground font-semibold disabled:opacity-60"
                        disabled={self.state.submit_disabled()}
                    >
                        if label == SubmitLabel::Sending {
                            <div class="w-5 h-5 border-2 border-accent-foreground/30 border-t-accent-foreground rounded-full animate-spin"></div>
                        } else {
                            <Icon name="send" class="w-5 h-5" />
                        }
                        <span>{ label.text() }</span>
                    </button>
                </form>
                if self.state.modal_open() {
                    <SuccessModal on_close={close} />
                }
            </>
        }
    }
}

impl ContactForm {
    fn text_input(&self, ctx: &Context<Self>, field: ContactField, input_type: &'static str, label: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Input(field, input.value())
        });
        let error = self.state.error_for(field);

        html! {
            <div>
                <label for={field.form_name()} class="block text-sm font-medium mb-2">{ label }</label>
                <input
                    id={field.form_name()}
                    name={field.form_name()}
                    type={input_type}
                    required={field.is_required()}
                    class={field_class(error.is_some())}
                    value={self.state.fields().get(field).to_string()}
                    {oninput}
                />
                { Self::error_text(error) }
            </div>
        }
    }

    fn message_input(&self, ctx: &Context<Self>) -> Html {
        let field = ContactField::Message;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Input(field, input.value())
        });
        let error = self.state.error_for(field);

        html! {
            <div>
                <label for="message" class="block text-sm font-medium mb-2">{ "Message *" }</label>
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    required=true
                    class={field_class(error.is_some())}
                    value={self.state.fields().message.clone()}
                    {oninput}
                />
                { Self::error_text(error) }
            </div>
        }
    }

    fn error_text(error: Option<&str>) -> Html {
        match error {
            Some(message) => html! { <p class="form-error text-sm text-destructive mt-1">{ message }</p> },
            None => html! { <p class="form-error hidden"></p> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::Submitter;
    use crate::forms::validation::INVALID_EMAIL;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSubmitter {
        fail_with: Option<SubmitError>,
        seen: RefCell<Vec<Submission>>,
    }

    #[async_trait(?Send)]
    impl Submitter for FakeSubmitter {
        async fn submit(&self, submission: &Submission) -> Result<Ack, SubmitError> {
            self.seen.borrow_mut().push(submission.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(Ack),
            }
        }

        fn target(&self) -> String {
            "fake".to_string()
        }
    }

    fn fill(state: &mut ContactFormState, name: &str, email: &str, message: &str) {
        state.input(ContactField::Name, name.into());
        state.input(ContactField::Email, email.into());
        state.input(ContactField::Message, message.into());
    }

    #[test]
    fn empty_name_blocks_submission_with_single_error() {
        let mut state = ContactFormState::new();
        fill(&mut state, "", "a@b.co", "Hello");

        assert!(state.begin_submit().is_none());
        let errors: Vec<_> = state.errors().collect();
        assert_eq!(errors, vec![(ContactField::Name, "name is required")]);
        assert_eq!(state.phase(), &ContactPhase::Idle);
        assert!(!state.submit_disabled());
    }

    #[test]
    fn malformed_email_reports_format_error() {
        let mut state = ContactFormState::new();
        fill(&mut state, "Ada", "not-an-email", "Hello");

        assert!(state.begin_submit().is_none());
        assert_eq!(state.error_for(ContactField::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn whitespace_only_email_shows_format_error() {
        let mut state = ContactFormState::new();
        fill(&mut state, "Ada", "   ", "Hello");

        assert!(state.begin_submit().is_none());
        assert_eq!(state.error_for(ContactField::Email), Some(INVALID_EMAIL));
        assert_eq!(state.errors().count(), 1);
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut state = ContactFormState::new();
        assert!(state.begin_submit().is_none());
        assert!(state.error_for(ContactField::Name).is_some());
        assert!(state.error_for(ContactField::Message).is_some());

        state.input(ContactField::Name, "A".into());
        assert!(state.error_for(ContactField::Name).is_none());
        assert!(state.error_for(ContactField::Message).is_some());
    }

    #[test]
    fn resubmitting_clears_stale_errors() {
        let mut state = ContactFormState::new();
        fill(&mut state, "", "a@b.co", "Hello");
        state.begin_submit();
        state.fields.name = "Ada".into();
        assert!(state.begin_submit().is_some());
        assert_eq!(state.errors().count(), 0);
    }

    #[test]
    fn valid_submission_runs_to_success_and_resets() {
        let submitter = FakeSubmitter::default();
        let mut state = ContactFormState::new();
        fill(&mut state, "Ada", "a@b.co", "Hello");

        let payload = state.begin_submit().expect("valid form");
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), SubmitLabel::Sending);
        assert!(state.begin_submit().is_none(), "second submit while in flight");

        let result = block_on(submitter.submit(&Submission::Contact(payload)));
        state.finish_submit(result);

        assert_eq!(submitter.seen.borrow().len(), 1);
        assert_eq!(state.fields(), &ContactFields::default());
        assert!(state.modal_open());
        assert!(!state.submit_disabled());
        assert_eq!(state.submit_label(), SubmitLabel::Send);

        assert!(state.dismiss_success());
        assert!(!state.modal_open());
        assert!(!state.dismiss_success());
    }

    #[test]
    fn failed_submission_keeps_fields_and_offers_retry() {
        let submitter = FakeSubmitter {
            fail_with: Some(SubmitError::Timeout),
            ..Default::default()
        };
        let mut state = ContactFormState::new();
        fill(&mut state, "Ada", "a@b.co", "Hello");

        let payload = state.begin_submit().expect("valid form");
        state.finish_submit(block_on(submitter.submit(&Submission::Contact(payload))));

        assert_eq!(state.failure(), Some(&SubmitError::Timeout));
        assert_eq!(state.fields().name, "Ada");
        assert!(!state.modal_open());
        assert!(!state.submit_disabled());
        assert_eq!(state.submit_label(), SubmitLabel::TryAgain);

        assert!(state.begin_submit().is_some());
        assert!(state.failure().is_none());
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut state = ContactFormState::new();
        fill(&mut state, "Ada", "a@b.co", "Hello");
        state.finish_submit(Ok(Ack));
        assert_eq!(state.phase(), &ContactPhase::Idle);
        assert_eq!(state.fields().name, "Ada");
    }

    #[test]
    fn error_marker_follows_field_validity() {
        assert!(field_class(true).contains("border-destructive"));
        assert!(!field_class(false).contains("border-destructive"));
    }
}
