use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{use_notifications, NotificationCenter};
use crate::config;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::strings;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", strings::MISSING_FIELD)]
    MissingField,
    #[error("{}", strings::INVALID_EMAIL)]
    InvalidEmailFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormPayload {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Presence of every field first, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if Field::ALL.iter().any(|&f| self.get(f).is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmailFormat);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Invalid(ValidationError),
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitting,
    Rejected(ValidationError),
    /// A submission is already in flight.
    Busy,
}

/// What the submit control shows for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitButton {
    fn view(self) -> Html {
        html! {
            <button type="submit" class="submit-btn" disabled={self.disabled}>
                <span>{self.label}</span>
            </button>
        }
    }
}

struct FormModel {
    payload: FormPayload,
    state: FormState,
}

/// Drives one contact form: field edits, validation and the simulated send.
#[derive(Clone)]
pub struct FormSubmissionController {
    form: Rc<RefCell<FormModel>>,
    notifications: NotificationCenter,
    scheduler: Rc<dyn Scheduler>,
    on_change: Callback<()>,
}

impl FormSubmissionController {
    pub fn new(
        notifications: NotificationCenter,
        scheduler: Rc<dyn Scheduler>,
        on_change: Callback<()>,
    ) -> Self {
        Self {
            form: Rc::new(RefCell::new(FormModel {
                payload: FormPayload::default(),
                state: FormState::Idle,
            })),
            notifications,
            scheduler,
            on_change,
        }
    }

    pub fn payload(&self) -> FormPayload {
        self.form.borrow().payload.clone()
    }

    pub fn state(&self) -> FormState {
        self.form.borrow().state
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == FormState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            strings::SUBMIT_SENDING
        } else {
            strings::SUBMIT_LABEL
        }
    }

    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton {
            disabled: self.is_submitting(),
            label: self.submit_label(),
        }
    }

    pub fn edit(&self, field: Field, value: String) {
        self.form.borrow_mut().payload.set(field, value);
        self.on_change.emit(());
    }

    pub fn submit(&self) -> SubmitOutcome {
        let checked = {
            let mut form = self.form.borrow_mut();
            if form.state == FormState::Submitting {
                debug!("Submit ignored, already sending");
                return SubmitOutcome::Busy;
            }
            form.state = FormState::Validating;
            let checked = form.payload.validate();
            form.state = match checked {
                Ok(()) => FormState::Submitting,
                Err(e) => FormState::Invalid(e),
            };
            checked
        };

        match checked {
            Err(e) => {
                debug!("Contact form rejected: {:?}", e);
                self.notifications.error(e.to_string());
                self.form.borrow_mut().state = FormState::Idle;
                self.on_change.emit(());
                SubmitOutcome::Rejected(e)
            }
            Ok(()) => {
                info!("Sending contact form");
                self.on_change.emit(());
                let controller = self.clone();
                self.scheduler.schedule(
                    config::SUBMIT_LATENCY_MS,
                    Box::new(move || controller.finish()),
                );
                SubmitOutcome::Submitting
            }
        }
    }

    fn finish(&self) {
        {
            let mut form = self.form.borrow_mut();
            form.payload = FormPayload::default();
            form.state = FormState::Idle;
        }
        info!("Contact form sent");
        self.notifications.success(strings::SUBMIT_SUCCESS);
        self.on_change.emit(());
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifications = use_notifications();
    let trigger = use_force_update();
    let controller = use_memo(
        move |notifications| {
            notifications.clone().map(|center| {
                FormSubmissionController::new(
                    center,
                    Rc::new(BrowserScheduler),
                    Callback::from(move |_| trigger.force_update()),
                )
            })
        },
        notifications,
    );

    let Some(controller) = (*controller).clone() else {
        warn!("ContactForm rendered outside of a NotificationProvider");
        return html! {};
    };

    let payload = controller.payload();
    let submit_button = controller.submit_button();

    let on_input = |field: Field| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.edit(field, input.value());
        })
    };

    let on_message = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            controller.edit(Field::Message, input.value());
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.submit();
        })
    };

    html! {
        <form class="form" {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <input
                        type="text"
                        name="name"
                        placeholder="이름"
                        value={payload.name}
                        oninput={on_input(Field::Name)}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="text"
                        inputmode="email"
                        name="email"
                        placeholder="이메일"
                        value={payload.email}
                        oninput={on_input(Field::Email)}
                    />
                </div>
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="subject"
                    placeholder="제목"
                    value={payload.subject}
                    oninput={on_input(Field::Subject)}
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="5"
                    placeholder="메시지"
                    value={payload.message}
                    oninput={on_message}
                />
            </div>
            { submit_button.view() }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::Kind;
    use crate::scheduler::manual::ManualScheduler;

    fn setup() -> (FormSubmissionController, NotificationCenter, Rc<ManualScheduler>) {
        let clock = Rc::new(ManualScheduler::default());
        let center = NotificationCenter::new(clock.clone(), Callback::from(|_| ()));
        let controller =
            FormSubmissionController::new(center.clone(), clock.clone(), Callback::from(|_| ()));
        (controller, center, clock)
    }

    fn fill(controller: &FormSubmissionController, name: &str, email: &str, subject: &str, message: &str) {
        controller.edit(Field::Name, name.to_string());
        controller.edit(Field::Email, email.to_string());
        controller.edit(Field::Subject, subject.to_string());
        controller.edit(Field::Message, message.to_string());
    }

    #[test]
    fn email_pattern() {
        for bad in ["a@b", "ab.com", "a@@b.com", "a b@c.com", "@b.com", "a@.com", "a@b.", ""] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
        for good in ["user@example.com", "a@b.com", "a@b.c.d", "x.y@sub.domain.kr"] {
            assert!(is_valid_email(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn each_missing_field_is_rejected_once() {
        for missing in Field::ALL {
            let (controller, center, clock) = setup();
            fill(&controller, "A", "a@b.com", "S", "M");
            controller.edit(missing, String::new());

            assert_eq!(
                controller.submit(),
                SubmitOutcome::Rejected(ValidationError::MissingField)
            );
            assert_eq!(controller.state(), FormState::Idle);
            assert!(!controller.is_submitting());

            let shown = center.current().unwrap();
            assert_eq!(shown.kind, Kind::Error);
            assert_eq!(shown.message, strings::MISSING_FIELD);

            // Nothing was scheduled beyond the notification's own timers.
            clock.advance(2_000);
            assert_eq!(center.current().unwrap().id, shown.id);
            assert_ne!(controller.payload(), FormPayload::default());
        }
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let (controller, _, _) = setup();
        fill(&controller, "", "nope", "S", "M");
        assert_eq!(
            controller.submit(),
            SubmitOutcome::Rejected(ValidationError::MissingField)
        );
    }

    #[test]
    fn bad_email_gets_its_own_message() {
        for bad in ["a@b", "ab.com", "a@@b.com"] {
            let (controller, center, _) = setup();
            fill(&controller, "A", bad, "S", "M");
            assert_eq!(
                controller.submit(),
                SubmitOutcome::Rejected(ValidationError::InvalidEmailFormat)
            );
            let shown = center.current().unwrap();
            assert_eq!(shown.kind, Kind::Error);
            assert_eq!(shown.message, strings::INVALID_EMAIL);
            assert_eq!(controller.state(), FormState::Idle);
        }
    }

    #[test]
    fn valid_submission_end_to_end() {
        let (controller, center, clock) = setup();
        fill(&controller, "A", "a@b.com", "S", "M");

        assert_eq!(controller.submit(), SubmitOutcome::Submitting);
        assert!(controller.is_submitting());
        assert_eq!(controller.submit_label(), strings::SUBMIT_SENDING);
        assert!(center.current().is_none());

        clock.advance(1_999);
        assert!(controller.is_submitting());
        assert!(center.current().is_none());

        clock.advance(1);
        assert_eq!(controller.state(), FormState::Idle);
        assert_eq!(controller.submit_label(), strings::SUBMIT_LABEL);
        assert_eq!(controller.payload(), FormPayload::default());
        let shown = center.current().unwrap();
        assert_eq!(shown.kind, Kind::Success);
        assert_eq!(shown.message, strings::SUBMIT_SUCCESS);
    }

    #[test]
    fn submit_button_follows_sending_state() {
        let (controller, _, clock) = setup();
        let idle = SubmitButton {
            disabled: false,
            label: strings::SUBMIT_LABEL,
        };
        assert_eq!(controller.submit_button(), idle);

        fill(&controller, "A", "a@b.com", "S", "M");
        controller.submit();
        assert_eq!(
            controller.submit_button(),
            SubmitButton {
                disabled: true,
                label: strings::SUBMIT_SENDING,
            }
        );

        clock.advance(2_000);
        assert_eq!(controller.submit_button(), idle);

        // A rejected submit never disables the control.
        controller.submit();
        assert_eq!(controller.submit_button(), idle);
    }

    #[test]
    fn resubmit_while_sending_is_ignored() {
        let (controller, center, clock) = setup();
        fill(&controller, "A", "a@b.com", "S", "M");
        controller.submit();
        clock.advance(500);
        assert_eq!(controller.submit(), SubmitOutcome::Busy);

        clock.advance(1_500);
        assert_eq!(controller.state(), FormState::Idle);
        let first = center.current().unwrap().id;

        // No second completion arrives.
        clock.advance(2_000);
        assert_eq!(center.current().unwrap().id, first);
    }

    #[test]
    fn validation_error_displays_localized_message() {
        assert_eq!(ValidationError::MissingField.to_string(), strings::MISSING_FIELD);
        assert_eq!(ValidationError::InvalidEmailFormat.to_string(), strings::INVALID_EMAIL);
    }
}
