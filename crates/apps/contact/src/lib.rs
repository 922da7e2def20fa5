//! Contact desktop app: a validated message form handed off to the host dispatch service.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;
use std::sync::LazyLock;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use platform_host::{ContactMessage, DispatchError, MessageDispatchService};
use regex::Regex;
use system_ui::prelude::*;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// How long a notification stays up before it dismisses itself.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Form problems caught before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    /// At least one field is blank after trimming.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactValidationError {
    /// Notification title.
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingFields => "Missing fields",
            Self::InvalidEmail => "Invalid email",
        }
    }
}

/// Trims every field and checks the form. Returns the message to dispatch.
///
/// # Errors
///
/// Returns [`ContactValidationError`] for blank fields or a malformed email.
pub fn validate_contact(form: &ContactMessage) -> Result<ContactMessage, ContactValidationError> {
    let message = ContactMessage {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        subject: form.subject.trim().to_string(),
        message: form.message.trim().to_string(),
    };
    if [&message.name, &message.email, &message.subject, &message.message]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ContactValidationError::MissingFields);
    }
    if !EMAIL_PATTERN.is_match(&message.email) {
        return Err(ContactValidationError::InvalidEmail);
    }
    Ok(message)
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent.
    Invalid(ContactValidationError),
    /// The collaborator accepted the message.
    Sent,
    /// The collaborator failed.
    Failed(DispatchError),
}

/// Toast content for a [`SubmitOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Toast title.
    pub title: String,
    /// Toast body.
    pub description: String,
    /// Toast severity.
    pub tone: ToastTone,
}

impl SubmitOutcome {
    /// Notification shown to the user.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Invalid(err) => Notice {
                title: err.title().to_string(),
                description: err.to_string(),
                tone: ToastTone::Error,
            },
            Self::Sent => Notice {
                title: "Message sent!".to_string(),
                description: "Thank you for reaching out. I'll get back to you soon!".to_string(),
                tone: ToastTone::Info,
            },
            Self::Failed(err) => Notice {
                title: "Failed to send".to_string(),
                description: err.user_message().unwrap_or(GENERIC_FAILURE).to_string(),
                tone: ToastTone::Error,
            },
        }
    }

    /// Only a successful send clears the form; failures keep it for a retry.
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// The single notification slot of the form.
///
/// Every shown notice gets a new generation; an expiry only clears the notice it was scheduled
/// for, so a timer left over from a replaced notice never hides the newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    /// Replaces the visible notice and returns the generation to expire it with.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
        self.generation
    }

    /// Clears the notice if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }

    /// Clears whatever is shown.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Visible notice, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Validates and dispatches a form.
pub async fn submit_contact(
    service: &dyn MessageDispatchService,
    form: &ContactMessage,
) -> SubmitOutcome {
    let message = match validate_contact(form) {
        Ok(message) => message,
        Err(err) => return SubmitOutcome::Invalid(err),
    };
    match service.send(&message).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => {
            logging::error!("contact message dispatch failed: {err}");
            SubmitOutcome::Failed(err)
        }
    }
}

#[derive(Clone, Copy)]
struct ContactLink {
    icon: IconName,
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        icon: IconName::ExternalLink,
        label: "GitHub",
        value: "github.com",
        href: "https://github.com/",
    },
    ContactLink {
        icon: IconName::ExternalLink,
        label: "LinkedIn",
        value: "linkedin.com",
        href: "https://www.linkedin.com/",
    },
    ContactLink {
        icon: IconName::Mail,
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
];

fn form_field(
    form: RwSignal<ContactMessage>,
    read: fn(&ContactMessage) -> &String,
) -> Signal<String> {
    Signal::derive(move || form.with(|form| read(form).clone()))
}

#[component]
/// Contact window contents.
pub fn ContactApp(
    /// Host dispatch collaborator.
    dispatch: Rc<dyn MessageDispatchService>,
) -> impl IntoView {
    let form = create_rw_signal(ContactMessage::default());
    let sending = create_rw_signal(false);
    let notice = create_rw_signal(NoticeSlot::default());
    let notice_timer = store_value(None::<TimeoutHandle>);
    let dispatch = store_value(dispatch);

    let clear_notice_timer = move || {
        if let Some(handle) = notice_timer.try_get_value().flatten() {
            handle.clear();
        }
        let _ = notice_timer.try_set_value(None);
    };
    on_cleanup(clear_notice_timer);

    let show_notice = move |next: Notice| {
        clear_notice_timer();
        let mut generation = 0;
        if notice.try_update(|slot| generation = slot.show(next)).is_none() {
            return;
        }
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                let _ = notice.try_update(|slot| slot.expire(generation));
            },
            NOTICE_DURATION,
        ) {
            let _ = notice_timer.try_set_value(Some(handle));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        let service = dispatch.get_value();
        sending.set(true);
        spawn_local(async move {
            let outcome = submit_contact(service.as_ref(), &snapshot).await;
            if outcome.clears_form() {
                let _ = form.try_set(ContactMessage::default());
            }
            show_notice(outcome.notice());
            let _ = sending.try_set(false);
        });
    };

    view! {
        <div class="app-shell app-contact-shell">
            <Stack gap=LayoutGap::Lg>
                <Heading>"Get in touch"</Heading>
                <Stack gap=LayoutGap::Sm ui_slot="contact-links">
                    {CONTACT_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="contact-link" href=link.href target="_blank" rel="noopener noreferrer">
                                    <Icon icon=link.icon size=IconSize::Sm />
                                    <Text role=TextRole::Label>{link.label}</Text>
                                    <Text tone=TextTone::Secondary>{link.value}</Text>
                                </a>
                            }
                        })
                        .collect_view()}
                </Stack>

                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <Stack gap=LayoutGap::Md>
                        <Grid columns=2>
                            <FieldGroup title="Name">
                                <TextField
                                    placeholder="Your name"
                                    autocomplete="name"
                                    value=form_field(form, |form| &form.name)
                                    disabled=sending
                                    on_input=Callback::new(move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|form| form.name = value);
                                    })
                                />
                            </FieldGroup>
                            <FieldGroup title="Email">
                                <TextField
                                    placeholder="you@example.com"
                                    autocomplete="email"
                                    input_type="email"
                                    value=form_field(form, |form| &form.email)
                                    disabled=sending
                                    on_input=Callback::new(move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|form| form.email = value);
                                    })
                                />
                            </FieldGroup>
                        </Grid>
                        <FieldGroup title="Subject">
                            <TextField
                                placeholder="What's this about?"
                                value=form_field(form, |form| &form.subject)
                                disabled=sending
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|form| form.subject = value);
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Message">
                            <TextArea
                                placeholder="Your message..."
                                rows=5
                                value=form_field(form, |form| &form.message)
                                disabled=sending
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|form| form.message = value);
                                })
                            />
                        </FieldGroup>
                        <Button
                            button_type="submit"
                            variant=ButtonVariant::Primary
                            disabled=sending
                            leading_icon=IconName::Send
                        >
                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                        </Button>
                    </Stack>
                </form>
            </Stack>

            <ToastRegion>
                {move || {
                    notice
                        .with(|slot| slot.current().cloned())
                        .map(|current| {
                            view! {
                                <Toast
                                    title=current.title
                                    description=current.description
                                    tone=current.tone
                                    on_dismiss=Callback::new(move |_| {
                                        clear_notice_timer();
                                        notice.update(NoticeSlot::dismiss);
                                    })
                                />
                            }
                        })
                }}
            </ToastRegion>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryMessageDispatchService, NoopMessageDispatchService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn form() -> ContactMessage {
        ContactMessage {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com ".to_string(),
            subject: "Engines".to_string(),
            message: "Let's talk about the analytical engine.".to_string(),
        }
    }

    #[test]
    fn validation_trims_every_field() {
        let message = validate_contact(&form()).expect("valid");
        assert_eq!(message.name, "Ada Lovelace");
        assert_eq!(message.email, "ada@example.com");
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut blank = form();
        blank.subject = "   ".to_string();
        assert_eq!(
            validate_contact(&blank),
            Err(ContactValidationError::MissingFields)
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com", "a@b@c.d"] {
            let mut bad = form();
            bad.email = email.to_string();
            assert_eq!(
                validate_contact(&bad),
                Err(ContactValidationError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn invalid_form_is_never_dispatched() {
        let service = MemoryMessageDispatchService::default();
        let mut bad = form();
        bad.email = "nope".to_string();

        let outcome = block_on(submit_contact(&service, &bad));

        assert_eq!(outcome, SubmitOutcome::Invalid(ContactValidationError::InvalidEmail));
        assert_eq!(outcome.notice().title, "Invalid email");
        assert_eq!(outcome.notice().description, "Please enter a valid email address.");
        assert!(service.sent().is_empty());
    }

    #[test]
    fn successful_send_clears_form() {
        let service = MemoryMessageDispatchService::default();
        let outcome = block_on(submit_contact(&service, &form()));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(outcome.clears_form());
        assert_eq!(outcome.notice().title, "Message sent!");
        assert_eq!(service.sent().len(), 1);
        assert_eq!(service.sent()[0].name, "Ada Lovelace");
    }

    #[test]
    fn failure_surfaces_collaborator_message_and_keeps_form() {
        let service = MemoryMessageDispatchService::default();
        service.fail_with(DispatchError::Rejected("Daily limit reached".to_string()));

        let outcome = block_on(submit_contact(&service, &form()));

        assert!(!outcome.clears_form());
        let notice = outcome.notice();
        assert_eq!(notice.title, "Failed to send");
        assert_eq!(notice.description, "Daily limit reached");
        assert_eq!(notice.tone, ToastTone::Error);
    }

    #[test]
    fn notice_expires_on_its_own_timer() {
        let mut slot = NoticeSlot::default();
        let generation = slot.show(SubmitOutcome::Sent.notice());
        assert_eq!(slot.current().map(|notice| notice.title.as_str()), Some("Message sent!"));

        slot.expire(generation);

        assert_eq!(slot.current(), None);
    }

    #[test]
    fn stale_expiry_keeps_the_newer_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(SubmitOutcome::Invalid(ContactValidationError::MissingFields).notice());
        let second = slot.show(SubmitOutcome::Sent.notice());

        slot.expire(first);
        assert_eq!(slot.current().map(|notice| notice.title.as_str()), Some("Message sent!"));

        slot.expire(second);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn manual_dismiss_clears_before_expiry() {
        let mut slot = NoticeSlot::default();
        let generation = slot.show(SubmitOutcome::Sent.notice());
        slot.dismiss();
        assert_eq!(slot.current(), None);
        slot.expire(generation);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn failure_without_message_uses_generic_text() {
        let outcome = block_on(submit_contact(&NoopMessageDispatchService, &form()));
        assert_eq!(outcome, SubmitOutcome::Failed(DispatchError::Unavailable));
        assert_eq!(outcome.notice().description, GENERIC_FAILURE);
    }
}
