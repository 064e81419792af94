use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::notification::Notice;
use crate::contact_form::{
    send_submission, ContactField, ContactForm, ContactSubmission, ServiceCategory, SubmitError,
};
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub backend_url: AttrValue,
    pub on_notify: Callback<Notice>,
}

pub enum ContactMsg {
    Edit(ContactField, String),
    Submit,
    Finished(Result<(), SubmitError>),
}

/// What the component does in response to a message.
#[derive(Debug, PartialEq)]
enum ContactStep {
    Render,
    Ignore,
    Send(ContactSubmission),
    Notify(Notice),
}

fn step(form: &mut ContactForm, msg: ContactMsg) -> ContactStep {
    match msg {
        ContactMsg::Edit(field, value) => {
            form.set(field, value);
            ContactStep::Render
        }
        ContactMsg::Submit => match form.begin_submit() {
            Some(submission) => ContactStep::Send(submission),
            None => ContactStep::Ignore,
        },
        ContactMsg::Finished(result) => ContactStep::Notify(form.complete(result)),
    }
}

pub struct Contact {
    form: ContactForm,
    service_select: NodeRef,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            service_select: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match step(&mut self.form, msg) {
            ContactStep::Render => true,
            ContactStep::Ignore => false,
            ContactStep::Send(submission) => {
                let backend_url = ctx.props().backend_url.to_string();
                ctx.link().send_future(async move {
                    ContactMsg::Finished(send_submission(&backend_url, &submission).await)
                });
                true
            }
            ContactStep::Notify(notice) => {
                ctx.props().on_notify.emit(notice);
                true
            }
        }
    }

    // `selected` attributes stop driving a <select> once the user has picked
    // an option, so the shown value is pushed as a property after each render.
    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.service_select.cast::<HtmlSelectElement>() {
            let value = self.form.service_value();
            if select.value() != value {
                select.set_value(value);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submission = self.form.submission();
        let submitting = self.form.is_submitting();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let edit_input = |field: ContactField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Edit(field, input.value())
            })
        };
        let edit_service = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::Edit(ContactField::Service, select.value())
        });
        let edit_message = link.callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(ContactField::Message, textarea.value())
        });

        html! {
            <section id="contact" class="contact">
                <style>
                    {r#"
                        .contact {
                            padding: 8rem 0;
                            background: var(--luxury-white);
                        }
                        .contact-grid {
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                            gap: 5rem;
                            max-width: 72rem;
                            margin: 0 auto;
                        }
                        .contact-intro {
                            font-size: 1.125rem;
                            line-height: 1.7;
                            color: rgba(51, 51, 51, 0.8);
                            margin: 1.5rem 0 3rem;
                        }
                        .contact-detail {
                            display: flex;
                            align-items: center;
                            gap: 1rem;
                            margin-bottom: 1.5rem;
                        }
                        .contact-detail-icon {
                            width: 3rem;
                            height: 3rem;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            border-radius: 50%;
                            background: var(--luxury-accent);
                            color: var(--luxury-rose);
                        }
                        .contact-detail-label {
                            font-size: 0.875rem;
                            letter-spacing: 0.1em;
                            text-transform: uppercase;
                            color: var(--luxury-muted-text);
                        }
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                        .contact-form input,
                        .contact-form select,
                        .contact-form textarea {
                            width: 100%;
                            padding: 1rem 0;
                            background: transparent;
                            border: none;
                            border-bottom: 2px solid var(--luxury-rose);
                            color: var(--luxury-charcoal);
                            font: inherit;
                            transition: border-color 0.2s;
                        }
                        .contact-form textarea {
                            resize: none;
                        }
                        .contact-form input:focus,
                        .contact-form select:focus,
                        .contact-form textarea:focus {
                            outline: none;
                            border-bottom-color: var(--luxury-charcoal);
                        }
                        .contact-form ::placeholder {
                            color: rgba(166, 112, 112, 0.5);
                        }
                        .contact-submit {
                            width: 100%;
                            justify-content: center;
                        }
                        .contact-submit:disabled {
                            opacity: 0.5;
                            cursor: not-allowed;
                            transform: none;
                        }
                    "#}
                </style>
                <div class="section-inner contact-grid">
                    <div>
                        <p class="eyebrow" data-testid="contact-subtitle">{"Get In Touch"}</p>
                        <h2 class="section-title" data-testid="contact-title">{"Let's Create Magic Together"}</h2>
                        <p class="contact-intro">
                            {"Ready to transform your look? Reach out to discuss your vision and book your appointment. I can't wait to work with you."}
                        </p>
                        <div class="contact-detail" data-testid="contact-email">
                            <div class="contact-detail-icon"><IconView icon={Icon::Mail} size={20} /></div>
                            <div>
                                <p class="contact-detail-label">{"Email"}</p>
                                <p>{ CONTACT_EMAIL }</p>
                            </div>
                        </div>
                        <div class="contact-detail" data-testid="contact-phone">
                            <div class="contact-detail-icon"><IconView icon={Icon::Phone} size={20} /></div>
                            <div>
                                <p class="contact-detail-label">{"Phone"}</p>
                                <p>{ CONTACT_PHONE }</p>
                            </div>
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit} data-testid="contact-form">
                        <input
                            type="text"
                            name="name"
                            required=true
                            placeholder="Your Name"
                            value={submission.name.clone()}
                            oninput={edit_input(ContactField::Name)}
                            data-testid="contact-input-name"
                        />
                        <input
                            type="email"
                            name="email"
                            required=true
                            placeholder="Your Email"
                            value={submission.email.clone()}
                            oninput={edit_input(ContactField::Email)}
                            data-testid="contact-input-email"
                        />
                        <input
                            type="tel"
                            name="phone"
                            placeholder="Phone Number (Optional)"
                            value={submission.phone.clone()}
                            oninput={edit_input(ContactField::Phone)}
                            data-testid="contact-input-phone"
                        />
                        <select
                            name="service"
                            required=true
                            ref={self.service_select.clone()}
                            onchange={edit_service}
                            data-testid="contact-input-service"
                        >
                            { for ServiceCategory::ALL.into_iter().map(|service| html! {
                                <option value={service.label()} selected={service == submission.service}>
                                    { service.label() }
                                </option>
                            }) }
                        </select>
                        <textarea
                            name="message"
                            required=true
                            rows="4"
                            placeholder="Tell me about your vision..."
                            value={submission.message.clone()}
                            oninput={edit_message}
                            data-testid="contact-input-message"
                        />
                        <button
                            type="submit"
                            class="pill-button contact-submit"
                            disabled={submitting}
                            data-testid="contact-submit-btn"
                        >
                            { if submitting { "Sending..." } else { "Send Message" } }
                            <IconView icon={Icon::Send} size={18} />
                        </button>
                    </form>
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_form::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in [
            (ContactField::Name, "Jane"),
            (ContactField::Email, "jane@example.com"),
            (ContactField::Message, "Hi"),
        ] {
            let edited = step(&mut form, ContactMsg::Edit(field, value.to_string()));
            assert_eq!(edited, ContactStep::Render);
        }
        form
    }

    #[test]
    fn submit_while_in_flight_starts_no_second_request() {
        let mut form = filled_form();
        assert!(matches!(step(&mut form, ContactMsg::Submit), ContactStep::Send(_)));
        assert_eq!(step(&mut form, ContactMsg::Submit), ContactStep::Ignore);
        assert_eq!(step(&mut form, ContactMsg::Submit), ContactStep::Ignore);
    }

    #[test]
    fn finished_produces_exactly_one_notice() {
        let mut form = filled_form();
        step(&mut form, ContactMsg::Submit);

        let steps = vec![
            step(&mut form, ContactMsg::Finished(Ok(()))),
            step(&mut form, ContactMsg::Submit),
        ];
        let notices: Vec<&ContactStep> = steps
            .iter()
            .filter(|step| matches!(step, ContactStep::Notify(_)))
            .collect();
        assert_eq!(notices, vec![&ContactStep::Notify(Notice::success(SUCCESS_MESSAGE))]);
    }

    #[test]
    fn failed_request_notifies_and_allows_resubmission() {
        let mut form = filled_form();
        let ContactStep::Send(first) = step(&mut form, ContactMsg::Submit) else {
            panic!("idle form should send");
        };

        let failed = step(&mut form, ContactMsg::Finished(Err(SubmitError::Status(503))));
        assert_eq!(failed, ContactStep::Notify(Notice::error(FAILURE_MESSAGE)));
        assert_eq!(step(&mut form, ContactMsg::Submit), ContactStep::Send(first));
    }
}
