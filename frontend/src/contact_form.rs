use gloo_net::http::Request;
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

use crate::components::notification::Notice;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ServiceCategory {
    #[default]
    #[serde(rename = "Bridal Makeup")]
    BridalMakeup,
    #[serde(rename = "Celebrity Makeup")]
    CelebrityMakeup,
    #[serde(rename = "Model Shoots")]
    ModelShoots,
    #[serde(rename = "Photo Shoots")]
    PhotoShoots,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::BridalMakeup,
        ServiceCategory::CelebrityMakeup,
        ServiceCategory::ModelShoots,
        ServiceCategory::PhotoShoots,
        ServiceCategory::Other,
    ];

    /// Display label, also the value sent over the wire.
    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::BridalMakeup => "Bridal Makeup",
            ServiceCategory::CelebrityMakeup => "Celebrity Makeup",
            ServiceCategory::ModelShoots => "Model Shoots",
            ServiceCategory::PhotoShoots => "Photo Shoots",
            ServiceCategory::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

/// Payload for `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceCategory,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Field values plus the in-flight flag guarding against duplicate sends.
#[derive(Debug, Default, PartialEq)]
pub struct ContactForm {
    submission: ContactSubmission,
    submitting: bool,
}

impl ContactForm {
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    /// Option value the service dropdown should show.
    pub fn service_value(&self) -> &'static str {
        self.submission.service.label()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let submission = &mut self.submission;
        match field {
            ContactField::Name => submission.name = value,
            ContactField::Email => submission.email = value,
            ContactField::Phone => submission.phone = value,
            ContactField::Message => submission.message = value,
            ContactField::Service => {
                if let Some(service) = ServiceCategory::from_label(&value) {
                    submission.service = service;
                }
            }
        }
    }

    /// Marks the form in flight and hands back the payload to send, or
    /// `None` while a previous submission is still outstanding.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.submission.clone())
    }

    pub fn complete(&mut self, result: Result<(), SubmitError>) -> Notice {
        self.submitting = false;
        match result {
            Ok(()) => {
                debug!("Contact submission accepted");
                self.submission = ContactSubmission::default();
                Notice::success(SUCCESS_MESSAGE)
            }
            Err(err) => {
                error!("Error submitting contact form: {}", err);
                Notice::error(FAILURE_MESSAGE)
            }
        }
    }
}

pub fn contact_endpoint(backend_url: &str) -> String {
    format!("{}/api/contact", backend_url)
}

pub async fn send_submission(
    backend_url: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let response = Request::post(&contact_endpoint(backend_url))
        .json(submission)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::NoticeKind;
    use serde_json::json;

    fn jane() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Jane".to_string());
        form.set(ContactField::Email, "jane@example.com".to_string());
        form.set(ContactField::Phone, String::new());
        form.set(ContactField::Service, "Bridal Makeup".to_string());
        form.set(ContactField::Message, "Hi".to_string());
        form
    }

    #[test]
    fn payload_carries_all_five_fields_verbatim() {
        let mut form = jane();
        let payload = form.begin_submit().expect("idle form should submit");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "phone": "",
                "service": "Bridal Makeup",
                "message": "Hi",
            })
        );
    }

    #[test]
    fn second_submit_while_in_flight_yields_no_payload() {
        let mut form = jane();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn success_clears_fields_and_reenables_submit() {
        let mut form = jane();
        form.set(ContactField::Service, "Photo Shoots".to_string());
        form.begin_submit();

        let notice = form.complete(Ok(()));
        assert_eq!(notice, Notice::success(SUCCESS_MESSAGE));
        assert!(!form.is_submitting());
        assert_eq!(form.submission(), &ContactSubmission::default());
        assert_eq!(form.submission().service, ServiceCategory::BridalMakeup);
    }

    #[test]
    fn failure_keeps_entered_data_for_resubmission() {
        let mut form = jane();
        let sent = form.begin_submit().unwrap();

        let notice = form.complete(Err(SubmitError::Status(500)));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FAILURE_MESSAGE);
        assert!(!form.is_submitting());
        assert_eq!(form.submission(), &sent);

        assert_eq!(form.begin_submit(), Some(sent));
    }

    #[test]
    fn transport_and_status_errors_read_the_same_to_the_user() {
        let mut form = jane();
        form.begin_submit();
        let network = form.complete(Err(SubmitError::Transport("offline".to_string())));
        form.begin_submit();
        let rejected = form.complete(Err(SubmitError::Status(422)));
        assert_eq!(network, rejected);
    }

    #[test]
    fn dropdown_returns_to_default_after_success_despite_repicks() {
        let mut form = jane();
        for label in ["Photo Shoots", "Bridal Makeup", "Photo Shoots"] {
            form.set(ContactField::Service, label.to_string());
        }
        assert_eq!(form.service_value(), "Photo Shoots");

        form.begin_submit();
        form.complete(Ok(()));
        assert_eq!(form.service_value(), "Bridal Makeup");

        let next = form.begin_submit().unwrap();
        assert_eq!(next.service.label(), form.service_value());
    }

    #[test]
    fn unknown_service_label_is_ignored() {
        let mut form = ContactForm::default();
        form.set(ContactField::Service, "Model Shoots".to_string());
        form.set(ContactField::Service, "Tattoos".to_string());
        assert_eq!(form.submission().service, ServiceCategory::ModelShoots);
    }

    #[test]
    fn endpoint_appends_fixed_path_to_base() {
        assert_eq!(
            contact_endpoint("https://api.example.com"),
            "https://api.example.com/api/contact"
        );
        assert_eq!(contact_endpoint(""), "/api/contact");
    }
}
