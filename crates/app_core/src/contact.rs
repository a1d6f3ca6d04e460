//! Contact form
//!
//! The form is posted as-is to an external form-handling service. Besides
//! "every visible field is required" nothing is validated, the response is
//! only logged and nothing is retried.

use crate::AppError;
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;
use thiserror::Error;

/// Name of the hidden honeypot field
pub const HONEYPOT_FIELD: &str = "bot-field";

/// Fields the user fills in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot; never shown, a person leaves it empty
    pub bot_field: String,
}

/// A required field left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing required fields: {0:?}")]
    Missing(Vec<ContactField>),
}

impl ContactForm {
    /// Fields that are still empty
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(ContactField::Name);
        }
        if self.email.is_empty() {
            missing.push(ContactField::Email);
        }
        if self.message.is_empty() {
            missing.push(ContactField::Message);
        }
        missing
    }

    /// Check required fields and build the submission
    pub fn submission(&self, form_name: &str) -> Result<ContactSubmission, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::Missing(missing));
        }

        Ok(ContactSubmission {
            fields: vec![
                ("form-name".to_string(), form_name.to_string()),
                (HONEYPOT_FIELD.to_string(), self.bot_field.clone()),
                ("name".to_string(), self.name.clone()),
                ("email".to_string(), self.email.clone()),
                ("message".to_string(), self.message.clone()),
            ],
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ordered form fields ready to be posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: Vec<(String, String)>,
}

impl ContactSubmission {
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Delivers a submission to the form-handling service
pub trait FormTransport: Send + Sync {
    /// Returns the HTTP status code of the response
    fn submit(&self, submission: &ContactSubmission) -> Result<u16, AppError>;
}

/// Posts submissions as `application/x-www-form-urlencoded`
pub struct HttpFormTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpFormTransport {
    pub fn new(endpoint: &str) -> Result<Self, AppError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| AppError::Init(format!("HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl HttpFormTransport {
    /// The POST request for `submission`, urlencoded in field order
    pub fn request(&self, submission: &ContactSubmission) -> reqwest::blocking::RequestBuilder {
        self.client.post(&self.endpoint).form(submission.fields())
    }
}

impl FormTransport for HttpFormTransport {
    fn submit(&self, submission: &ContactSubmission) -> Result<u16, AppError> {
        let response = self
            .request(submission)
            .send()
            .map_err(|e| AppError::Contact(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}

/// Outcome of a background submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(u16),
    Failed(String),
}

/// Runs submissions off the UI thread and hands the outcome back
pub struct ContactSender {
    transport: std::sync::Arc<dyn FormTransport>,
    tx: Sender<SubmitOutcome>,
    rx: Receiver<SubmitOutcome>,
    in_flight: bool,
}

impl ContactSender {
    pub fn new(transport: std::sync::Arc<dyn FormTransport>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            transport,
            tx,
            rx,
            in_flight: false,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    /// Start sending; ignored while a previous submission is in flight
    pub fn send(&mut self, submission: ContactSubmission) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;

        let transport = std::sync::Arc::clone(&self.transport);
        let tx = self.tx.clone();
        rayon::spawn(move || {
            let outcome = match transport.submit(&submission) {
                Ok(status) => {
                    tracing::info!(status, "Contact form submitted");
                    SubmitOutcome::Sent(status)
                }
                Err(e) => {
                    tracing::warn!("Contact form submission failed: {}", e);
                    SubmitOutcome::Failed(e.to_string())
                }
            };
            let _ = tx.send(outcome);
        });
        true
    }

    /// Non-blocking check for a finished submission
    pub fn poll(&mut self) -> Option<SubmitOutcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.in_flight = false;
        Some(outcome)
    }

    /// Block until the in-flight submission finishes
    pub fn wait(&mut self, timeout: Duration) -> Option<SubmitOutcome> {
        let outcome = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = false;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Eleni".into(),
            email: "eleni@example.com".into(),
            message: "A portrait session in Plaka?".into(),
            bot_field: String::new(),
        }
    }

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<ContactSubmission>>,
    }

    impl FormTransport for Recording {
        fn submit(&self, submission: &ContactSubmission) -> Result<u16, AppError> {
            self.seen.lock().push(submission.clone());
            Ok(200)
        }
    }

    struct Failing;

    impl FormTransport for Failing {
        fn submit(&self, _submission: &ContactSubmission) -> Result<u16, AppError> {
            Err(AppError::Contact("connection refused".into()))
        }
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.email.clear();
        form.message.clear();
        assert_eq!(
            form.submission("contact"),
            Err(ContactError::Missing(vec![ContactField::Email, ContactField::Message]))
        );
        assert_eq!(ContactForm::default().missing_fields().len(), 3);
    }

    #[test]
    fn test_submission_fields() {
        let submission = filled().submission("contact").unwrap();
        let keys: Vec<&str> = submission.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["form-name", "bot-field", "name", "email", "message"]);
        assert_eq!(submission.get("form-name"), Some("contact"));
        assert_eq!(submission.get(HONEYPOT_FIELD), Some(""));
    }

    #[test]
    fn test_sender_delivers_in_background() {
        let transport = Arc::new(Recording::default());
        let mut sender = ContactSender::new(transport.clone());

        assert!(sender.send(filled().submission("contact").unwrap()));
        assert!(sender.is_sending());
        // A second click while sending is ignored
        assert!(!sender.send(filled().submission("contact").unwrap()));

        let outcome = sender.wait(Duration::from_secs(5));
        assert_eq!(outcome, Some(SubmitOutcome::Sent(200)));
        assert!(!sender.is_sending());
        assert_eq!(transport.seen.lock().len(), 1);
    }

    #[test]
    fn test_sender_reports_failure() {
        let mut sender = ContactSender::new(Arc::new(Failing));
        sender.send(filled().submission("contact").unwrap());
        match sender.wait(Duration::from_secs(5)) {
            Some(SubmitOutcome::Failed(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_http_body_is_urlencoded() {
        let transport = HttpFormTransport::new("https://forms.example.com/").unwrap();
        let form = ContactForm {
            name: "Eleni K".into(),
            email: "eleni@example.com".into(),
            message: "Prints & frames?".into(),
            bot_field: String::new(),
        };
        let request = transport
            .request(&form.submission("contact").unwrap())
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "form-name=contact&bot-field=&name=Eleni+K&email=eleni%40example.com&message=Prints+%26+frames%3F"
        );
    }
}
