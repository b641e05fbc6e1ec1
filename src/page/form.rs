//! Contact form state and validation.

use regex::Regex;
use serde::Serialize;

/// Wire payload for one captured lead. Keys follow the studio's intake
/// convention: camelCase, with `service` omitted entirely when the visitor
/// left the selector alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Why a submission was refused before leaving the app.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    pub field: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Where the form currently is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Buffers behind the contact form inputs plus the submit phase.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub service: Option<String>,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate the buffers and assemble the lead. Buffers are untouched
    /// either way; whitespace around values is not sent.
    pub fn validate(&self) -> Result<LeadRecord, ValidationError> {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(ValidationError {
                message: "Please fill in your first name.".to_string(),
                field: "firstName",
            });
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(ValidationError {
                message: "Please fill in your last name.".to_string(),
                field: "lastName",
            });
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError {
                message: "Please fill in your email address.".to_string(),
                field: "email",
            });
        }
        if !email_is_valid(email) {
            return Err(ValidationError {
                message: "That email address doesn't look right.".to_string(),
                field: "email",
            });
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError {
                message: "Please tell us a little about your project.".to_string(),
                field: "message",
            });
        }

        Ok(LeadRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            service: self.service.clone(),
        })
    }

    /// Mark a submission as in flight. The render layer disables the submit
    /// control while this holds.
    pub fn begin_submit(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    /// Settle an attempt. Success clears the buffers; failure keeps them so
    /// the visitor can correct and retry. Either way the form returns to
    /// `Idle` and the submit control comes back.
    pub fn settle(&mut self, success: bool) {
        self.phase = FormPhase::Idle;
        if success {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.message.clear();
        self.service = None;
    }
}

/// Shape check: local@domain.tld, no whitespace anywhere, and a non-empty
/// local part ("@b.com" is refused).
fn email_is_valid(email: &str) -> bool {
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    pattern.is_match(email)
}
