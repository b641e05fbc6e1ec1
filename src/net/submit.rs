//! Lead transports — simulated and HTTP delivery of contact-form leads.

use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use crate::page::form::LeadRecord;

const USER_AGENT: &str = concat!("MeridianKiosk/", env!("CARGO_PKG_VERSION"));

/// Acknowledgement from a transport that accepted a lead.
#[derive(Debug, Clone)]
pub struct LeadReceipt {
    pub email: String,
    pub captured_at: DateTime<Utc>,
}

/// Error from a lead submission
#[derive(Debug, Clone)]
pub struct SubmitError {
    pub message: String,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Where a validated lead goes. Implementations block; callers run them on
/// a worker thread.
pub trait LeadTransport: Send + Sync {
    fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, SubmitError>;
}

/// Stand-in transport for running without a real intake endpoint. Holds
/// the caller for a fixed delay, then acknowledges (or fails, when built
/// with `failing`).
pub struct SimulatedTransport {
    delay: Duration,
    fail_with: Option<String>,
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
            fail_with: None,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            fail_with: None,
        }
    }

    /// A transport that rejects every lead with the given message, without
    /// any delay. Test helper, mostly.
    pub fn failing(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            fail_with: Some(message.to_string()),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadTransport for SimulatedTransport {
    fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, SubmitError> {
        log::debug!("Simulating lead delivery for {}", lead.email);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        match &self.fail_with {
            Some(message) => Err(SubmitError {
                message: message.clone(),
            }),
            None => Ok(LeadReceipt {
                email: lead.email.clone(),
                captured_at: Utc::now(),
            }),
        }
    }
}

/// Posts leads as JSON to a real intake endpoint.
pub struct HttpTransport {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(endpoint).map_err(|e| SubmitError {
            message: format!("Bad endpoint URL: {}", e),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SubmitError {
                message: format!("Unsupported endpoint scheme '{}'", endpoint.scheme()),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SubmitError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { endpoint, client })
    }
}

impl LeadTransport for HttpTransport {
    fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, SubmitError> {
        let body = serde_json::to_string(lead).map_err(|e| SubmitError {
            message: format!("Failed to encode lead: {}", e),
        })?;

        log::debug!("POST {} ({} bytes)", self.endpoint, body.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| SubmitError {
                message: format!("Failed to reach endpoint: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError {
                message: format!("Endpoint answered {}", status),
            });
        }

        Ok(LeadReceipt {
            email: lead.email.clone(),
            captured_at: Utc::now(),
        })
    }
}
