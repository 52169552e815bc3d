//! Contact form submission
//!
//! Posts form fields to a form-handling endpoint and turns the response
//! into the status line shown under the form.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const SENT_MESSAGE: &str = "Thanks for your submission!";
const GENERIC_FAILURE: &str = "Oops! There was a problem submitting your form";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("no contact endpoint configured")]
    MissingEndpoint,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Status line for the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Sending,
    Sent,
    Failed(String),
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Sending => f.write_str("Sending..."),
            SubmitStatus::Sent => f.write_str(SENT_MESSAGE),
            SubmitStatus::Failed(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    message: String,
}

/// Map an endpoint response to a status.
///
/// A failed response with `{ "errors": [{ "message": ... }] }` reports
/// the joined messages; anything else gets the generic failure text.
pub fn status_from_response(success: bool, body: &str) -> SubmitStatus {
    if success {
        return SubmitStatus::Sent;
    }

    let messages: Vec<String> = serde_json::from_str::<ErrorBody>(body)
        .map(|b| {
            b.errors
                .into_iter()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if messages.is_empty() {
        SubmitStatus::Failed(GENERIC_FAILURE.to_string())
    } else {
        SubmitStatus::Failed(messages.join(", "))
    }
}

/// Sends contact form data to the configured endpoint
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ContactError> {
        if endpoint.trim().is_empty() {
            return Err(ContactError::MissingEndpoint);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim().to_string(),
        })
    }

    /// Submit the form. `on_status` sees `Sending` first, then the final status.
    pub async fn submit<F>(&self, fields: &[(String, String)], mut on_status: F) -> SubmitStatus
    where
        F: FnMut(&SubmitStatus),
    {
        on_status(&SubmitStatus::Sending);

        let result = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(fields)
            .send()
            .await;

        let status = match result {
            Ok(resp) => {
                let success = resp.status().is_success();
                let body = resp.text().await.unwrap_or_default();
                status_from_response(success, &body)
            }
            Err(e) => {
                tracing::warn!("Contact form submission failed: {}", e);
                SubmitStatus::Failed(GENERIC_FAILURE.to_string())
            }
        };

        on_status(&status);
        status
    }
}
