//! Contact form state and delivery to the external form processor.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    content::{CONTACT_FAILURE_MESSAGE, CONTACT_NETWORK_ERROR_MESSAGE, CONTACT_SUCCESS_MESSAGE},
    domain::{ContactField, ContactFormRecord, ToastKind},
    protocol::ContactSubmitResponse,
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::toast::{ToastId, ToastQueue};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid contact endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("contact request timed out")]
    Timeout,
    #[error("failed to reach contact endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("contact endpoint returned a non-JSON body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ContactError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Posts a record to the form processor and returns its decoded reply.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post_contact(
        &self,
        record: &ContactFormRecord,
    ) -> Result<ContactSubmitResponse, ContactError>;
}

pub struct HttpContactTransport {
    client: Client,
    endpoint: Url,
}

impl HttpContactTransport {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContactError::Client)?;
        Ok(Self { client, endpoint })
    }

    /// Resolves the endpoint path (usually relative) against the site URL.
    pub fn for_site(site: &Url, endpoint: &str, timeout: Duration) -> Result<Self, ContactError> {
        let resolved = site
            .join(endpoint)
            .map_err(|source| ContactError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Self::new(resolved, timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post_contact(
        &self,
        record: &ContactFormRecord,
    ) -> Result<ContactSubmitResponse, ContactError> {
        // Status is not checked; the processor reports failures in the body.
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(record)
            .send()
            .await
            .map_err(ContactError::from_reqwest)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ContactError::from_reqwest)?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(%status, body_len = bytes.len(), "contact endpoint reply is not JSON");
            ContactError::Decode(err)
        })?;
        Ok(ContactSubmitResponse::from_body(body))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected,
    NetworkError,
}

impl SubmitOutcome {
    pub fn toast_kind(self) -> ToastKind {
        match self {
            SubmitOutcome::Delivered => ToastKind::Success,
            SubmitOutcome::Rejected | SubmitOutcome::NetworkError => ToastKind::Error,
        }
    }

    pub fn toast_message(self) -> &'static str {
        match self {
            SubmitOutcome::Delivered => CONTACT_SUCCESS_MESSAGE,
            SubmitOutcome::Rejected => CONTACT_FAILURE_MESSAGE,
            SubmitOutcome::NetworkError => CONTACT_NETWORK_ERROR_MESSAGE,
        }
    }
}

/// Sends one record and folds every result into an outcome. Never retries.
pub async fn deliver<T: ContactTransport + ?Sized>(
    transport: &T,
    record: &ContactFormRecord,
) -> SubmitOutcome {
    match transport.post_contact(record).await {
        Ok(response) if response.succeeded() => {
            info!("contact message delivered");
            SubmitOutcome::Delivered
        }
        Ok(response) => {
            warn!(
                reason = response.message.as_deref().unwrap_or("unspecified"),
                "contact message rejected"
            );
            SubmitOutcome::Rejected
        }
        Err(err) => {
            warn!("contact submission failed: {err}");
            SubmitOutcome::NetworkError
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a contact submission is already in flight")]
pub struct SubmissionInFlight;

/// The contact record plus the in-flight guard for its submission.
#[derive(Debug, Default)]
pub struct ContactForm {
    record: ContactFormRecord,
    in_flight: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ContactFormRecord {
        &self.record
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.record.set_field(field, value);
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        self.record.field_mut(field)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.record.validate().is_ok()
    }

    /// Marks a submission as started and hands back the record to send.
    pub fn begin_submit(&mut self) -> Result<ContactFormRecord, SubmissionInFlight> {
        if self.in_flight {
            warn!("ignoring contact submit while another is in flight");
            return Err(SubmissionInFlight);
        }
        self.in_flight = true;
        Ok(self.record.clone())
    }

    /// Shows exactly one toast for the attempt and clears the record only
    /// when the message was delivered.
    pub fn finish_submit(
        &mut self,
        outcome: SubmitOutcome,
        toasts: &mut ToastQueue,
        now: Instant,
    ) -> ToastId {
        self.in_flight = false;
        if outcome == SubmitOutcome::Delivered {
            self.record.clear();
        }
        toasts.push(outcome.toast_kind(), outcome.toast_message(), now)
    }

    /// Whole submit flow for callers that can await on the UI task.
    pub async fn submit<T: ContactTransport + ?Sized>(
        &mut self,
        transport: &T,
        toasts: &mut ToastQueue,
    ) -> Result<SubmitOutcome, SubmissionInFlight> {
        let record = self.begin_submit()?;
        let outcome = deliver(transport, &record).await;
        self.finish_submit(outcome, toasts, Instant::now());
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
