// ============================================================================
// Portal Client - Contact API Client
// File: crates/portal-client/src/api.rs
// ============================================================================
//! Access to the contact backend over HTTP

use std::time::Duration;

use async_trait::async_trait;
use portal_core::{ContactRecord, NewContact};
use portal_shared::config::ClientSettings;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::ClientError;

/// The two operations of the contact record store, as seen from the client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn create_contact(&self, contact: &NewContact) -> Result<ContactRecord, ClientError>;
    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ClientError>;
}

/// reqwest-backed [`ContactApi`].
///
/// Every request is bounded by the configured timeout. Connect failures are
/// retried up to `retry_attempts` times. Timeouts are retried only for the
/// idempotent listing: a timed-out create may already have been stored, so it
/// is reported instead of re-sent. Any received HTTP response is final and
/// only 2xx counts as success.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: Client,
    base_url: String,
    retry_attempts: u32,
}

impl HttpContactApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            retry_attempts: settings.retry_attempts,
        })
    }

    fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    async fn send(&self, build: impl Fn() -> RequestBuilder, retry: Retry) -> Result<Response, ClientError> {
        let mut attempt = 0;
        loop {
            match build().send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    warn!("Contact backend responded with {}", response.status());
                    return Err(ClientError::Status(response.status().as_u16()));
                }
                Err(e) if retry.allows(&e) && attempt < self.retry_attempts => {
                    attempt += 1;
                    warn!("Request to contact backend failed ({}), retry {}/{}", e, attempt, self.retry_attempts);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Which transport failures may be re-sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Retry {
    /// The request never reached the backend.
    ConnectOnly,
    /// Safe to repeat even if the backend saw the first attempt.
    Idempotent,
}

impl Retry {
    fn allows(self, err: &reqwest::Error) -> bool {
        match self {
            Retry::ConnectOnly => err.is_connect(),
            Retry::Idempotent => err.is_connect() || err.is_timeout(),
        }
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn create_contact(&self, contact: &NewContact) -> Result<ContactRecord, ClientError> {
        let url = self.contacts_url();
        let response = self
            .send(|| self.client.post(&url).json(contact), Retry::ConnectOnly)
            .await?;
        let record: ContactRecord = response.json().await?;
        debug!(id = %record.id, "contact created");
        Ok(record)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ClientError> {
        let url = self.contacts_url();
        let response = self.send(|| self.client.get(&url), Retry::Idempotent).await?;
        Ok(response.json().await?)
    }
}
