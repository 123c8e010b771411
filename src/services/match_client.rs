use crate::config::ClientSettings;
use crate::models::{MatchPayload, MatchResult, ProfileId};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Path both operations target unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "/match";

/// Origin a relative base path is resolved against
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

const APPLICATION_JSON: &str = "application/json";

/// Errors that can occur when talking to the match endpoint
#[derive(Debug, Error)]
pub enum MatchClientError {
    #[error("result must be 'success' or 'denial', got {0:?}")]
    InvalidArgument(String),

    #[error("Failed to {action} ({status})")]
    RequestFailed { action: &'static str, status: u16 },

    #[error("cannot resolve match endpoint {base_url:?}: {source}")]
    InvalidEndpoint {
        base_url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl MatchClientError {
    /// HTTP status of a `RequestFailed` error
    pub fn status(&self) -> Option<u16> {
        match self {
            MatchClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Match API client
///
/// Issues the two supported operations against a single base path:
/// - `GET` fetches the next match candidate
/// - `POST` reports the outcome of a match
///
/// Holds no mutable state, so clones can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct MatchClient {
    origin: Url,
    config: ClientConfig,
    client: Client,
}

impl Default for MatchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchClient {
    /// Create a client targeting `/match`
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client targeting the given base path, stored verbatim
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
        })
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            origin: default_origin(),
            config,
            client: Client::new(),
        }
    }

    /// Build a client from loaded settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, MatchClientError> {
        let origin = Url::parse(&settings.origin).map_err(|source| MatchClientError::InvalidEndpoint {
            base_url: settings.origin.clone(),
            source,
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            origin,
            config: ClientConfig {
                base_url: settings.base_url.clone(),
            },
            client: builder.build()?,
        })
    }

    /// Resolve the base path against a different origin
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = origin;
        self
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, timeouts)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Absolute URL both operations target
    pub fn endpoint(&self) -> Result<Url, MatchClientError> {
        self.origin
            .join(&self.config.base_url)
            .map_err(|source| MatchClientError::InvalidEndpoint {
                base_url: self.config.base_url.clone(),
                source,
            })
    }

    /// Fetch the next match as an opaque JSON value
    pub async fn get_next_match(&self) -> Result<Value, MatchClientError> {
        self.get_next_match_as().await
    }

    /// Fetch the next match, deserialized into `T`
    pub async fn get_next_match_as<T: DeserializeOwned>(&self) -> Result<T, MatchClientError> {
        let url = self.endpoint()?;

        tracing::debug!("Fetching next match from: {}", url);

        let request = self.client.get(url).header(ACCEPT, APPLICATION_JSON);

        self.send(request, "get match").await
    }

    /// Report the outcome of a match with the other profile
    pub async fn update_match(
        &self,
        other_profile_id: impl Into<ProfileId>,
        result: MatchResult,
    ) -> Result<Value, MatchClientError> {
        self.update_match_as(other_profile_id, result).await
    }

    /// Report a match outcome given as a raw string.
    ///
    /// Anything other than `success` or `denial` fails with
    /// `InvalidArgument` before a request is built.
    pub async fn try_update_match(
        &self,
        other_profile_id: impl Into<ProfileId>,
        result: &str,
    ) -> Result<Value, MatchClientError> {
        let result: MatchResult = result.parse()?;
        self.update_match(other_profile_id, result).await
    }

    /// Report the outcome of a match, deserializing the response into `T`
    pub async fn update_match_as<T: DeserializeOwned>(
        &self,
        other_profile_id: impl Into<ProfileId>,
        result: MatchResult,
    ) -> Result<T, MatchClientError> {
        let url = self.endpoint()?;
        let payload = MatchPayload::new(other_profile_id, result);

        tracing::debug!(
            "Updating match with {} as {} at: {}",
            payload.other_profile_id,
            payload.result,
            url
        );

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(&payload);

        self.send(request, "update match").await
    }

    /// Single attempt: non-2xx becomes `RequestFailed`, transport and body errors pass through
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &'static str,
    ) -> Result<T, MatchClientError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Failed to {}: {}", action, status);
            return Err(MatchClientError::RequestFailed {
                action,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

fn default_origin() -> Url {
    Url::parse(DEFAULT_ORIGIN).expect("DEFAULT_ORIGIN is a valid absolute URL")
}
