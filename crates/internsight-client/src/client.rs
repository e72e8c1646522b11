//! HTTP client for the internship recommendation service.
//!
//! Wraps `reqwest` with typed error handling and deserialization into the
//! core wire types. One submission is one request: no retries, no caching,
//! no client-side re-ranking. The service's ranking order is returned
//! exactly as received.

use std::time::Duration;

use reqwest::{Client, Url};

use internsight_core::{CandidateProfile, Recommendation};

use crate::error::ClientError;

/// Client for the recommendation service's REST API.
///
/// Holds the HTTP client and the configured base URL. The base URL comes
/// from configuration (`INTERNSIGHT_API_URL`); nothing is hard-coded, so
/// tests point the client at a wiremock server.
pub struct RecommendClient {
    client: Client,
    base_url: Url,
}

impl RecommendClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// The base URL is normalised to end with exactly one slash so endpoint
    /// paths join onto it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Submits a candidate profile and returns the ranked recommendations.
    ///
    /// Issues a single `POST /recommendations` with the profile as the JSON
    /// body. An empty response body on a 2xx status is a valid empty result
    /// set, not an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on a transport-level failure.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a recommendation
    ///   array.
    pub async fn recommendations(
        &self,
        profile: &CandidateProfile,
    ) -> Result<Vec<Recommendation>, ClientError> {
        let url = self.endpoint("recommendations")?;

        tracing::debug!(
            locations = profile.preferred_locations.len(),
            "submitting candidate profile"
        );

        let response = self.client.post(url.clone()).json(profile).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            // Some deployments answer 200 with no body when nothing matched.
            return Ok(Vec::new());
        }

        let records: Vec<Recommendation> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: "recommendations response".to_owned(),
                source: e,
            })?;

        tracing::info!(results = records.len(), "recommendations received");
        Ok(records)
    }

    /// Fetches the service's list of known locations (`GET /locations`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::recommendations`].
    pub async fn locations(&self) -> Result<Vec<String>, ClientError> {
        self.fetch_string_list("locations").await
    }

    /// Fetches the service's list of known interest areas (`GET /interests`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::recommendations`].
    pub async fn interests(&self) -> Result<Vec<String>, ClientError> {
        self.fetch_string_list("interests").await
    }

    /// Shared GET path for the two string-list endpoints.
    async fn fetch_string_list(&self, path: &str) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(path)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: format!("{path} response"),
            source: e,
        })
    }

    /// Resolves an endpoint path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
