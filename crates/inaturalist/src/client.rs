//! HTTP client for the iNaturalist `observations.json` endpoint.

use geofolio_core::models::ObservationFeatureCollection;

use crate::observation::collect_features;

pub const DEFAULT_BASE_URL: &str = "https://www.inaturalist.org";
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Upper bound on how much of an error body is kept for reporting.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Errors from the iNaturalist API layer.
#[derive(Debug, thiserror::Error)]
pub enum InaturalistError {
    /// The request failed (network, DNS, TLS) or the body was not the
    /// expected JSON array.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// iNaturalist returned a non-2xx status code.
    #[error("iNaturalist API error ({status}): {body}")]
    Status { status: u16, body: String },
}

/// Client for a single iNaturalist deployment.
pub struct InaturalistClient {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
}

impl InaturalistClient {
    /// * `base_url` - scheme and host, e.g. `https://www.inaturalist.org`.
    /// * `per_page` - number of observations requested per call.
    pub fn new(base_url: impl Into<String>, per_page: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            per_page,
        }
    }

    /// Fetch recent geotagged observations as GeoJSON.
    ///
    /// Sends `GET /observations.json?per_page=N&has[]=geo`. Elements without
    /// usable coordinates or an id are dropped rather than reported.
    pub async fn fetch_observations(
        &self,
    ) -> Result<ObservationFeatureCollection, InaturalistError> {
        let per_page = self.per_page.to_string();
        let response = self
            .client
            .get(format!("{}/observations.json", self.base_url))
            .query(&[("per_page", per_page.as_str()), ("has[]", "geo")])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let elements: Vec<serde_json::Value> = response.json().await?;

        let received = elements.len();
        let collection = collect_features(elements);
        tracing::debug!(received, kept = collection.len(), "Fetched iNaturalist observations");

        Ok(collection)
    }

    /// Return the response unchanged on success, or a
    /// [`InaturalistError::Status`] with the (truncated) body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InaturalistError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InaturalistError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }
        Ok(response)
    }
}
