//! HTTP client for the theatre directory's `theatres` endpoint.

use std::time::Duration;

use reqwest::Client;
use tfind_core::{AppConfig, Coordinate, TheaterRecord};

use crate::error::DirectoryError;
use crate::normalize::parse_catalog;
use crate::types::ParsedCatalog;

/// HTTP client for the theatre directory.
///
/// One fetch is one GET of the configured endpoint. Only `200 OK` counts as
/// success; there are no retries, a failed fetch is reported to the caller.
#[derive(Debug, Clone)]
pub struct TheatreDirectoryClient {
    client: Client,
    directory_url: reqwest::Url,
    vendor_base_url: String,
}

impl TheatreDirectoryClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::InvalidUrl`] if `directory_url` does not parse.
    /// - [`DirectoryError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(
        directory_url: &str,
        vendor_base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, DirectoryError> {
        let parsed = reqwest::Url::parse(directory_url).map_err(|e| DirectoryError::InvalidUrl {
            url: directory_url.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            directory_url: parsed,
            vendor_base_url: vendor_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds a client from the `TFIND_*` settings.
    ///
    /// # Errors
    ///
    /// See [`TheatreDirectoryClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, DirectoryError> {
        Self::new(
            &config.directory_url,
            &config.vendor_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn directory_url(&self) -> &str {
        self.directory_url.as_str()
    }

    #[must_use]
    pub fn vendor_base_url(&self) -> &str {
        &self.vendor_base_url
    }

    /// Fetches the directory and returns the theatres within `radius_meters`,
    /// in response order.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Http`] on transport failure.
    /// - [`DirectoryError::UnexpectedStatus`] on any status other than 200.
    pub async fn fetch(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<TheaterRecord>, DirectoryError> {
        Ok(self.fetch_catalog(center, radius_meters).await?.theaters)
    }

    /// Like [`fetch`](Self::fetch) but also returns the defaulted fields and
    /// the unfiltered entry count.
    ///
    /// The directory reports distances itself; `center` is not sent and is
    /// only logged.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch).
    pub async fn fetch_catalog(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<ParsedCatalog, DirectoryError> {
        let url = self.directory_url.as_str();
        tracing::debug!(url, %center, radius_meters, "fetching theatre directory");

        let response = self
            .client
            .get(self.directory_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let catalog = parse_catalog(&body, &self.vendor_base_url, radius_meters);

        tracing::info!(
            total = catalog.total_entries,
            kept = catalog.theaters.len(),
            substituted_fields = catalog.substitutions.len(),
            radius_meters,
            "theatre directory fetched"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
