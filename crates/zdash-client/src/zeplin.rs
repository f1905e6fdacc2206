use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use zdash_types::{OrganizationId, Project, Styleguide};

use crate::api::OrganizationApi;
use crate::config::Config;
use crate::pagination::PageRequest;
use crate::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.zeplin.dev/v1";

/// Longest slice of an error body kept in [`Error::Response`]
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the Zeplin REST API, scoped to one session.
#[derive(Clone)]
pub struct ZeplinClient {
    base_url: String,
    client: reqwest::Client,
}

impl ZeplinClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token()))
            .map_err(|_| {
                Error::Config("access token contains characters not allowed in a header".to_string())
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("zdash/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.api_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing endpoint of an organization resource, without query string
    pub fn listing_url(&self, organization: &OrganizationId, resource: &str) -> String {
        format!(
            "{}/organizations/{}/{}",
            self.base_url, organization, resource
        )
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        organization: &OrganizationId,
        resource: &str,
        page: PageRequest,
    ) -> Result<Vec<T>> {
        let url = self.listing_url(organization, resource);
        tracing::trace!(%url, offset = page.offset, limit = page.limit, "GET page");

        let response = self
            .client
            .get(&url)
            .query(&[("offset", page.offset), ("limit", u64::from(page.limit))])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Response {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        decode_page(resource, &body)
    }
}

impl OrganizationApi for ZeplinClient {
    async fn projects_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> Result<Vec<Project>> {
        self.get_page(organization, "projects", page).await
    }

    async fn styleguides_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> Result<Vec<Styleguide>> {
        self.get_page(organization, "styleguides", page).await
    }
}

fn decode_page<T: DeserializeOwned>(resource: &str, body: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|err| Error::Decode {
        resource: resource.to_string(),
        message: err.to_string(),
    })
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
