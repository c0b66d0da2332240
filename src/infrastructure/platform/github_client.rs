use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use serde::Deserialize;

use super::platform_interface::{GroupListing, PlatformClient, PlatformError};
use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::domain::value_objects::repository_url::RepositoryReference;

const PUBLIC_HOST: &str = "github.com";
const PUBLIC_API_URL: &str = "https://api.github.com";
const PAGE_SIZE: u32 = 100;

/// Repository as returned by `GET /orgs/:org/repos`
#[derive(Debug, Deserialize)]
struct GitHubRepository {
    clone_url: String,
}

/// GitHub REST v3 client (github.com or GitHub Enterprise)
pub struct GitHubClient {
    http_client: reqwest::Client,
    api_url: String,
    host: String,
}

impl GitHubClient {
    /// Create a client talking to the API rooted at `api_url`
    pub fn new(
        api_url: impl Into<String>,
        host: impl Into<String>,
        token: &str,
    ) -> Result<Self, PlatformError> {
        let host = host.into();
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if !token.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                PlatformError::authentication(&host, format!("invalid token: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("heimdall/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            host,
        })
    }

    /// Create a client for the instance hosting `organization`
    pub fn for_organization(
        organization: &RepositoryReference,
        token: &str,
    ) -> Result<Self, PlatformError> {
        Self::new(Self::api_url_for(organization), organization.hostname(), token)
    }

    /// `api.github.com` for the public service, `/api/v3` on Enterprise hosts
    pub fn api_url_for(reference: &RepositoryReference) -> String {
        if reference.hostname() == PUBLIC_HOST {
            PUBLIC_API_URL.to_string()
        } else {
            format!("{}/api/v3", reference.base_url())
        }
    }

    fn has_next_page(headers: &HeaderMap) -> bool {
        headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("rel=\"next\""))
            .unwrap_or(false)
    }
}

#[async_trait]
impl PlatformClient for GitHubClient {
    fn kind(&self) -> PlatformKind {
        PlatformKind::GitHub
    }

    async fn list_group_members(&self, group_path: &str) -> Result<GroupListing, PlatformError> {
        let url = format!("{}/orgs/{}/repos", self.api_url, group_path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::from_status(&self.host, status, &body));
        }

        let truncated = Self::has_next_page(response.headers());

        let repositories: Vec<GitHubRepository> = response
            .json()
            .await
            .map_err(|e| PlatformError::invalid_response(e.to_string()))?;

        // RepositoryReference drops the trailing .git of clone_url
        let repositories = repositories
            .into_iter()
            .map(|repository| RepositoryReference::parse(&repository.clone_url))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GroupListing {
            repositories,
            truncated,
        })
    }
}
