// This file contains the implementation of the HarborClient struct, which
// talks to the Harbor v2.0 REST API to list the repositories of a project
// and the artifacts of a repository, one page at a time.

use crate::config::{AuthConfig, RegistryConfig};
use crate::error::handlers::{HttpErrorHandler, NetworkErrorHandler};
use crate::error::{HartisizeError, Result};
use crate::registry::RegistryApi;
use crate::registry::models::{ArtifactRecord, Page, PageQuery, RepositoryRef};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Response header carrying the size of the whole listing
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

pub struct HarborClientBuilder {
    config: RegistryConfig,
}

impl HarborClientBuilder {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<HarborClient> {
        let client = Client::builder()
            .user_agent(concat!("hartisize/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HartisizeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HarborClient {
            client,
            base_url: self.config.host,
            auth: self.config.auth,
        })
    }
}

pub struct HarborClient {
    client: Client,
    base_url: Url,
    auth: Option<AuthConfig>,
}

impl HarborClient {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: RegistryConfig) -> HarborClientBuilder {
        HarborClientBuilder::new(config)
    }

    /// `{host}/api/v2.0/projects/{project}/repositories[/{repository}/artifacts]`
    fn repositories_url(&self, project: &str, repository: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                HartisizeError::Config(format!("Host {} cannot be a base URL", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(["api", "v2.0", "projects", project, "repositories"]);
            if let Some(repository) = repository {
                segments.push(repository).push("artifacts");
            }
        }
        Ok(url)
    }

    async fn get_page<T>(
        &self,
        url: Url,
        query: &[(&str, String)],
        operation: &str,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        debug!(%url, ?query, "{}", operation);

        let mut request = self.client.get(url).query(query);
        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, operation))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(HttpErrorHandler::handle_registry_error(
                status,
                &error_text,
                operation,
            ));
        }

        let total_count = total_count(response.headers());
        let items = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, operation))?;

        Ok(Page::new(items, total_count))
    }
}

#[async_trait]
impl RegistryApi for HarborClient {
    async fn list_repositories(
        &self,
        project: &str,
        query: PageQuery,
    ) -> Result<Page<RepositoryRef>> {
        let url = self.repositories_url(project, None)?;
        let params = [
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        self.get_page(url, &params, "list repositories").await
    }

    async fn list_artifacts(
        &self,
        project: &str,
        repository: &str,
        query: PageQuery,
    ) -> Result<Page<ArtifactRecord>> {
        let escaped = escape_repository_name(project, repository);
        let url = self.repositories_url(project, Some(&escaped))?;
        let params = [
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
            ("with_tag", "true".to_string()),
        ];
        self.get_page(url, &params, "list artifacts").await
    }
}

/// Strip the `project/` prefix and query-escape what remains.
///
/// Placed as a path segment the result is escaped once more, so `a/b` reaches
/// Harbor as `a%252Fb`, which is how it addresses nested repositories.
pub fn escape_repository_name(project: &str, repository: &str) -> String {
    let prefix = format!("{}/", project);
    let name = repository.strip_prefix(&prefix).unwrap_or(repository);
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

/// `X-Total-Count` as a number; missing or malformed headers count as zero
fn total_count(headers: &HeaderMap) -> u64 {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}
