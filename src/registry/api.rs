//! The listing operations the size report needs from a registry

use crate::error::Result;
use crate::registry::models::{ArtifactRecord, Page, PageQuery, RepositoryRef};
use async_trait::async_trait;

/// Paginated, read-only view of a registry project.
///
/// `repository` arguments are the names exactly as returned by
/// [`RegistryApi::list_repositories`]; implementations handle any prefix
/// stripping and escaping their wire format needs.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    async fn list_repositories(&self, project: &str, query: PageQuery)
    -> Result<Page<RepositoryRef>>;

    async fn list_artifacts(
        &self,
        project: &str,
        repository: &str,
        query: PageQuery,
    ) -> Result<Page<ArtifactRecord>>;
}
