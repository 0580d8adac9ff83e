//! Per-repository artifact size aggregation
//!
//! Walks every repository of a project and every artifact page of each
//! repository, strictly one request at a time. The first failed request aborts
//! the whole walk; no partial result is returned.

use crate::common::ProgressObserver;
use crate::error::Result;
use crate::pagination::{DEFAULT_PAGE_SIZE, paginate};
use crate::registry::RegistryApi;
use crate::registry::models::{ArtifactRecord, RepositoryRef};
use futures::TryStreamExt;
use tracing::debug;

/// Aggregated size of one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySizeSummary {
    pub repository_name: String,
    /// Item count of the last artifact page seen, not a running total
    pub tag_count: usize,
    pub total_size_bytes: i64,
}

impl RepositorySizeSummary {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            tag_count: 0,
            total_size_bytes: 0,
        }
    }

    /// Fold one artifact page into the summary.
    ///
    /// `tag_count` is replaced by this page's item count, so for multi-page
    /// repositories only the last page survives. This matches the numbers the
    /// report has always shown and is kept until the intended meaning is settled.
    pub fn record_page(&mut self, artifacts: &[ArtifactRecord]) {
        self.tag_count = artifacts.len();
        self.total_size_bytes += artifacts
            .iter()
            .map(|artifact| artifact.size_bytes)
            .sum::<i64>();
    }
}

/// Collect every repository of `project`, in upstream order
pub async fn list_all_repositories<A>(api: &A, project: &str) -> Result<Vec<RepositoryRef>>
where
    A: RegistryApi + ?Sized,
{
    debug!(project, "listing repositories");
    let pages = paginate(
        move |query| api.list_repositories(project, query),
        DEFAULT_PAGE_SIZE,
    )
    .await?;

    pages
        .into_stream()
        .map_ok(|page| page.items)
        .try_concat()
        .await
}

/// Compute the size summary of every non-empty repository of `project`.
///
/// `observer` hears about each repository once its artifact count is known,
/// including repositories that turn out to be empty and are left out of the
/// result.
pub async fn aggregate<A>(
    api: &A,
    project: &str,
    observer: &dyn ProgressObserver,
) -> Result<Vec<RepositorySizeSummary>>
where
    A: RegistryApi + ?Sized,
{
    let repositories = list_all_repositories(api, project).await?;
    observer.on_repositories_listed(repositories.len());

    let mut summaries = Vec::new();
    for repository in &repositories {
        let name = repository.name.as_str();
        let mut pages = paginate(
            move |query| api.list_artifacts(project, name, query),
            DEFAULT_PAGE_SIZE,
        )
        .await?;

        observer.on_repository_processed(name);
        if pages.page_count() == 0 {
            debug!(repository = name, "skipping repository without artifacts");
            continue;
        }

        debug!(
            project,
            repository = name,
            pages = pages.page_count(),
            "collecting artifacts"
        );
        let mut summary = RepositorySizeSummary::new(name);
        while let Some(page) = pages.next_page().await? {
            for artifact in &page.items {
                debug!(
                    repository = name,
                    size = artifact.size_bytes,
                    tags = ?artifact.tag_names(),
                    "artifact"
                );
            }
            summary.record_page(&page.items);
        }
        summaries.push(summary);
    }

    observer.on_finished();
    Ok(summaries)
}
