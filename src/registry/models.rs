//! Wire models for the Harbor v2.0 listing endpoints

use serde::Deserialize;

/// A repository inside a project, named `project/repository` by Harbor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
}

impl RepositoryRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagRef {
    pub name: String,
}

/// One artifact as reported by the artifact listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactRecord {
    #[serde(rename = "size", default)]
    pub size_bytes: i64,
    #[serde(default)]
    pub tags: Option<Vec<TagRef>>,
}

impl ArtifactRecord {
    pub fn with_size(size_bytes: i64) -> Self {
        Self {
            size_bytes,
            tags: None,
        }
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags
            .iter()
            .flatten()
            .map(|tag| tag.name.as_str())
            .collect()
    }
}

/// 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub page_size: u64,
}

impl PageQuery {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }
}

/// One page of a listing together with the upstream `X-Total-Count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_deserializes_harbor_payload() {
        let body = r#"[
            {"id": 7, "digest": "sha256:aa", "size": 2048, "tags": [{"name": "v1"}, {"name": "latest"}]},
            {"id": 8, "digest": "sha256:bb", "size": 512, "tags": null},
            {"id": 9, "digest": "sha256:cc"}
        ]"#;
        let artifacts: Vec<ArtifactRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[0].size_bytes, 2048);
        assert_eq!(artifacts[0].tag_names(), vec!["v1", "latest"]);
        assert!(artifacts[1].tag_names().is_empty());
        assert_eq!(artifacts[2].size_bytes, 0);
    }

    #[test]
    fn test_repository_ignores_extra_fields() {
        let body = r#"[{"id": 1, "name": "library/nginx", "artifact_count": 3, "pull_count": 10}]"#;
        let repositories: Vec<RepositoryRef> = serde_json::from_str(body).unwrap();
        assert_eq!(repositories, vec![RepositoryRef::new("library/nginx")]);
    }
}
