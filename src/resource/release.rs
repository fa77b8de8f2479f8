use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

use crate::id::{Id, Identifiable};

/// A downloadable file attached to a [`Release`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: Id<Asset>,
    /// File name
    pub name: String,
    /// MIME type
    pub content_type: String,
    /// Direct download link
    #[serde(rename = "browser_download_url")]
    pub url: Url,
    /// Download link through the API (needs `Accept: application/octet-stream`)
    #[serde(rename = "url")]
    pub api_url: Url,
}

impl Asset {
    pub fn new(id: Id<Asset>, name: &str, content_type: &str, url: Url, api_url: Url) -> Self {
        Self {
            id,
            name: name.to_string(),
            content_type: content_type.to_string(),
            url,
            api_url,
        }
    }
}

/// Assets are the same download when id and download link agree.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.url == other.url
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.url.hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl Identifiable for Asset {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

/// A published release of a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: Id<Release>,
    /// Only visible to users with push access
    #[serde(rename = "draft")]
    pub is_draft: bool,
    #[serde(rename = "prerelease")]
    pub is_prerelease: bool,
    /// Git tag the release is based on (e.g., "v1.0.0")
    #[serde(rename = "tag_name")]
    pub tag: String,
    /// Release title
    pub name: Option<String>,
    /// Web page of the release
    #[serde(rename = "html_url")]
    pub url: Url,
    pub assets: Vec<Asset>,
    pub published_at: DateTime<Utc>,
}

impl Release {
    /// Creates a published, non-draft release without a title.
    pub fn new(
        id: Id<Release>,
        tag: &str,
        url: Url,
        assets: Vec<Asset>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            is_draft: false,
            is_prerelease: false,
            tag: tag.to_string(),
            name: None,
            url,
            assets,
            published_at,
        }
    }

    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..self
        }
    }

    pub fn with_draft(self, is_draft: bool) -> Self {
        Self { is_draft, ..self }
    }

    pub fn with_prerelease(self, is_prerelease: bool) -> Self {
        Self {
            is_prerelease,
            ..self
        }
    }

    /// Finds the first asset with the given file name.
    pub fn asset_named(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// Publication time does not take part in equality.
impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.tag == other.tag
            && self.url == other.url
            && self.name == other.name
            && self.is_draft == other.is_draft
            && self.is_prerelease == other.is_prerelease
            && self.assets == other.assets
    }
}

impl Eq for Release {}

impl Hash for Release {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.tag.hash(state);
        self.url.hash(state);
        self.name.hash(state);
        self.is_draft.hash(state);
        self.is_prerelease.hash(state);
        self.assets.hash(state);
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl Identifiable for Release {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn asset(id: u64) -> Asset {
        Asset::new(
            Id::new(id),
            "tool-linux-amd64.tar.gz",
            "application/gzip",
            url(&format!("https://github.com/o/r/releases/download/v1/{}", id)),
            url(&format!("https://api.github.com/repos/o/r/releases/assets/{}", id)),
        )
    }

    fn release() -> Release {
        Release::new(
            Id::new(1),
            "v1.0",
            url("https://github.com/o/r/releases/tag/v1.0"),
            vec![asset(10)],
            date("2020-01-01T00:00:00Z"),
        )
    }

    #[test]
    fn test_release_defaults() {
        let release = release();
        assert_eq!(release.name, None);
        assert!(!release.is_draft);
        assert!(!release.is_prerelease);
    }

    #[test]
    fn test_release_builders() {
        let release = release()
            .with_name("First")
            .with_draft(true)
            .with_prerelease(true);
        assert_eq!(release.name.as_deref(), Some("First"));
        assert!(release.is_draft);
        assert!(release.is_prerelease);
    }

    #[test]
    fn test_release_equality_ignores_published_at() {
        let a = release();
        let b = Release {
            published_at: date("2024-06-30T12:00:00Z"),
            ..release()
        };
        assert_eq!(a, b);

        let set: HashSet<Release> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_release_equality_covers_other_fields() {
        let base = release();
        assert_ne!(base, release().with_name("Other"));
        assert_ne!(base, release().with_draft(true));
        assert_ne!(base, release().with_prerelease(true));
        assert_ne!(
            base,
            Release {
                tag: "v1.1".into(),
                ..release()
            }
        );
        assert_ne!(
            base,
            Release {
                id: Id::new(2),
                ..release()
            }
        );
        assert_ne!(
            base,
            Release {
                url: url("https://github.com/o/r/releases/tag/other"),
                ..release()
            }
        );
        assert_ne!(
            base,
            Release {
                assets: vec![],
                ..release()
            }
        );
    }

    #[test]
    fn test_asset_equality_ignores_metadata() {
        let a = asset(10);
        let b = Asset {
            name: "renamed.zip".into(),
            content_type: "application/zip".into(),
            api_url: url("https://api.github.com/repos/x/y/releases/assets/99"),
            ..asset(10)
        };
        assert_eq!(a, b);

        let set: HashSet<Asset> = [a, b, asset(11)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_asset_equality_uses_id_and_url() {
        assert_ne!(asset(10), asset(11));
        assert_ne!(
            asset(10),
            Asset {
                url: url("https://example.com/mirror"),
                ..asset(10)
            }
        );
    }

    #[test]
    fn test_display_is_url() {
        assert_eq!(
            release().to_string(),
            "https://github.com/o/r/releases/tag/v1.0"
        );
        assert_eq!(
            asset(10).to_string(),
            "https://github.com/o/r/releases/download/v1/10"
        );
    }

    #[test]
    fn test_identifiable() {
        assert_eq!(release().id().raw(), 1);
        assert_eq!(asset(10).id().raw(), 10);
    }

    #[test]
    fn test_asset_named() {
        let release = release();
        assert_eq!(
            release.asset_named("tool-linux-amd64.tar.gz").map(|a| a.id),
            Some(Id::new(10))
        );
        assert!(release.asset_named("missing").is_none());
    }
}
