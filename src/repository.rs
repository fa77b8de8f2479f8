//! Repositories and the release requests built from them.

use std::fmt;
use std::str::FromStr;

use crate::request::{Method, Request};
use crate::resource::Release;

/// Repository identifier (owner/name format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// The latest published release.
    ///
    /// Fails with [`Error::DoesNotExist`](crate::Error::DoesNotExist) when executed
    /// against a repository without releases.
    ///
    /// <https://docs.github.com/rest/releases/releases#get-the-latest-release>
    pub fn latest_release(&self) -> Request<Release> {
        Request::new(
            Method::Get,
            format!("/repos/{}/{}/releases/latest", self.owner, self.name),
        )
    }

    /// The release for a tag. The tag is used in the path as given.
    ///
    /// A tag without a release and a tag that does not exist both fail with
    /// [`Error::DoesNotExist`](crate::Error::DoesNotExist); the two cannot be told apart.
    ///
    /// <https://docs.github.com/rest/releases/releases#get-a-release-by-tag-name>
    pub fn release_for_tag(&self, tag: &str) -> Request<Release> {
        Request::new(
            Method::Get,
            format!("/repos/{}/{}/releases/tags/{}", self.owner, self.name, tag),
        )
    }

    /// All releases, in the order the server returns them.
    ///
    /// <https://docs.github.com/rest/releases/releases#list-releases>
    pub fn releases(&self) -> Request<Vec<Release>> {
        Request::new(
            Method::Get,
            format!("/repos/{}/{}/releases", self.owner, self.name),
        )
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(Repository::new(parts[0], parts[1]))
        }
    }
}
