use std::path::{Path, PathBuf};

use error_snippet::Result;
use pommel_errors::IntoDiagnostic;
use url::Url;

use crate::coord::Coordinate;
use crate::errors::*;

/// Defines the file extension of project descriptors.
pub const POM_EXTENSION: &str = "pom";

/// Defines the file extension of binary artifacts.
pub const JAR_EXTENSION: &str = "jar";

/// Maps coordinates onto the repository file layout, both for the remote
/// repository and the local cache directory.
///
/// For example, `aopalliance:aopalliance:1.0` with the `pom` extension maps onto
/// `aopalliance/aopalliance/1.0/aopalliance-1.0.pom`.
#[derive(Debug, Clone)]
pub struct RepositoryLayout {
    /// Root of the remote repository, always ending with a trailing slash.
    repository: Url,

    /// Root of the local cache directory.
    cache_dir: PathBuf,
}

impl RepositoryLayout {
    /// Creates a new [`RepositoryLayout`] from the given repository root and cache directory.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the repository root is not an absolute `http` or `https` URL.
    pub fn new(repository: &str, cache_dir: PathBuf) -> Result<Self> {
        Ok(Self::from_url(parse_repository(repository)?, cache_dir))
    }

    /// Creates a new [`RepositoryLayout`] from an already validated repository root.
    pub fn from_url(repository: Url, cache_dir: PathBuf) -> Self {
        RepositoryLayout { repository, cache_dir }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Gets the relative path segments of the file with the given extension.
    fn segments(coordinate: &Coordinate, extension: &str) -> Vec<String> {
        let mut segments = coordinate.group_id.split('.').map(String::from).collect::<Vec<_>>();

        segments.push(coordinate.artifact_id.clone());
        segments.push(coordinate.version.clone());
        segments.push(format!(
            "{}-{}.{extension}",
            coordinate.artifact_id, coordinate.version
        ));

        segments
    }

    /// Gets the URL of the file with the given extension in the remote repository.
    pub fn remote_url(&self, coordinate: &Coordinate, extension: &str) -> Url {
        let mut url = self.repository.clone();

        // Roots which cannot be a base are rejected by `parse_repository`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(Self::segments(coordinate, extension));
        }

        url
    }

    /// Gets the path of the file with the given extension in the local cache directory.
    pub fn local_path(&self, coordinate: &Coordinate, extension: &str) -> PathBuf {
        let mut path = self.cache_dir.clone();
        path.extend(Self::segments(coordinate, extension));

        path
    }
}

/// Parses the given repository root into a base URL, which always ends with a
/// trailing slash.
///
/// # Errors
///
/// Returns `Err` if the repository root is not an absolute `http` or `https` URL.
pub fn parse_repository(repository: &str) -> Result<Url> {
    let mut url = match Url::parse(repository.trim()) {
        Ok(url) => url,
        Err(err) => {
            return Err(InvalidRepositoryUrl {
                url: repository.to_string(),
                inner: vec![err.into_diagnostic()],
            }
            .into());
        }
    };

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(InvalidRepositoryUrl {
            url: repository.to_string(),
            inner: Vec::new(),
        }
        .into());
    }

    // Without the trailing slash, joining relative paths would replace the
    // last segment of the root instead of appending to it.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
