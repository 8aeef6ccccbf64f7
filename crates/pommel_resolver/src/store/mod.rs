pub mod layout;
pub mod remote;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use layout::*;
pub use remote::*;

use crate::coord::Coordinate;
use crate::pom::Pom;

/// Two-tier cache of project descriptors and binary artifacts.
///
/// Files are first looked up in memory, then in the local cache directory and
/// finally downloaded from the remote repository. Every outcome is remembered
/// for the lifetime of the store, including failed lookups, so no file is ever
/// requested from the remote repository more than once.
pub struct DescriptorStore {
    layout: RepositoryLayout,
    remote: Box<dyn RemoteRepository>,

    /// Maps coordinates to their corresponding descriptor, if any was found.
    descriptors: HashMap<Coordinate, Option<Arc<Pom>>>,

    /// Maps coordinates and file extensions to the local copy of the
    /// artifact, if any was found.
    artifacts: HashMap<(Coordinate, String), Option<PathBuf>>,
}

impl DescriptorStore {
    pub fn new(layout: RepositoryLayout, remote: Box<dyn RemoteRepository>) -> Self {
        DescriptorStore {
            layout,
            remote,
            descriptors: HashMap::new(),
            artifacts: HashMap::new(),
        }
    }

    /// Gets the root of the local cache directory.
    pub fn cache_dir(&self) -> &Path {
        self.layout.cache_dir()
    }

    /// Gets the descriptor of the given coordinate, if it exists either
    /// locally or within the remote repository.
    #[tracing::instrument(level = "TRACE", skip_all, fields(coordinate = %coordinate))]
    pub fn descriptor(&mut self, coordinate: &Coordinate) -> Option<Arc<Pom>> {
        if let Some(cached) = self.descriptors.get(coordinate) {
            return cached.clone();
        }

        let pom = self.fetch(coordinate, POM_EXTENSION).and_then(|path| match Pom::load(&path) {
            Ok(pom) => Some(Arc::new(pom)),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err.message(), "failed to load project descriptor");
                None
            }
        });

        self.descriptors.insert(coordinate.clone(), pom.clone());

        pom
    }

    /// Gets the local path of the artifact with the given extension, if it exists
    /// either locally or within the remote repository.
    #[tracing::instrument(level = "TRACE", skip_all, fields(coordinate = %coordinate))]
    pub fn artifact(&mut self, coordinate: &Coordinate, extension: &str) -> Option<PathBuf> {
        let key = (coordinate.clone(), extension.to_string());

        if let Some(cached) = self.artifacts.get(&key) {
            return cached.clone();
        }

        let path = self.fetch(coordinate, extension);
        self.artifacts.insert(key, path.clone());

        path
    }

    /// Ensures that the file with the given extension exists in the local cache
    /// directory, downloading it if needed.
    fn fetch(&self, coordinate: &Coordinate, extension: &str) -> Option<PathBuf> {
        let local_path = self.layout.local_path(coordinate, extension);

        if local_path.is_file() {
            tracing::debug!(path = %local_path.display(), "using cached file");
            return Some(local_path);
        }

        let url = self.layout.remote_url(coordinate, extension);
        tracing::debug!(%url, "downloading file");

        match self.remote.get(&url) {
            FetchOutcome::Found(bytes) => {
                if let Err(err) = write_file(&local_path, &bytes) {
                    tracing::error!(path = %local_path.display(), error = %err, "failed to write downloaded file");
                    return None;
                }

                tracing::debug!(path = %local_path.display(), "file downloaded");
                Some(local_path)
            }
            FetchOutcome::NotFound => {
                tracing::warn!(%url, "dependency was not found");
                None
            }
            FetchOutcome::Failed(reason) => {
                tracing::error!(%url, %reason, "failed to download dependency");
                None
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, bytes)
}
