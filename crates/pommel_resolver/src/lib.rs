pub mod coord;
pub mod errors;
pub mod expand;
pub mod options;
pub mod pom;
pub mod store;

mod closure;
mod materialize;
mod resolve;


use std::path::{Path, PathBuf};

use error_snippet::Result;

pub use crate::coord::*;
pub use crate::options::*;
pub use crate::pom::Pom;
pub use crate::resolve::MAX_PARENT_DEPTH;
use crate::store::{DescriptorStore, HttpRepository, RemoteRepository, RepositoryLayout, parse_repository};

/// Resolves the dependency closure of Maven-style projects and downloads
/// their binary artifacts.
///
/// All descriptors and artifacts are cached for the lifetime of the resolver,
/// so resolving the same coordinate twice never hits the remote repository
/// again.
pub struct ArtifactResolver {
    store: DescriptorStore,
}

impl ArtifactResolver {
    /// Creates a new [`ArtifactResolver`], which downloads over HTTP(S).
    ///
    /// # Errors
    ///
    /// This method may fail if:
    /// - the repository in `options` is not an absolute `http` or `https` URL,
    /// - no cache directory was given and a temporary one could not be created,
    /// - or the HTTP client could not be initialized.
    pub fn new(options: ResolverOptions) -> Result<Self> {
        Self::with_repository(options, Box::new(HttpRepository::new()?))
    }

    /// Creates a new [`ArtifactResolver`], which downloads through the given
    /// remote repository.
    ///
    /// # Errors
    ///
    /// This method may fail if:
    /// - the repository in `options` is not an absolute `http` or `https` URL,
    /// - or no cache directory was given and a temporary one could not be created.
    pub fn with_repository(options: ResolverOptions, remote: Box<dyn RemoteRepository>) -> Result<Self> {
        let repository = parse_repository(&options.repository)?;
        let cache_dir = options.resolve_cache_dir()?;

        tracing::debug!(%repository, cache_dir = %cache_dir.display(), "created artifact resolver");

        let layout = RepositoryLayout::from_url(repository, cache_dir);

        Ok(ArtifactResolver {
            store: DescriptorStore::new(layout, remote),
        })
    }

    /// Gets the root of the local cache directory.
    pub fn cache_dir(&self) -> &Path {
        self.store.cache_dir()
    }

    /// Resolves the dependencies of the given root coordinate and downloads the
    /// binary artifacts of the root and all of its dependencies, returning the
    /// local paths of the artifacts.
    ///
    /// The artifact of the root itself always comes first, if it has one.
    #[tracing::instrument(level = "INFO", skip_all, fields(root = %root, include_transitive))]
    pub fn jar_files(&mut self, root: &Coordinate, include_transitive: bool) -> Vec<PathBuf> {
        let mut dependencies = vec![ResolvedDependency {
            coordinate: root.clone(),
            scope: None,
        }];

        dependencies.extend(self.resolve_dependencies(root, include_transitive));

        self.materialize(&dependencies)
    }
}
