use std::path::PathBuf;

use error_snippet::Result;
use pommel_errors::IntoDiagnostic;

use crate::errors::*;
use crate::store::DEFAULT_REPOSITORY;

/// Defines the name of the environment variable, which defines where
/// downloaded descriptors and artifacts should be cached.
pub const POMMEL_CACHE_ENVKEY: &str = "POMMEL_CACHE_DIR";

/// Defines the name of the environment variable, which defines the root URL
/// of the remote repository.
pub const POMMEL_REPOSITORY_ENVKEY: &str = "POMMEL_REPOSITORY";

/// Defines the prefix of the temporary cache directory, which is created when
/// no cache directory is given.
pub const TEMP_CACHE_PREFIX: &str = ".maven";

/// Options for creating a new [`crate::ArtifactResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Defines the local cache directory. If [`None`] or empty, a new temporary
    /// directory is created and kept after the resolver is dropped.
    pub cache_dir: Option<PathBuf>,

    /// Defines the root URL of the remote repository.
    pub repository: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            cache_dir: None,
            repository: DEFAULT_REPOSITORY.to_string(),
        }
    }
}

impl ResolverOptions {
    /// Creates new options from the environment, falling back to the defaults
    /// for all variables which aren't set.
    pub fn from_env() -> Self {
        let mut options = ResolverOptions::default();

        if let Some(dir) = std::env::var_os(POMMEL_CACHE_ENVKEY) {
            options.cache_dir = Some(PathBuf::from(dir));
        }

        if let Ok(repository) = std::env::var(POMMEL_REPOSITORY_ENVKEY) {
            options.repository = repository;
        }

        options
    }

    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Gets the local cache directory to use, creating a new temporary
    /// directory if none was given.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the temporary directory could not be created.
    pub(crate) fn resolve_cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir
            && !dir.as_os_str().is_empty()
        {
            return Ok(dir.clone());
        }

        let temp = match tempfile::Builder::new().prefix(TEMP_CACHE_PREFIX).tempdir() {
            Ok(temp) => temp,
            Err(err) => {
                return Err(CacheDirectoryError {
                    inner: vec![err.into_diagnostic()],
                }
                .into());
            }
        };

        let dir = temp.keep();
        tracing::debug!(path = %dir.display(), "created temporary cache directory");

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_central() {
        let options = ResolverOptions::default();

        assert_eq!(options.cache_dir, None);
        assert_eq!(options.repository, "https://repo1.maven.org/maven2/");
    }

    #[test]
    fn explicit_cache_dir_is_used() {
        let options = ResolverOptions::default().with_cache_dir("/var/cache/pommel");

        assert_eq!(options.resolve_cache_dir().unwrap(), PathBuf::from("/var/cache/pommel"));
    }

    #[test]
    fn empty_cache_dir_creates_temp_dir() {
        let options = ResolverOptions::default().with_cache_dir("");
        let dir = options.resolve_cache_dir().unwrap();

        assert!(dir.is_dir());
        assert!(
            dir.file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with(TEMP_CACHE_PREFIX))
        );

        std::fs::remove_dir_all(dir).unwrap();
    }
}
