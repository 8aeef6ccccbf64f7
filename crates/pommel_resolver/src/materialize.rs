use std::collections::HashSet;
use std::path::PathBuf;

use crate::ArtifactResolver;
use crate::coord::ResolvedDependency;
use crate::store::JAR_EXTENSION;

impl ArtifactResolver {
    /// Downloads the binary artifacts of all the given dependencies into the
    /// local cache directory and returns their paths.
    ///
    /// Dependencies without a descriptor, or whose packaging doesn't produce
    /// a binary artifact, are skipped. Paths are unique, compared without
    /// regard to case, and keep the order of `dependencies`.
    #[tracing::instrument(level = "DEBUG", skip_all, fields(count = dependencies.len()))]
    pub fn materialize(&mut self, dependencies: &[ResolvedDependency]) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let mut seen = HashSet::new();

        for dependency in dependencies {
            let coordinate = &dependency.coordinate;

            let Some(pom) = self.store.descriptor(coordinate) else {
                continue;
            };

            if !pom.has_binary() {
                tracing::debug!(
                    %coordinate,
                    packaging = pom.packaging(),
                    "skipping dependency without binary artifact"
                );
                continue;
            }

            let Some(path) = self.store.artifact(coordinate, JAR_EXTENSION) else {
                continue;
            };

            if !seen.insert(path.to_string_lossy().to_lowercase()) {
                tracing::warn!(path = %path.display(), "duplicate artifact, skipping");
                continue;
            }

            paths.push(path);
        }

        paths
    }
}
