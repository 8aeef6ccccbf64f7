use crate::ArtifactResolver;
use crate::coord::{Coordinate, RawCoordinate};
use crate::expand::expand;
use crate::pom::Pom;

/// Defines how many parent projects are followed, before the inheritance chain
/// is deemed to be cyclic and the walk is aborted.
pub const MAX_PARENT_DEPTH: usize = 32;

impl ArtifactResolver {
    /// Resolves the group, artifact and version of the given coordinate, where `pom`
    /// is the descriptor which declared it.
    ///
    /// If the coordinate has no version of its own, it's looked up in the
    /// dependency management section of `pom` and all of its ancestors.
    ///
    /// Returns [`None`] if any part of the coordinate could not be resolved.
    pub fn resolve_coordinate(&mut self, raw: &RawCoordinate, pom: &Pom) -> Option<Coordinate> {
        self.resolve_coordinate_at(raw, pom, 0)
    }

    fn resolve_coordinate_at(&mut self, raw: &RawCoordinate, pom: &Pom, depth: usize) -> Option<Coordinate> {
        let group_id = expand(raw.group_id.as_deref(), pom);
        let artifact_id = expand(raw.artifact_id.as_deref(), pom);

        let (Some(group_id), Some(artifact_id)) = (group_id, artifact_id) else {
            tracing::warn!(dependency = %raw, "failed to resolve dependency");
            return None;
        };

        let Some(version) = self.resolve_version_at(&group_id, &artifact_id, raw.version.as_deref(), pom, depth) else {
            tracing::warn!(dependency = %raw, "failed to resolve dependency");
            return None;
        };

        match Coordinate::new(group_id, artifact_id, version) {
            Ok(coordinate) => Some(coordinate),
            Err(err) => {
                tracing::warn!(dependency = %raw, reason = %err.message(), "failed to resolve dependency");
                None
            }
        }
    }

    /// Resolves the effective version of the given artifact, as seen from `pom`.
    ///
    /// The version is taken from the first of these which succeeds:
    /// 1. expanding `raw_version` against `pom`,
    /// 2. the dependency management section of `pom`,
    /// 3. repeating the process against the parent of `pom`.
    pub fn resolve_version(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        raw_version: Option<&str>,
        pom: &Pom,
    ) -> Option<String> {
        self.resolve_version_at(group_id, artifact_id, raw_version, pom, 0)
    }

    fn resolve_version_at(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        raw_version: Option<&str>,
        pom: &Pom,
        depth: usize,
    ) -> Option<String> {
        if let Some(version) = expand(raw_version, pom) {
            return Some(version);
        }

        if let Some(version) = managed_version(group_id, artifact_id, pom) {
            return Some(version);
        }

        let parent = pom.parent.as_ref()?;

        if depth >= MAX_PARENT_DEPTH {
            tracing::warn!(project = %pom, parent = %parent, "parent chain is too deep, possibly cyclic");
            return None;
        }

        let parent_coordinate = self.resolve_coordinate_at(parent, pom, depth + 1)?;

        tracing::debug!(parent = %parent_coordinate, "attempting to resolve version from parent project");
        let parent_pom = self.store.descriptor(&parent_coordinate)?;

        let version = self.resolve_version_at(group_id, artifact_id, raw_version, &parent_pom, depth + 1);

        if version.is_some() {
            tracing::debug!(parent = %parent_coordinate, "resolved version in parent project");
        }

        version
    }
}

/// Looks up the version of the given artifact within the dependency management
/// section of `pom`, ignoring any parent projects.
fn managed_version(group_id: &str, artifact_id: &str, pom: &Pom) -> Option<String> {
    let managed = pom.managed_dependency(group_id, artifact_id)?;
    let version = expand(managed.coordinate.version.as_deref(), pom);

    if let Some(version) = &version {
        tracing::debug!(group_id, artifact_id, %version, "resolved version from dependency management");
    }

    version
}
