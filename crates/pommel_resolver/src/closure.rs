use std::collections::HashSet;
use std::sync::Arc;

use crate::ArtifactResolver;
use crate::coord::{Coordinate, ResolvedDependency};
use crate::pom::Pom;
use crate::resolve::MAX_PARENT_DEPTH;

impl ArtifactResolver {
    /// Resolves all dependencies of the given root coordinate, optionally including
    /// all transitive dependencies.
    ///
    /// The root itself is not part of the returned list, unless some dependency
    /// refers back to it. Dependencies which cannot be resolved are dropped and
    /// reported as warnings, so the list may be shorter than the full graph.
    #[tracing::instrument(level = "DEBUG", skip_all, fields(root = %root, include_transitive))]
    pub fn resolve_dependencies(&mut self, root: &Coordinate, include_transitive: bool) -> Vec<ResolvedDependency> {
        let mut resolved = Vec::new();
        let mut visited = HashSet::new();

        self.visit(root, include_transitive, &mut resolved, &mut visited);

        resolved
    }

    /// Merges the direct dependencies of the given coordinate into `resolved` and
    /// recursively descends into its declared dependencies.
    ///
    /// `visited` guards against cycles by exact coordinate, so the same artifact may
    /// still be visited more than once, if it's reached at different versions.
    fn visit(
        &mut self,
        coordinate: &Coordinate,
        include_transitive: bool,
        resolved: &mut Vec<ResolvedDependency>,
        visited: &mut HashSet<Coordinate>,
    ) {
        if !visited.insert(coordinate.clone()) {
            tracing::debug!(%coordinate, "dependency already visited");
            return;
        }

        let Some(pom) = self.store.descriptor(coordinate) else {
            return;
        };

        let effective = self.effective_dependencies(&pom);
        let filtered = filter_by_scope(effective);

        merge_latest_version(filtered, resolved);

        if !include_transitive {
            return;
        }

        // Scopes are not filtered here: a `test` dependency is left out
        // of the result, but its own dependencies are still walked.
        for dependency in &pom.dependencies {
            if let Some(dependency) = self.resolve_coordinate(&dependency.coordinate, &pom) {
                self.visit(&dependency, true, resolved, visited);
            }
        }
    }

    /// Gets all the direct dependencies of the given project which can be resolved,
    /// including the dependencies inherited from all of its ancestors.
    ///
    /// The parent of every ancestor is resolved in the context of `pom` itself,
    /// so `${project.version}` within a grandparent reference expands to the
    /// version of `pom`.
    fn effective_dependencies(&mut self, pom: &Arc<Pom>) -> Vec<ResolvedDependency> {
        let mut effective = Vec::new();
        let mut current = Some(Arc::clone(pom));
        let mut depth = 0;

        while let Some(level) = current.take() {
            tracing::debug!(project = %level, "adding dependencies for project");

            let direct = self.resolve_direct_dependencies(&level);
            add_inherited_dependencies(direct, &mut effective);

            let Some(parent) = level.parent.as_ref() else {
                break;
            };

            if depth >= MAX_PARENT_DEPTH {
                tracing::warn!(project = %pom, "parent chain is too deep, possibly cyclic");
                break;
            }

            depth += 1;

            current = self
                .resolve_coordinate(parent, pom)
                .and_then(|parent| self.store.descriptor(&parent));
        }

        effective
    }

    /// Resolves the dependencies declared directly on the given project, without
    /// any inherited dependencies.
    fn resolve_direct_dependencies(&mut self, pom: &Pom) -> Vec<ResolvedDependency> {
        pom.dependencies
            .iter()
            .filter_map(|dependency| {
                let coordinate = self.resolve_coordinate(&dependency.coordinate, pom)?;

                Some(ResolvedDependency {
                    coordinate,
                    scope: dependency.scope.clone(),
                })
            })
            .collect()
    }
}

/// Adds the dependencies of an ancestor project to the `current` dependencies.
///
/// An inherited dependency is ignored if `current` already has a dependency on the
/// same artifact, regardless of which version either of them refers to.
pub(crate) fn add_inherited_dependencies(inherited: Vec<ResolvedDependency>, current: &mut Vec<ResolvedDependency>) {
    for dependency in inherited {
        if current
            .iter()
            .any(|existing| existing.coordinate.is_same_artifact(&dependency.coordinate))
        {
            tracing::debug!(%dependency, "skipping inherited dependency, which is already declared");
            continue;
        }

        current.push(dependency);
    }
}

/// Removes all dependencies whose scope is not carried into the resolved output.
pub(crate) fn filter_by_scope(dependencies: Vec<ResolvedDependency>) -> Vec<ResolvedDependency> {
    dependencies
        .into_iter()
        .filter(|dependency| {
            let include = dependency.has_included_scope();

            if !include {
                tracing::debug!(%dependency, "skipping dependency because of its scope");
            }

            include
        })
        .collect()
}

/// Merges the given dependencies into `resolved`.
///
/// If both lists contain the same artifact, the one with the highest version is
/// kept. Versions are compared as plain strings, so `9.0` is considered newer
/// than `10.0`. A replaced dependency is moved to the end of the list.
pub(crate) fn merge_latest_version(candidates: Vec<ResolvedDependency>, resolved: &mut Vec<ResolvedDependency>) {
    for candidate in candidates {
        let Some(index) = resolved
            .iter()
            .position(|existing| existing.coordinate.is_same_artifact(&candidate.coordinate))
        else {
            resolved.push(candidate);
            continue;
        };

        let existing = &resolved[index];

        if existing.coordinate.version == candidate.coordinate.version {
            tracing::debug!(dependency = %existing, "dependency already included");
            continue;
        }

        if existing.coordinate.version > candidate.coordinate.version {
            tracing::debug!(
                options = ?[&candidate.coordinate.version, &existing.coordinate.version],
                selected = %existing.coordinate,
                "resolving version conflict"
            );
        } else {
            tracing::debug!(
                options = ?[&candidate.coordinate.version, &existing.coordinate.version],
                selected = %candidate.coordinate,
                "resolving version conflict"
            );

            resolved.remove(index);
            resolved.push(candidate);
        }
    }
}
