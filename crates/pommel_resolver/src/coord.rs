use std::fmt::Display;
use std::str::FromStr;

use error_snippet::Result;

use crate::errors::*;

/// Scopes which are carried into the resolved dependency list. Any other
/// scope, such as `test` or `provided`, is only needed while building the
/// declaring project.
///
/// An absent scope is treated the same as an empty one.
pub const INCLUDED_SCOPES: &[&str] = &["", "compile", "runtime"];

/// Uniquely identifies a single version of a package.
///
/// All fields of a [`Coordinate`] are guaranteed to be non-blank, so it can be
/// used as a key for both the descriptor cache and the on-disk file layout.
/// Comparisons between coordinates are ordinal and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    /// Creates a new [`Coordinate`] from the given parts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the given parts is empty, consists only of whitespace
    /// or cannot be used as a path segment within the local cache directory.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let coordinate = Coordinate {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        };

        coordinate.validate()?;

        Ok(coordinate)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("groupId", &self.group_id),
            ("artifactId", &self.artifact_id),
            ("version", &self.version),
        ] {
            if value.trim().is_empty() {
                return Err(BlankCoordinateField {
                    field: field.to_string(),
                }
                .into());
            }

            if value == "." || value == ".." || value.contains(['/', '\\', ':']) {
                return Err(UnsafeCoordinateField {
                    field: field.to_string(),
                    value: value.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Determines whether both coordinates refer to the same artifact,
    /// regardless of which version they point to.
    pub fn is_same_artifact(&self, other: &Coordinate) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = error_snippet::Error;

    /// Parses a coordinate in the form of `groupId:artifactId:version`.
    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split(':').map(str::trim).collect::<Vec<_>>();

        let [group_id, artifact_id, version] = parts.as_slice() else {
            return Err(InvalidCoordinate { input: s.to_string() }.into());
        };

        Coordinate::new(*group_id, *artifact_id, *version)
    }
}

/// A coordinate as it is written within a project descriptor.
///
/// Any of the fields may be missing or contain an unexpanded `${...}`
/// placeholder, until resolved against the declaring descriptor.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RawCoordinate {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl RawCoordinate {
    pub fn new(group_id: Option<&str>, artifact_id: Option<&str>, version: Option<&str>) -> Self {
        RawCoordinate {
            group_id: group_id.map(String::from),
            artifact_id: artifact_id.map(String::from),
            version: version.map(String::from),
        }
    }
}

impl Display for RawCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let part = |value: &Option<String>| value.clone().unwrap_or_else(|| String::from("?"));

        write!(
            f,
            "{}:{}:{}",
            part(&self.group_id),
            part(&self.artifact_id),
            part(&self.version)
        )
    }
}

/// A dependency, as declared within a project descriptor.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub coordinate: RawCoordinate,

    /// Defines the raw scope of the dependency, if any.
    pub scope: Option<String>,
}

impl Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.coordinate.fmt(f)
    }
}

/// A dependency where the group, artifact and version have all been
/// resolved into literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub coordinate: Coordinate,

    /// Defines the scope of the dependency, as declared.
    pub scope: Option<String>,
}

impl ResolvedDependency {
    /// Determines whether the scope of the dependency is one which
    /// is carried into the resolved output.
    pub fn has_included_scope(&self) -> bool {
        let scope = self.scope.as_deref().unwrap_or_default();

        INCLUDED_SCOPES.contains(&scope)
    }
}

impl Display for ResolvedDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scope.as_deref() {
            Some(scope) if !scope.is_empty() => write!(f, "{} ({scope})", self.coordinate),
            _ => self.coordinate.fmt(f),
        }
    }
}
