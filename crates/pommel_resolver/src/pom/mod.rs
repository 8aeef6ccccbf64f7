use std::fmt::Display;
use std::path::Path;

use error_snippet::Result;
use indexmap::IndexMap;
use pommel_errors::IntoDiagnostic;

use crate::coord::{Dependency, RawCoordinate};
use crate::errors::*;

mod parser;

#[cfg(test)]
mod tests;

/// Packaging type which is assumed, when a descriptor doesn't declare any.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Packaging types which are backed by a binary `.jar` artifact.
pub const BINARY_PACKAGING: &[&str] = &["jar", "bundle"];

/// A parsed project descriptor (`.pom` file).
///
/// Only the parts of the descriptor which affect dependency resolution are kept.
/// The coordinate fields of the project itself may be missing, in which case
/// they are inherited from the parent at the time of use.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,

    /// Defines the parent project, which this project inherits from.
    pub parent: Option<RawCoordinate>,

    /// Defines the packaging type of the project, such as `jar` or `pom`.
    pub packaging: Option<String>,

    /// Defines the dependencies of the project, in declaration order.
    pub dependencies: Vec<Dependency>,

    /// Defines the entries of the `<dependencyManagement>` section, which are
    /// used only for looking up versions of dependencies.
    pub dependency_management: Vec<Dependency>,

    /// Defines the properties of the project.
    pub properties: IndexMap<String, String>,
}

impl Pom {
    /// Parses the given XML document into a [`Pom`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the document is not well-formed XML or if the
    /// root element is not `<project>`.
    pub fn parse(source: &str) -> Result<Pom> {
        parser::parse(source)
    }

    /// Reads and parses the descriptor at the given path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if it contains
    /// an invalid descriptor.
    pub fn load(path: &Path) -> Result<Pom> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                return Err(DescriptorIoError {
                    path: path.to_path_buf(),
                    inner: vec![err.into_diagnostic()],
                }
                .into());
            }
        };

        Pom::parse(&source)
    }

    /// Gets the packaging type of the project, defaulting to [`DEFAULT_PACKAGING`].
    pub fn packaging(&self) -> &str {
        self.packaging.as_deref().unwrap_or(DEFAULT_PACKAGING)
    }

    /// Determines whether the project produces a binary `.jar` artifact.
    pub fn has_binary(&self) -> bool {
        BINARY_PACKAGING.contains(&self.packaging())
    }

    /// Finds the first entry in the dependency management section, which refers
    /// to the given group and artifact.
    pub fn managed_dependency(&self, group_id: &str, artifact_id: &str) -> Option<&Dependency> {
        self.dependency_management.iter().find(|dep| {
            dep.coordinate.group_id.as_deref() == Some(group_id)
                && dep.coordinate.artifact_id.as_deref() == Some(artifact_id)
        })
    }

    /// Gets the raw coordinate of the project itself, as written.
    pub fn raw_coordinate(&self) -> RawCoordinate {
        RawCoordinate {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
        }
    }
}

impl Display for Pom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.raw_coordinate().fmt(f)
    }
}
