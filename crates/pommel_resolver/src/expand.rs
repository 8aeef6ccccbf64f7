use crate::pom::Pom;

/// A variable which may be referenced from within a project descriptor,
/// using the `${name}` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable<'a> {
    /// `${project.version}`, or one of the obsolete forms `${pom.version}` and `${version}`.
    ProjectVersion,

    /// `${project.groupId}`, or one of the obsolete forms `${pom.groupId}` and `${groupId}`.
    ProjectGroupId,

    /// `${project.artifactId}`, or one of the obsolete forms `${pom.artifactId}` and `${artifactId}`.
    ProjectArtifactId,

    /// Any other name, which is looked up in the `<properties>` of the descriptor.
    Property(&'a str),
}

impl<'a> Variable<'a> {
    /// Attempts to parse a variable reference from the given value.
    ///
    /// The reference must span the entire value, so `${a}-${b}` or `v${a}` are
    /// not variable references and are returned as [`None`].
    pub fn parse(value: &'a str) -> Option<Self> {
        let name = value.strip_prefix("${")?.strip_suffix('}')?;

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }

        Some(Self::from_name(name))
    }

    fn from_name(name: &'a str) -> Self {
        match name {
            "project.version" | "pom.version" | "version" => Variable::ProjectVersion,
            "project.groupId" | "pom.groupId" | "groupId" => Variable::ProjectGroupId,
            "project.artifactId" | "pom.artifactId" | "artifactId" => Variable::ProjectArtifactId,
            _ => Variable::Property(name),
        }
    }

    /// Looks up the value of the variable within the given descriptor.
    pub fn lookup(self, pom: &Pom) -> Option<String> {
        let parent = pom.parent.as_ref();

        match self {
            Variable::ProjectVersion => pom
                .version
                .clone()
                .or_else(|| parent.and_then(|p| p.version.clone())),
            Variable::ProjectGroupId => pom
                .group_id
                .clone()
                .or_else(|| parent.and_then(|p| p.group_id.clone())),
            Variable::ProjectArtifactId => pom.artifact_id.clone(),
            Variable::Property(name) => pom.properties.get(name).cloned(),
        }
    }
}

/// Expands the given raw value against the given descriptor.
///
/// Literal values are returned unchanged. If the value is a variable reference
/// which cannot be resolved, returns [`None`].
pub fn expand(raw: Option<&str>, pom: &Pom) -> Option<String> {
    let raw = raw?;

    let Some(variable) = Variable::parse(raw) else {
        return Some(raw.to_string());
    };

    let Some(expanded) = variable.lookup(pom) else {
        tracing::warn!(variable = raw, project = %pom, "unrecognized project variable");
        return None;
    };

    tracing::debug!(variable = raw, value = %expanded, "expanded project variable");

    Some(expanded)
}
