use error_snippet::Result;
use indexmap::IndexMap;
use pommel_errors::IntoDiagnostic;
use roxmltree::{Document, Node};

use crate::coord::{Dependency, RawCoordinate};
use crate::errors::*;
use crate::pom::Pom;

/// Parses the given XML document into a [`Pom`].
///
/// Elements are matched by their local name, so descriptors with or without
/// the `http://maven.apache.org/POM/4.0.0` namespace are treated the same.
pub(crate) fn parse(source: &str) -> Result<Pom> {
    let document = match Document::parse(source) {
        Ok(document) => document,
        Err(err) => {
            return Err(MalformedDescriptor {
                inner: vec![err.into_diagnostic()],
            }
            .into());
        }
    };

    let project = document.root_element();

    if project.tag_name().name() != "project" {
        return Err(MissingProjectElement {
            found: project.tag_name().name().to_string(),
        }
        .into());
    }

    let dependency_management = child(project, "dependencyManagement")
        .map(dependencies)
        .unwrap_or_default();

    Ok(Pom {
        group_id: text_of(project, "groupId"),
        artifact_id: text_of(project, "artifactId"),
        version: text_of(project, "version"),
        parent: child(project, "parent").map(raw_coordinate),
        packaging: text_of(project, "packaging"),
        dependencies: dependencies(project),
        dependency_management,
        properties: child(project, "properties").map(properties).unwrap_or_default(),
    })
}

/// Finds the first child element of `node` with the given local name.
fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.is_element() && c.tag_name().name() == name)
}

/// Gets the trimmed text of the first child element with the given name.
///
/// Empty elements are treated the same as missing elements.
fn text_of(node: Node, name: &str) -> Option<String> {
    child(node, name).and_then(text)
}

fn text(node: Node) -> Option<String> {
    let text = node.text()?.trim();

    if text.is_empty() { None } else { Some(text.to_string()) }
}

fn raw_coordinate(node: Node) -> RawCoordinate {
    RawCoordinate {
        group_id: text_of(node, "groupId"),
        artifact_id: text_of(node, "artifactId"),
        version: text_of(node, "version"),
    }
}

/// Reads all `<dependency>` elements inside the `<dependencies>` child of `node`.
fn dependencies(node: Node) -> Vec<Dependency> {
    let Some(list) = child(node, "dependencies") else {
        return Vec::new();
    };

    list.children()
        .filter(|c| c.is_element() && c.tag_name().name() == "dependency")
        .map(|dep| Dependency {
            coordinate: raw_coordinate(dep),
            scope: child(dep, "scope").map(|scope| text(scope).unwrap_or_default()),
        })
        .collect()
}

/// Reads the `<properties>` section, where each child element defines a
/// single property. If a property is defined more than once, the last
/// definition wins.
fn properties(node: Node) -> IndexMap<String, String> {
    node.children()
        .filter(Node::is_element)
        .map(|prop| (prop.tag_name().name().to_string(), text(prop).unwrap_or_default()))
        .collect()
}
