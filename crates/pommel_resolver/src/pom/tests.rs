use super::*;

#[track_caller]
fn parse(input: &str) -> Pom {
    Pom::parse(input).unwrap()
}

#[test]
fn test_minimal_project() {
    let pom = parse(
        "<project>
            <groupId>org.example</groupId>
            <artifactId>lib</artifactId>
            <version>1.0</version>
        </project>",
    );

    assert_eq!(pom.group_id.as_deref(), Some("org.example"));
    assert_eq!(pom.artifact_id.as_deref(), Some("lib"));
    assert_eq!(pom.version.as_deref(), Some("1.0"));
    assert_eq!(pom.parent, None);
    assert_eq!(pom.packaging, None);
    assert_eq!(pom.packaging(), "jar");
    assert!(pom.has_binary());
    assert!(pom.dependencies.is_empty());
}

#[test]
fn test_namespaced_project() {
    let pom = parse(
        r#"<?xml version="1.0" encoding="UTF-8"?>
        <project xmlns="http://maven.apache.org/POM/4.0.0"
                 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
            <modelVersion>4.0.0</modelVersion>
            <groupId>org.example</groupId>
            <artifactId>lib</artifactId>
            <version>2.1</version>
            <packaging>bundle</packaging>
        </project>"#,
    );

    assert_eq!(pom.artifact_id.as_deref(), Some("lib"));
    assert_eq!(pom.packaging(), "bundle");
    assert!(pom.has_binary());
}

#[test]
fn test_pom_packaging_has_no_binary() {
    let pom = parse("<project><packaging>pom</packaging></project>");

    assert!(!pom.has_binary());
}

#[test]
fn test_parent_and_inherited_fields() {
    let pom = parse(
        "<project>
            <parent>
                <groupId>org.example</groupId>
                <artifactId>parent</artifactId>
                <version>3</version>
            </parent>
            <artifactId>child</artifactId>
        </project>",
    );

    assert_eq!(pom.group_id, None);
    assert_eq!(pom.version, None);
    assert_eq!(
        pom.parent,
        Some(RawCoordinate::new(Some("org.example"), Some("parent"), Some("3")))
    );
}

#[test]
fn test_dependencies_in_order() {
    let pom = parse(
        "<project>
            <dependencies>
                <dependency>
                    <groupId>a</groupId>
                    <artifactId>first</artifactId>
                    <version>${first.version}</version>
                </dependency>
                <dependency>
                    <groupId>b</groupId>
                    <artifactId>second</artifactId>
                    <scope>test</scope>
                </dependency>
                <dependency>
                    <groupId>c</groupId>
                    <artifactId>third</artifactId>
                    <version>1</version>
                    <scope></scope>
                </dependency>
            </dependencies>
        </project>",
    );

    let names = pom
        .dependencies
        .iter()
        .map(|d| d.coordinate.artifact_id.as_deref().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(pom.dependencies[0].coordinate.version.as_deref(), Some("${first.version}"));
    assert_eq!(pom.dependencies[0].scope, None);
    assert_eq!(pom.dependencies[1].coordinate.version, None);
    assert_eq!(pom.dependencies[1].scope.as_deref(), Some("test"));
    assert_eq!(pom.dependencies[2].scope.as_deref(), Some(""));
}

#[test]
fn test_dependency_management_is_separate() {
    let pom = parse(
        "<project>
            <dependencyManagement>
                <dependencies>
                    <dependency>
                        <groupId>g</groupId>
                        <artifactId>a</artifactId>
                        <version>1.0</version>
                    </dependency>
                </dependencies>
            </dependencyManagement>
        </project>",
    );

    assert!(pom.dependencies.is_empty());
    assert_eq!(pom.dependency_management.len(), 1);

    let managed = pom.managed_dependency("g", "a").unwrap();
    assert_eq!(managed.coordinate.version.as_deref(), Some("1.0"));

    assert!(pom.managed_dependency("g", "b").is_none());
    assert!(pom.managed_dependency("G", "a").is_none());
}

#[test]
fn test_properties() {
    let pom = parse(
        "<project>
            <properties>
                <slf4j.version>1.7.36</slf4j.version>
                <empty/>
                <slf4j.version>2.0.0</slf4j.version>
            </properties>
        </project>",
    );

    assert_eq!(pom.properties.len(), 2);
    assert_eq!(pom.properties.get("slf4j.version").map(String::as_str), Some("2.0.0"));
    assert_eq!(pom.properties.get("empty").map(String::as_str), Some(""));
}

#[test]
fn test_malformed_document() {
    assert!(Pom::parse("<project><groupId>g</project>").is_err());
    assert!(Pom::parse("").is_err());
}

#[test]
fn test_wrong_root_element() {
    let err = Pom::parse("<settings/>").unwrap_err();

    assert!(err.message().contains("<project>"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(Pom::load(&dir.path().join("missing.pom")).is_err());
}
