use std::path::PathBuf;

use error_snippet::Error;
use error_snippet_derive::Diagnostic;

#[derive(Diagnostic, Debug)]
#[diagnostic(
    message = "invalid coordinate {input:?}",
    code = "POM0101",
    help = "coordinates are written as `groupId:artifactId:version`"
)]
pub struct InvalidCoordinate {
    pub input: String,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(message = "coordinate is missing its {field}", code = "POM0102")]
pub struct BlankCoordinateField {
    pub field: String,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(
    message = "coordinate {field} {value:?} is not a valid path segment",
    code = "POM0103",
    help = "coordinate parts may not contain path separators, `:` or be `.` or `..`"
)]
pub struct UnsafeCoordinateField {
    pub field: String,
    pub value: String,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(
    message = "invalid repository URL {url:?}",
    code = "POM0201",
    help = "the repository root must be an absolute `http` or `https` URL"
)]
pub struct InvalidRepositoryUrl {
    pub url: String,

    #[related(collection)]
    pub inner: Vec<Error>,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(message = "failed to create local cache directory", code = "POM0202")]
pub struct CacheDirectoryError {
    #[related(collection)]
    pub inner: Vec<Error>,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(message = "failed to read project descriptor {path:?}", code = "POM0301")]
pub struct DescriptorIoError {
    pub path: PathBuf,

    #[related(collection)]
    pub inner: Vec<Error>,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(message = "malformed project descriptor", code = "POM0302")]
pub struct MalformedDescriptor {
    #[related(collection)]
    pub inner: Vec<Error>,
}

#[derive(Diagnostic, Debug)]
#[diagnostic(
    message = "project descriptor has no <project> root element",
    code = "POM0303",
    help = "found root element <{found}>"
)]
pub struct MissingProjectElement {
    pub found: String,
}
