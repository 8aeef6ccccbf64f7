pub extern crate error_snippet_derive;

pub use error_snippet::{Diagnostic, Error, GraphicalRenderer, IntoDiagnostic, Result, SimpleDiagnostic};
use error_snippet::Renderer;
pub use error_snippet_derive::Diagnostic;

/// Renders the given diagnostic, along with all of its causes, into a [`String`]
/// using the graphical renderer.
///
/// Returns [`None`] if the renderer failed to format the diagnostic.
pub fn render(diag: &Error) -> Option<String> {
    let mut renderer = GraphicalRenderer::new();

    renderer.render(diag.as_ref()).ok()
}

/// Renders the given diagnostic to the standard error output (`stderr`).
///
/// If the diagnostic cannot be rendered graphically, falls back to printing
/// the plain message of the diagnostic.
pub fn render_stderr(diag: &Error) {
    match render(diag) {
        Some(buffer) => eprint!("{buffer}"),
        None => eprintln!("error: {}", diag.message()),
    }
}

/// Wraps standard library errors into diagnostics.
pub trait MapDiagnostic<T> {
    /// Turns an `Err` into a new [`Diagnostic`] with the given message, which
    /// keeps the original error as its cause.
    fn map_cause(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync> MapDiagnostic<T> for std::result::Result<T, E> {
    fn map_cause(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| {
            let diag = SimpleDiagnostic::new(message).add_cause(err.into_diagnostic());

            Box::new(diag) as Error
        })
    }
}
