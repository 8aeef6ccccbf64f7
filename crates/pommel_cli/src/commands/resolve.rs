use error_snippet::Result;

#[derive(Debug, clap::Parser)]
#[command(
    name = "resolve",
    about = "Downloads the artifacts of a project and its dependencies",
    long_about = None
)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub resolve: super::ResolveOptions,
}

impl ResolveCommand {
    /// Prints the local path of every resolved artifact, one per line.
    pub(crate) fn run(&self) -> Result<()> {
        let (root, mut resolver) = self.resolve.resolver()?;

        for path in resolver.jar_files(&root, !self.resolve.direct) {
            println!("{}", path.display());
        }

        Ok(())
    }
}
