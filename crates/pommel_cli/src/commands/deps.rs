use error_snippet::Result;

#[derive(Debug, clap::Parser)]
#[command(name = "deps", about = "Prints the resolved dependencies of a project", long_about = None)]
pub struct DepsCommand {
    #[command(flatten)]
    pub resolve: super::ResolveOptions,
}

impl DepsCommand {
    pub(crate) fn run(&self) -> Result<()> {
        let (root, mut resolver) = self.resolve.resolver()?;

        for dependency in resolver.resolve_dependencies(&root, !self.resolve.direct) {
            println!("{dependency}");
        }

        Ok(())
    }
}
