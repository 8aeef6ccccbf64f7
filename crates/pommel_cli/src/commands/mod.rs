pub(crate) mod deps;
pub(crate) mod resolve;

use std::path::PathBuf;

use clap::ValueHint;
use error_snippet::Result;
use pommel_resolver::{ArtifactResolver, Coordinate, ResolverOptions};

pub(crate) use deps::DepsCommand;
pub(crate) use resolve::ResolveCommand;

#[derive(Debug, clap::Parser)]
pub struct ResolveOptions {
    /// Coordinate of the root artifact, as `groupId:artifactId:version`
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Only include the direct dependencies of the root artifact
    #[arg(long)]
    pub direct: bool,

    /// Directory where downloaded files are cached
    ///
    /// If not given, a new temporary directory is created.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub cache_dir: Option<PathBuf>,

    /// Root URL of the remote repository
    #[arg(long, value_name = "URL", value_hint = ValueHint::Url)]
    pub repository: Option<String>,
}

impl ResolveOptions {
    /// Gets the resolver options, where any flag overrides the environment.
    pub fn options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::from_env();

        if let Some(cache_dir) = &self.cache_dir {
            options = options.with_cache_dir(cache_dir);
        }

        if let Some(repository) = &self.repository {
            options = options.with_repository(repository);
        }

        options
    }

    /// Parses the root coordinate and creates a resolver from the options.
    pub fn resolver(&self) -> Result<(Coordinate, ArtifactResolver)> {
        let root = self.coordinate.parse::<Coordinate>()?;
        let resolver = ArtifactResolver::new(self.options())?;

        Ok((root, resolver))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[command(flatten)]
        options: ResolveOptions,
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "pommel",
            "org.example:lib:1.0",
            "--direct",
            "--cache-dir",
            "/tmp/cache",
            "--repository",
            "https://repo.example.com/releases/",
        ]);

        let options = cli.options.options();

        assert!(cli.options.direct);
        assert_eq!(options.cache_dir, Some(PathBuf::from("/tmp/cache")));
        assert_eq!(options.repository, "https://repo.example.com/releases/");
    }

    #[test]
    fn invalid_coordinate_is_rejected() {
        let cli = Cli::parse_from(["pommel", "org.example:lib", "--cache-dir", "/tmp/cache"]);

        assert!(cli.options.resolver().is_err());
    }
}
