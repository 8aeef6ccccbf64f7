pub(crate) mod commands;
mod tracing;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "pommel",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolves Maven dependencies into a list of local artifacts",
    long_about = None
)]
#[command(subcommand_required(true), arg_required_else_help(true))]
pub(crate) struct PommelCli {
    #[clap(subcommand)]
    pub subcommand: PommelSubcommands,

    #[arg(long = "trace", global = true, help = "Enables debug tracing of the resolver")]
    pub trace: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum PommelSubcommands {
    Resolve(commands::ResolveCommand),
    Deps(commands::DepsCommand),
}

pub fn pommel_cli_entry() {
    let matches = PommelCli::parse();

    tracing::register_console_tracer(matches.trace);

    let result = match matches.subcommand {
        PommelSubcommands::Resolve(cmd) => cmd.run(),
        PommelSubcommands::Deps(cmd) => cmd.run(),
    };

    if let Err(err) = result {
        pommel_errors::render_stderr(&err);
        std::process::exit(1);
    }
}
