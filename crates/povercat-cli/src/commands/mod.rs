//! Command dispatch and handler modules.

mod generate;
mod inspect;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            catalogs,
            package,
            output_dir,
            project_version,
        } => generate::exec(catalogs, package, output_dir, project_version),
        Command::Inspect { catalog } => inspect::exec(&catalog),
    }
}
