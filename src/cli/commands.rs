use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::cli::args::{Cli, Commands};
use crate::cli::{menu, output};
use crate::config::Settings;
use crate::errors::AppResult;

pub fn execute_command(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Config) => _config(),
        Some(Commands::ConfigTemplate) => {
            output::info(&Settings::template());
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => menu::run(&Settings::load()?, cli.empty),
    }
}

#[instrument]
fn _config() -> AppResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}
