use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print, init } = &cli.command {
        if *init {
            let path = Config::init(cli.config.as_deref())?;
            success(format!("Config file: {}", path.display()));
        }

        if *print || !*init {
            info("Current configuration:");
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
