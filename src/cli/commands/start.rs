use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionController;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Start the given ticket, or resume the last one when no title is passed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { title } = cmd {
        let ledger = open_ledger(cfg)?;
        let ctl = SessionController::new(&ledger);

        let started = match title {
            Some(t) => ctl.start(t)?,
            None => ctl.resume_last()?,
        };

        success(format!("STARTING {}", started.title));
    }

    Ok(())
}
