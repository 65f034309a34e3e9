use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::{SessionController, StopOutcome};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;

    match SessionController::new(&ledger).stop()? {
        StopOutcome::Stopped(title) => success(format!("STOPPING {title}")),
        StopOutcome::NotWorking => info(
            "Not currently working on a ticket. Run:\n$ mate start [\"Ticket title\"]",
        ),
    }

    Ok(())
}
