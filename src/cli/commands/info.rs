use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::{SessionController, Summary};
use crate::errors::AppResult;
use crate::models::STOP;
use crate::models::event::now;
use crate::utils::format_duration;
use crate::utils::formatting::surplus;
use chrono::TimeDelta;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let target = cfg.daily_target()?;
    let ledger = open_ledger(cfg)?;
    let status = SessionController::new(&ledger).current_status()?;
    let summary = Summary::build(&ledger.read_all()?, now());

    if status == STOP {
        println!("Currently not working");
    } else {
        println!(
            "Working on {status} ({})",
            format_duration(summary.ticket_total(&status))
        );
    }

    let remaining = summary.remaining(target);
    if remaining > TimeDelta::zero() {
        let text = format!("Still {} to work", format_duration(remaining));
        println!("{}", surplus(&text, false));
    } else {
        let text = format!("You're done for today (+{})", format_duration(-remaining));
        println!("{}", surplus(&text, true));
    }

    Ok(())
}
