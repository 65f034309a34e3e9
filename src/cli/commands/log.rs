use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::Summary;
use crate::errors::AppResult;
use crate::models::event::now;
use crate::utils::format_duration;
use crate::utils::formatting::bold;

/// Print the time spent per ticket, in order of first appearance.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let events = open_ledger(cfg)?.read_all()?;
    let summary = Summary::build(&events, now());

    if summary.tickets.is_empty() {
        println!("Nothing to show (yet)");
        return Ok(());
    }

    for t in &summary.tickets {
        println!("{}\t{}", bold(&t.title), format_duration(t.duration));
    }

    Ok(())
}
