use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::calculator::segments::compute_segments;
use crate::errors::AppResult;
use crate::models::event::now;
use crate::utils::format_duration;
use crate::utils::formatting::dimmed;

/// Print every segment; STOP spans render as the configured separator.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let events = open_ledger(cfg)?.read_all()?;
    let segments = compute_segments(&events, now());

    if segments.is_empty() {
        println!("Nothing to show (yet)");
        return Ok(());
    }

    for s in &segments {
        if s.is_separator() {
            println!("{}", dimmed(&cfg.separator));
        } else {
            println!("{}\t{}", s.title, format_duration(s.duration));
        }
    }

    Ok(())
}
