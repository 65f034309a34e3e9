use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, BufRead, Write};

const MAX_ATTEMPTS: usize = 3;

/// Ask until a recognised answer (y/Y/n/N/empty) is read, at most three
/// times. Only y/Y confirms.
fn ask_confirmation(input: &mut impl BufRead, prompt: &str) -> bool {
    for _ in 0..MAX_ATTEMPTS {
        print!("{prompt} [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        match input.read_line(&mut s) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }

        match s.trim_end_matches(['\r', '\n']) {
            "y" | "Y" => return true,
            "n" | "N" | "" => return false,
            _ => continue,
        }
    }
    false
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let confirmed =
            *yes || ask_confirmation(&mut io::stdin().lock(), "Empty all entries in the log?");

        if !confirmed {
            info("Command canceled");
            return Ok(());
        }

        let ledger = open_ledger(cfg)?;
        ledger.clear()?;
        success(format!("Log cleared: {}", ledger.path().display()));
    }

    Ok(())
}
