pub mod clear;
pub mod config;
pub mod info;
pub mod list;
pub mod log;
pub mod start;
pub mod stop;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::Ledger;

pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger> {
    Ledger::open(cfg.ledger_path())
}
