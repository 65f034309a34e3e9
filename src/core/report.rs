use crate::core::calculator::aggregate::{
    filter_separators, group_by_title, titles_by_first_occurrence, total_duration,
};
use crate::core::calculator::segments::compute_segments;
use crate::models::Event;
use chrono::{NaiveDateTime, TimeDelta};

/// Per-ticket totals, ordered by first appearance in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTotal {
    pub title: String,
    pub duration: TimeDelta,
}

/// Everything the `log` and `info` views need, derived in one pass.
#[derive(Debug, Clone)]
pub struct Summary {
    pub tickets: Vec<TicketTotal>,
    pub total: TimeDelta,
}

impl Summary {
    pub fn build(events: &[Event], now: NaiveDateTime) -> Self {
        let worked = filter_separators(&compute_segments(events, now));
        let grouped = group_by_title(&worked);

        let tickets = titles_by_first_occurrence(&worked)
            .into_iter()
            .map(|title| TicketTotal {
                duration: grouped.get(&title).copied().unwrap_or_else(TimeDelta::zero),
                title,
            })
            .collect();

        Summary {
            tickets,
            total: total_duration(&worked),
        }
    }

    /// Accumulated time of `title`, zero when it never ran.
    pub fn ticket_total(&self, title: &str) -> TimeDelta {
        self.tickets
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.duration)
            .unwrap_or_else(TimeDelta::zero)
    }

    /// Positive while time is still owed against `target`, negative once
    /// it has been exceeded.
    pub fn remaining(&self, target: TimeDelta) -> TimeDelta {
        target - self.total
    }
}
