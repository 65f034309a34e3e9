use crate::errors::{AppError, AppResult};
use crate::ledger::Ledger;
use crate::models::event::now;
use crate::models::{Event, STOP, SessionState};
use chrono::NaiveDateTime;

/// Result of a stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// A STOP was appended after this ticket.
    Stopped(String),
    /// Nothing was running; the log is unchanged.
    NotWorking,
}

/// Start/stop/resume semantics on top of the log tail.
///
/// There is no stored status: every decision is taken from the events read
/// just before acting. Concurrent invocations are not synchronized.
pub struct SessionController<'a> {
    ledger: &'a Ledger,
}

impl<'a> SessionController<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    pub fn start(&self, title: &str) -> AppResult<Event> {
        self.start_at(title, now())
    }

    /// Append `title` unconditionally. A ticket already running is not
    /// stopped first: its segment simply ends at this event's timestamp.
    pub fn start_at(&self, title: &str, at: NaiveDateTime) -> AppResult<Event> {
        let event = Event::new(at, title);
        self.ledger.append(&event)?;
        tracing::info!(title, "ticket started");
        Ok(event)
    }

    pub fn stop(&self) -> AppResult<StopOutcome> {
        self.stop_at(now())
    }

    pub fn stop_at(&self, at: NaiveDateTime) -> AppResult<StopOutcome> {
        let events = self.ledger.read_all()?;

        match SessionState::from_events(&events) {
            SessionState::Idle => {
                tracing::debug!("stop requested while idle");
                Ok(StopOutcome::NotWorking)
            }
            SessionState::Working(title) => {
                self.ledger.append(&Event::new(at, STOP))?;
                tracing::info!(title = %title, "ticket stopped");
                Ok(StopOutcome::Stopped(title))
            }
        }
    }

    pub fn resume_last(&self) -> AppResult<Event> {
        self.resume_last_at(now())
    }

    /// Restart the ticket that was running before the last STOP.
    ///
    /// Fails with `NoHistory` on an empty log, `AlreadyWorking` when a
    /// ticket is open, and `NoPreviousTicket` when the STOP is not preceded
    /// by a ticket (a lone STOP or two STOPs in a row).
    pub fn resume_last_at(&self, at: NaiveDateTime) -> AppResult<Event> {
        let events = self.ledger.read_all()?;

        let title = match events.as_slice() {
            [] => return Err(AppError::NoHistory),
            [.., last] if !last.is_stop() => {
                return Err(AppError::AlreadyWorking(last.title.clone()));
            }
            [_] => return Err(AppError::NoPreviousTicket),
            [.., previous, _] if previous.is_stop() => return Err(AppError::NoPreviousTicket),
            [.., previous, _] => previous.title.clone(),
        };

        tracing::debug!(title = %title, "resuming previous ticket");
        self.start_at(&title, at)
    }

    /// Title of the last event, or STOP for an empty log.
    pub fn current_status(&self) -> AppResult<String> {
        Ok(self
            .ledger
            .read_all()?
            .pop()
            .map(|e| e.title)
            .unwrap_or_else(|| STOP.to_string()))
    }
}
