use super::event::Event;

/// What is happening right now, derived from the last event of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Working(String),
}

impl SessionState {
    pub fn from_events(events: &[Event]) -> Self {
        match events.last() {
            Some(last) if !last.is_stop() => SessionState::Working(last.title.clone()),
            _ => SessionState::Idle,
        }
    }
}
