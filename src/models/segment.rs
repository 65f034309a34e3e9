use chrono::TimeDelta;

/// Time spent under one title between two consecutive events, or between
/// the last event and "now" for the open trailing segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub title: String,
    pub duration: TimeDelta,
}

impl Segment {
    pub fn new(title: impl Into<String>, duration: TimeDelta) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.title == super::STOP
    }
}
