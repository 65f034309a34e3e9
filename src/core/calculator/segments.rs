use crate::models::{Event, Segment};
use chrono::NaiveDateTime;

/// Turn an ordered event sequence into work segments.
///
/// Every adjacent pair of events yields one segment titled after the first
/// event, STOP included (those become separators downstream). When the last
/// event is not a STOP an open segment running until `now` is appended.
/// Events are expected in append order and are never re-sorted.
pub fn compute_segments(events: &[Event], now: NaiveDateTime) -> Vec<Segment> {
    let Some(last) = events.last() else {
        return Vec::new();
    };

    let mut segments: Vec<Segment> = events
        .windows(2)
        .map(|w| Segment::new(w[0].title.clone(), w[1].timestamp - w[0].timestamp))
        .collect();

    if !last.is_stop() {
        segments.push(Segment::new(last.title.clone(), now - last.timestamp));
    }

    segments
}
