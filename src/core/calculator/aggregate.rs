use crate::models::Segment;
use chrono::TimeDelta;
use std::collections::HashMap;

/// Drop STOP separators, keeping the relative order of the rest.
pub fn filter_separators(segments: &[Segment]) -> Vec<Segment> {
    segments
        .iter()
        .filter(|s| !s.is_separator())
        .cloned()
        .collect()
}

/// Sum durations per title. Iteration order of the result is unspecified.
pub fn group_by_title(segments: &[Segment]) -> HashMap<String, TimeDelta> {
    let mut grouped: HashMap<String, TimeDelta> = HashMap::new();
    for s in segments {
        *grouped.entry(s.title.clone()).or_insert_with(TimeDelta::zero) += s.duration;
    }
    grouped
}

pub fn total_duration(segments: &[Segment]) -> TimeDelta {
    segments
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.duration)
}

/// Titles in order of first appearance, for stable presentation.
pub fn titles_by_first_occurrence(segments: &[Segment]) -> Vec<String> {
    let mut seen = Vec::new();
    for s in segments {
        if !seen.contains(&s.title) {
            seen.push(s.title.clone());
        }
    }
    seen
}
