use chrono::{Local, NaiveDateTime, Timelike};

/// Reserved title marking the end of a work session.
pub const STOP: &str = "STOP";

/// On-disk timestamp layout: `YYYY/MM/DD hh:mm:ss`, local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: NaiveDateTime, // ⇔ "timestamp" column
    pub title: String,            // ⇔ "title" column (ticket name or STOP)
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, title: impl Into<String>) -> Self {
        Self {
            timestamp,
            title: title.into(),
        }
    }

    pub fn is_stop(&self) -> bool {
        self.title == STOP
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
    }
}

/// Local wall-clock "now", truncated to the precision stored in the log.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_uses_zero_padded_24h_layout() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let ev = Event::new(ts, "TICKET-1");

        assert_eq!(ev.timestamp_str(), "2024/03/05 09:15:00");
        assert_eq!(Event::parse_timestamp("2024/03/05 09:15:00"), Some(ts));
    }

    #[test]
    fn parse_timestamp_rejects_other_layouts() {
        assert!(Event::parse_timestamp("2024-03-05T09:15:00").is_none());
        assert!(Event::parse_timestamp("2024/03/05 9:15").is_none());
        assert!(Event::parse_timestamp("").is_none());
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn stop_detection() {
        let ts = now();
        assert!(Event::new(ts, STOP).is_stop());
        assert!(!Event::new(ts, "stop").is_stop());
    }
}
