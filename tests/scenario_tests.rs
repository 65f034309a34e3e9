use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use mate::core::calculator::aggregate::{filter_separators, group_by_title, total_duration};
use mate::core::calculator::segments::compute_segments;
use mate::core::{SessionController, Summary};
use mate::errors::AppError;
use mate::ledger::Ledger;
use mate::models::{Event, STOP, Segment, SessionState};
use std::collections::HashMap;
use tempfile::TempDir;

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

fn open() -> (TempDir, Ledger) {
    let dir = TempDir::new().expect("tempdir");
    let ledger = Ledger::open(dir.path().join("mate.csv")).expect("open ledger");
    (dir, ledger)
}

#[test]
fn empty_log_is_idle_with_no_segments() {
    let (_dir, ledger) = open();
    let events = ledger.read_all().unwrap();

    assert!(compute_segments(&events, t0()).is_empty());
    assert_eq!(SessionController::new(&ledger).current_status().unwrap(), STOP);
}

#[test]
fn open_ticket_runs_until_now() {
    let (_dir, ledger) = open();
    SessionController::new(&ledger).start_at("A", t0()).unwrap();

    let events = ledger.read_all().unwrap();
    let segments = compute_segments(&events, t0() + TimeDelta::minutes(30));

    assert_eq!(segments, vec![Segment::new("A", TimeDelta::minutes(30))]);
}

#[test]
fn stopped_ticket_then_resume() {
    let (_dir, ledger) = open();
    let ctl = SessionController::new(&ledger);
    ctl.start_at("A", t0()).unwrap();
    ctl.stop_at(t0() + TimeDelta::hours(1)).unwrap();

    let events = ledger.read_all().unwrap();
    assert_eq!(
        compute_segments(&events, t0() + TimeDelta::hours(3)),
        vec![Segment::new("A", TimeDelta::hours(1))]
    );
    assert_eq!(ctl.current_status().unwrap(), STOP);

    let resumed = ctl.resume_last_at(t0() + TimeDelta::hours(2)).unwrap();
    assert_eq!(resumed.title, "A");
    assert_eq!(ctl.current_status().unwrap(), "A");
    assert_eq!(
        SessionState::from_events(&ledger.read_all().unwrap()),
        SessionState::Working("A".into())
    );
}

#[test]
fn two_stops_leave_nothing_to_resume() {
    let (_dir, ledger) = open();
    ledger.append(&Event::new(t0(), "A")).unwrap();
    ledger
        .append(&Event::new(t0() + TimeDelta::hours(1), STOP))
        .unwrap();
    ledger
        .append(&Event::new(t0() + TimeDelta::hours(2), STOP))
        .unwrap();

    let result = SessionController::new(&ledger).resume_last_at(t0() + TimeDelta::hours(3));
    assert!(matches!(result, Err(AppError::NoPreviousTicket)));
}

#[test]
fn grouping_and_total() {
    let segments = vec![
        Segment::new("A", TimeDelta::minutes(5)),
        Segment::new("A", TimeDelta::minutes(10)),
        Segment::new("B", TimeDelta::minutes(2)),
    ];

    let expected: HashMap<String, TimeDelta> = [
        ("A".to_string(), TimeDelta::minutes(15)),
        ("B".to_string(), TimeDelta::minutes(2)),
    ]
    .into_iter()
    .collect();

    assert_eq!(group_by_title(&segments), expected);
    assert_eq!(total_duration(&segments), TimeDelta::minutes(17));
}

#[test]
fn switching_tickets_ends_the_first_at_the_second_start() {
    let (_dir, ledger) = open();
    let ctl = SessionController::new(&ledger);
    ctl.start_at("A", t0()).unwrap();
    ctl.start_at("B", t0() + TimeDelta::minutes(25)).unwrap();

    let events = ledger.read_all().unwrap();
    assert!(events.iter().all(|e| !e.is_stop()));

    let segments = compute_segments(&events, t0() + TimeDelta::minutes(40));
    assert_eq!(
        segments,
        vec![
            Segment::new("A", TimeDelta::minutes(25)),
            Segment::new("B", TimeDelta::minutes(15)),
        ]
    );
}

#[test]
fn full_day_roundtrip_through_the_file() {
    let (_dir, ledger) = open();
    let ctl = SessionController::new(&ledger);
    let at = |m: i64| t0() + TimeDelta::minutes(m);

    ctl.start_at("A", at(0)).unwrap();
    ctl.stop_at(at(45)).unwrap();
    ctl.resume_last_at(at(60)).unwrap();
    ctl.start_at("B", at(90)).unwrap();
    ctl.stop_at(at(120)).unwrap();

    let events = ledger.read_all().unwrap();
    let worked = filter_separators(&compute_segments(&events, at(500)));
    let grouped_sum = group_by_title(&worked)
        .values()
        .fold(TimeDelta::zero(), |acc, d| acc + *d);

    assert_eq!(grouped_sum, total_duration(&worked));
    assert_eq!(total_duration(&worked), TimeDelta::minutes(105));

    let summary = Summary::build(&events, at(500));
    assert_eq!(SessionState::from_events(&events), SessionState::Idle);
    assert_eq!(summary.tickets.len(), 2);
    assert_eq!(summary.tickets[0].title, "A");
    assert_eq!(summary.tickets[0].duration, TimeDelta::minutes(75));
    assert_eq!(summary.tickets[1].duration, TimeDelta::minutes(30));
}

#[test]
fn every_started_title_reads_back_as_last() {
    let (_dir, ledger) = open();
    let ctl = SessionController::new(&ledger);

    for (i, title) in ["A", "ticket with spaces", "x,y", "\"quoted\"", "émoji ✓"]
        .iter()
        .enumerate()
    {
        ctl.start_at(title, t0() + TimeDelta::minutes(i as i64)).unwrap();
        assert_eq!(ledger.read_all().unwrap().last().unwrap().title, *title);
    }
}
