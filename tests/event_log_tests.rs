#![allow(missing_docs)]

use flocksim::simulation::event_log::{DEFAULT_CAPACITY, EventKind, EventLog};

#[test]
fn test_log_keeps_newest_first() {
    let mut log = EventLog::default();
    log.log(1, "spawned 3 boids", EventKind::Spawn);
    log.log(2, String::from("erased 1 boids"), EventKind::Erase);

    assert_eq!(log.len(), 2);
    let latest = log.latest().expect("two events logged");
    assert_eq!(latest.tick, 2);
    assert_eq!(latest.kind, EventKind::Erase);
    assert_eq!(log.events()[1].description, "spawned 3 boids");
}

#[test]
fn test_log_drops_oldest_over_capacity() {
    let mut log = EventLog::default();
    for tick in 0..(DEFAULT_CAPACITY as u64 + 5) {
        log.log(tick, format!("event {tick}"), EventKind::Control);
    }

    assert_eq!(log.len(), DEFAULT_CAPACITY);
    assert_eq!(log.events().back().map(|e| e.tick), Some(5));

    log.clear();
    assert!(log.is_empty());
    assert!(log.latest().is_none());
}
