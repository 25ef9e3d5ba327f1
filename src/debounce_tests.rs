//! Tests for the input debouncer

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_debouncer_has_nothing_pending() {
    let mut debouncer = Debouncer::new();
    assert!(!debouncer.has_pending());
    assert_eq!(debouncer.take_ready_at(0), None);
}

#[test]
fn test_schedule_sets_pending() {
    let mut debouncer = Debouncer::new();
    debouncer.schedule_at("cdg", 0);
    assert!(debouncer.has_pending());
    assert_eq!(debouncer.pending_query(), Some("cdg"));
}

#[test]
fn test_not_ready_within_window() {
    let mut debouncer = Debouncer::new();
    debouncer.schedule_at("cdg", 0);
    assert_eq!(debouncer.take_ready_at(DEBOUNCE_MS - 1), None);
    assert!(debouncer.has_pending());
}

#[test]
fn test_ready_after_window() {
    let mut debouncer = Debouncer::new();
    debouncer.schedule_at("cdg", 0);
    assert_eq!(debouncer.take_ready_at(DEBOUNCE_MS), Some("cdg".to_string()));
}

#[test]
fn test_yields_at_most_once() {
    let mut debouncer = Debouncer::new();
    debouncer.schedule_at("cdg", 0);

    assert!(debouncer.take_ready_at(DEBOUNCE_MS + 10).is_some());
    assert!(!debouncer.has_pending());
    assert_eq!(debouncer.take_ready_at(DEBOUNCE_MS + 500), None);
}

#[test]
fn test_reschedule_resets_timer_and_supersedes_query() {
    let mut debouncer = Debouncer::new();

    debouncer.schedule_at("cd", 0);
    // Retype within the window: "cd" must never be yielded
    debouncer.schedule_at("cdg", DEBOUNCE_MS / 2);

    assert_eq!(debouncer.take_ready_at(DEBOUNCE_MS), None);
    assert_eq!(
        debouncer.take_ready_at(DEBOUNCE_MS / 2 + DEBOUNCE_MS),
        Some("cdg".to_string())
    );
}

#[test]
fn test_cancel_drops_pending_query() {
    let mut debouncer = Debouncer::new();
    debouncer.schedule_at("cdg", 0);
    debouncer.cancel();

    assert!(!debouncer.has_pending());
    assert_eq!(debouncer.take_ready_at(DEBOUNCE_MS * 2), None);
}

#[test]
fn test_custom_window() {
    let mut debouncer = Debouncer::with_window(Duration::from_millis(50));
    debouncer.schedule_at("orly", 0);
    assert_eq!(debouncer.take_ready_at(49), None);
    assert_eq!(debouncer.take_ready_at(50), Some("orly".to_string()));
}

#[test]
fn test_wall_clock_entry_points() {
    let mut debouncer = Debouncer::with_window(Duration::from_millis(0));
    debouncer.schedule("gare");
    // Zero-width window: settled immediately
    assert_eq!(debouncer.take_ready(), Some("gare".to_string()));
}

// For any burst of keystrokes each landing inside the window, only the
// final value is yielded, and only after the window elapses from the
// last keystroke.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_burst_coalesces_to_final_value(
        gaps in prop::collection::vec(0u64..DEBOUNCE_MS, 1..12),
    ) {
        let mut debouncer = Debouncer::new();
        let mut now_ms = 0u64;

        for (i, gap) in gaps.iter().enumerate() {
            debouncer.schedule_at(format!("q{i}"), now_ms);

            // Mid-burst polls never fire
            prop_assert_eq!(debouncer.take_ready_at(now_ms), None);
            now_ms += gap;
        }

        let last = format!("q{}", gaps.len() - 1);
        let last_input = now_ms - gaps.last().unwrap();

        prop_assert_eq!(debouncer.take_ready_at(last_input + DEBOUNCE_MS - 1), None);
        prop_assert_eq!(
            debouncer.take_ready_at(last_input + DEBOUNCE_MS),
            Some(last)
        );
        prop_assert!(!debouncer.has_pending());
    }
}
