#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use crate::session::{
        accumulator::SessionAccumulator,
        stats::{
            PointValues,
            ReviewGrade,
            SessionStats,
        },
    };

    fn apply_signals(accumulator: &mut SessionAccumulator, signals: &[&str]) {
        for signal in signals {
            if let Some(grade) = ReviewGrade::from_signal(signal) {
                accumulator.apply_review(grade);
            }
        }
    }

    /// Backdate the last sync; skipped when the monotonic clock is too young
    /// to subtract from.
    fn backdated(secs: u64) -> Option<Instant> {
        Instant::now().checked_sub(Duration::from_secs(secs))
    }

    #[test]
    fn pending_totals_follow_configured_weights() {
        let values = PointValues::default();
        let mut accumulator = SessionAccumulator::new();

        apply_signals(&mut accumulator, &["easy", "good", "good", "hard", "fail", "fail"]);
        accumulator.apply_creation();

        assert_eq!(accumulator.stats().reviewed_easy, 1);
        assert_eq!(accumulator.stats().reviewed_good, 2);
        assert_eq!(accumulator.stats().reviewed_hard, 1);
        assert_eq!(accumulator.stats().reviewed_fail, 2);
        assert_eq!(accumulator.stats().cards_created, 1);
        assert_eq!(accumulator.stats().total_reviews(), 6);

        // 2.0 + 1.0 + 1.0 + 0.5 reviews, 5.0 for the created card.
        let expected_xp = 2.0 + 1.0 + 1.0 + 0.5 + 5.0;
        assert!((accumulator.pending_xp(&values) - expected_xp).abs() < 1e-9);
        assert!((accumulator.pending_hp_reduction(&values) - (-0.2)).abs() < 1e-9);
        assert!(accumulator.has_pending(&values));
    }

    #[test]
    fn unrecognized_grades_leave_everything_unchanged() {
        // The host can emit signals outside the known set; they are dropped
        // without contributing points or a counted review.
        assert_eq!(ReviewGrade::from_signal("skip"), None);
        assert_eq!(ReviewGrade::from_signal("EASY"), None);
        assert_eq!(ReviewGrade::from_signal(""), None);
        assert_eq!(ReviewGrade::from_score(2.0), None);
        assert_eq!(ReviewGrade::from_score(-1.0), None);

        let values = PointValues::default();
        let mut accumulator = SessionAccumulator::new();
        apply_signals(&mut accumulator, &["skip", "unknown", "EASY"]);

        assert_eq!(*accumulator.stats(), SessionStats::default());
        assert!((accumulator.pending_xp(&values) - 0.0).abs() < f64::EPSILON);
        assert!((accumulator.pending_hp_reduction(&values) - 0.0).abs() < f64::EPSILON);
        assert!(!accumulator.has_pending(&values));
    }

    #[test]
    fn named_grade_wins_over_score_and_does_not_fall_back() {
        assert_eq!(ReviewGrade::resolve(Some("hard"), Some(1.5)), Some(ReviewGrade::Hard));
        assert_eq!(ReviewGrade::resolve(Some("unknown"), Some(1.5)), None);
        assert_eq!(ReviewGrade::resolve(None, Some(1.5)), Some(ReviewGrade::Easy));
        assert_eq!(ReviewGrade::resolve(None, Some(0.0)), Some(ReviewGrade::Fail));
        assert_eq!(ReviewGrade::resolve(None, None), None);
    }

    #[test]
    fn weight_changes_mid_session_recompute_pending_totals() {
        let mut accumulator = SessionAccumulator::new();
        apply_signals(&mut accumulator, &["good", "good"]);

        let before = PointValues::default();
        assert!((accumulator.pending_xp(&before) - 2.0).abs() < 1e-9);

        let after = PointValues { xp_good: 3.0, ..PointValues::default() };
        assert!((accumulator.pending_xp(&after) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_zero_always_syncs() {
        let mut accumulator = SessionAccumulator::new();
        assert!(accumulator.should_sync_now(0.0));

        accumulator.reset();
        assert!(accumulator.should_sync_now(0.0));
    }

    #[test]
    fn frequency_gates_on_elapsed_minutes() {
        let mut accumulator = SessionAccumulator::new();
        assert!(!accumulator.should_sync_now(5.0));

        let Some(four_minutes_ago) = backdated(4 * 60) else {
            return;
        };
        accumulator.last_sync = four_minutes_ago;
        assert!(!accumulator.should_sync_now(5.0));

        let Some(five_minutes_ago) = backdated(5 * 60) else {
            return;
        };
        accumulator.last_sync = five_minutes_ago;
        assert!(accumulator.should_sync_now(5.0));
    }

    #[test]
    fn reset_zeroes_counters_and_stamps_the_sync_time() {
        let values = PointValues::default();
        let mut accumulator = SessionAccumulator::new();
        apply_signals(&mut accumulator, &["easy", "fail"]);
        accumulator.apply_creation();

        let Some(long_ago) = backdated(60 * 60) else {
            return;
        };
        accumulator.last_sync = long_ago;
        assert!(accumulator.should_sync_now(5.0));

        accumulator.reset();

        assert_eq!(*accumulator.stats(), SessionStats::default());
        assert!(!accumulator.has_pending(&values));
        assert!(!accumulator.should_sync_now(5.0));
    }

    #[test]
    fn zero_weights_mean_nothing_pending_even_with_counts() {
        let values = PointValues {
            xp_easy: 0.0,
            xp_good: 0.0,
            xp_hard: 0.0,
            hp_fail: 0.0,
            xp_per_created: 0.0,
        };

        let mut accumulator = SessionAccumulator::new();
        apply_signals(&mut accumulator, &["easy", "fail"]);

        assert!(!accumulator.has_pending(&values));
    }
}
