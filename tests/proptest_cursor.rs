//! Property-based tests for the time cursor, the filtered set and the loader
//!
//! Uses proptest to check the cursor invariants over arbitrary histories.
//! Reference: https://lib.rs/crates/proptest

mod common;

use chrono::{SecondsFormat, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

use commitscope::app::App;
use commitscope::config::Config;
use commitscope::data::parse_records;
use commitscope::ui::views::TriggerLineTracker;

use common::History;

// =============================================================================
// Strategy generators
// =============================================================================

/// Commits as (offset after 2024-01-01, line count); duplicate instants allowed
///
/// Offsets mix whole minutes with seconds and nanoseconds, so instants that
/// fall between microseconds are covered too.
fn history_strategy() -> impl Strategy<Value = History> {
    let offset = (0i64..200_000, 0i64..60, prop_oneof![Just(0i64), 0i64..1_000_000_000]);
    prop::collection::vec((offset, 1u32..6), 1..12).prop_map(|commits| {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        commits
            .into_iter()
            .enumerate()
            .fold(History::new(), |history, (i, ((minutes, seconds, nanos), lines))| {
                let at = base
                    + TimeDelta::minutes(minutes)
                    + TimeDelta::seconds(seconds)
                    + TimeDelta::nanoseconds(nanos);
                let at = at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                history.commit(&format!("c{i}"), &at, lines)
            })
    })
}

fn progress_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

// =============================================================================
// Cursor properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// More progress never removes a previously visible commit
    #[test]
    fn filtered_set_grows_with_progress(
        history in history_strategy(),
        a in progress_strategy(),
        b in progress_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut app = App::new(history.commits(), Config::default());

        app.set_progress(lo);
        let before: Vec<String> = app.filtered_commits().iter().map(|c| c.id().to_string()).collect();
        app.set_progress(hi);
        let after: Vec<String> = app.filtered_commits().iter().map(|c| c.id().to_string()).collect();

        prop_assert!(before.len() <= after.len());
        prop_assert_eq!(&after[..before.len()], &before[..]);
    }

    /// Setting the same progress twice changes nothing
    #[test]
    fn set_progress_is_idempotent(history in history_strategy(), p in progress_strategy()) {
        let mut app = App::new(history.commits(), Config::default());

        app.set_progress(p);
        let cutoff = app.cursor().cutoff();
        let visible = app.filtered_commits().len();

        app.set_progress(p);
        prop_assert_eq!(app.cursor().cutoff(), cutoff);
        prop_assert_eq!(app.filtered_commits().len(), visible);
    }

    /// Moving the cutoff to a commit's instant always shows that commit
    #[test]
    fn cutoff_by_instant_round_trips(history in history_strategy(), pick in any::<prop::sample::Index>()) {
        let mut app = App::new(history.commits(), Config::default());
        let index = pick.index(app.commits().len());
        let target = app.commits()[index].clone();

        app.set_cutoff_by_instant(target.instant());

        prop_assert!(app.filtered_commits().iter().any(|c| c.id() == target.id()));
        let instant = app.cursor().scale().instant_at(app.cursor().progress());
        prop_assert!(instant >= target.instant());
    }

    /// The filtered set is always a prefix of the time-sorted commits
    #[test]
    fn filtered_set_respects_cutoff(history in history_strategy(), p in progress_strategy()) {
        let mut app = App::new(history.commits(), Config::default());
        app.set_progress(p);
        let cutoff = app.cursor().cutoff();
        let visible = app.filtered_commits().len();

        prop_assert!(app.commits()[..visible].iter().all(|c| c.instant() <= cutoff));
        prop_assert!(app.commits()[visible..].iter().all(|c| c.instant() > cutoff));
        prop_assert_eq!(app.stats.stats().total_commits, visible);
        prop_assert_eq!(app.scatter.points().len(), visible);
    }

    /// Trigger fractions outside [0, 1] still land on a row of the viewport
    #[test]
    fn trigger_line_stays_in_viewport(trigger in -2.0f64..3.0, height in 1usize..200) {
        use commitscope::ui::views::StepTracker;
        let tracker = TriggerLineTracker::new(trigger);
        prop_assert!(tracker.trigger_line(height) < height);
    }
}

#[test]
fn cutoff_by_instant_between_microseconds() {
    let history = History::new()
        .commit("c1", "2024-01-01T10:00:00Z", 2)
        .commit("c2", "2024-01-01T10:00:00.0000015Z", 3)
        .commit("c3", "2024-01-01T10:00:02Z", 1);
    let mut app = App::new(history.commits(), Config::default());

    let second = app.commits()[1].instant();
    app.set_cutoff_by_instant(second);

    let visible: Vec<&str> = app.filtered_commits().iter().map(|c| c.id()).collect();
    assert_eq!(visible, ["c1", "c2"]);
}

// =============================================================================
// Robustness: the loader never panics
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Arbitrary bytes produce Ok or Err, never a panic
    #[test]
    fn parse_records_does_not_panic(input in ".*") {
        let _ = parse_records(input.as_bytes());
    }

    /// Arbitrary field values under a valid header produce Ok or Err
    #[test]
    fn parse_records_handles_bad_fields(
        line in "[a-z0-9-]{0,6}",
        date in "[0-9-]{0,12}",
        timezone in "[+Z0-9:-]{0,7}",
        datetime in "[0-9T:+Z-]{0,26}",
    ) {
        let csv = format!(
            "{}\nc1,a.js,{line},js,0,1,jw,{date},00:00:00,{timezone},{datetime}\n",
            common::HEADER
        );
        let _ = parse_records(csv.as_bytes());
    }
}
