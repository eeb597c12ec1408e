//! Time cursor
//!
//! The single piece of state deciding how much history is visible. A
//! `progress` value in [0, 100] is mapped through a fixed [`ProgressScale`]
//! to a `cutoff` instant; the cutoff is always derived, never stored.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::Commit;
use crate::scale::extent;

/// Lowest progress value
pub const MIN_PROGRESS: f64 = 0.0;
/// Highest progress value (full history)
pub const MAX_PROGRESS: f64 = 100.0;

/// Bounded number of one-microsecond nudges in [`ProgressScale::progress_at`]
const MAX_CORRECTIONS: usize = 4;

/// Monotonic mapping `progress ∈ [0, 100] → instant`
///
/// Built once from the extent of all commit instants. Resolution is one
/// microsecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressScale {
    start: DateTime<Utc>,
    span_micros: i64,
}

impl ProgressScale {
    /// Build the scale over `[min(datetime), max(datetime)]`.
    ///
    /// One distinct instant collapses the domain to that point; no commits
    /// collapse it to the current instant.
    pub fn from_commits(commits: &[Commit]) -> Self {
        match extent(commits.iter().map(Commit::instant)) {
            Some((start, end)) => Self::new(start, end),
            None => {
                let now = Utc::now();
                Self::new(now, now)
            }
        }
    }

    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let span_micros = ceil_micros(end - start).max(0);
        Self { start, span_micros }
    }

    /// Whether every progress value maps to the same instant
    pub fn is_degenerate(&self) -> bool {
        self.span_micros == 0
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + TimeDelta::microseconds(self.span_micros)
    }

    /// Instant at `progress` (clamped to [0, 100])
    pub fn instant_at(&self, progress: f64) -> DateTime<Utc> {
        let p = clamp_progress(progress).unwrap_or(MAX_PROGRESS);
        let offset = (p / MAX_PROGRESS * self.span_micros as f64).round() as i64;
        self.start + TimeDelta::microseconds(offset.clamp(0, self.span_micros))
    }

    /// Smallest progress whose instant is at or after `instant`
    pub fn progress_at(&self, instant: DateTime<Utc>) -> f64 {
        if instant <= self.start {
            return MIN_PROGRESS;
        }
        if self.is_degenerate() || instant >= self.end() {
            return MAX_PROGRESS;
        }

        let target = ceil_micros(instant - self.start).min(self.span_micros);
        let micro_step = MAX_PROGRESS / self.span_micros as f64;
        let mut progress = target as f64 / self.span_micros as f64 * MAX_PROGRESS;
        // Float error may land a microsecond short of the target
        for _ in 0..MAX_CORRECTIONS {
            if self.instant_at(progress) >= instant {
                return progress;
            }
            progress = (progress + micro_step).min(MAX_PROGRESS);
        }
        if self.instant_at(progress) >= instant {
            progress
        } else {
            MAX_PROGRESS
        }
    }
}

/// Whole microseconds in `delta`, rounded up (saturates on overflow)
fn ceil_micros(delta: TimeDelta) -> i64 {
    let Some(micros) = delta.num_microseconds() else {
        return i64::MAX;
    };
    let remainder = delta - TimeDelta::microseconds(micros);
    if remainder > TimeDelta::zero() {
        micros.saturating_add(1)
    } else {
        micros
    }
}

/// Clamp to [0, 100]; `None` for NaN
pub fn clamp_progress(progress: f64) -> Option<f64> {
    if progress.is_nan() {
        None
    } else {
        Some(progress.clamp(MIN_PROGRESS, MAX_PROGRESS))
    }
}

/// Progress value plus the fixed scale it is read through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeCursor {
    progress: f64,
    scale: ProgressScale,
}

impl TimeCursor {
    /// New cursor showing the full history
    pub fn new(scale: ProgressScale) -> Self {
        Self {
            progress: MAX_PROGRESS,
            scale,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn scale(&self) -> &ProgressScale {
        &self.scale
    }

    /// Current cutoff instant, derived from `progress`
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.scale.instant_at(self.progress)
    }

    /// Clamp and store `progress`. NaN is ignored.
    ///
    /// Returns whether the stored value changed.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        let Some(p) = clamp_progress(progress) else {
            return false;
        };
        let changed = p != self.progress;
        self.progress = p;
        changed
    }

    /// Progress that makes `instant` the cutoff (see [`ProgressScale::progress_at`])
    pub fn progress_for(&self, instant: DateTime<Utc>) -> f64 {
        self.scale.progress_at(instant)
    }
}
