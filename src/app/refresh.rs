//! Time cursor operations and the view recomputation pipeline

use chrono::{DateTime, Utc};

use crate::model::Commit;
use crate::ui::views::{Brush, SelectionSummary, StepEnter};

use super::state::App;

impl App {
    /// Commits at or before the cutoff (a prefix of the time-sorted sequence)
    pub fn filtered_commits(&self) -> &[Commit] {
        &self.commits[..self.visible]
    }

    /// Move the cursor to `progress` (clamped) and recompute every view.
    ///
    /// NaN is ignored.
    pub fn set_progress(&mut self, progress: f64) {
        if progress.is_nan() {
            tracing::warn!("ignoring NaN progress");
            return;
        }
        self.cursor.set_progress(progress);
        tracing::debug!(
            progress = self.cursor.progress(),
            cutoff = %self.cursor.cutoff(),
            "time cursor moved"
        );
        self.recompute();
    }

    /// Move the cursor so that `instant` becomes the cutoff
    pub fn set_cutoff_by_instant(&mut self, instant: DateTime<Utc>) {
        let progress = self.cursor.progress_for(instant);
        self.set_progress(progress);
    }

    /// Nudge the cursor by `delta` progress units
    pub fn step_progress(&mut self, delta: f64) {
        self.set_progress(self.cursor.progress() + delta);
    }

    /// Recompute the filtered set and every derived view
    pub(crate) fn recompute(&mut self) {
        let cutoff = self.cursor.cutoff();
        self.visible = self.commits.partition_point(|c| c.instant() <= cutoff);

        let filtered = &self.commits[..self.visible];
        self.stats.refresh(filtered);
        self.scatter.update(filtered);
        let files = self
            .breakdown
            .rebind(filtered.iter().flat_map(|c| c.lines()));
        self.selection = SelectionSummary::default();

        tracing::debug!(
            visible = self.visible,
            total = self.commits.len(),
            files_entered = files.entered,
            files_exited = files.exited,
            "views recomputed"
        );
    }

    /// Replace the brush rectangle (chart space) and refresh the readouts
    pub fn set_brush(&mut self, brush: Option<Brush>) {
        self.scatter.set_brush(brush);
        self.on_brush_changed();
    }

    /// Refresh selection readouts after the brush moved
    pub(crate) fn on_brush_changed(&mut self) {
        let selected = self.scatter.selected();
        self.selection = SelectionSummary::compute(self.filtered_commits(), &selected);
        tracing::debug!(selected = self.selection.commits, "brush selection changed");
    }

    /// Follow a story step into the cursor
    pub(crate) fn on_step_enter(&mut self, event: Option<StepEnter>) {
        let Some(event) = event else {
            return;
        };
        let Some(instant) = self
            .story
            .step(event.index)
            .and_then(|step| self.commits.get(step.commit))
            .map(Commit::instant)
        else {
            return;
        };
        tracing::info!(
            step = event.index,
            direction = ?event.direction,
            "story step entered"
        );
        self.set_cutoff_by_instant(instant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::LineRecord;
    use chrono::DateTime;

    fn commit(id: &str, datetime: &str, lines: usize) -> Commit {
        let datetime = DateTime::parse_from_rfc3339(datetime).unwrap();
        let records = (0..lines)
            .map(|i| LineRecord {
                file: format!("{id}.js"),
                line: i as u32 + 1,
                kind: "js".to_string(),
                depth: 0,
                length: 10,
                commit: id.to_string(),
                author: "jw".to_string(),
                date: datetime,
                time: String::new(),
                timezone: "Z".to_string(),
                datetime,
            })
            .collect();
        Commit::from_lines(id.to_string(), "me/repo", records).unwrap()
    }

    fn app() -> App {
        App::new(
            vec![
                commit("a", "2024-02-01T10:00:00Z", 3),
                commit("b", "2024-02-02T10:00:00Z", 5),
                commit("c", "2024-02-03T10:00:00Z", 7),
            ],
            Config::default(),
        )
    }

    #[test]
    fn test_starts_with_full_history() {
        let app = app();
        assert_eq!(app.filtered_commits().len(), 3);
        assert_eq!(app.stats.stats().total_lines, 15);
        assert_eq!(app.scatter.points().len(), 3);
        assert_eq!(app.breakdown.groups().len(), 3);
    }

    #[test]
    fn test_set_progress_filters_every_view() {
        let mut app = app();
        app.set_progress(50.0);
        assert_eq!(app.filtered_commits().len(), 2);
        assert_eq!(app.stats.stats().total_commits, 2);
        assert_eq!(app.scatter.points().len(), 2);
        assert_eq!(app.breakdown.groups().len(), 2);

        app.set_progress(0.0);
        assert_eq!(app.filtered_commits().len(), 1);
    }

    #[test]
    fn test_set_progress_clamps_and_ignores_nan() {
        let mut app = app();
        app.set_progress(-5.0);
        assert_eq!(app.cursor().progress(), 0.0);
        app.set_progress(f64::NAN);
        assert_eq!(app.cursor().progress(), 0.0);
        app.set_progress(250.0);
        assert_eq!(app.cursor().progress(), 100.0);
    }

    #[test]
    fn test_cutoff_by_instant_includes_commit() {
        let mut app = app();
        let second = app.commits()[1].instant();
        app.set_cutoff_by_instant(second);
        assert_eq!(app.filtered_commits().len(), 2);
        assert!(app.cursor().cutoff() >= second);
    }

    #[test]
    fn test_step_progress() {
        let mut app = app();
        app.step_progress(-60.0);
        assert_eq!(app.cursor().progress(), 40.0);
        assert_eq!(app.filtered_commits().len(), 1);
    }
}
