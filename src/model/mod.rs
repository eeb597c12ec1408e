//! Data models for commitscope
//!
//! UI-independent data structures: line records loaded from the history
//! table, the commits aggregated from them, and user-facing notifications.

mod commit;
mod line_record;
mod notification;

pub use commit::{Commit, GITHUB_BASE_URL, commit_url, hour_fraction};
pub use line_record::LineRecord;
pub use notification::{Notification, NotificationKind};
