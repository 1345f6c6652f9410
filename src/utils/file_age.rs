use chrono::{DateTime, Local};
use serde::Serialize;

/// Modification time of an input file and how old it is relative to `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAge {
    pub modified: DateTime<Local>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl FileAge {
    pub fn between(modified: DateTime<Local>, now: DateTime<Local>) -> Self {
        let diff = now.signed_duration_since(modified);
        let seconds = diff.num_seconds().max(0);
        Self {
            modified,
            days: seconds / 86_400,
            hours: (seconds % 86_400) / 3_600,
            minutes: (seconds % 3_600) / 60,
        }
    }

    pub fn since(modified: DateTime<Local>) -> Self {
        Self::between(modified, Local::now())
    }

    pub fn timestamp(&self) -> String {
        self.modified.format("%d-%b %Y %H:%M").to_string()
    }

    pub fn describe(&self) -> String {
        if self.days > 0 {
            format!("{} days ago", self.days)
        } else if self.hours > 0 {
            format!("{} hours ago", self.hours)
        } else {
            format!("{} mins ago", self.minutes)
        }
    }

    pub fn is_stale(&self, after_days: i64) -> bool {
        self.days >= after_days
    }
}
