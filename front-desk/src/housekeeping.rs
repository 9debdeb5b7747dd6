//! Housekeeping task list

use chrono::NaiveDate;
use shared::models::HousekeepingTask;

/// Task list filter; empty fields match everything
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Created on or after this date
    pub start: Option<NaiveDate>,
    /// Created on or before this date
    pub end: Option<NaiveDate>,
    /// Task status, case-insensitive
    pub status: Option<String>,
    /// Room number substring
    pub room: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &HousekeepingTask) -> bool {
        if self.start.is_some() || self.end.is_some() {
            let Some(created) = task.created_at.map(|c| c.date()) else {
                return false;
            };
            if self.start.is_some_and(|s| created < s) || self.end.is_some_and(|e| created > e) {
                return false;
            }
        }

        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("select"));
        if let Some(status) = status
            && !task.task_status.eq_ignore_ascii_case(status)
        {
            return false;
        }

        let room = self.room.as_deref().map(str::trim).filter(|r| !r.is_empty());
        if let Some(room) = room
            && !task.room_number().is_some_and(|n| n.contains(room))
        {
            return false;
        }

        true
    }
}

pub fn filter_tasks<'a>(tasks: &'a [HousekeepingTask], filter: &TaskFilter) -> Vec<&'a HousekeepingTask> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// CSS-style class for a status label: `"In Progress"` → `"in-progress"`
pub fn status_class(status: &str) -> String {
    status
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
