//! Running history of the notifications raised during this session.
//!
//! Toasts disappear after a few seconds; the log keeps them (with the time
//! they were shown) so a failed request can still be read afterwards.

use dioxus::prelude::*;

/// Oldest entries are dropped beyond this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "ok",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }

    pub(crate) fn class(&self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    /// Panel shows warnings and errors only.
    pub problems_only: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.into(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }

    /// Entries the panel should show, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.problems_only || matches!(e.level, LogLevel::Warning | LogLevel::Error))
            .cloned()
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_count() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Error, "Failed to load users");
        log.push(LogLevel::Info, "hello");
        log.push(LogLevel::Error, "Upload failed");
        assert_eq!(log.error_count(), 2);
    }

    #[test]
    fn test_oldest_entries_dropped() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 3 {
            log.push(LogLevel::Info, format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 3");
    }

    #[test]
    fn test_problems_only_filter() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "User added successfully!");
        log.push(LogLevel::Warning, "Please select a file");
        log.push(LogLevel::Error, "Upload failed");

        assert_eq!(log.shown().len(), 3);
        assert_eq!(log.shown()[0].message, "Upload failed");

        log.problems_only = true;
        let shown = log.shown();
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|e| e.level != LogLevel::Success));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = current_time();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }
}
