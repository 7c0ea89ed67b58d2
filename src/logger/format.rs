//! Access log format module
//!
//! One line per request: `[YYYY-MM-DD HH:MM:SS] METHOD PATH STATUS`

use chrono::{DateTime, Local};

/// Access log entry containing the request/response information that gets logged
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Request timestamp
    pub time: DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path, without query string
    pub path: String,
    /// Response status code
    pub status: u16,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(method: &str, path: &str, status: u16) -> Self {
        Self {
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            status,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "[{}] {} {} {}",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.method,
            self.path,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let mut entry = AccessLogEntry::new("GET", "/api/status", 200);
        entry.time = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap();
        assert_eq!(entry.format(), "[2024-03-05 09:07:01] GET /api/status 200");
    }

    #[test]
    fn test_format_not_found() {
        let entry = AccessLogEntry::new("GET", "/api/unknown", 404);
        let log = entry.format();
        assert!(log.starts_with('['));
        assert!(log.ends_with("] GET /api/unknown 404"));
    }
}
