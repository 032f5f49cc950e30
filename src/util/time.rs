use chrono::{DateTime, Utc};

/// Get the current wall-clock time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO-8601 time truncated to seconds, with ':' replaced by '-' so it is safe in file names
pub fn file_stamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}
