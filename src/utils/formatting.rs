//! Text formatting utilities for the status bar.

use chrono::{DateTime, Local, Utc};
use sysinfo::{System, RefreshKind, ProcessRefreshKind, Pid};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
/// assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
/// ```
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Describes the last registry refresh in local time.
pub fn format_last_refresh(last: Option<DateTime<Utc>>, count: u64) -> String {
    match last {
        Some(at) => format!(
            "Last refresh: {} (#{})",
            at.with_timezone(&Local).format("%H:%M:%S"),
            count
        ),
        None => "Not refreshed yet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }

    #[test]
    fn test_format_last_refresh() {
        assert_eq!(format_last_refresh(None, 0), "Not refreshed yet");

        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let text = format_last_refresh(Some(at), 42);
        assert!(text.starts_with("Last refresh: "));
        assert!(text.ends_with("(#42)"));
    }
}
