//! Text formatting utilities for the banner viewer.

use std::time::Duration;

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a duration as seconds with one decimal, or milliseconds below 1 s.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_duration(Duration::from_millis(5000)), "5.0 s");
/// assert_eq!(format_duration(Duration::from_millis(50)), "50 ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    if duration >= Duration::from_secs(1) {
        format!("{:.1} s", duration.as_secs_f32())
    } else {
        format!("{} ms", duration.as_millis())
    }
}

/// Formats a 1-based page position, e.g. `2 / 5`.
pub fn format_page(index: usize, count: usize) -> String {
    if count == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", index + 1, count)
    }
}

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
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(5000)), "5.0 s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5 s");
        assert_eq!(format_duration(Duration::from_millis(50)), "50 ms");
    }

    #[test]
    fn test_format_page() {
        assert_eq!(format_page(0, 3), "1 / 3");
        assert_eq!(format_page(0, 0), "0 / 0");
    }

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
