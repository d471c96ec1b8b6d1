//! Timer completion alerts: terminal bell everywhere, system notification on macOS

#[cfg(target_os = "macos")]
use std::process::Command;
use std::io::Write;

/// Notify that a work interval finished
pub fn notify_work_done(task_name: &str) {
    notify("Optimus - Work Complete", &format!("Time for task {} completed", task_name));
}

/// Notify that a break finished
pub fn notify_break_done(task_name: &str) {
    notify("Optimus - Break Over", &format!("Break time from task {} ended", task_name));
}

fn notify(title: &str, message: &str) {
    // Bell goes to stderr so it doesn't disturb the alternate screen buffer
    let mut stderr = std::io::stderr();
    let _ = stderr.write_all(b"\x07");
    let _ = stderr.flush();

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            message.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (title, message);
    }
}
