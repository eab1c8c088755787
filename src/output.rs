//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::ActionRun;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Trait for human-readable key-value output.
///
/// Implemented by resource types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for ActionRun {
    fn pretty_print(&self) -> String {
        let header = format!("Run: {}", self.run_id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Status:         {}", self.status),
            format!("Event:          {}", self.event_type),
            format!("Branch:         {}", self.branch),
        ];

        if !self.commit_id.is_empty() {
            lines.push(format!("Commit:         {}", self.commit_id));
        }

        lines.push(format!("Started:        {}", self.start_time.format(TIME_FORMAT)));

        if let Some(ref end) = self.end_time {
            lines.push(format!("Ended:          {}", end.format(TIME_FORMAT)));
        }

        if let Some(duration) = self.duration() {
            lines.push(format!(
                "Duration:       {}.{:03}s",
                duration.num_seconds(),
                duration.num_milliseconds().rem_euclid(1000)
            ));
        }

        lines.join("\n")
    }
}
