// crates/rd-core/src/format.rs - Listing Formatter
//
// Pure rendering of reminder lists into output lines. Nothing here touches
// stdout; the CLI prints whatever these functions return.
//
// The numbers shown next to active reminders are ordinals (1-based positions
// in the newest-first listing). `rd done N` resolves against the same
// ordering, so what the user sees is what they can complete.

use chrono::{NaiveDateTime, NaiveTime};

use crate::reminder::Reminder;

/// How many reminders the short listing shows before summarizing the rest
pub const DEFAULT_LIMIT: usize = 9;

/// Shown when there is nothing to list
pub const EMPTY_MESSAGE: &str = "No reminders right now!";

const DUE_COLUMN_WIDTH: usize = 19;

/// Render the short listing: the first `limit` reminders numbered from 1,
/// then a summary line counting the rest
pub fn render_listing(reminders: &[&Reminder], limit: usize) -> Vec<String> {
    if reminders.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    let mut lines: Vec<String> = reminders
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, reminder)| format!("{}. {}", index + 1, reminder.text))
        .collect();

    if reminders.len() > limit {
        lines.push(format!(
            "(There are {} other reminders.)",
            reminders.len() - limit
        ));
    }

    lines
}

/// Render the detailed listing used by `rd ls`
///
/// Every reminder gets a line. Reminders that are due at `now` carry the
/// same two-digit ordinal `rd` would show for them; completed ones and ones
/// not yet due carry `--.`. Scheduled reminders show when they fall due.
pub fn render_detailed(
    reminders: &[&Reminder],
    default_time: NaiveTime,
    now: NaiveDateTime,
) -> Vec<String> {
    if reminders.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    let mut ordinal = 0;
    reminders
        .iter()
        .map(|reminder| {
            let prefix = if reminder.is_active() && reminder.is_due(now, default_time) {
                ordinal += 1;
                format!("{:02}.", ordinal)
            } else {
                "--.".to_string()
            };

            let due = reminder
                .scheduled_for
                .map(|s| s.due_at(default_time).format("%I:%M %p %m/%d/%Y").to_string())
                .unwrap_or_default();

            format!(
                "{}  {:<width$}  {}",
                prefix,
                due,
                reminder.text,
                width = DUE_COLUMN_WIDTH
            )
        })
        .collect()
}

/// Long human-readable form of a due moment, e.g.
/// "09:00 AM Monday, October 19, 2026"
pub fn describe_due(due: NaiveDateTime) -> String {
    due.format("%I:%M %p %A, %B %-d, %Y").to_string()
}
