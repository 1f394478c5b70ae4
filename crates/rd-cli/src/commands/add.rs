use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use rd_core::format::describe_due;
use rd_core::Schedule;

use crate::context::Context;

/// Add a reminder from `rd add [day[@time]] <text...>`
///
/// The first word is tried as a schedule token. If it doesn't parse, it is
/// just the first word of the text. Text missing from the arguments is read
/// from piped stdin.
pub fn handle(ctx: &mut Context, words: &[String]) -> Result<()> {
    let (schedule, text_words) = split_schedule(words, ctx.today());

    let text = if text_words.is_empty() {
        crate::stdin::read_text_from_stdin()?
    } else {
        text_words.join(" ")
    };

    ctx.store.add(&text, schedule)?;

    println!("Added: {}", text.trim());
    if let Some(schedule) = schedule {
        println!("Due: {}", describe_due(schedule.due_at(ctx.default_time())));
    }

    Ok(())
}

/// Peel a leading schedule token off the words, if there is one
fn split_schedule(words: &[String], today: NaiveDate) -> (Option<Schedule>, &[String]) {
    let Some((first, rest)) = words.split_first() else {
        return (None, words);
    };

    match Schedule::parse(first, today) {
        Ok(schedule) => (Some(schedule), rest),
        Err(e) => {
            debug!("'{}' is not a schedule ({}), treating it as text", first, e);
            (None, words)
        }
    }
}
