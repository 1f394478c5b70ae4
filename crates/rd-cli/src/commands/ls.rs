use anyhow::Result;
use rd_core::format;

use crate::context::Context;

/// List reminders in full, including ones scheduled for later
///
/// - Human-readable: ordinal, due time and text, one per line; reminders
///   not yet due show `--.` instead of an ordinal
/// - `--json`: the stored records, for scripting
/// - `--all`: completed reminders too
pub fn handle(ctx: &Context, all: bool, json: bool) -> Result<()> {
    let reminders = if all {
        ctx.store.list_all()
    } else {
        ctx.store.list_active()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reminders)?);
    } else {
        for line in format::render_detailed(&reminders, ctx.default_time(), ctx.now()) {
            println!("{}", line);
        }
    }

    Ok(())
}
