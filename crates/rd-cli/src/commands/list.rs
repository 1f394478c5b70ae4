use anyhow::Result;
use rd_core::format;

use crate::context::Context;

/// Print the short listing: newest due reminders first, truncated
pub fn handle(ctx: &Context) -> Result<()> {
    print_listing(ctx);
    Ok(())
}

/// Shared with `done`, which reprints what remains
pub fn print_listing(ctx: &Context) {
    let due = ctx.due_reminders();
    for line in format::render_listing(&due, ctx.display_limit()) {
        println!("{}", line);
    }
}
