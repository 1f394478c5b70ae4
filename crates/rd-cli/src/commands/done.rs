use anyhow::Result;
use rd_core::RdError;

use crate::commands::list;
use crate::context::Context;

/// Mark the reminder displayed as `number` done
///
/// `number` is the position in the current `rd` listing, which only holds
/// reminders that are due. It is resolved to the reminder's stable id before
/// the store is touched, so an out-of-range number fails without writing
/// anything.
pub fn handle(ctx: &mut Context, number: usize) -> Result<()> {
    let id = number
        .checked_sub(1)
        .and_then(|index| ctx.due_reminders().get(index).map(|r| r.id))
        .ok_or_else(|| RdError::NotFound(format!("no reminder with number {}", number)))?;

    let completed = ctx.store.mark_done(id)?;
    println!("Marking as done: {}", completed.text);

    println!();
    println!("____________________________");
    println!("These remain:");
    println!();
    list::print_listing(ctx);

    Ok(())
}
