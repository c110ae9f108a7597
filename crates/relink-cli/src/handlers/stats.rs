//! Statistics command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the current conversion counters.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let snapshot = ctx.stats.snapshot().await;

    println!("Total conversions:      {}", snapshot.total_conversions);
    println!("Successful conversions: {}", snapshot.successful_conversions);
    println!("Failed conversions:     {}", snapshot.failed_conversions);
    match snapshot.last_conversion {
        Some(when) => println!("Last conversion:        {when}"),
        None => println!("Last conversion:        never"),
    }
    println!("Recording since:        {}", snapshot.started_at);
    println!("Uptime:                 {}s", snapshot.uptime_secs);

    Ok(())
}
