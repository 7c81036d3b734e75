//! Show command implementation

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::render_panel;
use crate::widget::{Panel, UpdateOutcome};

/// Run one widget cycle and print the panel.
///
/// Fetch failures are logged; the command still succeeds with whatever the
/// panel holds (cached values or placeholders).
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut widget = ctx.widget(Panel::default())?;

    match widget.update_once().await {
        UpdateOutcome::Placeholder => log::debug!("No stats endpoint configured"),
        UpdateOutcome::Updated(snapshot) => {
            log::debug!("Fetched stats at {}", snapshot.captured_at.to_rfc3339())
        }
        UpdateOutcome::Retained { from_cache, error } => log::debug!(
            "Fetch failed ({}); showing {}",
            error,
            if from_cache { "cached stats" } else { "placeholders" }
        ),
    }

    println!("{}", render_panel(widget.display(), ctx.format)?);
    Ok(())
}
