//! Watch command implementation

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::TerminalDisplay;
use crate::widget::Panel;

/// Start the widget and keep it refreshing until Ctrl-C
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let display = TerminalDisplay::new(Panel::default(), ctx.format);
    let widget = ctx.widget(display)?;
    let handle = widget.initialize();

    if !handle.is_running() {
        // Placeholder mode renders once and has nothing to refresh
        return Ok(());
    }

    log::info!(
        "Refreshing every {}s, press Ctrl-C to stop",
        ctx.settings.refresh_interval.as_secs()
    );
    tokio::signal::ctrl_c().await?;
    handle.shutdown().await;
    Ok(())
}
