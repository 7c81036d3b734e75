//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{PanelView, panel_rows};
use crate::widget::{Display, Panel, Slot};

pub mod formatters;
pub mod json;
pub mod table;

/// Render the panel in the requested format
pub fn render_panel(panel: &Panel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_json(&PanelView::from(panel))?),
        OutputFormat::Table => {
            let mut out = table::format_table(&panel_rows(panel));
            if let Some(hint) = panel.hint.as_deref().filter(|h| !h.is_empty()) {
                out.push('\n');
                out.push_str(hint);
            }
            Ok(out)
        }
        OutputFormat::Pretty => Ok(render_pretty(panel)),
    }
}

fn render_pretty(panel: &Panel) -> String {
    let mut lines = Vec::new();
    if let Some(ref today) = panel.today {
        lines.push(format!("{}  {}", "Today".dimmed(), today.bold()));
    }
    if let Some(ref total) = panel.total {
        lines.push(format!("{}  {}", "Total".dimmed(), total.bold()));
    }
    if let Some(hint) = panel.hint.as_deref().filter(|h| !h.is_empty()) {
        lines.push(hint.italic().to_string());
    }
    lines.join("\n")
}

/// Panel that reprints itself to stdout after every render pass
pub struct TerminalDisplay {
    panel: Panel,
    format: OutputFormat,
    last_printed: Option<Panel>,
}

impl TerminalDisplay {
    pub fn new(panel: Panel, format: OutputFormat) -> Self {
        Self {
            panel,
            format,
            last_printed: None,
        }
    }
}

impl Display for TerminalDisplay {
    fn text(&self, slot: Slot) -> Option<String> {
        self.panel.text(slot)
    }

    fn set_text(&mut self, slot: Slot, value: &str) {
        self.panel.set_text(slot, value);
    }

    fn flush(&mut self) {
        // Unchanged passes (e.g. a failed refresh) are not reprinted
        if self.last_printed.as_ref() == Some(&self.panel) {
            return;
        }
        match render_panel(&self.panel, self.format) {
            Ok(out) => {
                if self.format == OutputFormat::Pretty && self.last_printed.is_some() {
                    println!();
                }
                println!("{}", out);
                self.last_printed = Some(self.panel.clone());
            }
            Err(e) => log::warn!("Failed to render panel: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel {
        Panel {
            today: Some("1,234".to_string()),
            total: Some("56,789".to_string()),
            hint: Some(String::new()),
        }
    }

    #[test]
    fn test_render_pretty_contains_values() {
        colored::control::set_override(false);
        let out = render_panel(&panel(), OutputFormat::Pretty).unwrap();
        assert!(out.contains("Today  1,234"));
        assert!(out.contains("Total  56,789"));
    }

    #[test]
    fn test_render_table_appends_hint() {
        let mut panel = panel();
        panel.hint = Some("Visitor statistics have been removed.".to_string());
        let out = render_panel(&panel, OutputFormat::Table).unwrap();
        assert!(out.contains("56,789"));
        assert!(out.ends_with("Visitor statistics have been removed."));
    }

    #[test]
    fn test_render_json() {
        let out = render_panel(&panel(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["today"], "1,234");
        assert_eq!(value["data"]["total"], "56,789");
        assert!(value["data"].get("hint").is_none());
    }

    #[test]
    fn test_terminal_display_tracks_panel() {
        let mut display = TerminalDisplay::new(Panel::default(), OutputFormat::Json);
        display.set_text(Slot::Today, "7");
        assert_eq!(display.text(Slot::Today).as_deref(), Some("7"));
        display.flush();
        assert_eq!(display.last_printed.as_ref().and_then(|p| p.today.clone()).as_deref(), Some("7"));
    }
}
