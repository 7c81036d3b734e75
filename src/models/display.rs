//! Display models for table/JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::widget::{Panel, PLACEHOLDER};

/// One row of the stats table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatRow {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VISITORS")]
    pub value: String,
}

/// Rows for the slots the panel actually has
pub fn panel_rows(panel: &Panel) -> Vec<StatRow> {
    [("Today", &panel.today), ("Total", &panel.total)]
        .into_iter()
        .filter_map(|(metric, value)| {
            value.as_ref().map(|v| StatRow {
                metric: metric.to_string(),
                value: v.clone(),
            })
        })
        .collect()
}

/// JSON view of the panel
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub today: String,
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Panel> for PanelView {
    fn from(panel: &Panel) -> Self {
        Self {
            today: panel
                .today
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            total: panel
                .total
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            hint: panel.hint.clone().filter(|h| !h.is_empty()),
        }
    }
}
