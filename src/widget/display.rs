//! Display targets the widget writes into

use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::format::PLACEHOLDER;

/// A labeled text target on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Today,
    Total,
    Hint,
}

/// Host surface holding the rendered values.
///
/// A host may lack any slot; writes to a missing slot are dropped.
pub trait Display: Send {
    /// Current text of a slot, `None` when the slot does not exist
    fn text(&self, slot: Slot) -> Option<String>;

    /// Replace the text of a slot if it exists
    fn set_text(&mut self, slot: Slot, value: &str);

    /// Called after the widget finishes a render pass
    fn flush(&mut self) {}
}

/// In-memory host panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub today: Option<String>,
    pub total: Option<String>,
    pub hint: Option<String>,
}

impl Default for Panel {
    /// Both counters present with placeholder text, plus an empty hint
    fn default() -> Self {
        Self {
            today: Some(PLACEHOLDER.to_string()),
            total: Some(PLACEHOLDER.to_string()),
            hint: Some(String::new()),
        }
    }
}

impl Panel {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Today => &mut self.today,
            Slot::Total => &mut self.total,
            Slot::Hint => &mut self.hint,
        }
    }
}

impl Display for Panel {
    fn text(&self, slot: Slot) -> Option<String> {
        match slot {
            Slot::Today => self.today.clone(),
            Slot::Total => self.total.clone(),
            Slot::Hint => self.hint.clone(),
        }
    }

    fn set_text(&mut self, slot: Slot, value: &str) {
        if let Some(text) = self.slot_mut(slot) {
            *text = value.to_string();
        }
    }
}

/// Panel shared between a running widget and an observer
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct SharedPanel(Arc<Mutex<Panel>>);

#[allow(dead_code)]
impl SharedPanel {
    pub fn new(panel: Panel) -> Self {
        Self(Arc::new(Mutex::new(panel)))
    }

    /// Copy of the current panel state
    pub fn snapshot(&self) -> Panel {
        match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Display for SharedPanel {
    fn text(&self, slot: Slot) -> Option<String> {
        self.snapshot().text(slot)
    }

    fn set_text(&mut self, slot: Slot, value: &str) {
        let mut guard = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.set_text(slot, value);
    }
}
