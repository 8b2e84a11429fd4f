use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

const DEFAULT_CAPACITY: usize = 64;

/// An uncaught error reported by the host page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fault {
    pub message: String,
    pub filename: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub stack: Option<String>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Incident {
    Fault(Fault),
    Capability(CapabilityError),
}

/// Last-resort sink for anything that went wrong on the page.
///
/// Every report is logged and kept in a bounded ring; nothing is ever
/// propagated back to the caller.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    recent: VecDeque<Incident>,
    capacity: usize,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Diagnostics {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    pub fn report_fault(&mut self, fault: Fault) {
        log::error!(
            "page error: {} ({}:{}:{}){}",
            fault.message,
            fault.filename.as_deref().unwrap_or("<unknown>"),
            fault.line.unwrap_or(0),
            fault.column.unwrap_or(0),
            fault
                .stack
                .as_deref()
                .map(|s| format!("\n{s}"))
                .unwrap_or_default(),
        );
        self.push(Incident::Fault(fault));
    }

    pub fn report_capability(&mut self, err: CapabilityError) {
        match &err {
            CapabilityError::ClipboardRejected(_) => log::error!("failed to copy text: {err}"),
            _ => log::warn!("{err}; feature disabled"),
        }
        self.push(Incident::Capability(err));
    }

    /// Log how long the page took to load.
    pub fn record_page_load(&self, fetch_start_ms: f64, load_end_ms: f64) {
        let elapsed = (load_end_ms - fetch_start_ms).max(0.0);
        log::info!("page load time: {elapsed:.0} ms");
    }

    /// Oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &Incident> {
        self.recent.iter()
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    fn push(&mut self, incident: Incident) {
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(incident);
    }
}
