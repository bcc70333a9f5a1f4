//! Diagnostic events emitted while resolving and switching versions.
//!
//! Components take an `&dyn EventSink` instead of writing to a shared
//! subscriber list. The binary wires in [`TracingSink`]; tests use
//! [`CapturingSink`] and assert on what was recorded.

use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    InstalledListed { root: PathBuf, count: usize },
    PointerFound { path: PathBuf, at_home: bool },
    PointerMissing { stopped_at: PathBuf },
    /// Primary resolution failed; `reason` is the rendered error.
    FallbackToToolchain { reason: String },
    ToolchainQueried { program: PathBuf, version: Option<String> },
    PointerWritten { path: PathBuf, version: String, created: bool },
}

pub trait EventSink: Send + Sync {
    fn record(&self, event: &Event);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &Event) {
        match event {
            Event::InstalledListed { root, count } => {
                tracing::debug!(root = %root.display(), count, "enumerated installed sdks")
            }
            Event::PointerFound { path, at_home } => {
                tracing::debug!(path = %path.display(), at_home, "found global.json")
            }
            Event::PointerMissing { stopped_at } => {
                tracing::debug!(stopped_at = %stopped_at.display(), "no global.json found")
            }
            Event::FallbackToToolchain { reason } => {
                tracing::info!(%reason, "falling back to toolchain version query")
            }
            Event::ToolchainQueried { program, version } => match version {
                Some(v) => tracing::debug!(program = %program.display(), version = %v, "toolchain reported version"),
                None => tracing::warn!(program = %program.display(), "toolchain version query failed"),
            },
            Event::PointerWritten { path, version, created } => {
                tracing::info!(path = %path.display(), %version, created, "wrote global.json")
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct CapturingSink {
    events: Mutex<Vec<Event>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn contains(&self, pred: impl Fn(&Event) -> bool) -> bool {
        self.events().iter().any(pred)
    }
}

impl EventSink for CapturingSink {
    fn record(&self, event: &Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturing_sink_keeps_order() {
        let sink = CapturingSink::new();
        sink.record(&Event::PointerMissing { stopped_at: "/".into() });
        sink.record(&Event::FallbackToToolchain { reason: "no global.json found".into() });
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::PointerMissing { .. }));
        assert!(sink.contains(|e| matches!(e, Event::FallbackToToolchain { .. })));
    }
}
