//! Keeps the list pane's scroll position across a data refresh.
//!
//! The offset is captured when a fetch is issued and travels with the fetch.
//! Once the new schedule is committed the restore is only scheduled; it is
//! applied on the next render, after the pane has measured the new content,
//! because jumping before that would clamp against the old height.

use tracing::debug;

use super::components::Scrollable;

#[derive(Debug, Default)]
pub struct ScrollRestore {
    pending: Option<u16>,
}

impl ScrollRestore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current offset of the list pane, if one is on screen
    pub fn capture(region: Option<&Scrollable>) -> Option<u16> {
        region.map(Scrollable::offset)
    }

    /// Queue an offset for the next render; `None` leaves nothing pending
    pub fn schedule(&mut self, anchor: Option<u16>) {
        self.pending = anchor;
    }

    /// Drop any pending restore
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offset still waiting for a render, if any
    pub fn pending(&self) -> Option<u16> {
        self.pending
    }

    /// Apply the pending offset; call after `Scrollable::measure`
    pub fn apply_after_layout(&mut self, region: &mut Scrollable) {
        if let Some(offset) = self.pending.take() {
            region.jump_to(offset);
            if region.offset() != offset {
                debug!(requested = offset, applied = region.offset(), "Scroll restore clamped");
            }
        }
    }
}
