//! Per-tick entry accumulation.

use rewind_core::DataEntry;

/// Collects the entries reported during the current tick.
///
/// The capture loop pushes entries as host events arrive, then flushes
/// the whole batch into the persist pipeline at tick end. Flushing an
/// empty buffer yields an empty batch; empty ticks are recorded too, so
/// playback keeps real time.
#[derive(Debug, Default)]
pub struct CaptureBuffer {
    entries: Vec<DataEntry>,
}

impl CaptureBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one entry for the current tick.
    pub fn push(&mut self, entry: DataEntry) {
        self.entries.push(entry);
    }

    /// Number of entries queued for the current tick.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the queued entries, leaving the buffer ready for the next
    /// tick.
    pub fn flush(&mut self) -> Vec<DataEntry> {
        std::mem::take(&mut self.entries)
    }
}
