//! Rolling window of recently visited node kinds.

use smol_str::SmolStr;

use crate::profile::WINDOW_LEN;

/// Fixed-size FIFO of the last [`WINDOW_LEN`] node-kind labels seen on
/// enter events. Once full, the oldest entry is evicted; the window is
/// never reset mid-walk.
#[derive(Debug, Default)]
pub(crate) struct KindWindow {
    slots: [SmolStr; WINDOW_LEN],
    len: usize,
}

impl KindWindow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, kind: &str) {
        if self.len < WINDOW_LEN {
            self.slots[self.len] = SmolStr::new(kind);
            self.len += 1;
        } else {
            self.slots.rotate_left(1);
            self.slots[WINDOW_LEN - 1] = SmolStr::new(kind);
        }
    }

    /// True when the window is full and equals `pattern` exactly.
    pub(crate) fn matches(&self, pattern: &[SmolStr; WINDOW_LEN]) -> bool {
        self.len == WINDOW_LEN && &self.slots == pattern
    }
}
