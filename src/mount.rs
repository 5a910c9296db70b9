/// One-shot latch that flips to open after the first client-side render and
/// never closes again.
#[derive(Debug, Default)]
pub struct MountLatch {
    open: bool,
}

impl MountLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true only for the call that actually opened the latch.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }
}
