use serde::{Deserialize, Serialize};

/// Identifier of one scheduled frame, mirroring a host animation-frame
/// request handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Coalescing frame scheduler: at most one pending paint per chart.
///
/// Requesting while a frame is pending merges into the outstanding request
/// instead of queueing a second one, so any number of state changes between
/// two host frames produces exactly one paint. The pending handle is an
/// explicit field so teardown can cancel exactly one outstanding request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<FrameHandle>,
    next_handle: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a paint on the next frame. Returns the pending handle;
    /// while one is already outstanding the same handle is returned and no
    /// new request is created.
    pub fn request(&mut self) -> FrameHandle {
        if let Some(handle) = self.pending {
            return handle;
        }

        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        handle
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending request at the frame boundary. Returns `None`
    /// when nothing was scheduled.
    pub fn take(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Drops any outstanding request. Safe to call repeatedly or when
    /// nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
