//! Animation-frame polling loop bookkeeping.
//!
//! The host owns the actual `requestAnimationFrame` calls; this type only
//! decides when to schedule, when to stop and what to cancel on teardown.
//! At most one frame is pending at any time.

use serde::{Deserialize, Serialize};

/// Host-issued frame request id (the value `requestAnimationFrame` returns).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub i32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FrameDecision {
    Reschedule,
    Stop,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    /// Requested but not yet fired (or handle not yet reported).
    requested: bool,
    pending: Option<FrameHandle>,
    torn_down: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// A time update arrived. Returns true when a new frame must be requested.
    pub fn on_time_update(&mut self, playing: bool) -> bool {
        if self.torn_down || self.requested || !playing {
            return false;
        }
        self.requested = true;
        true
    }

    /// The host reports the id of the frame it just requested.
    pub fn scheduled(&mut self, handle: FrameHandle) {
        if self.requested {
            self.pending = Some(handle);
        }
    }

    /// The pending frame fired. `keep_polling` is false once the media stopped
    /// advancing, whatever the reason.
    pub fn on_frame(&mut self, keep_polling: bool) -> FrameDecision {
        self.pending = None;
        if self.torn_down || !keep_polling {
            self.requested = false;
            return FrameDecision::Stop;
        }
        self.requested = true;
        FrameDecision::Reschedule
    }

    /// The host could not request the frame. The next time update may start
    /// a new chain.
    pub fn request_failed(&mut self) {
        self.requested = false;
        self.pending = None;
    }

    /// Stop the loop for good. Returns the frame the host must cancel.
    pub fn teardown(&mut self) -> Option<FrameHandle> {
        self.torn_down = true;
        self.requested = false;
        self.pending.take()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.requested
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_chain_while_playing() {
        let mut fl = FrameLoop::new();
        assert!(fl.on_time_update(true));
        fl.scheduled(FrameHandle(1));
        // Further time updates do not start a second chain.
        assert!(!fl.on_time_update(true));
        assert_eq!(fl.on_frame(true), FrameDecision::Reschedule);
        assert!(fl.pending().is_none());
        assert!(fl.is_active());
    }

    #[test]
    fn stops_when_paused_and_restarts_on_next_update() {
        let mut fl = FrameLoop::new();
        assert!(fl.on_time_update(true));
        fl.scheduled(FrameHandle(7));
        assert_eq!(fl.on_frame(false), FrameDecision::Stop);
        assert!(!fl.is_active());
        assert!(!fl.on_time_update(false));
        assert!(fl.on_time_update(true));
    }

    #[test]
    fn teardown_cancels_pending_and_blocks_reschedule() {
        let mut fl = FrameLoop::new();
        fl.on_time_update(true);
        fl.scheduled(FrameHandle(3));
        assert_eq!(fl.teardown(), Some(FrameHandle(3)));
        assert_eq!(fl.on_frame(true), FrameDecision::Stop);
        assert!(!fl.on_time_update(true));
        assert_eq!(fl.teardown(), None);
    }

    #[test]
    fn failed_request_allows_restart() {
        let mut fl = FrameLoop::new();
        assert!(fl.on_time_update(true));
        fl.request_failed();
        assert!(!fl.is_active());
        assert!(fl.on_time_update(true));
    }
}
