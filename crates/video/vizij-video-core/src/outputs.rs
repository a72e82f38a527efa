//! Output contracts from the player core.
//!
//! Effects are the side effects the host must perform on the media element or
//! document, in order. Events are semantic notifications for observers.

use serde::{Deserialize, Serialize};

use crate::frame_loop::FrameHandle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MediaEffect {
    Play,
    Pause,
    SetMuted(bool),
    RequestFullscreen,
    ExitFullscreen,
    SetCurrentTime(f64),
    /// Request one animation frame and report its handle back.
    ScheduleFrame,
    CancelFrame(FrameHandle),
}

/// Discrete semantic signals emitted while handling a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    PlaybackStarted,
    PlaybackPaused,
    MuteChanged { muted: bool },
    FullscreenChanged { active: bool },
    ControlsShown,
    ControlsHidden,
    TimeChanged { old_time: f64, new_time: f64 },
    DurationChanged { duration: f64 },
    Seeked { time: f64 },
    TornDown,
}

/// Outputs returned by `VideoPlayer::dispatch()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub effects: Vec<MediaEffect>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.effects.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_effect(&mut self, effect: MediaEffect) {
        self.effects.push(effect);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.events.is_empty()
    }
}
