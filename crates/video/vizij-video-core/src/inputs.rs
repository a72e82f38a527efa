//! Input contracts for the player core.
//!
//! Every DOM or media callback the widget listens to maps onto one
//! [`PlayerCommand`]. Adapters translate and pass them into
//! `VideoPlayer::dispatch()` (or batch them through [`Inputs`]).

use serde::{Deserialize, Serialize};

use crate::frame_loop::FrameHandle;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied in order.
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Pointer entered the player container.
    PointerEnter,
    /// Pointer left the player container.
    PointerLeave,
    TogglePlayPause,
    ToggleMute,
    ToggleFullscreen {
        /// Whether any element in the document is currently fullscreen.
        document_fullscreen: bool,
    },
    /// Range input moved to `time` seconds.
    Seek {
        time: f64,
    },
    /// Native `timeupdate` fired.
    TimeUpdate {
        current_time: f64,
    },
    /// The host requested a frame and got this handle back.
    FrameScheduled {
        handle: FrameHandle,
    },
    /// A requested animation frame fired. `paused` is the element's own
    /// flag, which also covers `ended` and pauses from outside the widget.
    AnimationFrame {
        current_time: f64,
        #[serde(default)]
        paused: bool,
    },
    /// `requestAnimationFrame` threw; the frame will never fire.
    FrameRequestFailed,
    /// Native `durationchange` fired.
    DurationChange {
        duration: f64,
    },
    /// Native `fullscreenchange` fired on the document.
    FullscreenChange {
        /// Whether this player's video is the fullscreen element.
        active: bool,
    },
    /// Widget is unmounting.
    Teardown,
}

impl PlayerCommand {
    /// Short name used in trace logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerEnter => "pointer_enter",
            Self::PointerLeave => "pointer_leave",
            Self::TogglePlayPause => "toggle_play_pause",
            Self::ToggleMute => "toggle_mute",
            Self::ToggleFullscreen { .. } => "toggle_fullscreen",
            Self::Seek { .. } => "seek",
            Self::TimeUpdate { .. } => "time_update",
            Self::FrameScheduled { .. } => "frame_scheduled",
            Self::AnimationFrame { .. } => "animation_frame",
            Self::FrameRequestFailed => "frame_request_failed",
            Self::DurationChange { .. } => "duration_change",
            Self::FullscreenChange { .. } => "fullscreen_change",
            Self::Teardown => "teardown",
        }
    }
}
