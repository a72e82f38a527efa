//! Vizij Video Core (engine-agnostic)
//!
//! Playback state machine behind the Vizij video widget. Hosts translate user
//! input and native media callbacks into [`PlayerCommand`]s, feed them to
//! [`VideoPlayer::dispatch`], then apply the returned [`MediaEffect`]s to the
//! real media element and re-render from [`ControlsView`].

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod frame_loop;
pub mod inputs;
pub mod outputs;
pub mod state;
pub mod view;

// Re-exports for consumers (adapters)
pub use config::{CaptionTrack, Config, FullscreenSync};
pub use engine::VideoPlayer;
pub use error::PlayerError;
pub use format::format_time;
pub use frame_loop::{FrameDecision, FrameHandle, FrameLoop};
pub use inputs::{Inputs, PlayerCommand};
pub use outputs::{CoreEvent, MediaEffect, Outputs};
pub use state::{AudioStatus, DisplayMode, PlaybackStatus, PlayerState, PlayerStatus};
pub use view::{ControlsView, SeekRange};

/// Player result type
pub type Result<T> = core::result::Result<T, PlayerError>;
