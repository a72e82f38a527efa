//! Render model for the overlay control bar.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::format::format_time;
use crate::state::PlayerState;

pub const OVERLAY_VISIBLE: &str = "opacity-100";
pub const OVERLAY_HIDDEN: &str = "opacity-0";
pub const ICON_PAUSE: &str = "fi fi-sr-pause";
pub const ICON_PLAY: &str = "fi fi-sr-play";
pub const ICON_MUTED: &str = "fi fi-sr-volume-mute";
pub const ICON_UNMUTED: &str = "fi fi-sr-volume";
pub const ICON_FULLSCREEN: &str = "fi fi-sr-expand";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeekRange {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub step: f64,
}

/// Everything the overlay shows, derived from state on every render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ControlsView {
    pub overlay_class: &'static str,
    /// Pause icon while playing, play icon otherwise.
    pub play_icon: &'static str,
    pub mute_icon: &'static str,
    pub fullscreen_icon: &'static str,
    pub elapsed_label: String,
    pub total_label: String,
    pub range: SeekRange,
    pub muted: bool,
}

impl ControlsView {
    pub fn from_state(state: &PlayerState, cfg: &Config) -> Self {
        Self {
            overlay_class: if state.show_controls {
                OVERLAY_VISIBLE
            } else {
                OVERLAY_HIDDEN
            },
            play_icon: if state.is_playing { ICON_PAUSE } else { ICON_PLAY },
            mute_icon: if state.is_muted {
                ICON_MUTED
            } else {
                ICON_UNMUTED
            },
            fullscreen_icon: ICON_FULLSCREEN,
            elapsed_label: format_time(Some(state.current_time)),
            total_label: format_time(Some(state.duration)),
            range: SeekRange {
                min: 0.0,
                max: state.duration,
                value: state.current_time,
                step: cfg.seek_step,
            },
            muted: state.is_muted,
        }
    }
}
