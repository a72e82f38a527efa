//! Transient UI state owned by a single player instance.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Everything the widget renders from. Discarded on unmount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub show_controls: bool,
    pub is_playing: bool,
    pub is_muted: bool,
    pub is_fullscreen: bool,
    /// Playback position in seconds.
    pub current_time: f64,
    /// Media length in seconds; 0 until metadata loads.
    pub duration: f64,
}

impl PlayerState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            show_controls: false,
            is_playing: cfg.autoplay,
            is_muted: cfg.muted,
            is_fullscreen: false,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    #[inline]
    pub fn duration_known(&self) -> bool {
        self.duration > 0.0
    }

    /// Clamp a position into `[0, duration]`. Before metadata loads only the
    /// lower bound applies.
    #[inline]
    pub fn clamp_time(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        if self.duration_known() {
            t.min(self.duration)
        } else {
            t
        }
    }

    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            playback: if self.is_playing {
                PlaybackStatus::Playing
            } else {
                PlaybackStatus::Paused
            },
            audio: if self.is_muted {
                AudioStatus::Muted
            } else {
                AudioStatus::Unmuted
            },
            display: if self.is_fullscreen {
                DisplayMode::Fullscreen
            } else {
                DisplayMode::Windowed
            },
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackStatus {
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioStatus {
    Muted,
    Unmuted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    Windowed,
    Fullscreen,
}

/// The three independent axes of the player state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub playback: PlaybackStatus,
    pub audio: AudioStatus,
    pub display: DisplayMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_follows_config() {
        let st = PlayerState::default();
        assert_eq!(
            st.status(),
            PlayerStatus {
                playback: PlaybackStatus::Playing,
                audio: AudioStatus::Muted,
                display: DisplayMode::Windowed,
            }
        );
        assert!(!st.show_controls);

        let cfg = Config {
            autoplay: false,
            muted: false,
            ..Config::default()
        };
        let st = PlayerState::new(&cfg);
        assert_eq!(st.status().playback, PlaybackStatus::Paused);
        assert_eq!(st.status().audio, AudioStatus::Unmuted);
    }

    #[test]
    fn clamp_respects_known_duration_only() {
        let mut st = PlayerState::default();
        assert_eq!(st.clamp_time(42.0), 42.0);
        assert_eq!(st.clamp_time(-1.0), 0.0);
        st.duration = 10.0;
        assert_eq!(st.clamp_time(42.0), 10.0);
    }
}
