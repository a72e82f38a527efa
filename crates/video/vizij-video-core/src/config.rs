//! Player configuration.

use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// How the fullscreen flag follows the browser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenSync {
    /// Flip on toggle, then reconcile with native `fullscreenchange` events.
    #[default]
    Native,
    /// Flip on toggle only. Exiting with Escape leaves the flag stale.
    Optimistic,
}

/// Caption `<track>` declared on the video element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    pub src: String,
    pub kind: String,
    pub srclang: String,
    pub label: String,
}

impl Default for CaptionTrack {
    fn default() -> Self {
        Self {
            src: "captions_en.vtt".into(),
            kind: "captions".into(),
            srclang: "en".into(),
            label: "english_captions".into(),
        }
    }
}

/// Widget configuration. Every field has a default so hosts may pass a partial
/// object (or nothing at all).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Media URL. `None` renders an element with nothing to play.
    pub source: Option<String>,
    /// Extra classes appended to the player container.
    pub class_name: Option<String>,
    pub autoplay: bool,
    pub looped: bool,
    /// Initial mute state. Browsers only allow muted autoplay.
    pub muted: bool,
    /// Step of the seek range input, in seconds.
    pub seek_step: f64,
    /// Caption track reference; `None` omits the `<track>` element.
    pub caption: Option<CaptionTrack>,
    pub fullscreen_sync: FullscreenSync,
    pub suppress_context_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            class_name: None,
            autoplay: true,
            looped: true,
            muted: true,
            seek_step: 0.01,
            caption: Some(CaptionTrack::default()),
            fullscreen_sync: FullscreenSync::Native,
            suppress_context_menu: true,
        }
    }
}

impl Config {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, PlayerError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), PlayerError> {
        if !self.seek_step.is_finite() || self.seek_step <= 0.0 {
            return Err(PlayerError::InvalidConfig {
                reason: format!("seek_step must be a positive number, got {}", self.seek_step),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json(r#"{ "source": "clip.mp4", "fullscreen_sync": "optimistic" }"#)
            .unwrap();
        assert_eq!(cfg.source.as_deref(), Some("clip.mp4"));
        assert_eq!(cfg.fullscreen_sync, FullscreenSync::Optimistic);
        assert!(cfg.autoplay && cfg.looped && cfg.muted);
        assert_eq!(cfg.caption, Some(CaptionTrack::default()));
    }

    #[test]
    fn null_caption_drops_track() {
        let cfg = Config::from_json(r#"{ "caption": null }"#).unwrap();
        assert!(cfg.caption.is_none());
    }

    #[test]
    fn rejects_bad_seek_step() {
        let err = Config::from_json(r#"{ "seek_step": 0 }"#).unwrap_err();
        assert_eq!(err.category(), "config");
    }
}
