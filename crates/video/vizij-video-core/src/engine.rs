//! VideoPlayer: owns state, the frame loop and per-dispatch outputs.
//!
//! Methods:
//! - new, dispatch (one command), update (batch), state, view, teardown

use log::{debug, trace};

use crate::config::{Config, FullscreenSync};
use crate::error::PlayerError;
use crate::frame_loop::{FrameDecision, FrameLoop};
use crate::inputs::{Inputs, PlayerCommand};
use crate::outputs::{CoreEvent, MediaEffect, Outputs};
use crate::state::PlayerState;
use crate::view::ControlsView;

#[derive(Debug)]
pub struct VideoPlayer {
    cfg: Config,
    state: PlayerState,
    frames: FrameLoop,

    // Per-dispatch outputs
    outputs: Outputs,
}

impl VideoPlayer {
    pub fn new(cfg: Config) -> Self {
        let state = PlayerState::new(&cfg);
        Self {
            cfg,
            state,
            frames: FrameLoop::new(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    #[inline]
    pub fn frames(&self) -> &FrameLoop {
        &self.frames
    }

    pub fn view(&self) -> ControlsView {
        ControlsView::from_state(&self.state, &self.cfg)
    }

    /// Apply a batch of commands. Outputs accumulate across the whole batch;
    /// the first invalid command aborts the rest.
    pub fn update(&mut self, inputs: Inputs) -> Result<&Outputs, PlayerError> {
        self.outputs.clear();
        for cmd in inputs.commands {
            self.apply(cmd)?;
        }
        Ok(&self.outputs)
    }

    /// Apply a single command and return what the host must do about it.
    pub fn dispatch(&mut self, cmd: PlayerCommand) -> Result<&Outputs, PlayerError> {
        self.outputs.clear();
        self.apply(cmd)?;
        Ok(&self.outputs)
    }

    /// Shorthand for dispatching [`PlayerCommand::Teardown`].
    pub fn teardown(&mut self) -> &Outputs {
        self.outputs.clear();
        self.apply_teardown();
        &self.outputs
    }

    fn apply(&mut self, cmd: PlayerCommand) -> Result<(), PlayerError> {
        trace!("video player command: {}", cmd.name());
        match cmd {
            PlayerCommand::PointerEnter => self.set_controls(true),
            PlayerCommand::PointerLeave => self.set_controls(false),
            PlayerCommand::TogglePlayPause => self.toggle_play_pause(),
            PlayerCommand::ToggleMute => self.toggle_mute(),
            PlayerCommand::ToggleFullscreen {
                document_fullscreen,
            } => self.toggle_fullscreen(document_fullscreen),
            PlayerCommand::Seek { time } => self.seek(time)?,
            PlayerCommand::TimeUpdate { current_time } => {
                self.set_time(current_time);
                if self.frames.on_time_update(self.state.is_playing) {
                    self.outputs.push_effect(MediaEffect::ScheduleFrame);
                }
            }
            PlayerCommand::FrameScheduled { handle } => self.frames.scheduled(handle),
            PlayerCommand::AnimationFrame {
                current_time,
                paused,
            } => {
                // A frozen position means no more time updates are coming:
                // paused, ended or stalled. The next `timeupdate` restarts.
                let advanced = current_time.is_finite()
                    && self.state.clamp_time(current_time) != self.state.current_time;
                if !self.frames.is_torn_down() {
                    self.set_time(current_time);
                }
                let keep_polling = self.state.is_playing && !paused && advanced;
                if self.frames.on_frame(keep_polling) == FrameDecision::Reschedule {
                    self.outputs.push_effect(MediaEffect::ScheduleFrame);
                }
            }
            PlayerCommand::FrameRequestFailed => self.frames.request_failed(),
            PlayerCommand::DurationChange { duration } => self.set_duration(duration),
            PlayerCommand::FullscreenChange { active } => self.reconcile_fullscreen(active),
            PlayerCommand::Teardown => self.apply_teardown(),
        }
        Ok(())
    }

    fn set_controls(&mut self, visible: bool) {
        if self.state.show_controls == visible {
            return;
        }
        self.state.show_controls = visible;
        self.outputs.push_event(if visible {
            CoreEvent::ControlsShown
        } else {
            CoreEvent::ControlsHidden
        });
    }

    fn toggle_play_pause(&mut self) {
        if self.state.is_playing {
            self.outputs.push_effect(MediaEffect::Pause);
            self.outputs.push_event(CoreEvent::PlaybackPaused);
        } else {
            self.outputs.push_effect(MediaEffect::Play);
            self.outputs.push_event(CoreEvent::PlaybackStarted);
        }
        self.state.is_playing = !self.state.is_playing;
        debug!("video player playing={}", self.state.is_playing);
    }

    fn toggle_mute(&mut self) {
        // State and element both derive from the pre-toggle value.
        let muted = !self.state.is_muted;
        self.state.is_muted = muted;
        self.outputs.push_effect(MediaEffect::SetMuted(muted));
        self.outputs.push_event(CoreEvent::MuteChanged { muted });
        debug!("video player muted={muted}");
    }

    fn toggle_fullscreen(&mut self, document_fullscreen: bool) {
        self.outputs.push_effect(if document_fullscreen {
            MediaEffect::ExitFullscreen
        } else {
            MediaEffect::RequestFullscreen
        });
        self.state.is_fullscreen = !self.state.is_fullscreen;
        self.outputs.push_event(CoreEvent::FullscreenChanged {
            active: self.state.is_fullscreen,
        });
        debug!("video player fullscreen={}", self.state.is_fullscreen);
    }

    fn reconcile_fullscreen(&mut self, active: bool) {
        if self.cfg.fullscreen_sync == FullscreenSync::Optimistic
            || self.state.is_fullscreen == active
        {
            return;
        }
        self.state.is_fullscreen = active;
        self.outputs
            .push_event(CoreEvent::FullscreenChanged { active });
        debug!("video player fullscreen reconciled to {active}");
    }

    fn seek(&mut self, time: f64) -> Result<(), PlayerError> {
        if !time.is_finite() {
            return Err(PlayerError::InvalidTime { time });
        }
        let t = self.state.clamp_time(time);
        self.outputs.push_effect(MediaEffect::SetCurrentTime(t));
        // Mirrored before the element confirms the seek.
        self.set_time(t);
        self.outputs.push_event(CoreEvent::Seeked { time: t });
        Ok(())
    }

    fn set_time(&mut self, time: f64) {
        if !time.is_finite() {
            return;
        }
        let new_time = self.state.clamp_time(time);
        let old_time = self.state.current_time;
        if old_time == new_time {
            return;
        }
        self.state.current_time = new_time;
        self.outputs
            .push_event(CoreEvent::TimeChanged { old_time, new_time });
    }

    fn set_duration(&mut self, duration: f64) {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        if self.state.duration == duration {
            return;
        }
        self.state.duration = duration;
        self.outputs
            .push_event(CoreEvent::DurationChanged { duration });
        let clamped = self.state.clamp_time(self.state.current_time);
        self.set_time(clamped);
    }

    fn apply_teardown(&mut self) {
        if self.frames.is_torn_down() {
            return;
        }
        if let Some(handle) = self.frames.teardown() {
            self.outputs.push_effect(MediaEffect::CancelFrame(handle));
        }
        self.outputs.push_event(CoreEvent::TornDown);
        debug!("video player torn down");
    }
}

impl Default for VideoPlayer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
