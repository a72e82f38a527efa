//! Player widget: wires DOM events into the core and applies its effects.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, Node, Window};

use vizij_video_core::{
    Config, ControlsView, FrameHandle, MediaEffect, PlayerCommand, PlayerError, PlayerState,
    VideoPlayer,
};

use crate::dom::PlayerDom;
use crate::listener::EventListener;

type Shared = Rc<RefCell<Inner>>;

// web-sys drops the promises these return; bind them again to see rejections.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Element)]
    type FullscreenElement;

    #[wasm_bindgen(js_name = Document)]
    type FullscreenDocument;

    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenElement) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = exitFullscreen)]
    fn exit_fullscreen_promise(this: &FullscreenDocument) -> Result<JsValue, JsValue>;
}

struct Inner {
    player: VideoPlayer,
    dom: PlayerDom,
    window: Window,
    document: Document,
    /// Reused for every `requestAnimationFrame` in the polling loop.
    frame_cb: Option<Closure<dyn FnMut(f64)>>,
    listeners: Vec<EventListener>,
    mounted: bool,
}

/// A mounted player. Dropping it unmounts.
pub struct PlayerWidget {
    inner: Shared,
}

impl PlayerWidget {
    /// Build the widget and append it to `parent`.
    pub fn mount(parent: &Element, cfg: Config) -> Result<Self, PlayerError> {
        cfg.validate()?;
        let window = web_sys::window().ok_or_else(|| PlayerError::dom("no window object"))?;
        let document = window
            .document()
            .ok_or_else(|| PlayerError::dom("no document"))?;

        let dom = PlayerDom::build(&document, &cfg)?;
        let player = VideoPlayer::new(cfg);
        dom.render(&player.view());
        parent
            .append_child(&dom.container)
            .map_err(|e| PlayerError::dom(format!("appendChild failed: {e:?}")))?;

        let inner: Shared = Rc::new(RefCell::new(Inner {
            player,
            dom,
            window,
            document,
            frame_cb: None,
            listeners: Vec::new(),
            mounted: true,
        }));

        let weak = Rc::downgrade(&inner);
        let frame_cb = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            if let Some(shared) = weak.upgrade() {
                let (current_time, paused) = {
                    let inner = shared.borrow();
                    let video = &inner.dom.video;
                    (video.current_time(), video.paused() || video.ended())
                };
                forward(
                    &shared,
                    PlayerCommand::AnimationFrame {
                        current_time,
                        paused,
                    },
                );
            }
        });
        inner.borrow_mut().frame_cb = Some(frame_cb);

        let listeners = match subscribe(&inner) {
            Ok(listeners) => listeners,
            Err(e) => {
                inner.borrow().dom.detach();
                return Err(e);
            }
        };
        inner.borrow_mut().listeners = listeners;
        log::debug!("video player mounted");

        Ok(Self { inner })
    }

    pub fn dispatch(&self, cmd: PlayerCommand) -> Result<(), PlayerError> {
        dispatch(&self.inner, cmd)
    }

    pub fn toggle_fullscreen(&self) -> Result<(), PlayerError> {
        let document_fullscreen = self.inner.borrow().document.fullscreen_element().is_some();
        self.dispatch(PlayerCommand::ToggleFullscreen {
            document_fullscreen,
        })
    }

    pub fn state(&self) -> PlayerState {
        self.inner.borrow().player.state().clone()
    }

    pub fn view(&self) -> ControlsView {
        self.inner.borrow().player.view()
    }

    pub fn container(&self) -> web_sys::HtmlElement {
        self.inner.borrow().dom.container.clone()
    }

    pub fn video(&self) -> web_sys::HtmlVideoElement {
        self.inner.borrow().dom.video.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// Cancel the pending frame, drop every listener and detach the DOM.
    /// Safe to call more than once.
    pub fn unmount(&self) {
        let effects = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted {
                return;
            }
            inner.mounted = false;
            inner.player.teardown().effects.clone()
        };
        for effect in effects {
            apply_effect(&self.inner, effect);
        }
        let mut inner = self.inner.borrow_mut();
        inner.listeners.clear();
        inner.frame_cb = None;
        inner.dom.detach();
        log::debug!("video player unmounted");
    }
}

impl Drop for PlayerWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn subscribe(shared: &Shared) -> Result<Vec<EventListener>, PlayerError> {
    let (container, video, play, mute, fullscreen, range, document, suppress) = {
        let inner = shared.borrow();
        (
            EventTarget::from(inner.dom.container.clone()),
            EventTarget::from(inner.dom.video.clone()),
            EventTarget::from(inner.dom.play_button.clone()),
            EventTarget::from(inner.dom.mute_button.clone()),
            EventTarget::from(inner.dom.fullscreen_button.clone()),
            EventTarget::from(inner.dom.range.clone()),
            EventTarget::from(inner.document.clone()),
            inner.player.config().suppress_context_menu,
        )
    };

    let mut listeners = vec![
        listen(shared, &container, "mouseenter", |_, _| {
            Some(PlayerCommand::PointerEnter)
        })?,
        listen(shared, &container, "mouseleave", |_, _| {
            Some(PlayerCommand::PointerLeave)
        })?,
        listen(shared, &play, "click", |_, _| {
            Some(PlayerCommand::TogglePlayPause)
        })?,
        listen(shared, &mute, "click", |_, _| Some(PlayerCommand::ToggleMute))?,
        listen(shared, &fullscreen, "click", |inner, _| {
            Some(PlayerCommand::ToggleFullscreen {
                document_fullscreen: inner.document.fullscreen_element().is_some(),
            })
        })?,
        listen(shared, &range, "input", |inner, _| {
            Some(PlayerCommand::Seek {
                time: inner.dom.range.value_as_number(),
            })
        })?,
        listen(shared, &video, "timeupdate", |inner, _| {
            Some(PlayerCommand::TimeUpdate {
                current_time: inner.dom.video.current_time(),
            })
        })?,
        listen(shared, &video, "durationchange", |inner, _| {
            Some(PlayerCommand::DurationChange {
                duration: inner.dom.video.duration(),
            })
        })?,
        listen(shared, &document, "fullscreenchange", |inner, _| {
            Some(PlayerCommand::FullscreenChange {
                active: owns_fullscreen(inner),
            })
        })?,
        listen(shared, &document, "fullscreenerror", |inner, _| {
            log::warn!("fullscreen request was denied");
            Some(PlayerCommand::FullscreenChange {
                active: owns_fullscreen(inner),
            })
        })?,
    ];
    if suppress {
        listeners.push(EventListener::new(&video, "contextmenu", |event: Event| {
            event.prevent_default();
        })?);
    }
    Ok(listeners)
}

/// Subscribe `event_type` on `target`, translating each event into a command.
fn listen<F>(
    shared: &Shared,
    target: &EventTarget,
    event_type: &'static str,
    mut to_cmd: F,
) -> Result<EventListener, PlayerError>
where
    F: FnMut(&Inner, &Event) -> Option<PlayerCommand> + 'static,
{
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(shared);
    EventListener::new(target, event_type, move |event: Event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let cmd = match shared.try_borrow() {
            Ok(inner) if inner.mounted => to_cmd(&*inner, &event),
            Ok(_) => None,
            Err(_) => {
                log::warn!("dropped re-entrant {event_type} event");
                None
            }
        };
        if let Some(cmd) = cmd {
            forward(&shared, cmd);
        }
    })
}

/// Whether the document's fullscreen element is this player's video. Another
/// player (or any other element) going fullscreen does not count.
fn owns_fullscreen(inner: &Inner) -> bool {
    match inner.document.fullscreen_element() {
        Some(el) => {
            let node: &Node = &el;
            inner.dom.video.is_same_node(Some(node))
        }
        None => false,
    }
}

/// Log a rejection of the promise a media/fullscreen call returned, instead
/// of leaving it unhandled.
fn watch_promise(result: Result<JsValue, JsValue>, what: &'static str) {
    match result {
        Ok(value) => {
            // Older engines return undefined instead of a promise.
            if let Ok(promise) = value.dyn_into::<js_sys::Promise>() {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("{what} rejected: {e:?}");
                    }
                });
            }
        }
        Err(e) => log::warn!("{what} failed: {e:?}"),
    }
}

/// Dispatch from an event callback: nothing to return the error to, so log it.
fn forward(shared: &Shared, cmd: PlayerCommand) {
    if let Err(e) = dispatch(shared, cmd) {
        log::warn!("video player {} error: {e}", e.category());
    }
}

fn dispatch(shared: &Shared, cmd: PlayerCommand) -> Result<(), PlayerError> {
    let effects = {
        let mut inner = shared.borrow_mut();
        inner.player.dispatch(cmd)?.effects.clone()
    };
    // Effects run with the borrow released so that anything they trigger can
    // dispatch again.
    for effect in effects {
        apply_effect(shared, effect);
    }
    let inner = shared.borrow();
    if inner.mounted {
        inner.dom.render(&inner.player.view());
    }
    Ok(())
}

fn apply_effect(shared: &Shared, effect: MediaEffect) {
    let (video, window, document) = {
        let inner = shared.borrow();
        (
            inner.dom.video.clone(),
            inner.window.clone(),
            inner.document.clone(),
        )
    };
    match effect {
        MediaEffect::Play => watch_promise(video.play().map(JsValue::from), "play"),
        MediaEffect::Pause => {
            if let Err(e) = video.pause() {
                log::warn!("pause failed: {e:?}");
            }
        }
        MediaEffect::SetMuted(muted) => video.set_muted(muted),
        MediaEffect::RequestFullscreen => {
            let element: &Element = &video;
            watch_promise(element.unchecked_ref::<FullscreenElement>().request_fullscreen_promise(), "requestFullscreen");
        }
        MediaEffect::ExitFullscreen => {
            watch_promise(document.unchecked_ref::<FullscreenDocument>().exit_fullscreen_promise(), "exitFullscreen");
        }
        MediaEffect::SetCurrentTime(t) => video.set_current_time(t),
        MediaEffect::ScheduleFrame => {
            let requested = {
                let inner = shared.borrow();
                match inner.frame_cb.as_ref() {
                    Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
                    None => return,
                }
            };
            match requested {
                Ok(id) => forward(
                    shared,
                    PlayerCommand::FrameScheduled {
                        handle: FrameHandle(id),
                    },
                ),
                Err(e) => {
                    log::warn!("requestAnimationFrame failed: {e:?}");
                    forward(shared, PlayerCommand::FrameRequestFailed);
                }
            }
        }
        MediaEffect::CancelFrame(handle) => {
            if let Err(e) = window.cancel_animation_frame(handle.0) {
                log::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
    }
}
