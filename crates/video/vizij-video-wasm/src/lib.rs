//! wasm-bindgen bindings for the Vizij video player widget.

use std::cell::RefCell;

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlVideoElement};

use vizij_video_core::{Config, PlayerCommand, PlayerError};

pub mod app;
pub mod dom;
pub mod listener;
pub mod logging;
pub mod widget;

use app::App;
use widget::PlayerWidget;

thread_local! {
    static AUTO_APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(e: PlayerError) -> JsError {
    JsError::new(&e.to_string())
}

fn install_panic_hook() {
    #[cfg(feature = "console_error")]
    console_error_panic_hook::set_once();
}

/// Mounts the demo app when `<body data-vizij-video-src="...">` is present.
#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    logging::init(log::LevelFilter::Warn);

    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let Some(source) = body.get_attribute(app::SOURCE_ATTR) else {
        return;
    };
    match App::mount(&body, Some(source)) {
        Ok(app) => AUTO_APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("failed to mount video app: {e}"),
    }
}

#[wasm_bindgen]
pub struct VizijVideoPlayer {
    widget: PlayerWidget,
}

#[wasm_bindgen]
impl VizijVideoPlayer {
    /// Mount a player under `parent`. Pass a config object or undefined/null
    /// for defaults. Example:
    ///   new VizijVideoPlayer(el, { source: "clip.mp4", class_name: "w-full" })
    #[wasm_bindgen(constructor)]
    pub fn new(parent: &Element, config: JsValue) -> Result<VizijVideoPlayer, JsError> {
        install_panic_hook();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let widget = PlayerWidget::mount(parent, cfg).map_err(js_err)?;
        Ok(VizijVideoPlayer { widget })
    }

    #[wasm_bindgen(js_name = toggle_play_pause)]
    pub fn toggle_play_pause(&self) -> Result<(), JsError> {
        self.widget
            .dispatch(PlayerCommand::TogglePlayPause)
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = toggle_mute)]
    pub fn toggle_mute(&self) -> Result<(), JsError> {
        self.widget.dispatch(PlayerCommand::ToggleMute).map_err(js_err)
    }

    #[wasm_bindgen(js_name = toggle_fullscreen)]
    pub fn toggle_fullscreen(&self) -> Result<(), JsError> {
        self.widget.toggle_fullscreen().map_err(js_err)
    }

    /// Seek to `seconds`, clamped to the known duration.
    pub fn seek(&self, seconds: f64) -> Result<(), JsError> {
        self.widget
            .dispatch(PlayerCommand::Seek { time: seconds })
            .map_err(js_err)
    }

    /// Current PlayerState as a plain object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.widget.state())
            .map_err(|e| JsError::new(&format!("state error: {e}")))
    }

    /// Current ControlsView as a plain object.
    pub fn view(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.widget.view())
            .map_err(|e| JsError::new(&format!("view error: {e}")))
    }

    #[wasm_bindgen(getter)]
    pub fn container(&self) -> HtmlElement {
        self.widget.container()
    }

    #[wasm_bindgen(getter)]
    pub fn video(&self) -> HtmlVideoElement {
        self.widget.video()
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.widget.is_mounted()
    }

    /// Detach the widget and release every subscription. Idempotent.
    pub fn unmount(&self) {
        self.widget.unmount();
    }
}

/// Handle returned by `mount_app`; dropping (or `free()`) unmounts.
#[wasm_bindgen]
pub struct VizijVideoApp {
    app: App,
}

#[wasm_bindgen]
impl VizijVideoApp {
    #[wasm_bindgen(getter)]
    pub fn root(&self) -> HtmlElement {
        self.app.root().clone()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.app.player().state())
            .map_err(|e| JsError::new(&format!("state error: {e}")))
    }
}

/// Mount the root container with a single player for `source`.
#[wasm_bindgen(js_name = mount_app)]
pub fn mount_app(root: &Element, source: Option<String>) -> Result<VizijVideoApp, JsError> {
    install_panic_hook();
    let app = App::mount(root, source).map_err(js_err)?;
    Ok(VizijVideoApp { app })
}

/// `MM:SS` label for `seconds`; undefined reads as zero.
#[wasm_bindgen(js_name = format_time)]
pub fn format_time(seconds: Option<f64>) -> String {
    vizij_video_core::format_time(seconds)
}

/// Install the console logger at `level` ("trace".."error", "off"); defaults to "warn".
#[wasm_bindgen(js_name = init_logging)]
pub fn init_logging(level: Option<String>) {
    logging::init(logging::parse_level(level.as_deref()));
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
