//! Root container: one centered, responsive player.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use vizij_video_core::{Config, PlayerError};

use crate::widget::PlayerWidget;

pub const APP_CLASS: &str = "flex items-center justify-center h-screen p-4";
pub const PLAYER_CLASS: &str =
    "mx-auto w-full xs:w-10/12 sm:w-9/12 md:w-10/12 lg:w-9/12 xl:w-8/12";

/// Body attribute the start hook reads the default source from.
pub const SOURCE_ATTR: &str = "data-vizij-video-src";

pub struct App {
    root: HtmlElement,
    player: PlayerWidget,
}

impl App {
    pub fn mount(parent: &Element, source: Option<String>) -> Result<Self, PlayerError> {
        let cfg = Config {
            source,
            class_name: Some(PLAYER_CLASS.to_string()),
            ..Config::default()
        };
        Self::mount_with(parent, cfg)
    }

    /// Mount with a full player config. Nothing is left in `parent` on error.
    pub fn mount_with(parent: &Element, cfg: Config) -> Result<Self, PlayerError> {
        let document = parent
            .owner_document()
            .ok_or_else(|| PlayerError::dom("parent is not attached to a document"))?;
        let root = document
            .create_element("div")
            .map_err(|e| PlayerError::dom(format!("createElement failed: {e:?}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PlayerError::dom("<div> has an unexpected type"))?;
        root.set_class_name(APP_CLASS);
        parent
            .append_child(&root)
            .map_err(|e| PlayerError::dom(format!("appendChild failed: {e:?}")))?;

        let player = match PlayerWidget::mount(&root, cfg) {
            Ok(player) => player,
            Err(e) => {
                root.remove();
                return Err(e);
            }
        };
        Ok(Self { root, player })
    }

    pub fn player(&self) -> &PlayerWidget {
        &self.player
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.player.unmount();
        self.root.remove();
    }
}
