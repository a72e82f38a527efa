//! DOM construction and rendering for the player widget.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSourceElement,
    HtmlTrackElement, HtmlVideoElement,
};

use vizij_video_core::{Config, ControlsView, PlayerError};

pub const VIDEO_ID: &str = "videoPlayer";
pub const FALLBACK_TEXT: &str = "Your browser does not support the video tag.";

const CONTAINER_CLASS: &str = "group relative z-10 flex overflow-hidden shadow-2xl transition-all duration-200 ease-in rounded-lg";
const VIDEO_CLASS: &str = "h-full w-full object-cover";
const OVERLAY_CLASS: &str = "absolute inset-x-0 bottom-0 top-auto flex w-full flex-nowrap items-end bg-white-50 p-2 transition-all duration-200 ease-in sm:px-4 sm:py-2 md:px-6 md:py-3";
const BAR_CLASS: &str = "flex w-full items-center gap-2 sm:gap-3 md:gap-5";
const LEFT_GROUP_CLASS: &str = "flex flex-1 items-center gap-2 sm:gap-3 md:gap-4";
const RIGHT_GROUP_CLASS: &str = "flex items-center gap-3 sm:gap-4 md:gap-8";
const PLAY_BUTTON_CLASS: &str = "rounded-full bg-science-blue-800 p-2.5 text-xs text-white-50 transition-all duration-150 ease-in hover:bg-science-blue-900 sm:p-3 sm:text-sm";
const TIMELINE_CLASS: &str = "flex flex-1 items-center gap-1 font-montserrat text-xs font-medium text-white-200 sm:gap-2 sm:text-sm md:text-base";
const LABEL_CLASS: &str = "font-montserrat text-xs font-medium text-woodsmoke-950 sm:text-sm";
const RANGE_CLASS: &str = "h-1 flex-1 cursor-pointer appearance-none rounded-lg bg-woodsmoke-950/20";
const ICON_BUTTON_CLASS: &str = "rounded-full text-sm text-science-blue-800 transition-all duration-150 ease-in hover:text-science-blue-900 md:text-base";

/// Handles to every element the widget touches after mount.
pub struct PlayerDom {
    pub container: HtmlElement,
    pub video: HtmlVideoElement,
    pub overlay: HtmlElement,
    pub play_button: HtmlButtonElement,
    pub play_icon: Element,
    pub elapsed: HtmlElement,
    pub range: HtmlInputElement,
    pub total: HtmlElement,
    pub mute_button: HtmlButtonElement,
    pub mute_icon: Element,
    pub fullscreen_button: HtmlButtonElement,
}

fn dom_err(what: &str) -> impl FnOnce(wasm_bindgen::JsValue) -> PlayerError + '_ {
    move |e| PlayerError::dom(format!("{what}: {e:?}"))
}

fn create<T: JsCast>(doc: &Document, tag: &str, class: &str) -> Result<T, PlayerError> {
    let el = doc
        .create_element(tag)
        .map_err(dom_err("createElement failed"))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|_| PlayerError::dom(format!("<{tag}> has an unexpected type")))
}

fn append(parent: &Element, child: &Element) -> Result<(), PlayerError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(dom_err("appendChild failed"))
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), PlayerError> {
    el.set_attribute(name, value)
        .map_err(dom_err("setAttribute failed"))
}

fn container_class(cfg: &Config) -> String {
    match cfg.class_name.as_deref() {
        Some(extra) if !extra.trim().is_empty() => format!("{extra} {CONTAINER_CLASS}"),
        _ => CONTAINER_CLASS.to_string(),
    }
}

impl PlayerDom {
    /// Build the widget tree detached from the document.
    pub fn build(doc: &Document, cfg: &Config) -> Result<Self, PlayerError> {
        let container: HtmlElement = create(doc, "div", &container_class(cfg))?;

        let video: HtmlVideoElement = create(doc, "video", VIDEO_CLASS)?;
        video.set_id(VIDEO_ID);
        video.set_autoplay(cfg.autoplay);
        video.set_loop(cfg.looped);
        video.set_muted(cfg.muted);
        video.set_default_muted(cfg.muted);
        set_attr(&video, "controlsList", "nodownload")?;
        set_attr(&video, "playsinline", "")?;
        if let Some(src) = cfg.source.as_deref() {
            let source: HtmlSourceElement = create(doc, "source", "")?;
            source.set_src(src);
            source.set_type("video/mp4");
            append(&video, &source)?;
        }
        if let Some(caption) = cfg.caption.as_ref() {
            let track: HtmlTrackElement = create(doc, "track", "")?;
            track.set_src(&caption.src);
            track.set_kind(&caption.kind);
            track.set_srclang(&caption.srclang);
            track.set_label(&caption.label);
            append(&video, &track)?;
        }
        let fallback = doc.create_text_node(FALLBACK_TEXT);
        video
            .append_child(&fallback)
            .map_err(dom_err("appendChild failed"))?;
        append(&container, &video)?;

        let overlay: HtmlElement = create(doc, "div", OVERLAY_CLASS)?;
        let bar: HtmlElement = create(doc, "div", BAR_CLASS)?;
        let left: HtmlElement = create(doc, "div", LEFT_GROUP_CLASS)?;

        let play_button: HtmlButtonElement = create(doc, "button", PLAY_BUTTON_CLASS)?;
        play_button.set_title("Play/Pause");
        set_attr(&play_button, "data-role", "play")?;
        let play_icon: Element = create(doc, "i", "")?;
        append(&play_button, &play_icon)?;
        append(&left, &play_button)?;

        let timeline: HtmlElement = create(doc, "div", TIMELINE_CLASS)?;
        let elapsed: HtmlElement = create(doc, "span", LABEL_CLASS)?;
        set_attr(&elapsed, "slot", "start")?;
        set_attr(&elapsed, "data-role", "elapsed")?;
        let range: HtmlInputElement = create(doc, "input", RANGE_CLASS)?;
        range.set_type("range");
        range.set_min("0");
        range.set_max("0");
        range.set_step(&cfg.seek_step.to_string());
        set_attr(&range, "data-role", "seek")?;
        let total: HtmlElement = create(doc, "span", LABEL_CLASS)?;
        set_attr(&total, "slot", "end")?;
        set_attr(&total, "data-role", "total")?;
        append(&timeline, &elapsed)?;
        append(&timeline, &range)?;
        append(&timeline, &total)?;
        append(&left, &timeline)?;

        let right: HtmlElement = create(doc, "div", RIGHT_GROUP_CLASS)?;
        let mute_button: HtmlButtonElement = create(doc, "button", ICON_BUTTON_CLASS)?;
        mute_button.set_title("Mute/Unmute");
        set_attr(&mute_button, "data-role", "mute")?;
        let mute_icon: Element = create(doc, "i", "")?;
        append(&mute_button, &mute_icon)?;

        let fullscreen_button: HtmlButtonElement = create(doc, "button", ICON_BUTTON_CLASS)?;
        fullscreen_button.set_title("Fullscreen");
        set_attr(&fullscreen_button, "data-role", "fullscreen")?;
        let fullscreen_icon: Element = create(doc, "i", vizij_video_core::view::ICON_FULLSCREEN)?;
        append(&fullscreen_button, &fullscreen_icon)?;
        append(&right, &mute_button)?;
        append(&right, &fullscreen_button)?;

        append(&bar, &left)?;
        append(&bar, &right)?;
        append(&overlay, &bar)?;
        append(&container, &overlay)?;

        Ok(Self {
            container,
            video,
            overlay,
            play_button,
            play_icon,
            elapsed,
            range,
            total,
            mute_button,
            mute_icon,
            fullscreen_button,
        })
    }

    /// Push a freshly derived view into the DOM.
    pub fn render(&self, view: &ControlsView) {
        self.overlay
            .set_class_name(&format!("{OVERLAY_CLASS} {}", view.overlay_class));
        self.play_icon.set_class_name(view.play_icon);
        self.mute_icon.set_class_name(view.mute_icon);
        self.elapsed.set_text_content(Some(&view.elapsed_label));
        self.total.set_text_content(Some(&view.total_label));
        // max first: the browser clamps value against the current max.
        self.range.set_max(&view.range.max.to_string());
        self.range.set_value(&view.range.value.to_string());
        self.video.set_muted(view.muted);
    }

    pub fn detach(&self) {
        self.container.remove();
    }
}
