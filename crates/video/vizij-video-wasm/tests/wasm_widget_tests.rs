#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement};

use vizij_video_core::{Config, PlayerState};
use vizij_video_wasm::app::App;
use vizij_video_wasm::{abi_version, format_time, mount_app, VizijVideoPlayer};

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("document body")
}

// No source: nothing is fetched and the element never plays.
fn mount() -> VizijVideoPlayer {
    let cfg = js_sys::Object::new();
    js_sys::Reflect::set(&cfg, &"caption".into(), &JsValue::NULL).unwrap();
    VizijVideoPlayer::new(&body(), cfg.into()).expect("player mounts")
}

fn role(player: &VizijVideoPlayer, name: &str) -> Element {
    player
        .container()
        .query_selector(&format!("[data-role={name}]"))
        .unwrap()
        .unwrap_or_else(|| panic!("no element with data-role={name}"))
}

fn overlay(player: &VizijVideoPlayer) -> Element {
    player
        .container()
        .last_element_child()
        .expect("overlay is the last child")
}

fn state(player: &VizijVideoPlayer) -> PlayerState {
    swb::from_value(player.state().unwrap()).unwrap()
}

fn fire(target: &Element, event_type: &str) {
    target
        .dispatch_event(&Event::new(event_type).unwrap())
        .unwrap();
}

fn cancelable_contextmenu() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("contextmenu", &init).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn format_time_matches_core() {
    assert_eq!(format_time(Some(0.0)), "00:00");
    assert_eq!(format_time(Some(65.0)), "01:05");
    assert_eq!(format_time(Some(3661.0)), "61:01");
    assert_eq!(format_time(None), "00:00");
}

#[wasm_bindgen_test]
fn renders_video_and_controls() {
    let player = mount();
    let video = player.video();
    assert_eq!(video.id(), "videoPlayer");
    assert!(video.autoplay());
    assert!(video.loop_());
    assert!(video.muted());
    assert_eq!(
        video.get_attribute("controlsList").as_deref(),
        Some("nodownload")
    );
    assert!(video.query_selector("source").unwrap().is_none());
    assert!(video.query_selector("track").unwrap().is_none());

    assert_eq!(role(&player, "play").get_attribute("title").as_deref(), Some("Play/Pause"));
    assert_eq!(role(&player, "elapsed").text_content().as_deref(), Some("00:00"));
    assert_eq!(role(&player, "total").text_content().as_deref(), Some("00:00"));
    let seek: web_sys::HtmlInputElement = role(&player, "seek").dyn_into().unwrap();
    assert_eq!(seek.type_(), "range");
    assert_eq!(seek.step(), "0.01");
    player.unmount();
}

#[wasm_bindgen_test]
fn hover_shows_and_hides_overlay() {
    let player = mount();
    let container: Element = player.container().into();
    assert!(overlay(&player).class_list().contains("opacity-0"));

    fire(&container, "mouseenter");
    assert!(overlay(&player).class_list().contains("opacity-100"));
    assert!(state(&player).show_controls);

    // Independent of playback.
    player.toggle_play_pause().unwrap();
    assert!(overlay(&player).class_list().contains("opacity-100"));

    fire(&container, "mouseleave");
    assert!(overlay(&player).class_list().contains("opacity-0"));
    player.unmount();
}

#[wasm_bindgen_test]
fn play_button_toggles_twice_back_to_playing() {
    let player = mount();
    let button: HtmlElement = role(&player, "play").dyn_into().unwrap();
    let icon = button.first_element_child().unwrap();
    assert_eq!(icon.class_name(), "fi fi-sr-pause");

    button.click();
    assert!(!state(&player).is_playing);
    assert_eq!(icon.class_name(), "fi fi-sr-play");

    button.click();
    assert!(state(&player).is_playing);
    assert_eq!(icon.class_name(), "fi fi-sr-pause");
    player.unmount();
}

#[wasm_bindgen_test]
fn mute_toggles_twice_back_to_original() {
    let player = mount();
    let before = state(&player).is_muted;
    player.toggle_mute().unwrap();
    assert_eq!(player.video().muted(), !before);
    assert_eq!(
        role(&player, "mute").first_element_child().unwrap().class_name(),
        "fi fi-sr-volume"
    );
    player.toggle_mute().unwrap();
    assert_eq!(state(&player).is_muted, before);
    assert_eq!(player.video().muted(), before);
    player.unmount();
}

#[wasm_bindgen_test]
fn seek_updates_elapsed_label() {
    let player = mount();
    for t in [0.0, 65.0, 3661.0] {
        player.seek(t).unwrap();
        assert_eq!(
            role(&player, "elapsed").text_content().unwrap(),
            format_time(Some(t))
        );
    }
    assert!(player.seek(f64::NAN).is_err());
    player.unmount();
}

#[wasm_bindgen_test]
fn fullscreenchange_reconciles_each_player() {
    let first = mount();
    let second = mount();
    first.toggle_fullscreen().unwrap();
    assert!(state(&first).is_fullscreen);
    assert!(!state(&second).is_fullscreen);

    // Headless, nothing actually went fullscreen: the event resets the flag.
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .dispatch_event(&Event::new("fullscreenchange").unwrap())
        .unwrap();
    assert!(!state(&first).is_fullscreen);
    assert!(!state(&second).is_fullscreen);

    first.toggle_fullscreen().unwrap();
    document
        .dispatch_event(&Event::new("fullscreenerror").unwrap())
        .unwrap();
    assert!(!state(&first).is_fullscreen);

    first.unmount();
    second.unmount();
}

#[wasm_bindgen_test]
fn context_menu_listener_released_on_unmount() {
    let player = mount();
    let video = player.video();

    let not_canceled = video.dispatch_event(&cancelable_contextmenu()).unwrap();
    assert!(!not_canceled, "context menu suppressed while mounted");

    player.unmount();
    assert!(!player.mounted());
    assert!(player.container().parent_node().is_none());

    let not_canceled = video.dispatch_event(&cancelable_contextmenu()).unwrap();
    assert!(not_canceled, "no listener fires after unmount");

    // Unmount is idempotent.
    player.unmount();
}

#[wasm_bindgen_test]
fn context_menu_left_alone_when_disabled() {
    let cfg = js_sys::Object::new();
    js_sys::Reflect::set(&cfg, &"suppress_context_menu".into(), &JsValue::FALSE).unwrap();
    let player = VizijVideoPlayer::new(&body(), cfg.into()).unwrap();
    assert!(player.video().dispatch_event(&cancelable_contextmenu()).unwrap());
    player.unmount();
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let cfg = js_sys::Object::new();
    js_sys::Reflect::set(&cfg, &"seek_step".into(), &JsValue::from_f64(-1.0)).unwrap();
    assert!(VizijVideoPlayer::new(&body(), cfg.into()).is_err());
}

#[wasm_bindgen_test]
fn app_mounts_one_responsive_player() {
    let app = mount_app(&body(), None).unwrap();
    let root = app.root();
    assert_eq!(root.class_name(), "flex items-center justify-center h-screen p-4");
    assert_eq!(root.child_element_count(), 1);
    let player = root.first_element_child().unwrap();
    assert!(player.class_name().starts_with("mx-auto w-full"));
    assert_eq!(root.query_selector_all("video").unwrap().length(), 1);
    drop(app);
    assert!(root.parent_node().is_none());
}

#[wasm_bindgen_test]
fn failed_app_mount_leaves_parent_empty() {
    let document = web_sys::window().unwrap().document().unwrap();
    let parent = document.create_element("div").unwrap();
    body().append_child(&parent).unwrap();

    let cfg = Config {
        seek_step: 0.0,
        ..Config::default()
    };
    assert!(App::mount_with(&parent, cfg).is_err());
    assert_eq!(parent.child_element_count(), 0);
    parent.remove();
}
