use serde::Deserialize;
use vizij_video_core::{Config, Inputs, MediaEffect, PlayerCommand, VideoPlayer};

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    config: Option<Config>,
    commands: Vec<PlayerCommand>,
    expect: Expect,
    #[serde(default)]
    expect_effects: Vec<MediaEffect>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Expect {
    show_controls: Option<bool>,
    is_playing: Option<bool>,
    is_muted: Option<bool>,
    is_fullscreen: Option<bool>,
    current_time: Option<f64>,
    duration: Option<f64>,
    elapsed_label: Option<String>,
    total_label: Option<String>,
}

fn run(name: &str) {
    let sc: Scenario = vizij_test_fixtures::scenarios::load(name).expect("scenario fixture");
    let name = match vizij_test_fixtures::scenarios::description(name).expect("scenario entry") {
        Some(note) => format!("{name} ({note})"),
        None => name.to_string(),
    };
    let mut player = VideoPlayer::new(sc.config.unwrap_or_default());
    let effects = player
        .update(Inputs {
            commands: sc.commands,
        })
        .unwrap_or_else(|e| panic!("{name}: {e}"))
        .effects
        .clone();
    assert_eq!(effects, sc.expect_effects, "{name}: effects");

    let st = player.state();
    let view = player.view();
    let exp = sc.expect;
    if let Some(v) = exp.show_controls {
        assert_eq!(st.show_controls, v, "{name}: show_controls");
    }
    if let Some(v) = exp.is_playing {
        assert_eq!(st.is_playing, v, "{name}: is_playing");
    }
    if let Some(v) = exp.is_muted {
        assert_eq!(st.is_muted, v, "{name}: is_muted");
    }
    if let Some(v) = exp.is_fullscreen {
        assert_eq!(st.is_fullscreen, v, "{name}: is_fullscreen");
    }
    if let Some(v) = exp.current_time {
        assert!((st.current_time - v).abs() < 1e-9, "{name}: current_time");
    }
    if let Some(v) = exp.duration {
        assert_eq!(st.duration, v, "{name}: duration");
    }
    if let Some(v) = exp.elapsed_label {
        assert_eq!(view.elapsed_label, v, "{name}: elapsed_label");
    }
    if let Some(v) = exp.total_label {
        assert_eq!(view.total_label, v, "{name}: total_label");
    }
}

#[test]
fn all_scenarios_pass() {
    let keys = vizij_test_fixtures::scenarios::keys();
    assert!(!keys.is_empty());
    for key in keys {
        run(&key);
    }
}

#[test]
fn fixture_configs_parse_and_validate() {
    for key in vizij_test_fixtures::configs::keys() {
        let json = vizij_test_fixtures::configs::json(&key).unwrap();
        Config::from_json(&json).unwrap_or_else(|e| panic!("config {key}: {e}"));
    }
    let cfg: Config = vizij_test_fixtures::configs::load("no-captions").unwrap();
    assert!(cfg.caption.is_none());
    assert!(!cfg.suppress_context_menu);
    assert_eq!(VideoPlayer::new(cfg).view().range.step, 0.5);
}
