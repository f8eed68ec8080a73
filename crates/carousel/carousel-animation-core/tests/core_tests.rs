use carousel_animation_core::{
    config::Config,
    data::CarouselData,
    engine::Engine,
    error::CarouselError,
    ids::CarouselId,
    inputs::{CarouselCommand, Direction, Inputs},
    outputs::CarouselEvent,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_data(name: &str, n: usize) -> CarouselData {
    CarouselData {
        id: None,
        name: name.to_string(),
        slides: (0..n).map(|i| format!("{name}_{i}")).collect(),
        slide_size: 100.0,
        step_duration_ms: 500,
        pause_duration_ms: 250,
        slide_padding: 0.0,
        initial_direction: Direction::Forward,
        autostart: false,
        chrome: serde_json::Value::Null,
    }
}

fn cmds(commands: Vec<CarouselCommand>) -> Inputs {
    Inputs { commands }
}

/// it should allocate dense CarouselIds starting at zero
#[test]
fn add_carousel_allocates_dense_ids() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("a", 3)).unwrap();
    let b = eng.add_carousel(mk_data("b", 3)).unwrap();
    assert_eq!(a, CarouselId(0));
    assert_eq!(b, CarouselId(1));
}

/// it should reject invalid carousel definitions on load
#[test]
fn add_carousel_validates_definitions() {
    let mut eng = Engine::new(Config::default());

    let empty = mk_data("empty", 0);
    assert!(matches!(
        eng.add_carousel(empty),
        Err(CarouselError::EmptySlideSet { .. })
    ));

    let mut zero_step = mk_data("zero_step", 3);
    zero_step.step_duration_ms = 0;
    assert!(matches!(
        eng.add_carousel(zero_step),
        Err(CarouselError::InvalidDuration { .. })
    ));

    let mut bad_size = mk_data("bad_size", 3);
    bad_size.slide_size = -1.0;
    assert!(matches!(
        eng.add_carousel(bad_size),
        Err(CarouselError::InvalidSlideSize { .. })
    ));
}

/// it should emit per-carousel offset changes keyed by name, measured only
#[test]
fn update_emits_changes_for_measured_carousels() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    let b = eng.add_carousel(mk_data("gallery", 3)).unwrap();

    // Only the first carousel gets a layout pass.
    let out = eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    assert_eq!(out.changes.len(), 1);
    assert_eq!(out.changes[0].carousel, a);
    assert_eq!(out.changes[0].key, "loader");
    approx(out.changes[0].offset, 0.0, 1e-6);
    assert!(out.events.contains(&CarouselEvent::LayoutMeasured {
        carousel: a,
        slide_width: 100.0,
    }));
    assert!(out
        .events
        .contains(&CarouselEvent::Started { carousel: a }));

    // The unmeasured carousel renders nothing and never steps.
    eng.update(0.25, Inputs::default());
    eng.update(0.5, Inputs::default());
    assert_eq!(eng.carousel_index(a), Some(1));
    assert_eq!(eng.carousel_index(b), Some(0));
    approx(eng.carousel_offset(a).unwrap(), -100.0, 1e-6);
}

/// it should clear outputs at the start of every update
#[test]
fn outputs_do_not_accumulate_across_ticks() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    let out = eng.update(0.0, Inputs::default());
    assert_eq!(out.changes.len(), 1);
    assert!(out.events.is_empty());
}

/// it should apply commands before time advances within one update
#[test]
fn stop_applies_before_the_tick_that_would_step() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    eng.update(0.25, Inputs::default());
    eng.update(0.5, Inputs::default());
    assert_eq!(eng.carousel_index(a), Some(1));

    // This tick's dt alone would fire the dwell and start the next step,
    // but the stop lands first and invalidates the continuation.
    eng.update(5.0, cmds(vec![CarouselCommand::Stop { carousel: a }]));
    assert_eq!(eng.carousel_index(a), Some(1));
    assert_eq!(eng.carousel_running(a), Some(false));
    approx(eng.carousel_offset(a).unwrap(), -100.0, 1e-6);
}

/// it should drop commands that name an unknown carousel
#[test]
fn unknown_carousel_commands_are_dropped() {
    let mut eng = Engine::new(Config::default());
    eng.add_carousel(mk_data("loader", 5)).unwrap();
    let ghost = CarouselId(99);
    let out = eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::Start { carousel: ghost },
            CarouselCommand::SetDirection {
                carousel: ghost,
                direction: Direction::Reverse,
            },
        ]),
    );
    assert!(out.events.is_empty());
    assert_eq!(eng.carousel_index(ghost), None);
    assert_eq!(eng.carousel_running(ghost), None);
}

/// it should truncate events past max_events_per_tick
#[test]
fn events_truncate_at_configured_cap() {
    let cfg = Config {
        max_events_per_tick: 1,
        ..Config::default()
    };
    let mut eng = Engine::new(cfg);
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    // SetLayout + Start emit two events; only the first survives.
    let out = eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    assert_eq!(out.events.len(), 1);
    assert!(matches!(
        out.events[0],
        CarouselEvent::LayoutMeasured { .. }
    ));
}

/// it should expose the generation as a strictly increasing token per carousel
#[test]
fn engine_generation_tracks_stop_start() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    let g0 = eng.carousel_generation(a).unwrap();
    eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    let g1 = eng.carousel_generation(a).unwrap();
    assert!(g1 > g0);
    eng.update(0.0, cmds(vec![CarouselCommand::Stop { carousel: a }]));
    let g2 = eng.carousel_generation(a).unwrap();
    assert!(g2 > g1);
    eng.update(0.0, cmds(vec![CarouselCommand::Start { carousel: a }]));
    assert!(eng.carousel_generation(a).unwrap() > g2);
}

/// it should honor a reverse SetDirection issued through the command stream
#[test]
fn set_direction_through_commands() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    eng.update(
        0.0,
        cmds(vec![
            CarouselCommand::SetLayout {
                carousel: a,
                slide_width: 100.0,
            },
            CarouselCommand::Start { carousel: a },
        ]),
    );
    eng.update(0.25, Inputs::default());
    eng.update(0.5, Inputs::default());
    assert_eq!(eng.carousel_index(a), Some(1));

    eng.update(
        0.0,
        cmds(vec![CarouselCommand::SetDirection {
            carousel: a,
            direction: Direction::Reverse,
        }]),
    );
    assert_eq!(eng.carousel_direction(a), Some(Direction::Reverse));
    eng.update(0.25, Inputs::default());
    eng.update(0.5, Inputs::default());
    assert_eq!(eng.carousel_index(a), Some(0));
    approx(eng.carousel_offset(a).unwrap(), 0.0, 1e-6);
}

/// it should expose carousel definitions and report unknown ids
#[test]
fn carousel_data_lookup() {
    let mut eng = Engine::new(Config::default());
    let a = eng.add_carousel(mk_data("loader", 5)).unwrap();
    let data = eng.carousel_data(a).expect("known carousel");
    assert_eq!(data.name, "loader");
    assert_eq!(data.slide_count(), 5);

    let err = eng.carousel_data(CarouselId(99)).unwrap_err();
    assert_eq!(err, CarouselError::CarouselNotFound { id: 99 });
    assert_eq!(err.category(), "data");
}

/// it should round-trip Config through JSON with defaults intact
#[test]
fn config_serde_roundtrip() {
    let cfg = Config::default();
    assert_eq!(cfg.default_step_duration_ms, 750);
    assert_eq!(cfg.default_pause_duration_ms, 1500);
    approx(cfg.default_slide_size, 120.0, 1e-6);
    assert_eq!(cfg.max_events_per_tick, 1024);

    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.default_step_duration_ms, cfg.default_step_duration_ms);
    assert_eq!(back.max_events_per_tick, cfg.max_events_per_tick);
}

/// it should build definitions from engine defaults via with_defaults
#[test]
fn with_defaults_uses_config() {
    let cfg = Config::default();
    let data = CarouselData::with_defaults("loader", vec!["img_0".to_string()], &cfg);
    assert_eq!(data.step_duration_ms, 750);
    assert_eq!(data.pause_duration_ms, 1500);
    approx(data.slide_size, 120.0, 1e-6);
    assert_eq!(data.initial_direction, Direction::Forward);
    assert!(!data.autostart);
    assert!(data.validate_basic().is_ok());
}
