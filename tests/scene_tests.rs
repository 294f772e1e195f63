// Host-side tests for the per-instance scene, its config and lifecycle.

use ambient_core::surface::{DrawOp, Recorder};
use ambient_core::{
    AmbientConfig, AmbientScene, ConfigError, ConstellationSummary, FrameInput, Lifecycle, LifecycleError,
    LoopState, Variant, Viewport,
};

const MAIN: u32 = 1;
const GLOW: u32 = 2;

fn frame(time: f64, width: f64, height: f64) -> FrameInput {
    FrameInput {
        time,
        viewport: Viewport::new(width, height),
    }
}

#[test]
fn every_variant_draws_something() {
    for variant in [Variant::Filled, Variant::Waveform, Variant::Pentagon, Variant::Live] {
        let mut scene = AmbientScene::seeded(AmbientConfig::with_variant(variant), 1);
        let mut main = Recorder::new(MAIN);
        let mut glow = Recorder::new(GLOW);
        scene.render(frame(0.5, 800.0, 600.0), &mut main, Some(&mut glow));
        assert!(main.strokes() > 0, "{} drew no strokes", variant.as_str());
        assert!(main.points().iter().all(|p| p.is_finite()), "{}", variant.as_str());
    }
}

#[test]
fn filled_variant_uses_glow_surface() {
    let mut scene = AmbientScene::seeded(AmbientConfig::default(), 3);
    let mut main = Recorder::new(MAIN);
    let mut glow = Recorder::new(GLOW);
    scene.render(frame(1.0, 800.0, 600.0), &mut main, Some(&mut glow));

    assert_eq!(glow.ops[0], DrawOp::Clear { width: 800.0, height: 600.0 });
    assert_eq!(glow.fills(), 20);
    let layers = main.count(|op| matches!(op, DrawOp::DrawLayer { layer_id: GLOW, .. }));
    assert_eq!(layers, 2);
}

#[test]
fn other_variants_leave_glow_alone() {
    for variant in [Variant::Waveform, Variant::Pentagon, Variant::Live] {
        let mut scene = AmbientScene::seeded(AmbientConfig::with_variant(variant), 3);
        let mut main = Recorder::new(MAIN);
        let mut glow = Recorder::new(GLOW);
        scene.render(frame(1.0, 800.0, 600.0), &mut main, Some(&mut glow));
        // cleared, nothing else
        assert_eq!(glow.ops.len(), 1);
        assert_eq!(main.count(|op| matches!(op, DrawOp::DrawLayer { .. })), 0);
    }
}

#[test]
fn each_frame_starts_by_clearing() {
    let mut scene = AmbientScene::seeded(AmbientConfig::with_variant(Variant::Pentagon), 1);
    let mut main = Recorder::new(MAIN);
    scene.render(frame(0.0, 320.0, 240.0), &mut main, None);
    assert_eq!(main.ops[0], DrawOp::Clear { width: 320.0, height: 240.0 });
}

#[test]
fn embers_accumulate_only_in_filled_variant() {
    let mut filled = AmbientScene::seeded(AmbientConfig::default(), 42);
    let mut waveform = AmbientScene::seeded(AmbientConfig::with_variant(Variant::Waveform), 42);
    let mut main = Recorder::new(MAIN);
    for i in 0..120 {
        let f = frame(i as f64 / 60.0, 800.0, 600.0);
        main.clear_ops();
        filled.render(f, &mut main, None);
        main.clear_ops();
        waveform.render(f, &mut main, None);
    }
    assert!(!filled.embers().is_empty());
    assert!(filled.embers().len() <= 80);
    assert!(waveform.embers().is_empty());
}

#[test]
fn empty_viewport_only_clears() {
    let mut scene = AmbientScene::seeded(AmbientConfig::default(), 1);
    let mut main = Recorder::new(MAIN);
    let mut glow = Recorder::new(GLOW);
    for _ in 0..50 {
        main.clear_ops();
        glow.clear_ops();
        scene.render(frame(1.0, 0.0, 0.0), &mut main, Some(&mut glow));
        assert_eq!(main.ops, vec![DrawOp::Clear { width: 0.0, height: 0.0 }]);
        assert_eq!(glow.ops.len(), 1);
    }
    assert!(scene.embers().is_empty());

    main.clear_ops();
    scene.render(frame(f64::NAN, 800.0, 600.0), &mut main, None);
    assert_eq!(main.ops.len(), 1);
}

#[test]
fn seeded_scenes_render_identically() {
    let mut a = AmbientScene::seeded(AmbientConfig::default(), 99);
    let mut b = AmbientScene::seeded(AmbientConfig::default(), 99);
    let (mut ra, mut rb) = (Recorder::new(MAIN), Recorder::new(MAIN));
    for i in 0..30 {
        ra.clear_ops();
        rb.clear_ops();
        let f = frame(i as f64 * 0.016, 640.0, 480.0);
        a.render(f, &mut ra, None);
        b.render(f, &mut rb, None);
        assert_eq!(ra.ops, rb.ops, "frame {i}");
    }
}

#[test]
fn live_scene_follows_summary_updates() {
    let mut scene = AmbientScene::seeded(AmbientConfig::with_variant(Variant::Live), 1);
    let mut main = Recorder::new(MAIN);
    scene.render(frame(0.0, 600.0, 400.0), &mut main, None);
    assert_eq!(main.strokes(), 1);

    let summary = ConstellationSummary::from_json(
        r#"{"cells":[{"id":"a","participants":5},{"id":"b","participants":3}],"currentTier":1}"#,
    )
    .expect("summary");
    scene.set_summary(summary);
    assert_eq!(scene.summary().cells.len(), 2);

    main.clear_ops();
    scene.render(frame(0.1, 600.0, 400.0), &mut main, None);
    assert_eq!(main.strokes(), 2);
    assert_eq!(main.circles().len(), 8);
}

#[test]
fn config_defaults() {
    let config = AmbientConfig::default();
    assert_eq!(config.variant, Variant::Filled);
    assert_eq!(config.ember_cap, 80);
    assert_eq!(config.spawn_probability, 0.4);
    assert_eq!(config.beat_period, 1.0);
    assert_eq!(config.glow_blur_px, 8.0);
    assert_eq!(config.sharp_alpha, 0.4);
    assert!(config.validate().is_ok());
    assert_eq!(AmbientConfig::from_json("{}").expect("empty config"), config);
}

#[test]
fn config_overrides_from_json() {
    let config = AmbientConfig::from_json(r#"{"variant":"waveform","emberCap":12,"beatPeriod":0.8}"#)
        .expect("valid config");
    assert_eq!(config.variant, Variant::Waveform);
    assert_eq!(config.ember_cap, 12);
    assert_eq!(config.beat_period, 0.8);
    assert_eq!(config.sharp_alpha, 0.4);

    let scene = AmbientScene::seeded(config, 0);
    assert_eq!(scene.embers().cap(), 12);
    assert_eq!(scene.variant(), Variant::Waveform);
}

#[test]
fn config_rejects_bad_values() {
    let cases = [
        (r#"{"emberCap":0}"#, "emberCap"),
        (r#"{"spawnProbability":1.5}"#, "spawnProbability"),
        (r#"{"beatPeriod":0}"#, "beatPeriod"),
        (r#"{"beatPeriod":-2}"#, "beatPeriod"),
        (r#"{"glowBlurPx":-1}"#, "glowBlurPx"),
        (r#"{"sharpAlpha":2}"#, "sharpAlpha"),
    ];
    for (json, expected) in cases {
        match AmbientConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected, "{json}"),
            other => panic!("{json}: expected invalid {expected}, got {other:?}"),
        }
    }
    assert!(matches!(AmbientConfig::from_json(r#"{"variant":"neon"}"#), Err(ConfigError::Json(_))));
    assert!(matches!(AmbientConfig::from_json("{"), Err(ConfigError::Json(_))));
}

#[test]
fn variant_flags() {
    assert!(Variant::Filled.uses_glow());
    for v in [Variant::Waveform, Variant::Pentagon, Variant::Live] {
        assert!(!v.uses_glow());
    }
    assert_eq!(Variant::Pentagon.as_str(), "pentagon");
}

#[test]
fn lifecycle_runs_once() {
    let mut lc = Lifecycle::new();
    assert_eq!(lc.state(), LoopState::Idle);
    assert!(!lc.is_running());

    lc.start().expect("idle -> running");
    assert!(lc.is_running());
    assert_eq!(
        lc.start(),
        Err(LifecycleError::IllegalTransition {
            from: LoopState::Running,
            to: LoopState::Running
        })
    );

    assert!(lc.stop());
    assert!(!lc.stop());
    assert_eq!(lc.state(), LoopState::Stopped);
    assert!(lc.start().is_err(), "no restart after stop");
}

#[test]
fn lifecycle_can_stop_before_starting() {
    let mut lc = Lifecycle::new();
    assert!(lc.stop());
    assert_eq!(lc.state(), LoopState::Stopped);
    assert!(lc.start().is_err());
}

fn index_of(rec: &Recorder, pred: impl Fn(&DrawOp) -> bool) -> usize {
    rec.ops.iter().position(pred).expect("op present")
}

fn count_in(rec: &Recorder, range: std::ops::Range<usize>, pred: impl Fn(&DrawOp) -> bool) -> usize {
    rec.ops[range].iter().filter(|op| pred(op)).count()
}

fn is_move(op: &DrawOp) -> bool {
    matches!(op, DrawOp::MoveTo(_))
}

fn is_bezier(op: &DrawOp) -> bool {
    matches!(op, DrawOp::BezierTo { .. })
}

fn is_circle(op: &DrawOp) -> bool {
    matches!(op, DrawOp::Circle { .. })
}

#[test]
fn filled_frame_draws_flame_embers_heart_then_constellation() {
    let mut scene = AmbientScene::seeded(AmbientConfig::default(), 17);
    let mut main = Recorder::new(MAIN);
    let mut glow = Recorder::new(GLOW);
    for i in 0..40 {
        main.clear_ops();
        glow.clear_ops();
        scene.render(frame(i as f64 / 60.0, 800.0, 600.0), &mut main, Some(&mut glow));
    }
    let embers = scene.embers().len();
    assert!(embers > 0, "no embers after 40 frames");

    let end = main.ops.len();
    let last_layer = main
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::DrawLayer { .. }))
        .expect("glow composite");
    // the heart is the only save/restore pair in a frame
    let heart_start = index_of(&main, |op| matches!(op, DrawOp::Save));
    let heart_end = index_of(&main, |op| matches!(op, DrawOp::Restore));

    // flame: composite, then tongues, all before the embers
    let first_circle = index_of(&main, is_circle);
    assert!(last_layer < first_circle);
    assert_eq!(count_in(&main, 0..first_circle, is_move), 12);

    // embers: every dot sits between the flame and the heart
    assert_eq!(count_in(&main, first_circle..heart_start, is_circle), embers);
    assert_eq!(count_in(&main, first_circle..heart_start, is_move), 0);

    // heart outline, then the constellation's 31 polygons
    assert!(index_of(&main, is_bezier) > heart_start);
    assert_eq!(count_in(&main, heart_end..end, is_bezier), 0);
    assert_eq!(count_in(&main, heart_end..end, is_move), 31);
    assert_eq!(count_in(&main, 0..heart_start, is_bezier), 0);
}

#[test]
fn waveform_frame_draws_constellation_over_heart() {
    let mut scene = AmbientScene::seeded(AmbientConfig::with_variant(Variant::Waveform), 17);
    let mut main = Recorder::new(MAIN);
    scene.render(frame(2.3, 800.0, 600.0), &mut main, None);

    let end = main.ops.len();
    let heart_start = index_of(&main, |op| matches!(op, DrawOp::Save));
    let heart_end = index_of(&main, |op| matches!(op, DrawOp::Restore));

    // five waves on four edges before the heart, no embers
    assert_eq!(count_in(&main, 0..heart_start, is_move), 20);
    assert_eq!(count_in(&main, 0..heart_start, is_circle), 0);
    assert!(index_of(&main, is_bezier) > heart_start);
    assert_eq!(count_in(&main, heart_end..end, is_bezier), 0);
    assert_eq!(count_in(&main, heart_end..end, is_move), 31);
}

#[test]
fn loop_without_a_scheduled_frame_stops() {
    let mut lc = Lifecycle::new();
    lc.start().expect("idle -> running");

    assert_eq!(lc.track_frame(Some(7)), Some(7));
    assert!(lc.is_running());

    assert_eq!(lc.track_frame::<i32>(None), None);
    assert_eq!(lc.state(), LoopState::Stopped);
    assert!(!lc.stop(), "already stopped");
}

#[test]
fn unscheduled_frame_before_start_leaves_idle_alone() {
    let mut lc = Lifecycle::new();
    assert_eq!(lc.track_frame::<i32>(None), None);
    assert_eq!(lc.state(), LoopState::Idle);
}
