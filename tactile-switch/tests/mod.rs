use std::time::Duration;

use tactile_core::{
    Bitmap, DrawList, ImageSource, Panel, PixelFormat, PointerEvent, Rect, UiConfig, UiError,
    Widget, WidgetEvent, WidgetTree,
};
use tactile_switch::{KnobImage, Switch, SwitchHandle, resolve};

const SWITCH_RECT: Rect = Rect::new(10.0, 10.0, 120.0, 20.0);

fn setup() -> (WidgetTree, SwitchHandle) {
    let mut tree = WidgetTree::new(UiConfig::default(), Rect::new(0.0, 0.0, 400.0, 300.0));
    let root = tree.root();
    let sw = SwitchHandle::create(&mut tree, root, SWITCH_RECT, None).unwrap();
    (tree, sw)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn value(tree: &WidgetTree, sw: SwitchHandle) -> i32 {
    sw.value(tree).unwrap()
}

/// The rest-position invariant: ON sits at max, OFF sits at min.
fn assert_at_rest(tree: &WidgetTree, sw: SwitchHandle) {
    let switch = tree.get::<Switch>(sw.id()).unwrap();
    let base = switch.base();
    if switch.state() {
        assert_eq!(base.value(), base.max(), "ON must rest at max");
    } else {
        assert_eq!(base.value(), base.min(), "OFF must rest at min");
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn test_create_defaults() {
    let (tree, sw) = setup();
    assert!(!sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 0);
    assert_eq!(sw.knob_off_image(&tree).unwrap(), None);
    assert_eq!(sw.knob_on_image(&tree).unwrap(), None);
    assert_eq!(sw.anim_time(&tree).unwrap(), tree.config().anim_time());
    assert_eq!(tree.parent(sw.id()).unwrap(), Some(tree.root()));
}

#[test]
fn test_create_from_template_copies_configuration() {
    let (mut tree, a) = setup();
    let icon = ImageSource::path("assets/check.png");
    a.turn_on(&mut tree, false).unwrap();
    a.set_knob_on_image(&mut tree, Some(icon.clone())).unwrap();
    a.set_anim_time(&mut tree, ms(500)).unwrap();

    let root = tree.root();
    let b = SwitchHandle::create(&mut tree, root, SWITCH_RECT, Some(a)).unwrap();
    assert_ne!(a, b);
    assert!(b.state(&tree).unwrap());
    assert_eq!(b.knob_on_image(&tree).unwrap(), Some(icon));
    assert_eq!(b.knob_off_image(&tree).unwrap(), None);
    assert_eq!(b.anim_time(&tree).unwrap(), ms(500));
    assert_at_rest(&tree, b);
}

#[test]
fn test_create_from_template_is_independent() {
    let (mut tree, a) = setup();
    let root = tree.root();
    let b = SwitchHandle::create(&mut tree, root, SWITCH_RECT, Some(a)).unwrap();
    b.turn_on(&mut tree, false).unwrap();
    assert!(!a.state(&tree).unwrap());
}

#[test]
fn test_create_from_non_switch_template_fails() {
    let (mut tree, _) = setup();
    let root = tree.root();
    let panel = tree.insert(root, Rect::default(), Panel).unwrap();
    assert!(matches!(
        SwitchHandle::from_id(&tree, panel),
        Err(UiError::KindMismatch { .. })
    ));
}

#[test]
fn test_handle_to_removed_switch_errors() {
    let (mut tree, sw) = setup();
    tree.remove(sw.id()).unwrap();
    assert!(matches!(sw.state(&tree), Err(UiError::UnknownWidget(_))));
    assert!(matches!(sw.toggle(&mut tree, false), Err(UiError::UnknownWidget(_))));
}

#[test]
fn test_anim_time_delegates_to_base_slider() {
    let (mut tree, sw) = setup();
    sw.set_anim_time(&mut tree, ms(42)).unwrap();
    let switch = tree.get::<Switch>(sw.id()).unwrap();
    assert_eq!(switch.base().anim_time(), ms(42));
    assert_eq!(switch.anim_time(), ms(42));
}

// ============================================================================
// Transition Tests
// ============================================================================

#[test]
fn test_scenario_toggle_then_turn_off() {
    let (mut tree, sw) = setup();
    assert!(!sw.state(&tree).unwrap());

    assert!(sw.toggle(&mut tree, false).unwrap());
    assert!(sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 100);

    sw.turn_off(&mut tree, false).unwrap();
    assert!(!sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 0);
}

#[test]
fn test_toggle_returns_new_state_both_ways() {
    let (mut tree, sw) = setup();
    for expected in [true, false, true, false] {
        assert_eq!(sw.toggle(&mut tree, false).unwrap(), expected);
        assert_eq!(sw.state(&tree).unwrap(), expected);
        assert_at_rest(&tree, sw);
    }
}

#[test]
fn test_turn_on_is_idempotent() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, false).unwrap();
    let _ = tree.drain_events();
    tree.take_dirty();

    sw.turn_on(&mut tree, false).unwrap();
    assert!(sw.state(&tree).unwrap());
    assert!(tree.drain_events().is_empty());
    assert!(!tree.is_dirty(sw.id()));
}

#[test]
fn test_turn_off_when_off_is_noop() {
    let (mut tree, sw) = setup();
    sw.turn_off(&mut tree, true).unwrap();
    assert!(!sw.state(&tree).unwrap());
    assert!(tree.animator().is_empty());
    assert!(tree.drain_events().is_empty());
}

#[test]
fn test_animated_turn_on_does_not_restart() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();
    let started = tree.animator().ramp(sw.id()).unwrap().started_at;

    tree.advance(ms(50));
    sw.turn_on(&mut tree, true).unwrap();

    assert_eq!(tree.animator().len(), 1);
    assert_eq!(tree.animator().ramp(sw.id()).unwrap().started_at, started);
    assert_eq!(value(&tree, sw), 25);
}

#[test]
fn test_animated_state_is_target_immediately() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();

    // Logical state flips at once, the knob is still travelling.
    assert!(sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 0);

    tree.advance(ms(100));
    assert_eq!(value(&tree, sw), 50);

    tree.advance(ms(100));
    assert_eq!(value(&tree, sw), 100);
    assert!(tree.animator().is_empty());
    assert_at_rest(&tree, sw);
}

#[test]
fn test_new_transition_overwrites_in_flight_ramp() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();
    tree.advance(ms(100));

    sw.turn_off(&mut tree, true).unwrap();
    assert_eq!(tree.animator().len(), 1);
    let ramp = tree.animator().ramp(sw.id()).unwrap();
    assert_eq!((ramp.from, ramp.to), (50, 0));

    tree.finish_animations();
    assert!(!sw.state(&tree).unwrap());
    assert_at_rest(&tree, sw);
}

#[test]
fn test_immediate_transition_cancels_ramp() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();
    tree.advance(ms(60));

    sw.turn_off(&mut tree, false).unwrap();
    assert!(tree.animator().is_empty());
    assert_at_rest(&tree, sw);

    // Nothing left to drag the value back up.
    tree.advance(ms(500));
    assert_eq!(value(&tree, sw), 0);
}

#[test]
fn test_zero_anim_time_is_immediate() {
    let (mut tree, sw) = setup();
    sw.set_anim_time(&mut tree, Duration::ZERO).unwrap();
    sw.turn_on(&mut tree, true).unwrap();
    assert!(tree.animator().is_empty());
    assert_at_rest(&tree, sw);
}

#[test]
fn test_toggled_events_only_on_change() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, false).unwrap();
    sw.turn_on(&mut tree, false).unwrap();
    sw.toggle(&mut tree, true).unwrap();
    tree.finish_animations();

    let id = sw.id();
    assert_eq!(
        tree.drain_events(),
        vec![
            WidgetEvent::Toggled { id, state: true },
            WidgetEvent::Toggled { id, state: false },
        ]
    );
}

// ============================================================================
// Rest Position Tests
// ============================================================================

#[test]
fn test_stray_value_below_half_returns_off() {
    let (mut tree, sw) = setup();
    tree.update::<Switch, _>(sw.id(), |s, cx| s.on_frame(37, cx))
        .unwrap();

    assert!(!sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 37);
    assert_eq!(tree.animator().ramp(sw.id()).unwrap().to, 0);

    tree.finish_animations();
    assert_eq!(value(&tree, sw), 0);
    assert_at_rest(&tree, sw);
    assert!(tree.drain_events().is_empty());
}

#[test]
fn test_stray_value_past_half_turns_on() {
    let (mut tree, sw) = setup();
    tree.update::<Switch, _>(sw.id(), |s, cx| s.on_frame(80, cx))
        .unwrap();
    assert!(sw.state(&tree).unwrap());

    tree.finish_animations();
    assert_at_rest(&tree, sw);
    assert_eq!(
        tree.drain_events(),
        vec![WidgetEvent::Toggled { id: sw.id(), state: true }]
    );
}

#[test]
fn test_stray_value_at_extreme_resyncs() {
    let (mut tree, sw) = setup();
    tree.update::<Switch, _>(sw.id(), |s, cx| s.on_frame(100, cx))
        .unwrap();
    assert!(sw.state(&tree).unwrap());
    assert!(tree.animator().is_empty());
    assert_at_rest(&tree, sw);
}

#[test]
fn test_ramp_start_frame_keeps_target_state() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();

    // The first frame still sits at min, but the ramp is running.
    tree.advance(Duration::ZERO);
    assert_eq!(value(&tree, sw), 0);
    assert!(sw.state(&tree).unwrap());
    assert!(tree.animator().is_running(sw.id()));

    tree.finish_animations();
    assert_at_rest(&tree, sw);
}

#[test]
fn test_switch_range_stays_fixed() {
    let (mut tree, sw) = setup();
    sw.toggle(&mut tree, true).unwrap();
    tree.finish_animations();

    let base = tree.get::<Switch>(sw.id()).unwrap().base();
    assert_eq!((base.min(), base.max()), (0, 100));
    assert_eq!(base.span(), 100);
}

// ============================================================================
// Pointer Tests
// ============================================================================

#[test]
fn test_drag_to_max_resyncs_state() {
    let (mut tree, sw) = setup();
    // Knob travel spans x = 20..120 inside the switch rect.
    tree.dispatch_pointer(PointerEvent::down(20.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(80.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(200.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(200.0, 20.0));

    assert!(sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 100);
    assert!(tree.animator().is_empty());
    assert_eq!(
        tree.drain_events(),
        vec![WidgetEvent::Toggled { id: sw.id(), state: true }]
    );
}

#[test]
fn test_drag_to_min_resyncs_state() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, false).unwrap();

    tree.dispatch_pointer(PointerEvent::down(120.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(0.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(0.0, 20.0));

    assert!(!sw.state(&tree).unwrap());
    assert_at_rest(&tree, sw);
}

#[test]
fn test_drag_released_past_half_snaps_on() {
    let (mut tree, sw) = setup();
    tree.dispatch_pointer(PointerEvent::down(20.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(90.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(90.0, 20.0));

    // Released at 70: state is already ON, knob animates the rest of the way.
    assert!(sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 70);
    assert_eq!(tree.animator().ramp(sw.id()).unwrap().to, 100);

    tree.finish_animations();
    assert_at_rest(&tree, sw);
}

#[test]
fn test_drag_released_before_half_snaps_back() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, false).unwrap();
    let _ = tree.drain_events();

    // Pull from ON down to 80 and let go: stays ON, but the knob returns to max.
    tree.dispatch_pointer(PointerEvent::down(120.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(100.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(100.0, 20.0));
    assert!(sw.state(&tree).unwrap());
    assert_eq!(value(&tree, sw), 80);

    tree.finish_animations();
    assert_at_rest(&tree, sw);
    assert!(tree.drain_events().is_empty());
}

#[test]
fn test_drag_released_at_exact_half_goes_off() {
    let (mut tree, sw) = setup();
    tree.dispatch_pointer(PointerEvent::down(20.0, 20.0));
    tree.dispatch_pointer(PointerEvent::moved(70.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(70.0, 20.0));

    assert_eq!(value(&tree, sw), 50);
    assert!(!sw.state(&tree).unwrap());
    tree.finish_animations();
    assert_at_rest(&tree, sw);
}

#[test]
fn test_tap_toggles_animated() {
    let (mut tree, sw) = setup();
    tree.dispatch_pointer(PointerEvent::down(30.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(31.0, 20.0));

    assert!(sw.state(&tree).unwrap());
    assert!(tree.animator().is_running(sw.id()));
    tree.finish_animations();
    assert_at_rest(&tree, sw);

    tree.dispatch_pointer(PointerEvent::down(30.0, 20.0));
    tree.dispatch_pointer(PointerEvent::up(30.0, 20.0));
    assert!(!sw.state(&tree).unwrap());
    tree.finish_animations();
    assert_at_rest(&tree, sw);
}

#[test]
fn test_grab_during_animation_then_tap_reverses() {
    let (mut tree, sw) = setup();
    sw.turn_on(&mut tree, true).unwrap();
    tree.advance(ms(100));

    tree.dispatch_pointer(PointerEvent::down(70.0, 20.0));
    assert!(tree.animator().is_empty());
    tree.dispatch_pointer(PointerEvent::up(70.0, 20.0));

    assert!(!sw.state(&tree).unwrap());
    tree.finish_animations();
    assert_at_rest(&tree, sw);
}

// ============================================================================
// Knob Image Tests
// ============================================================================

fn dot() -> ImageSource {
    ImageSource::bitmap(Bitmap {
        width: 2,
        height: 2,
        format: PixelFormat::Rgba8,
        pixels: vec![255; 16],
    })
}

#[test]
fn test_resolve_picks_image_for_state() {
    let (mut tree, sw) = setup();
    let off = ImageSource::path("off.png");
    sw.set_knob_off_image(&mut tree, Some(off.clone())).unwrap();
    sw.set_knob_on_image(&mut tree, Some(dot())).unwrap();

    let switch = tree.get::<Switch>(sw.id()).unwrap();
    assert_eq!(resolve(switch.store(), false), Some(&off));
    assert_eq!(resolve(switch.store(), true), Some(&dot()));
}

#[test]
fn test_resolve_none_without_images() {
    let (tree, sw) = setup();
    let switch = tree.get::<Switch>(sw.id()).unwrap();
    assert_eq!(resolve(switch.store(), false), None);
    assert_eq!(resolve(switch.store(), true), None);
}

#[test]
fn test_resolve_does_not_fall_back_across_states() {
    let (mut tree, sw) = setup();
    sw.set_knob_off_image(&mut tree, Some(ImageSource::path("off.png")))
        .unwrap();
    let switch = tree.get::<Switch>(sw.id()).unwrap();
    assert_eq!(resolve(switch.store(), true), None);
    assert_eq!(switch.store().knob_image(KnobImage::On), None);
}

#[test]
fn test_knob_overlay_follows_state() {
    let (mut tree, sw) = setup();
    let on = ImageSource::path("on.png");
    let off = ImageSource::path("off.png");
    sw.set_knob_on_image(&mut tree, Some(on.clone())).unwrap();
    sw.set_knob_off_image(&mut tree, Some(off.clone())).unwrap();

    assert_eq!(sw.knob_overlay(&tree).unwrap(), Some(off));
    sw.toggle(&mut tree, true).unwrap();
    // Switches image with the logical state, before the ramp ends.
    assert_eq!(sw.knob_overlay(&tree).unwrap(), Some(on));
}

#[test]
fn test_clearing_knob_image() {
    let (mut tree, sw) = setup();
    sw.set_knob_on_image(&mut tree, Some(dot())).unwrap();
    sw.set_knob_on_image(&mut tree, None).unwrap();
    assert_eq!(sw.knob_on_image(&tree).unwrap(), None);
}

#[test]
fn test_render_overlays_knob_image() {
    let (mut tree, sw) = setup();
    sw.set_knob_off_image(&mut tree, Some(ImageSource::path("off.png")))
        .unwrap();
    tree.take_dirty();
    sw.set_knob_on_image(&mut tree, Some(ImageSource::path("on.png")))
        .unwrap();
    assert!(tree.is_dirty(sw.id()));

    let mut list = DrawList::new();
    tree.render(&mut list);
    let images: Vec<_> = list.images().collect();
    assert_eq!(images.len(), 1);
    let (rect, source) = images[0];
    assert_eq!(*source, ImageSource::path("off.png"));
    // Knob at min, shrunk by the theme's knob inset.
    let inset = tree.config().theme.switch.knob.inset;
    assert_eq!(*rect, Rect::new(10.0, 10.0, 20.0, 20.0).inset(inset));
}

#[test]
fn test_render_without_images_has_no_overlay() {
    let (mut tree, _sw) = setup();
    let mut list = DrawList::new();
    tree.render(&mut list);
    assert_eq!(list.images().count(), 0);
    // Panel + background, indicator, knob.
    assert_eq!(list.len(), 4);
}
